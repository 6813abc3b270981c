//! HandBrakeCLI 1.3.x options.

use super::*;
use crate::registry::types::{
    Category as C, Conflict, OptionDescriptor as O, OptionTable, Require, ValueType as T,
    Validator as V, conflicts, conflicts_value, requires, requires_value,
};

pub static V1_3_0: OptionTable = OptionTable {
    label: "1.3.0",
    options: OPTIONS,
    requires: REQUIRES,
    conflicts: CONFLICTS,
};

const OPTIONS: &[O] = &[
    O::optional("verbose", T::Integer, V::IntegerSet, C::General).integers(&[0, 1, 2, 3]),
    O::flag("no-dvdnav", C::Source),
    O::flag("qsv-baseline", C::General),
    O::required("qsv-async-depth", T::Integer, V::PositiveInteger, C::General),
    O::required("qsv-implementation", T::String, V::StringSet, C::General)
        .strings(&["software", "hardware"]),
    O::flag("disable-qsv-decoding", C::General),
    O::flag("enable-qsv-decoding", C::General),
    O::required("format", T::String, V::StringSet, C::Container)
        .short('f')
        .strings(FORMATS),
    O::flag("optimize", C::Container).negatable(),
    O::flag("ipod-atom", C::Container).negatable(),
    O::flag("use-opencl", C::General),
    O::required("title", T::Integer, V::PositiveInteger, C::Source).short('t'),
    O::required("min-duration", T::Integer, V::PositiveInteger, C::Source),
    O::flag("scan", C::Source),
    O::flag("main-feature", C::Source),
    O::required("chapters", T::String, V::Chapters, C::Source).short('c'),
    O::required("angle", T::Integer, V::PositiveInteger, C::Source),
    O::flag("markers", C::Markers).short('m').negatable(),
    O::flag("inline-parameter-sets", C::Container).negatable(),
    O::flag("align-av", C::Container).negatable(),
    O::required("audio-lang-list", T::StringList, V::Iso639List, C::AudioTracks),
    O::flag("all-audio", C::AudioTracks),
    O::flag("first-audio", C::AudioTracks),
    O::required("audio", T::IntegerList, V::Audio, C::AudioTracks).short('a'),
    O::required("mixdown", T::StringList, V::Mixdown, C::Audio).strings(MIXDOWNS),
    O::required("normalize-mix", T::IntegerList, V::IntegerListSet, C::Audio).integers(&[0, 1]),
    O::required("drc", T::DoubleList, V::Drc, C::Audio),
    O::required("gain", T::DoubleList, V::Gain, C::Audio),
    O::required("adither", T::StringList, V::Dither, C::Audio).strings(DITHERS),
    O::required("subtitle-lang-list", T::StringList, V::Iso639List, C::SubtitleTracks),
    O::flag("all-subtitles", C::SubtitleTracks),
    O::flag("first-subtitle", C::SubtitleTracks),
    O::required("subtitle", T::IntegerList, V::Subtitle, C::SubtitleTracks).short('s'),
    O::optional("subtitle-forced", T::StringList, V::SubtitleForced, C::SubtitleTracks),
    O::optional("subtitle-burned", T::String, V::SubtitleTrack, C::SubtitleTracks),
    O::optional("subtitle-default", T::String, V::SubtitleTrack, C::SubtitleTracks),
    O::required("subname", T::StringList, V::StringList, C::SubtitleTracks),
    O::required("srt-file", T::PathList, V::FileListExists, C::SubtitleTracks),
    O::required("srt-codeset", T::StringList, V::Codeset, C::SubtitleTracks),
    O::required("srt-offset", T::IntegerList, V::IntegerList, C::SubtitleTracks),
    O::required("srt-lang", T::StringList, V::Iso639List, C::SubtitleTracks),
    O::optional("srt-default", T::Integer, V::PositiveInteger, C::SubtitleTracks),
    O::optional("srt-burn", T::Integer, V::PositiveInteger, C::SubtitleTracks),
    O::required("ssa-file", T::PathList, V::FileListExists, C::SubtitleTracks),
    O::required("ssa-offset", T::IntegerList, V::IntegerList, C::SubtitleTracks),
    O::required("ssa-lang", T::StringList, V::Iso639List, C::SubtitleTracks),
    O::optional("ssa-default", T::Integer, V::PositiveInteger, C::SubtitleTracks),
    O::optional("ssa-burn", T::Integer, V::PositiveInteger, C::SubtitleTracks),
    O::required("native-language", T::String, V::Iso639, C::SubtitleTracks),
    O::flag("native-dub", C::SubtitleTracks),
    O::required("encoder", T::String, V::StringSet, C::Video)
        .short('e')
        .strings(&[
            "x264",
            "x264_10bit",
            "qsv_h264",
            "x265",
            "x265_10bit",
            "x265_12bit",
            "x265_16bit",
            "qsv_h265",
            "qsv_h265_10bit",
            "mpeg4",
            "mpeg2",
            "VP8",
            "VP9",
            "theora",
        ]),
    O::required("aencoder", T::StringList, V::AudioEncoder, C::Audio)
        .short('E')
        .strings(&[
            "av_aac", "copy:aac", "ac3", "copy:ac3", "copy:dts", "copy:dtshd", "mp3", "copy:mp3",
            "vorbis", "flac16", "flac24", "opus", "copy",
        ]),
    O::flag("two-pass", C::Video).short('2').negatable(),
    O::optional("deinterlace", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(&["default", "skip-spatial", "bob", "qsv", "fast", "slow", "slower"])
        .custom(DEINTERLACE_KEYS),
    O::optional("deblock", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(STRENGTH_PRESETS)
        .custom(DEBLOCK_KEYS),
    O::required("deblock-tune", T::String, V::StringSet, C::Filters)
        .strings(&["small", "medium", "large"]),
    O::optional("denoise", T::String, V::Filter, C::Filters)
        .strings(DENOISE_PRESETS)
        .custom(DENOISE_KEYS),
    O::optional("hqdn3d", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(DENOISE_PRESETS)
        .custom(DENOISE_KEYS),
    O::optional("nlmeans", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(DENOISE_PRESETS)
        .custom(NLMEANS_KEYS),
    O::required("nlmeans-tune", T::String, V::StringSet, C::Filters).strings(&[
        "none",
        "film",
        "grain",
        "highmotion",
        "animation",
        "tape",
        "sprite",
    ]),
    O::optional("chroma-smooth", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(STRENGTH_PRESETS)
        .custom(CHROMA_SMOOTH_KEYS),
    O::required("chroma-smooth-tune", T::String, V::StringSet, C::Filters).strings(&[
        "none", "tiny", "small", "medium", "wide", "verywide",
    ]),
    O::optional("unsharp", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(STRENGTH_PRESETS)
        .custom(UNSHARP_KEYS),
    O::required("unsharp-tune", T::String, V::StringSet, C::Filters).strings(&[
        "none",
        "ultrafine",
        "fine",
        "medium",
        "coarse",
        "verycoarse",
    ]),
    O::optional("lapsharp", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(STRENGTH_PRESETS)
        .custom(LAPSHARP_KEYS),
    O::required("lapsharp-tune", T::String, V::StringSet, C::Filters).strings(&[
        "none",
        "film",
        "grain",
        "animation",
        "sprite",
    ]),
    O::optional("detelecine", T::String, V::Filter, C::Filters)
        .negatable()
        .custom(DETELECINE_KEYS),
    O::optional("comb-detect", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(&["permissive", "fast", "default", "off"])
        .custom(COMB_DETECT_KEYS),
    O::optional("decomb", T::String, V::Filter, C::Filters)
        .negatable()
        .strings(&["bob", "eedi2", "eedi2bob"])
        .custom(DECOMB_KEYS),
    O::flag("grayscale", C::Filters).negatable(),
    O::optional("rotate", T::String, V::Rotate, C::Filters),
    O::flag("non-anamorphic", C::Picture),
    O::flag("auto-anamorphic", C::Picture),
    O::flag("loose-anamorphic", C::Picture),
    O::flag("custom-anamorphic", C::Picture),
    O::required("display-width", T::Integer, V::PositiveInteger, C::Picture),
    O::flag("keep-display-aspect", C::Picture).negatable(),
    O::required("pixel-aspect", T::String, V::PixelAspect, C::Picture),
    O::required("modulus", T::Integer, V::PositiveInteger, C::Picture),
    O::flag("itu-par", C::Picture).negatable(),
    O::required("width", T::Integer, V::PositiveInteger, C::Picture),
    O::required("height", T::Integer, V::PositiveInteger, C::Picture),
    O::required("crop", T::String, V::Crop, C::Picture),
    O::optional("loose-crop", T::Integer, V::PositiveInteger, C::Picture).negatable(),
    O::optional("pad", T::String, V::Filter, C::Picture)
        .negatable()
        .custom(PAD_KEYS),
    O::required("encoder-preset", T::String, V::EncoderPreset, C::Video),
    O::required("encoder-tune", T::String, V::EncoderTune, C::Video),
    O::required("encopts", T::String, V::Encopts, C::Video),
    O::required("encoder-profile", T::String, V::EncoderProfile, C::Video),
    O::required("encoder-level", T::String, V::EncoderLevel, C::Video),
    O::required("vb", T::Integer, V::VideoBitrate, C::Video).short('b'),
    O::required("quality", T::Double, V::VideoQuality, C::Video).short('q'),
    O::required("ab", T::IntegerList, V::AudioBitrate, C::Audio).short('B'),
    O::required("aq", T::DoubleList, V::AudioQuality, C::Audio).short('Q'),
    O::required("ac", T::DoubleList, V::AudioCompression, C::Audio),
    O::required("rate", T::String, V::Framerate, C::Video)
        .short('r')
        .strings(&[
            "5", "10", "12", "15", "20", "23.976", "24", "25", "29.97", "30", "48", "50", "59.94",
            "60", "72", "75", "90", "100", "120",
        ]),
    O::required("arate", T::StringList, V::StringListSet, C::Audio).strings(AUDIO_RATES),
    O::flag("turbo", C::Video).short('T').negatable(),
    O::required("maxHeight", T::Integer, V::PositiveInteger, C::Picture),
    O::required("maxWidth", T::Integer, V::PositiveInteger, C::Picture),
    O::required("preset", T::String, V::StringSet, C::General).strings(&[
        "Universal",
        "iPod",
        "iPhone & iPod touch",
        "iPad",
        "AppleTV",
        "AppleTV 2",
        "AppleTV 3",
        "Android",
        "Android Tablet",
        "Windows Phone 8",
        "Normal",
        "High Profile",
    ]),
    O::required("preset-import-file", T::String, V::Filespec, C::General),
    O::flag("preset-import-gui", C::General),
    O::required("preset-export", T::String, V::PresetName, C::General),
    O::required("preset-export-file", T::Path, V::FileDoesNotExist, C::General),
    O::required("preset-export-description", T::String, V::String, C::General),
    O::required("queue-import-file", T::Path, V::FileExists, C::General),
    O::required("aname", T::StringList, V::StringList, C::Audio),
    O::required("color-matrix", T::String, V::StringSet, C::Video).strings(COLOR_MATRICES),
    O::required("previews", T::String, V::Previews, C::Source),
    O::required("start-at-preview", T::Integer, V::PositiveInteger, C::Source),
    O::required("start-at", T::String, V::StartStop, C::Source),
    O::required("stop-at", T::String, V::StartStop, C::Source),
    O::flag("vfr", C::Video),
    O::flag("cfr", C::Video),
    O::flag("pfr", C::Video),
    O::required("audio-copy-mask", T::StringList, V::StringListSet, C::Audio).strings(&[
        "copy:aac",
        "copy:ac3",
        "copy:eac3",
        "copy:truehd",
        "copy:dts",
        "copy:dtshd",
        "copy:mp3",
        "copy:flac",
    ]),
    O::required("audio-fallback", T::String, V::StringSet, C::Audio).strings(&[
        "av_aac", "ac3", "mp3", "vorbis", "flac16", "flac24", "opus",
    ]),
    O::flag("json", C::General),
];

const REQUIRES: &[Require] = &[
    requires("qsv-async-depth", "enable-qsv-decoding"),
    requires("qsv-baseline", "enable-qsv-decoding"),
    requires("qsv-implementation", "enable-qsv-decoding"),
    requires("disable-qsv-decoding", "enable-qsv-decoding"),
    requires_value("optimize", "format", "av_mp4"),
    requires_value("ipod-atom", "format", "av_mp4"),
    requires("scan", "title"),
    requires("srt-codeset", "srt-file"),
    requires("srt-offset", "srt-file"),
    requires("srt-lang", "srt-file"),
    requires("srt-default", "srt-file"),
    requires("srt-burn", "srt-file"),
    requires("ssa-offset", "ssa-file"),
    requires("ssa-lang", "ssa-file"),
    requires("ssa-default", "ssa-file"),
    requires("ssa-burn", "ssa-file"),
    requires("native-dub", "native-language"),
    requires("two-pass", "vb"),
    requires("turbo", "two-pass"),
    requires("nlmeans-tune", "nlmeans"),
    requires("unsharp-tune", "unsharp"),
    requires("lapsharp-tune", "lapsharp"),
    requires("keep-display-aspect", "custom-anamorphic"),
    requires("pixel-aspect", "custom-anamorphic"),
    requires("deblock-tune", "deblock"),
    requires("chroma-smooth-tune", "chroma-smooth"),
];

const CONFLICTS: &[Conflict] = &[
    conflicts("enable-qsv-decoding", "disable-qsv-decoding"),
    conflicts("main-feature", "scan"),
    conflicts("all-audio", "audio"),
    conflicts("all-audio", "aname"),
    conflicts("first-audio", "audio"),
    conflicts("first-audio", "aname"),
    conflicts("first-audio", "all-audio"),
    conflicts("audio", "all-audio"),
    conflicts("audio", "first-audio"),
    conflicts_value("gain", None, "aencoder", Some("copy")),
    conflicts("subtitle-lang-list", "subtitle"),
    conflicts("all-subtitles", "subtitle"),
    conflicts("all-subtitles", "first-subtitle"),
    conflicts("first-subtitle", "subtitle"),
    conflicts("first-subtitle", "all-subtitles"),
    conflicts("subtitle", "all-subtitles"),
    conflicts("subtitle", "first-subtitle"),
    conflicts("deinterlace", "decomb"),
    conflicts("decomb", "deinterlace"),
    conflicts("non-anamorphic", "auto-anamorphic"),
    conflicts("non-anamorphic", "loose-anamorphic"),
    conflicts("non-anamorphic", "custom-anamorphic"),
    conflicts("auto-anamorphic", "non-anamorphic"),
    conflicts("auto-anamorphic", "loose-anamorphic"),
    conflicts("auto-anamorphic", "custom-anamorphic"),
    conflicts("loose-anamorphic", "non-anamorphic"),
    conflicts("loose-anamorphic", "auto-anamorphic"),
    conflicts("loose-anamorphic", "custom-anamorphic"),
    conflicts("custom-anamorphic", "non-anamorphic"),
    conflicts("custom-anamorphic", "auto-anamorphic"),
    conflicts("custom-anamorphic", "loose-anamorphic"),
    conflicts("vb", "quality"),
    conflicts("quality", "vb"),
    conflicts("ab", "aq"),
    conflicts("aq", "ab"),
    conflicts("start-at-preview", "start-at"),
    conflicts("start-at", "start-at-preview"),
    conflicts("vfr", "cfr"),
    conflicts("vfr", "pfr"),
    conflicts("cfr", "vfr"),
    conflicts("cfr", "pfr"),
    conflicts("pfr", "vfr"),
    conflicts("pfr", "cfr"),
];
