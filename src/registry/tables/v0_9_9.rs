//! HandBrakeCLI 0.9.9 options, also used for 0.10.x and 1.0.x.
//!
//! Filters in this release take positional colon separated settings
//! (`--decomb=7:2:6:9:1:80`) rather than named sub-keys, and nothing is
//! negatable.

use super::*;
use crate::registry::types::{
    Category as C, Conflict, OptionDescriptor as O, OptionTable, Require, ValueType as T,
    Validator as V, conflicts, conflicts_value, requires, requires_value,
};

pub static V0_9_9: OptionTable = OptionTable {
    label: "0.9.9",
    options: OPTIONS,
    requires: REQUIRES,
    conflicts: CONFLICTS,
};

const OPTIONS: &[O] = &[
    O::optional("verbose", T::Integer, V::IntegerSet, C::General).integers(&[0, 1]),
    O::flag("no-dvdnav", C::Source),
    O::required("format", T::String, V::StringSet, C::Container)
        .short('f')
        .strings(FORMATS),
    O::flag("large-file", C::Container),
    O::flag("optimize", C::Container),
    O::flag("ipod-atom", C::Container),
    O::required("title", T::Integer, V::PositiveInteger, C::Source).short('t'),
    O::required("min-duration", T::Integer, V::PositiveInteger, C::Source),
    O::flag("scan", C::Source),
    O::flag("main-feature", C::Source),
    O::required("chapters", T::String, V::Chapters, C::Source).short('c'),
    O::required("angle", T::Integer, V::PositiveInteger, C::Source),
    O::flag("markers", C::Markers).short('m'),
    O::required("audio", T::IntegerList, V::Audio, C::AudioTracks).short('a'),
    O::required("mixdown", T::StringList, V::Mixdown, C::Audio).strings(MIXDOWNS),
    O::required("normalize-mix", T::IntegerList, V::IntegerListSet, C::Audio).integers(&[0, 1]),
    O::required("drc", T::DoubleList, V::Drc, C::Audio),
    O::required("gain", T::DoubleList, V::Gain, C::Audio),
    O::required("adither", T::StringList, V::Dither, C::Audio).strings(DITHERS),
    O::required("subtitle", T::IntegerList, V::Subtitle, C::SubtitleTracks).short('s'),
    O::optional("subtitle-forced", T::StringList, V::SubtitleForced, C::SubtitleTracks),
    O::optional("subtitle-burned", T::String, V::SubtitleTrack, C::SubtitleTracks),
    O::optional("subtitle-default", T::String, V::SubtitleTrack, C::SubtitleTracks),
    O::required("srt-file", T::PathList, V::FileListExists, C::SubtitleTracks),
    O::required("srt-codeset", T::StringList, V::Codeset, C::SubtitleTracks),
    O::required("srt-offset", T::IntegerList, V::IntegerList, C::SubtitleTracks),
    O::required("srt-lang", T::StringList, V::Iso639List, C::SubtitleTracks),
    O::optional("srt-default", T::Integer, V::PositiveInteger, C::SubtitleTracks),
    O::required("native-language", T::String, V::Iso639, C::SubtitleTracks),
    O::flag("native-dub", C::SubtitleTracks),
    O::required("encoder", T::String, V::StringSet, C::Video)
        .short('e')
        .strings(&["x264", "ffmpeg4", "ffmpeg2", "theora"]),
    O::required("aencoder", T::StringList, V::AudioEncoder, C::Audio)
        .short('E')
        .strings(&[
            "av_aac", "copy:aac", "ac3", "copy:ac3", "copy:dts", "copy:dtshd", "mp3", "copy:mp3",
            "vorbis", "flac16", "flac24", "copy",
        ]),
    O::flag("two-pass", C::Video).short('2'),
    O::optional("deinterlace", T::String, V::Filter, C::Filters)
        .strings(&["fast", "slow", "slower", "bob"]),
    O::optional("deblock", T::String, V::Filter, C::Filters),
    O::optional("denoise", T::String, V::Filter, C::Filters)
        .strings(&["weak", "medium", "strong"]),
    O::optional("detelecine", T::String, V::Filter, C::Filters),
    O::optional("decomb", T::String, V::Filter, C::Filters).strings(&["fast", "bob"]),
    O::flag("grayscale", C::Filters),
    O::optional("rotate", T::Integer, V::Rotate, C::Filters).integers(&[1, 2, 3, 4, 5, 6, 7]),
    O::flag("strict-anamorphic", C::Picture),
    O::flag("loose-anamorphic", C::Picture),
    O::flag("custom-anamorphic", C::Picture),
    O::required("display-width", T::Integer, V::PositiveInteger, C::Picture),
    O::flag("keep-display-aspect", C::Picture),
    O::required("pixel-aspect", T::String, V::PixelAspect, C::Picture),
    O::required("modulus", T::Integer, V::PositiveInteger, C::Picture),
    O::flag("itu-par", C::Picture),
    O::required("width", T::Integer, V::PositiveInteger, C::Picture),
    O::required("height", T::Integer, V::PositiveInteger, C::Picture),
    O::required("crop", T::String, V::Crop, C::Picture),
    O::optional("loose-crop", T::Integer, V::PositiveInteger, C::Picture),
    O::required("vb", T::Integer, V::VideoBitrate, C::Video).short('b'),
    O::required("quality", T::Double, V::VideoQuality, C::Video).short('q'),
    O::required("ab", T::IntegerList, V::AudioBitrate, C::Audio).short('B'),
    O::required("aq", T::DoubleList, V::AudioQuality, C::Audio).short('Q'),
    O::required("ac", T::DoubleList, V::AudioCompression, C::Audio),
    O::required("rate", T::String, V::Framerate, C::Video)
        .short('r')
        .strings(FRAMERATES_LEGACY),
    O::required("arate", T::StringList, V::StringListSet, C::Audio).strings(AUDIO_RATES),
    O::required("encopts", T::String, V::Encopts, C::Video),
    O::flag("turbo", C::Video).short('T'),
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
        "Normal",
        "High Profile",
    ]),
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
        "copy:dts",
        "copy:dtshd",
        "copy:mp3",
    ]),
    O::required("audio-fallback", T::String, V::StringSet, C::Audio).strings(&[
        "av_aac", "ac3", "mp3", "vorbis", "flac16", "flac24",
    ]),
];

const REQUIRES: &[Require] = &[
    requires_value("optimize", "format", "av_mp4"),
    requires_value("ipod-atom", "format", "av_mp4"),
    requires("scan", "title"),
    requires("srt-codeset", "srt-file"),
    requires("srt-offset", "srt-file"),
    requires("srt-lang", "srt-file"),
    requires("srt-default", "srt-file"),
    requires("native-dub", "native-language"),
    requires("two-pass", "vb"),
    requires("turbo", "two-pass"),
    requires("keep-display-aspect", "custom-anamorphic"),
    requires("pixel-aspect", "custom-anamorphic"),
];

const CONFLICTS: &[Conflict] = &[
    conflicts("main-feature", "scan"),
    conflicts_value("gain", None, "aencoder", Some("copy")),
    conflicts("deinterlace", "decomb"),
    conflicts("decomb", "deinterlace"),
    conflicts("strict-anamorphic", "loose-anamorphic"),
    conflicts("strict-anamorphic", "custom-anamorphic"),
    conflicts("loose-anamorphic", "strict-anamorphic"),
    conflicts("loose-anamorphic", "custom-anamorphic"),
    conflicts("custom-anamorphic", "strict-anamorphic"),
    conflicts("custom-anamorphic", "loose-anamorphic"),
    conflicts("modulus", "strict-anamorphic"),
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
