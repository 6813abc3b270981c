//! Versioned HandBrakeCLI option tables plus the hbr-only table.
//!
//! Value sets and custom filter keys shared by more than one release live
//! here; each release module only spells out what differs.

mod hbr;
mod v0_9_9;
mod v1_1_0;
mod v1_3_0;

pub use hbr::{EXTRAS, HBR};
pub use v0_9_9::V0_9_9;
pub use v1_1_0::V1_1_0;
pub use v1_3_0::V1_3_0;

use super::types::{CustomKey, bool_key, dbl_key, int_key, str_key};

pub(super) const MIXDOWNS: &[&str] = &[
    "mono",
    "left_only",
    "right_only",
    "stereo",
    "dpl1",
    "dpl2",
    "5point1",
    "6point1",
    "7point1",
    "5_2_lfe",
    "none",
];

pub(super) const AUDIO_RATES: &[&str] = &[
    "auto", "8", "11.025", "12", "16", "22.05", "24", "32", "44.1", "48",
];

pub(super) const FRAMERATES_LEGACY: &[&str] = &[
    "5", "10", "12", "15", "23.976", "24", "25", "29.97", "30", "50", "59.94", "60",
];

pub(super) const FORMATS: &[&str] = &["av_mp4", "av_mkv", "mp4", "mkv"];

pub(super) const COLOR_MATRICES: &[&str] = &["709", "pal", "ntsc", "601"];

pub(super) const DITHERS: &[&str] = &[
    "auto",
    "none",
    "rectangular",
    "triangular",
    "triangular_hp",
    "lipshitz_ns",
];

pub(super) const STRENGTH_PRESETS: &[&str] = &[
    "ultralight",
    "light",
    "medium",
    "strong",
    "stronger",
    "verystrong",
];

pub(super) const DENOISE_PRESETS: &[&str] = &["ultralight", "light", "medium", "strong"];

pub(super) const COMB_DETECT_KEYS: &[CustomKey] = &[
    int_key("mode"),
    int_key("spatial-metric"),
    int_key("motion-thresh"),
    int_key("spatial-thresh"),
    int_key("filter-mode"),
    int_key("block-thresh"),
    int_key("block-width"),
    int_key("block-height"),
    bool_key("disable"),
];

pub(super) const DEBLOCK_KEYS: &[CustomKey] = &[
    str_key("strength"),
    int_key("thresh"),
    int_key("blocksize"),
    bool_key("disable"),
];

pub(super) const DECOMB_KEYS: &[CustomKey] = &[
    int_key("mode"),
    int_key("magnitude-thresh"),
    int_key("variance-thresh"),
    int_key("laplacian-thresh"),
    int_key("dilation-thresh"),
    int_key("erosion-thresh"),
    int_key("noise-thresh"),
    int_key("search-distance"),
    int_key("postproc"),
    int_key("parity"),
];

pub(super) const DEINTERLACE_KEYS: &[CustomKey] = &[int_key("mode"), int_key("parity")];

pub(super) const DENOISE_KEYS: &[CustomKey] = &[
    int_key("y-spatial"),
    int_key("cb-spatial"),
    int_key("cr-spatial"),
    int_key("y-temporal"),
    int_key("cb-temporal"),
    int_key("cr-temporal"),
];

pub(super) const NLMEANS_KEYS: &[CustomKey] = &[
    dbl_key("y-strength"),
    dbl_key("y-origin-tune"),
    int_key("y-patch-size"),
    int_key("y-range"),
    int_key("y-frame-count"),
    int_key("y-prefilter"),
    dbl_key("cb-strength"),
    dbl_key("cb-origin-tune"),
    int_key("cb-patch-size"),
    int_key("cb-range"),
    int_key("cb-frame-count"),
    int_key("cb-prefilter"),
    dbl_key("cr-strength"),
    dbl_key("cr-origin-tune"),
    int_key("cr-patch-size"),
    int_key("cr-range"),
    int_key("cr-frame-count"),
    int_key("cr-prefilter"),
];

pub(super) const CHROMA_SMOOTH_KEYS: &[CustomKey] = &[
    dbl_key("cb-strength"),
    int_key("cb-size"),
    dbl_key("cr-strength"),
    int_key("cr-size"),
];

pub(super) const UNSHARP_KEYS: &[CustomKey] = &[
    dbl_key("y-strength"),
    int_key("y-size"),
    dbl_key("cb-strength"),
    int_key("cb-size"),
    dbl_key("cr-strength"),
    int_key("cr-size"),
];

pub(super) const LAPSHARP_KEYS: &[CustomKey] = &[
    dbl_key("y-strength"),
    str_key("y-kernel"),
    dbl_key("cb-strength"),
    str_key("cb-kernel"),
    dbl_key("cr-strength"),
    str_key("cr-kernel"),
];

pub(super) const DETELECINE_KEYS: &[CustomKey] = &[
    int_key("skip-top"),
    int_key("skip-bottom"),
    int_key("skip-left"),
    int_key("skip-right"),
    int_key("strict-breaks"),
    int_key("plane"),
    int_key("parity"),
    bool_key("disable"),
];

pub(super) const PAD_KEYS: &[CustomKey] = &[
    int_key("top"),
    int_key("bottom"),
    int_key("left"),
    int_key("right"),
    str_key("color"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::OptionTable;
    use std::collections::HashSet;

    fn all_tables() -> [&'static OptionTable; 4] {
        [&V0_9_9, &V1_1_0, &V1_3_0, &HBR]
    }

    #[test]
    fn option_names_are_unique_per_table() {
        for table in all_tables() {
            let mut seen = HashSet::new();
            for opt in table.options {
                assert!(seen.insert(opt.name), "{} repeats {}", table.label, opt.name);
            }
        }
    }

    #[test]
    fn relations_name_known_keys() {
        for table in [&V0_9_9, &V1_1_0, &V1_3_0] {
            let known: HashSet<&str> = table
                .options
                .iter()
                .chain(HBR.options.iter())
                .map(|o| o.name)
                .collect();
            for r in table.requires.iter().chain(HBR.requires.iter()) {
                assert!(known.contains(r.key), "{}: {}", table.label, r.key);
                assert!(known.contains(r.required), "{}: {}", table.label, r.required);
            }
            for c in table.conflicts.iter().chain(HBR.conflicts.iter()) {
                assert!(known.contains(c.key), "{}: {}", table.label, c.key);
                assert!(known.contains(c.conflicting), "{}: {}", table.label, c.conflicting);
            }
        }
    }

    #[test]
    fn hbr_options_are_never_emitted() {
        assert!(HBR.options.iter().all(|o| o.is_hbr_only()));
        for table in [&V0_9_9, &V1_1_0, &V1_3_0] {
            assert!(table.options.iter().all(|o| !o.is_hbr_only()));
        }
    }

    #[test]
    fn short_flags_are_unique_per_table() {
        for table in [&V0_9_9, &V1_1_0, &V1_3_0] {
            let mut seen = HashSet::new();
            for opt in table.options.iter().filter(|o| o.short.is_some()) {
                assert!(seen.insert(opt.short), "{} repeats -{:?}", table.label, opt.short);
            }
        }
    }
}
