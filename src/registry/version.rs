//! HandBrake version parsing and option table selection.

use super::tables::{V0_9_9, V1_1_0, V1_3_0};
use super::types::OptionTable;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?").expect("version regex is valid")
});

static BANNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"HandBrake\S*\s+(\d+\.\d+(?:\.\d+)?)").expect("banner regex is valid")
});

/// A `major.minor.patch` HandBrake release number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandBrakeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl HandBrakeVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the version from `HandBrakeCLI --version` or `--update` output.
    pub fn from_banner(output: &str) -> Option<Self> {
        BANNER_RE
            .captures(output)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl FromStr for HandBrakeVersion {
    type Err = String;

    /// Accepts `1.3.0`, `1.3` and suffixed forms like `1.3.3-stable`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_RE
            .captures(s.trim())
            .ok_or_else(|| format!("invalid HandBrake version '{}'", s))?;
        let num = |i: usize| -> Result<u32, String> {
            caps.get(i).map_or(Ok(0), |m| {
                m.as_str()
                    .parse()
                    .map_err(|_| format!("invalid HandBrake version '{}'", s))
            })
        };
        Ok(Self::new(num(1)?, num(2)?, num(3)?))
    }
}

impl fmt::Display for HandBrakeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Known tables, keyed by the first release they describe. Ascending.
pub static KNOWN_TABLES: [(HandBrakeVersion, &OptionTable); 3] = [
    (HandBrakeVersion::new(0, 9, 9), &V0_9_9),
    (HandBrakeVersion::new(1, 1, 0), &V1_1_0),
    (HandBrakeVersion::new(1, 3, 0), &V1_3_0),
];

/// Newest release the tables were checked against.
pub const NEWEST_TESTED: HandBrakeVersion = HandBrakeVersion::new(1, 3, 2);

/// Chosen table plus the warning to show, if the choice was a fallback.
#[derive(Debug)]
pub struct TableSelection {
    pub table: &'static OptionTable,
    pub warning: Option<String>,
}

/// Pick the table for `version` by greatest lower bound.
pub fn select_table(version: Option<HandBrakeVersion>) -> TableSelection {
    let (oldest_version, oldest) = KNOWN_TABLES[0];
    let (_, newest) = KNOWN_TABLES[KNOWN_TABLES.len() - 1];

    let Some(version) = version else {
        return TableSelection {
            table: oldest,
            warning: Some(format!(
                "Could not determine HandBrake version. Trying oldest options available ({})",
                oldest.label
            )),
        };
    };

    if version < oldest_version {
        return TableSelection {
            table: oldest,
            warning: Some(format!(
                "HandBrake {} is older than supported. Trying oldest options available ({})",
                version, oldest.label
            )),
        };
    }

    if version > NEWEST_TESTED {
        return TableSelection {
            table: newest,
            warning: Some(format!(
                "Found newer HandBrake release ({}) than supported. Running with newest options available ({})",
                version, newest.label
            )),
        };
    }

    let table = KNOWN_TABLES
        .iter()
        .rev()
        .find(|(min, _)| *min <= version)
        .map_or(oldest, |(_, table)| *table);

    TableSelection {
        table,
        warning: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> HandBrakeVersion {
        s.parse().unwrap()
    }

    #[test]
    fn parses_versions() {
        assert_eq!(v("1.3.0"), HandBrakeVersion::new(1, 3, 0));
        assert_eq!(v("0.10"), HandBrakeVersion::new(0, 10, 0));
        assert_eq!(v(" 1.3.3-stable"), HandBrakeVersion::new(1, 3, 3));
        assert!("stable".parse::<HandBrakeVersion>().is_err());
    }

    #[test]
    fn versions_compare_numerically() {
        assert!(v("0.10.5") > v("0.9.9"));
        assert!(v("1.2.2") < v("1.3.0"));
    }

    #[test]
    fn parses_banner_output() {
        assert_eq!(
            HandBrakeVersion::from_banner("HandBrake 1.3.1\n"),
            Some(HandBrakeVersion::new(1, 3, 1))
        );
        let update = "[12:00:00] hb_init: starting libhb thread\nHandBrake 0.10.2 (2015061100) - Linux x86_64\n";
        assert_eq!(
            HandBrakeVersion::from_banner(update),
            Some(HandBrakeVersion::new(0, 10, 2))
        );
        assert_eq!(HandBrakeVersion::from_banner("command not found"), None);
    }

    #[test]
    fn exact_releases_select_their_table() {
        assert_eq!(select_table(Some(v("0.9.9"))).table.label, "0.9.9");
        assert_eq!(select_table(Some(v("1.1.0"))).table.label, "1.1.0");
        assert_eq!(select_table(Some(v("1.3.0"))).table.label, "1.3.0");
    }

    #[test]
    fn intermediate_releases_use_greatest_lower_bound() {
        let sel = select_table(Some(v("1.0.7")));
        assert_eq!(sel.table.label, "0.9.9");
        assert!(sel.warning.is_none());

        assert_eq!(select_table(Some(v("1.2.2"))).table.label, "1.1.0");
        let sel = select_table(Some(v("1.3.2")));
        assert_eq!(sel.table.label, "1.3.0");
        assert!(sel.warning.is_none());
    }

    #[test]
    fn first_untested_patch_release_warns() {
        let sel = select_table(Some(v("1.3.3")));
        assert_eq!(sel.table.label, "1.3.0");
        assert!(sel.warning.unwrap().contains("newer HandBrake release (1.3.3)"));
    }

    #[test]
    fn newer_release_warns_and_uses_newest() {
        let sel = select_table(Some(v("1.6.1")));
        assert_eq!(sel.table.label, "1.3.0");
        assert!(sel.warning.unwrap().contains("newer HandBrake release (1.6.1)"));
    }

    #[test]
    fn older_or_unknown_release_warns_and_uses_oldest() {
        let sel = select_table(Some(v("0.9.8")));
        assert_eq!(sel.table.label, "0.9.9");
        assert!(sel.warning.is_some());

        let sel = select_table(None);
        assert_eq!(sel.table.label, "0.9.9");
        assert!(sel.warning.unwrap().contains("Could not determine"));
    }
}
