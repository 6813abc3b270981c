//! Rotation tokens and their HandBrake renderings.

/// Code for named rotation tokens, or `None` if `value` is not made of them.
///
/// `vflip`, `hflip` and `clockwise` are bits (1, 2, 4) and add up. `none`
/// and `default` end the scan: the first one seen decides the code.
pub fn rotation_code(value: &str) -> Option<u8> {
    let mut code = 0;
    let mut seen = false;
    for token in value.split(',').map(str::trim) {
        match token {
            "none" => return Some(0),
            "default" => return Some(3),
            "vflip" => code |= 1,
            "hflip" => code |= 2,
            "clockwise" => code |= 4,
            _ => return None,
        }
        seen = true;
    }
    seen.then_some(code)
}

/// `angle=..:hflip=..` settings for a rotation code (1 to 7).
pub(super) fn rotation_settings(code: u8) -> Option<&'static str> {
    match code {
        1 => Some("angle=180:hflip=1"),
        2 => Some("angle=0:hflip=1"),
        3 => Some("angle=180:hflip=0"),
        4 => Some("angle=90:hflip=0"),
        5 => Some("angle=270:hflip=1"),
        6 => Some("angle=90:hflip=1"),
        7 => Some("angle=270:hflip=0"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_add_up() {
        assert_eq!(rotation_code("vflip"), Some(1));
        assert_eq!(rotation_code("hflip"), Some(2));
        assert_eq!(rotation_code("vflip,hflip"), Some(3));
        assert_eq!(rotation_code("clockwise, vflip"), Some(5));
        assert_eq!(rotation_code("vflip,hflip,clockwise"), Some(7));
    }

    #[test]
    fn test_short_circuit_tokens() {
        assert_eq!(rotation_code("none"), Some(0));
        assert_eq!(rotation_code("vflip,none"), Some(0));
        assert_eq!(rotation_code("clockwise,default"), Some(3));
        assert_eq!(rotation_code("default,none"), Some(3));
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(rotation_code(""), None);
        assert_eq!(rotation_code("5"), None);
        assert_eq!(rotation_code("vflip,spin"), None);
        assert_eq!(rotation_code("angle=90"), None);
    }

    #[test]
    fn test_settings_cover_every_code() {
        assert_eq!(rotation_settings(0), None);
        assert_eq!(rotation_settings(4), Some("angle=90:hflip=0"));
        assert!((1..=7).all(|c| rotation_settings(c).is_some()));
        assert_eq!(rotation_settings(8), None);
    }
}
