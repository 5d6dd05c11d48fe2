/// Wheel deltas smaller than this are trackpad jitter.
const WHEEL_THRESHOLD: f64 = 4.0;

/// A discrete request to move through the slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    First,
    Last,
    /// Out-of-range values are clamped by the navigator.
    JumpTo(i64),
}

impl Intent {
    /// Maps a `KeyboardEvent.key` value. Chords with a modifier held are left to the browser.
    pub fn from_key(key: &str, modified: bool) -> Option<Self> {
        if modified {
            return None;
        }
        match key {
            "ArrowDown" | "PageDown" | " " | "j" => Some(Self::Next),
            "ArrowUp" | "PageUp" | "k" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }

    pub fn from_wheel(delta_y: f64) -> Option<Self> {
        if delta_y.is_nan() || delta_y.abs() < WHEEL_THRESHOLD {
            None
        } else if delta_y > 0.0 {
            Some(Self::Next)
        } else {
            Some(Self::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Intent::from_key("ArrowDown", false), Some(Intent::Next));
        assert_eq!(Intent::from_key("PageDown", false), Some(Intent::Next));
        assert_eq!(Intent::from_key(" ", false), Some(Intent::Next));
        assert_eq!(Intent::from_key("j", false), Some(Intent::Next));
        assert_eq!(Intent::from_key("ArrowUp", false), Some(Intent::Previous));
        assert_eq!(Intent::from_key("k", false), Some(Intent::Previous));
        assert_eq!(Intent::from_key("Home", false), Some(Intent::First));
        assert_eq!(Intent::from_key("End", false), Some(Intent::Last));
        assert_eq!(Intent::from_key("a", false), None);
        assert_eq!(Intent::from_key("Tab", false), None);
    }

    #[test]
    fn test_modified_keys_ignored() {
        assert_eq!(Intent::from_key("ArrowDown", true), None);
        assert_eq!(Intent::from_key("End", true), None);
    }

    #[test]
    fn test_wheel_mapping() {
        assert_eq!(Intent::from_wheel(120.0), Some(Intent::Next));
        assert_eq!(Intent::from_wheel(-53.5), Some(Intent::Previous));
        assert_eq!(Intent::from_wheel(3.9), None);
        assert_eq!(Intent::from_wheel(-1.0), None);
        assert_eq!(Intent::from_wheel(0.0), None);
        assert_eq!(Intent::from_wheel(f64::NAN), None);
    }
}
