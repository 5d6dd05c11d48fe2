use std::ops::RangeInclusive;

/// Indices shown in the side navigation strip: at most `max_visible` of them, centered on
/// `active` and shifted back when the end of the list is near.
///
/// Returns `None` when there is nothing to show.
pub fn nav_window(active: usize, total: usize, max_visible: usize) -> Option<RangeInclusive<usize>> {
    if total == 0 || max_visible == 0 {
        return None;
    }
    let last = total - 1;
    let active = active.min(last);
    let half = max_visible / 2;

    let mut start = active.saturating_sub(half);
    let end = (start + max_visible - 1).min(last);
    if end - start < max_visible - 1 {
        start = (end + 1).saturating_sub(max_visible);
    }
    Some(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_list_shows_everything() {
        assert_eq!(nav_window(0, 5, 15), Some(0..=4));
        assert_eq!(nav_window(4, 5, 15), Some(0..=4));
    }

    #[test]
    fn test_window_centers_on_active() {
        assert_eq!(nav_window(20, 50, 15), Some(13..=27));
        assert_eq!(nav_window(3, 50, 15), Some(0..=14));
    }

    #[test]
    fn test_window_shifts_near_end() {
        assert_eq!(nav_window(48, 50, 15), Some(35..=49));
        assert_eq!(nav_window(49, 50, 15), Some(35..=49));
    }

    #[test]
    fn test_window_size_is_bounded() {
        for active in 0..60 {
            let range = nav_window(active, 60, 15).unwrap();
            assert_eq!(range.clone().count(), 15);
            assert!(range.contains(&active));
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(nav_window(0, 0, 15), None);
        assert_eq!(nav_window(3, 10, 0), None);
        // stale active index past the end is treated as the last one
        assert_eq!(nav_window(99, 3, 15), Some(0..=2));
    }
}
