/// Vertical extent of a rendered section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Read-only window onto the rendered page.
pub trait ViewportProbe {
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// `None` when the section isn't mounted.
    fn section_box(&self, index: usize) -> Option<SectionBox>;
}

/// Index of the section under the viewport's vertical midpoint.
///
/// Anything within the top third of the first screen counts as the first section. When no
/// box contains the midpoint (gaps, unmounted sections) the last section starting above it
/// wins.
pub fn section_at_midpoint<P: ViewportProbe + ?Sized>(probe: &P, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let offset = probe.scroll_offset();
    let height = probe.viewport_height();
    if offset < height / 3.0 {
        return 0;
    }
    let midpoint = offset + height / 2.0;

    let mut above = 0;
    for index in 0..len {
        let Some(bounds) = probe.section_box(index) else {
            continue;
        };
        if bounds.contains(midpoint) {
            return index;
        }
        if bounds.top <= midpoint {
            above = index;
        }
    }
    above
}
