mod intent;
mod strip;
mod viewport;

pub use intent::Intent;
pub use strip::nav_window;
pub use viewport::{section_at_midpoint, SectionBox, ViewportProbe};

use log::{debug, trace};

use crate::config::NavigatorConfig;
use crate::content::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub active_index: usize,
    pub is_transitioning: bool,
    pub last_transition_ms: Option<u64>,
}

/// Request for the rendering layer to bring `target_id` into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub target_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A previous transition hasn't settled yet.
    Transitioning,
    /// Too soon after the last accepted intent.
    Debounced,
    /// Already at the first or last section.
    Boundary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(Transition),
    /// The requested index was out of range and was clamped before being applied.
    Clamped(Transition),
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Accepted(t) | Self::Clamped(t) => Some(t),
            Self::Ignored(_) => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Converts a high-resolution timestamp such as `performance.now()` to whole milliseconds.
///
/// Negative and NaN readings map to 0.
pub fn timestamp_ms(high_res: f64) -> u64 {
    if high_res.is_nan() || high_res <= 0.0 {
        0
    } else {
        high_res as u64
    }
}

/// Owns the authoritative active slide index.
///
/// Intents go through [`SlideNavigator::apply`] (or the `jump_to`/`next`/`previous`
/// shorthands) and produce at most one [`Transition`]. Scroll observations go through
/// [`SlideNavigator::on_scroll`], which only ever syncs the index.
///
/// Time is passed in as milliseconds from any monotonic source.
#[derive(Debug, Clone)]
pub struct SlideNavigator {
    ids: Vec<String>,
    config: NavigatorConfig,
    state: NavState,
}

impl SlideNavigator {
    pub fn new(sections: &[Section], config: NavigatorConfig) -> Self {
        Self {
            ids: sections.iter().map(|s| s.id.clone()).collect(),
            config,
            state: NavState::default(),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_transitioning {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn config(&self) -> NavigatorConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Resolves a URL fragment (`#section-07` or `section-07`) to a section index.
    pub fn section_for_fragment(&self, fragment: &str) -> Option<usize> {
        let id = fragment.trim_start_matches('#');
        if id.is_empty() {
            return None;
        }
        self.index_of(id)
    }

    /// The fragment to write to the URL so it names the active section, or `None` when
    /// `current` already does.
    pub fn fragment_update(&self, current: &str) -> Option<String> {
        let id = self.ids.get(self.state.active_index)?;
        (current.trim_start_matches('#') != id).then(|| format!("#{id}"))
    }

    /// Ends the current transition once the settle delay has passed.
    ///
    /// Returns true if this call moved the navigator back to idle.
    pub fn settle(&mut self, now_ms: u64) -> bool {
        if !self.state.is_transitioning {
            return false;
        }
        let started = self.state.last_transition_ms.unwrap_or(0);
        if now_ms.saturating_sub(started) < self.config.settle_ms {
            return false;
        }
        self.state.is_transitioning = false;
        trace!("navigator settled at {}", self.state.active_index);
        true
    }

    pub fn apply(&mut self, intent: Intent, now_ms: u64) -> Outcome {
        match intent {
            Intent::Next => self.next(now_ms),
            Intent::Previous => self.previous(now_ms),
            Intent::First => self.jump_to(0, now_ms),
            Intent::Last => self.jump_to(self.last_index() as i64, now_ms),
            Intent::JumpTo(index) => self.jump_to(index, now_ms),
        }
    }

    pub fn jump_to(&mut self, index: i64, now_ms: u64) -> Outcome {
        if let Some(reason) = self.blocked(now_ms) {
            return ignore(reason);
        }
        if self.ids.is_empty() {
            return ignore(IgnoreReason::Boundary);
        }
        let target = index.clamp(0, self.last_index() as i64) as usize;
        let transition = self.begin(target, now_ms);
        if target as i64 == index {
            Outcome::Accepted(transition)
        } else {
            debug!("navigator clamped jump to {index} into {target}");
            Outcome::Clamped(transition)
        }
    }

    pub fn next(&mut self, now_ms: u64) -> Outcome {
        if let Some(reason) = self.blocked(now_ms) {
            return ignore(reason);
        }
        let active = self.state.active_index;
        if self.ids.is_empty() || active >= self.last_index() {
            return ignore(IgnoreReason::Boundary);
        }
        Outcome::Accepted(self.begin(active + 1, now_ms))
    }

    pub fn previous(&mut self, now_ms: u64) -> Outcome {
        if let Some(reason) = self.blocked(now_ms) {
            return ignore(reason);
        }
        let active = self.state.active_index;
        if active == 0 {
            return ignore(IgnoreReason::Boundary);
        }
        Outcome::Accepted(self.begin(active - 1, now_ms))
    }

    /// Syncs the active index to wherever the page currently is.
    ///
    /// Never starts a transition. While one is in flight the page is mid-animation, so the
    /// observation is dropped. Returns the new index if it changed.
    pub fn on_scroll<P: ViewportProbe + ?Sized>(&mut self, probe: &P, now_ms: u64) -> Option<usize> {
        self.settle(now_ms);
        if self.state.is_transitioning || self.ids.is_empty() {
            return None;
        }
        let index = section_at_midpoint(probe, self.ids.len());
        if index == self.state.active_index {
            return None;
        }
        trace!("scroll moved active section {} -> {index}", self.state.active_index);
        self.state.active_index = index;
        Some(index)
    }

    fn last_index(&self) -> usize {
        self.ids.len().saturating_sub(1)
    }

    fn blocked(&mut self, now_ms: u64) -> Option<IgnoreReason> {
        self.settle(now_ms);
        if self.state.is_transitioning {
            return Some(IgnoreReason::Transitioning);
        }
        match self.state.last_transition_ms {
            Some(last) if now_ms.saturating_sub(last) < self.config.debounce_ms => {
                Some(IgnoreReason::Debounced)
            }
            _ => None,
        }
    }

    fn begin(&mut self, target: usize, now_ms: u64) -> Transition {
        let from = self.state.active_index;
        self.state = NavState {
            active_index: target,
            is_transitioning: true,
            last_transition_ms: Some(now_ms),
        };
        debug!("navigator transition {from} -> {target}");
        Transition {
            from,
            to: target,
            target_id: self.ids[target].clone(),
        }
    }
}

fn ignore(reason: IgnoreReason) -> Outcome {
    trace!("navigator ignored intent: {reason:?}");
    Outcome::Ignored(reason)
}
