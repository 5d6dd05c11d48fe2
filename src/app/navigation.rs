use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_router::{
    hooks::{use_location, use_navigate},
    NavigateOptions,
};

use crate::config::NavigatorConfig;
use crate::content::{label, Section};
use crate::navigator::{nav_window, Intent, Outcome, SlideNavigator, Transition};

/// Extra wait past the settle delay so the timer never fires a hair early.
#[cfg(feature = "hydrate")]
const SETTLE_SLACK_MS: u64 = 20;

/// Milliseconds on the page's monotonic clock.
#[cfg(feature = "hydrate")]
fn now_ms() -> u64 {
    crate::navigator::timestamp_ms(window().performance().map(|p| p.now()).unwrap_or(0.0))
}

// intents only arrive from browser events
#[cfg(not(feature = "hydrate"))]
fn now_ms() -> u64 {
    0
}

/// The page's single navigator plus the signals the view reads from it.
///
/// Provided as context by the slide deck. Every write goes through the navigator and is
/// mirrored into the signals afterwards.
#[derive(Clone, Copy)]
pub struct NavigatorHandle {
    navigator: StoredValue<Arc<Mutex<SlideNavigator>>>,
    active: RwSignal<usize>,
    transitioning: RwSignal<bool>,
    len: usize,
    window_size: usize,
}

impl NavigatorHandle {
    pub fn new(sections: &[Section], config: NavigatorConfig) -> Self {
        Self {
            navigator: StoredValue::new(Arc::new(Mutex::new(SlideNavigator::new(
                sections, config,
            )))),
            active: RwSignal::new(0),
            transitioning: RwSignal::new(false),
            len: sections.len(),
            window_size: config.nav_window,
        }
    }

    pub fn active(&self) -> ReadSignal<usize> {
        self.active.read_only()
    }

    pub fn is_transitioning(&self) -> ReadSignal<bool> {
        self.transitioning.read_only()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn with_navigator<T>(&self, f: impl FnOnce(&mut SlideNavigator) -> T) -> T {
        self.navigator.with_value(|n| {
            let mut n = n.lock().expect("should be able to lock navigator");
            f(&mut n)
        })
    }

    fn sync(&self) {
        let state = self.with_navigator(|n| n.state());
        if self.active.get_untracked() != state.active_index {
            self.active.set(state.active_index);
        }
        if self.transitioning.get_untracked() != state.is_transitioning {
            self.transitioning.set(state.is_transitioning);
        }
    }

    pub fn dispatch(&self, intent: Intent) -> Outcome {
        let now = now_ms();
        let outcome = self.with_navigator(|n| n.apply(intent, now));
        self.sync();
        if let Some(transition) = outcome.transition() {
            self.realize(transition);
        }
        outcome
    }

    /// Passive sync with the current scroll position.
    pub fn observe_scroll(&self) {
        #[cfg(feature = "hydrate")]
        {
            let now = now_ms();
            self.with_navigator(|n| n.on_scroll(&dom::DomProbe, now));
            self.sync();
        }
    }

    /// Keeps the URL fragment and the active section in step, e.g. `/#section-07`.
    ///
    /// A fragment naming another section jumps there. A change of active section
    /// replaces the fragment without adding a history entry.
    pub fn sync_location_hash(&self) {
        let location = use_location();
        let hash = location.hash;
        let pathname = location.pathname;
        let navigate = use_navigate();
        let handle = *self;

        Effect::new(move |_| {
            let hash = hash.get();
            let (target, active) =
                handle.with_navigator(|n| (n.section_for_fragment(&hash), n.active_index()));
            match target {
                Some(index) if index != active => {
                    handle.dispatch(Intent::JumpTo(index as i64));
                }
                Some(_) => {}
                None if hash.trim_start_matches('#').is_empty() => {}
                None => log::debug!("ignoring unknown fragment {hash}"),
            }
        });

        Effect::watch(
            move || handle.active.get(),
            move |_, _, _| {
                let current = hash.get_untracked();
                if let Some(fragment) = handle.with_navigator(|n| n.fragment_update(&current)) {
                    navigate(
                        &format!("{}{fragment}", pathname.get_untracked()),
                        NavigateOptions {
                            replace: true,
                            scroll: false,
                            ..Default::default()
                        },
                    );
                }
            },
            false,
        );
    }

    fn realize(&self, transition: &Transition) {
        #[cfg(feature = "hydrate")]
        {
            dom::scroll_to_section(&transition.target_id);
            let handle = *self;
            let delay = self.with_navigator(|n| n.config().settle_delay(SETTLE_SLACK_MS));
            set_timeout(move || handle.settle(), delay);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = transition;
    }

    #[cfg(feature = "hydrate")]
    fn settle(&self) {
        let now = now_ms();
        self.with_navigator(|n| n.settle(now));
        // land on wherever the animation actually stopped
        self.observe_scroll();
        self.sync();
    }
}

#[cfg(feature = "hydrate")]
mod dom {
    use leptos::prelude::{document, window};
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use crate::content::section_id;
    use crate::navigator::{SectionBox, ViewportProbe};

    pub struct DomProbe;

    fn element(id: &str) -> Option<HtmlElement> {
        document().get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    impl ViewportProbe for DomProbe {
        fn scroll_offset(&self) -> f64 {
            window().scroll_y().unwrap_or(0.0)
        }

        fn viewport_height(&self) -> f64 {
            window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0)
        }

        fn section_box(&self, index: usize) -> Option<SectionBox> {
            let el = element(&section_id(index))?;
            Some(SectionBox {
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        }
    }

    pub fn scroll_to_section(id: &str) {
        match element(id) {
            Some(el) => window().scroll_to_with_x_and_y(0.0, f64::from(el.offset_top())),
            None => log::warn!("no element for section {id}"),
        }
    }
}

#[component]
pub fn SideNav() -> impl IntoView {
    let nav = expect_context::<NavigatorHandle>();
    let total = nav.len();
    let window_size = nav.window_size;
    view! {
        <nav class="fixed left-4 z-50 h-screen hidden xl:block" aria-label="Sections">
            <div class="flex flex-col justify-evenly h-full py-8">
                {move || {
                    let active = nav.active().get();
                    nav_window(active, total, window_size)
                        .into_iter()
                        .flatten()
                        .map(|index| {
                            let is_active = index == active;
                            view! {
                                <button
                                    class=if is_active {
                                        "text-xs tracking-widest text-left py-1 transition-all duration-300 font-bold text-gray-700 dark:text-gray-300 scale-110"
                                    } else {
                                        "text-xs tracking-widest text-left py-1 transition-all duration-300 font-light text-gray-400 dark:text-gray-600 hover:text-gray-700"
                                    }
                                    aria-current=if is_active { Some("true") } else { None }
                                    on:click=move |_| {
                                        nav.dispatch(Intent::JumpTo(index as i64));
                                    }
                                >
                                    {label(index)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}

/// Previous/next buttons for screens too narrow for the side strip.
#[component]
pub fn StepButtons() -> impl IntoView {
    let nav = expect_context::<NavigatorHandle>();
    let last = nav.len().saturating_sub(1);
    let busy = nav.is_transitioning();
    let button_class = "w-10 h-10 rounded-full border border-gray-400 dark:border-gray-600 text-gray-500 disabled:opacity-30";
    view! {
        <div class="fixed right-4 bottom-4 z-50 flex flex-col gap-2 xl:hidden">
            <button
                class=button_class
                aria-label="Previous section"
                disabled=move || busy.get() || nav.active().get() == 0
                on:click=move |_| {
                    nav.dispatch(Intent::Previous);
                }
            >
                "↑"
            </button>
            <button
                class=button_class
                aria-label="Next section"
                disabled=move || busy.get() || nav.active().get() >= last
                on:click=move |_| {
                    nav.dispatch(Intent::Next);
                }
            >
                "↓"
            </button>
        </div>
    }
}
