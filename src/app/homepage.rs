use leptos::{either::Either, ev, prelude::*};
use leptos_meta::{Meta, Title};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

use crate::config::{MetaKey, SiteConfig};
use crate::content::{sections, REGISTRY};
use crate::navigator::Intent;

use super::navigation::{NavigatorHandle, SideNav, StepButtons};
use super::slides::{Footer, SlideView};

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<Resource<SiteConfig>>();
    view! {
        <Title text="Home" />
        <Suspense fallback=move || {
            view! { <div class="min-h-screen loading-skeleton"></div> }
        }>
            {move || Suspend::new(async move {
                let site = site.await;
                view! {
                    <PageMeta site=site.clone() />
                    <SlideDeck site />
                }
            })}
        </Suspense>
    }
}

#[component]
fn PageMeta(site: SiteConfig) -> impl IntoView {
    site.meta_tags()
        .into_iter()
        .map(|tag| match tag.key {
            MetaKey::Name(name) => Either::Left(view! { <Meta name content=tag.content /> }),
            MetaKey::Property(property) => {
                Either::Right(view! { <Meta property content=tag.content /> })
            }
        })
        .collect_view()
}

#[component]
fn SlideDeck(site: SiteConfig) -> impl IntoView {
    let nav = NavigatorHandle::new(&sections(), site.navigator);
    provide_context(nav);

    // wheel has to be non-passive so the native scroll can be replaced with a slide step
    let _ = use_event_listener_with_options(
        use_window(),
        ev::wheel,
        move |e| {
            if let Some(intent) = Intent::from_wheel(e.delta_y()) {
                e.prevent_default();
                nav.dispatch(intent);
            }
        },
        UseEventListenerOptions::default().passive(false),
    );
    let _ = use_event_listener(use_window(), ev::keydown, move |e| {
        let modified = e.ctrl_key() || e.meta_key() || e.alt_key();
        if let Some(intent) = Intent::from_key(&e.key(), modified) {
            e.prevent_default();
            nav.dispatch(intent);
        }
    });
    let _ = use_event_listener(use_window(), ev::scroll, move |_| nav.observe_scroll());
    nav.sync_location_hash();

    Effect::new(move |_| nav.observe_scroll());

    view! {
        <SideNav />
        <StepButtons />
        <div class="w-full xl:pl-12">
            {REGISTRY
                .iter()
                .map(|slide| {
                    view! { <SlideView slide=slide.clone() site=site.clone() /> }
                })
                .collect_view()}
            <Footer owner=site.owner.clone() />
        </div>
    }
}
