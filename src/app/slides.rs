use chrono::DateTime;
use leptos::{either::*, prelude::*};
use leptos_router::components::A;

use crate::config::SiteConfig;
use crate::content::{label, Article, Intro, Item, Slide, SlideContent};
use crate::navigator::Intent;

use super::banner::Banner;
use super::navigation::NavigatorHandle;

const SECTION_CLASS: &str =
    "min-h-screen flex items-center justify-center px-6 py-12 transition-opacity duration-500";

#[component]
pub fn SlideView(slide: Slide, site: SiteConfig) -> impl IntoView {
    let nav = expect_context::<NavigatorHandle>();
    let index = slide.section.index;
    let class = move || {
        if nav.active().get() == index {
            format!("{SECTION_CLASS} opacity-100")
        } else {
            format!("{SECTION_CLASS} opacity-40")
        }
    };
    let body = match slide.content {
        SlideContent::Hero => EitherOf4::A(view! { <Hero site /> }),
        SlideContent::Intro(intro) => EitherOf4::B(view! { <IntroBody intro /> }),
        SlideContent::Item(item) => EitherOf4::C(view! { <ItemBody item index /> }),
        SlideContent::Article(article) => EitherOf4::D(view! { <ArticleBody article index /> }),
    };
    view! {
        <section id=slide.section.id class=class>
            {body}
        </section>
    }
}

#[component]
fn Hero(site: SiteConfig) -> impl IntoView {
    let nav = expect_context::<NavigatorHandle>();
    view! {
        <div class="relative w-full max-w-6xl mx-auto text-center space-y-16">
            <div class="space-y-12">
                <div class="text-xs font-light text-gray-400 tracking-widest uppercase">
                    {label(0)}
                </div>
                <Banner owner=site.owner.clone() tagline=site.tagline.clone() />
                <h1 class="text-6xl md:text-8xl font-light tracking-tighter">{site.owner}</h1>
                <div class="w-32 h-px bg-gray-900 dark:bg-gray-100 mx-auto"></div>
            </div>
            <div class="space-y-8 max-w-5xl mx-auto">
                <p class="text-xl md:text-3xl text-gray-600 dark:text-gray-400 leading-relaxed">
                    {site.tagline}
                </p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center items-center text-base text-gray-500 font-light">
                    <span>"Currently available for new projects"</span>
                    <span class="hidden sm:block">"•"</span>
                    <A href="/contact" attr:class="underline hover:text-gray-700">
                        "Get in touch"
                    </A>
                </div>
            </div>
            <button
                class="mx-auto w-6 h-10 border-2 border-gray-400 rounded-full flex justify-center animate-bounce"
                aria-label="Next section"
                on:click=move |_| {
                    nav.dispatch(Intent::Next);
                }
            >
                <span class="w-1 h-3 bg-gray-400 rounded-full mt-2 animate-pulse"></span>
            </button>
        </div>
    }
}

#[component]
fn IntroBody(intro: Intro) -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto text-center space-y-12">
            <h2 class="text-5xl md:text-7xl font-light tracking-tighter">{intro.title}</h2>
            <div class="w-32 h-px bg-gray-900 dark:bg-gray-100 mx-auto"></div>
            <p class="text-xl md:text-3xl text-gray-600 dark:text-gray-400 leading-relaxed max-w-5xl mx-auto">
                {intro.description}
            </p>
        </div>
    }
}

#[component]
fn ItemBody(item: Item, index: usize) -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto text-center space-y-12">
            <div class="text-xs font-light text-gray-400 tracking-widest uppercase">
                {label(index)}
                {item.organization.then_some(" · organization")}
            </div>
            <h3 class="text-4xl md:text-7xl font-light tracking-tighter">{item.company}</h3>
            <div class="text-lg text-gray-500 uppercase tracking-wide">{item.role}</div>
            <p class="text-xl text-gray-600 dark:text-gray-400 leading-relaxed max-w-3xl mx-auto">
                {item.description}
            </p>
            <div class="w-24 h-px bg-gray-900 dark:bg-gray-100 mx-auto"></div>
        </div>
    }
}

#[component]
fn ArticleBody(article: Article, index: usize) -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto text-center space-y-8">
            <div class="text-xs font-light text-gray-400 tracking-widest uppercase">
                {label(index)}
            </div>
            <a
                href=article.link
                target="_blank"
                rel="noopener noreferrer"
                class="block text-2xl md:text-4xl font-light tracking-tight text-blue-700 dark:text-blue-300 hover:underline"
            >
                {article.title}
            </a>
        </div>
    }
}

#[component]
pub fn Footer(owner: String) -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.format("%b %e %Y").to_string())
        .unwrap_or_default();
    view! {
        <footer
            id="section-footer"
            class="min-h-[90dvh] w-full flex flex-col justify-center items-center px-4 py-12 bg-gray-50 dark:bg-gray-900"
        >
            <div class="max-w-screen-md w-full mx-auto text-center space-y-12">
                <h2 class="text-5xl font-light tracking-tighter">{owner}</h2>
                <div class="w-32 h-px bg-gray-900 dark:bg-gray-100 mx-auto"></div>
                <p class="text-xl leading-relaxed text-gray-600 dark:text-gray-400">
                    "Thanks for stopping by. Let's build something meaningful together."
                </p>
                <A href="/contact" attr:class="inline-block px-6 py-3 border border-gray-400 rounded-md">
                    "Start a conversation"
                </A>
                <p class="text-xs text-gray-400">"Last built " {built}</p>
            </div>
        </footer>
    }
}
