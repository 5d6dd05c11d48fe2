mod banner;
mod contact;
mod homepage;
mod navigation;
mod slides;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;

use contact::ContactPage;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[server]
pub async fn get_site_config() -> Result<SiteConfig, ServerFnError> {
    SiteConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid site configuration");
        ServerFnError::new(e.to_string())
    })
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site = Resource::new(
        || (),
        |_| async move { get_site_config().await.unwrap_or_default() },
    );
    provide_context(site);

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />

        <Router>
            <main class="w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>
    }
}
