//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::reports::ReportPage;
use crate::state::{auth::AuthState, reports::ReportsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the configuration and state contexts, starts the identity bridge
/// in the browser, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    let reports = RwSignal::new(ReportsState::default());

    #[cfg(feature = "hydrate")]
    {
        let identity = config.identity.clone();
        leptos::task::spawn_local(async move {
            crate::identity::init(&identity, auth).await;
        });
    }

    provide_context(config);
    provide_context(auth);
    provide_context(reports);

    view! {
        <Stylesheet id="leptos" href="/pkg/reports-portal.css"/>
        <Title text="Usage Reports"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ReportPage/>
            </Routes>
        </Router>
    }
}
