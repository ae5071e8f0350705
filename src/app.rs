//! Root application component with routing, contexts, and the navigation
//! guard.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::nav_bar::NavBar;
use crate::i18n::Locale;
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, generate_plan::GeneratePlanPage, home::HomePage, login::LoginPage,
    register::RegisterPage, review::ReviewPage,
};
use crate::router::NavigationDecision;
use crate::state::session::SessionStore;
use crate::state::storage::{self, KeyValueStore};

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
/// Owns the storage port and hands it to the session store, the API client,
/// and the guard (the only three things allowed to touch the persisted
/// session slot), then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = storage::default_store();
    let api = ApiClient::new(Arc::clone(&store));
    let session = SessionStore::new(Arc::clone(&store), api.clone());

    provide_context(store);
    provide_context(api);
    provide_context(session);
    provide_context(RwSignal::new(Locale::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/medplan.css"/>
        <Title text="MedPlan"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireSession><DashboardPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("generate-plan")
                        view=|| view! { <RequireSession><GeneratePlanPage/></RequireSession> }
                    />
                    <Route
                        path=(StaticSegment("review"), ParamSegment("plan_id"))
                        view=|| view! { <RequireSession><ReviewPage/></RequireSession> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Navigation guard wrapper for the authenticated area.
///
/// Re-evaluates [`crate::router::decide`] against the persisted credential
/// whenever the location changes and bounces denied visits to the login
/// route. The gate is binary; the credential is never validated here.
#[component]
fn RequireSession(children: Children) -> impl IntoView {
    let store = expect_context::<Arc<dyn KeyValueStore>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    Effect::new(move || {
        let path = pathname.get();
        if crate::router::decide(&path, store.as_ref()) == NavigationDecision::RedirectToLogin {
            leptos::logging::log!("no session, redirecting {path} to login");
            navigate(crate::router::LOGIN_PATH, NavigateOptions::default());
        }
    });

    children()
}
