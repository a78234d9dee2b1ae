//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::{auth::AuthState, notifications::NotificationState};

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
/// Provides config, auth and notification contexts, loads the current user
/// once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::pending());
    let notifications = RwSignal::new(NotificationState::default());

    #[cfg(feature = "hydrate")]
    {
        let api_base = config.api_base.clone();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user(&api_base).await;
            auth.set(AuthState { user, loading: false });
        });
    }

    provide_context(config);
    provide_context(auth);
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/register-client.css"/>
        <Title text="Register"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
            <ToastStack/>
        </Router>
    }
}
