//! Home page, the redirect target for users who are already signed in.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()));

    view! {
        <div class="home-page">
            {move || match user_name() {
                Some(name) => view! { <h1>"Welcome, " {name}</h1> }.into_any(),
                None => view! {
                    <p>
                        <a href="/register">"Create an account"</a>
                        " or "
                        <a href="/login">"sign in"</a>
                    </p>
                }
                    .into_any(),
            }}
        </div>
    }
}
