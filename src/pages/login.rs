//! Login landing page, the redirect target after a successful registration.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"Your account is ready once registration succeeds."</p>
                <a href="/register" class="login-card__link">
                    "Need an account? Register"
                </a>
            </div>
        </div>
    }
}
