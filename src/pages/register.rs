//! Registration page: name/email/password form with inline validation errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering and browser wiring only. Submit semantics live in
//! `register_flow`; this module plugs Leptos signals, the router and the
//! HTTP client into it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::register_flow::{Registrar, RegistrationFlow};
use crate::config::ClientConfig;
use crate::net::api::RegisterError;
use crate::net::types::RegisterData;
use crate::state::auth::AuthState;
use crate::state::notifications::NotificationState;
use crate::state::register::RegisterState;
use crate::util::register_schema::{RegisterField, RegisterInput};

/// Registrar backed by `POST /api/auth/register`.
#[derive(Clone, Debug)]
pub struct HttpRegistrar {
    pub api_base: String,
}

impl Registrar for HttpRegistrar {
    async fn register(&self, data: &RegisterData) -> Result<(), RegisterError> {
        crate::net::api::register(&self.api_base, data).await
    }
}

/// Build the flow from context-provided state and the current router.
fn use_registration_flow(
    state: RwSignal<RegisterState>,
) -> RegistrationFlow<
    HttpRegistrar,
    RwSignal<NotificationState>,
    impl Fn(&str) + Clone + 'static,
    RwSignal<RegisterState>,
> {
    let config = expect_context::<ClientConfig>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();
    let navigator = move |path: &str| navigate(path, NavigateOptions::default());
    let registrar = HttpRegistrar {
        api_base: config.api_base,
    };
    RegistrationFlow::new(registrar, notifications, navigator, state)
}

/// Register page. The form stays hidden until auth has loaded; signed-in
/// users are sent to `/` and never see it.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(RegisterState::default());
    let flow = use_registration_flow(state);

    // Check the session once, as soon as it has loaded. Returning `true`
    // without reading `auth` drops the subscription.
    Effect::new(move |checked: Option<bool>| {
        if checked == Some(true) {
            return true;
        }
        flow.check_loaded_session(&auth.get())
    });

    view! {
        <div class="register-page">
            <h1 class="register-page__title">"Register"</h1>
            <Show when=move || auth.with(AuthState::shows_register_form)>
                <RegisterForm state=state/>
            </Show>
        </div>
    }
}

#[component]
fn RegisterForm(state: RwSignal<RegisterState>) -> impl IntoView {
    let form = RwSignal::new(RegisterInput::default());
    let flow = use_registration_flow(state);
    let submitting = move || state.with(|s| s.submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = form.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let flow = flow.clone();
            leptos::task::spawn_local(async move {
                flow.submit(input).await;
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &flow);
        }
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            {RegisterField::ALL
                .into_iter()
                .map(|field| view! { <FieldInput field=field form=form state=state/> })
                .collect_view()}
            <button class="register-button" type="submit" disabled=submitting>
                {move || if submitting() { "Registering..." } else { "Register" }}
            </button>
        </form>
        <p class="register-page__alt">
            "Already have an account? "
            <a href="/login">"Sign in"</a>
        </p>
    }
}

/// One input plus its inline error messages.
#[component]
fn FieldInput(
    field: RegisterField,
    form: RwSignal<RegisterInput>,
    state: RwSignal<RegisterState>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <input
                class=move || state.with(|s| s.field_class(field))
                type=field.input_type()
                name=field.key()
                id=field.key()
                placeholder=field.placeholder()
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *f.field_mut(field) = value);
                }
            />
            {move || {
                state.with(|s| {
                    s.errors
                        .messages(field)
                        .iter()
                        .map(|message| view! { <span class="input-error">{message.clone()}</span> })
                        .collect_view()
                })
            }}
        </div>
    }
}
