//! Login page: email + password sign-in and the forgot-password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Calls the injected auth service, which publishes the new session to
//! every `AuthState` reader. A signed-in visitor is redirected to their
//! role's landing page, which is also how a successful login navigates away.
//! Leaving the page mid-request cancels it, so no token is written.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::auth::AppAuthService;
use crate::components::notice;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::task::{component_owner, spawn_scoped};

pub(crate) const RESET_CONFIRMATION: &str =
    "If an account with that email exists, you will receive password reset instructions.";

/// Trim the email and require both fields. The password is passed through as typed.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn validate_reset_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address");
    }
    Ok(email.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let service = StoredValue::new(expect_context::<AppAuthService>());
    let auth = expect_context::<Signal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let show_forgot = RwSignal::new(false);
    let reset_email = RwSignal::new(String::new());
    let owner = StoredValue::new(component_owner());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                notice::show_error(ui, msg);
                return;
            }
        };
        busy.set(true);
        let service = service.get_value();
        owner.with_value(|owner| {
            spawn_scoped(owner, async move {
                match service.login(&email_value, &password_value).await {
                    Ok(_) => notice::show_success(ui, "Success", "Login successful!"),
                    Err(e) => notice::show_error(ui, &e.to_string()),
                }
                busy.set(false);
            });
        });
    };

    let on_forgot = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = match validate_reset_email(&reset_email.get()) {
            Ok(value) => value,
            Err(msg) => {
                notice::show_error(ui, msg);
                return;
            }
        };
        let service = service.get_value();
        owner.with_value(|owner| {
            spawn_scoped(owner, async move {
                match service.forgot_password(&email_value).await {
                    Ok(()) => {
                        notice::show_success(ui, "Success", RESET_CONFIRMATION);
                        reset_email.set(String::new());
                        show_forgot.set(false);
                    }
                    Err(e) => notice::show_error(ui, &e.to_string()),
                }
            });
        });
    };

    let form_class = move |forgot_form: bool| {
        if show_forgot.get() == forgot_form { "login-form" } else { "login-form login-form--hidden" }
    };

    view! {
        {move || auth.get().role().map(|role| view! { <Redirect path=role.landing_path()/> })}
        <div class="login-page">
            <a class="login-page__back" href="/" title="Back to home">"←"</a>
            <div class="login-page__brand">
                <h1>"Tech Mahindra"</h1>
                <h2>"Onboarding Portal"</h2>
                <p class="login-page__hint">
                    "Login credentials: hr@techmahindra.com , employee@techmahindra.com"
                </p>
            </div>
            <div class="login-card">
                <form class=move || form_class(false) on:submit=on_login>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-link" type="button" on:click=move |_| show_forgot.set(true)>
                        "Forgot password?"
                    </button>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <form class=move || form_class(true) on:submit=on_forgot>
                    <h3>"Reset Password"</h3>
                    <p class="login-card__subtitle">
                        "Enter your email address and we'll send you instructions to reset your password."
                    </p>
                    <label class="login-label" for="reset-email">"Email"</label>
                    <input
                        id="reset-email"
                        class="login-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || reset_email.get()
                        on:input=move |ev| reset_email.set(event_target_value(&ev))
                    />
                    <div class="login-form__actions">
                        <button class="btn" type="button" on:click=move |_| show_forgot.set(false)>
                            "Back to Login"
                        </button>
                        <button class="login-button" type="submit">
                            "Reset Password"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
