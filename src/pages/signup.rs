//! Member registration. On success the member is sent to sign in.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::Api;
use crate::net::types::SignupRequest;
use crate::util::browser::alert;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_NICKNAME_LEN: usize = 20;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub nickname: String,
    pub password: String,
    pub password_confirm: String,
}

/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    let email = form.email.trim();
    let nickname = form.nickname.trim();
    if email.is_empty() || nickname.is_empty() || form.password.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if nickname.chars().count() > MAX_NICKNAME_LEN {
        return Err("Nickname must be 20 characters or fewer.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if form.password != form.password_confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignupRequest {
        email: email.to_owned(),
        nickname: nickname.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.signup(&request).await {
                Ok(()) => {
                    alert("Welcome aboard! Sign in to continue.");
                    registered.set(true);
                }
                Err(e) => info.set(e.message_or("Sign up failed. Try again.")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nickname"
                        prop:value=move || form.get().nickname
                        on:input=move |ev| form.update(|f| f.nickname = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || form.get().password_confirm
                        on:input=move |ev| form.update(|f| f.password_confirm = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already a member? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
