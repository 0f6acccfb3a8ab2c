//! Login page: email + password against the rental API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::hooks::use_app_context;
use crate::net::types::LoginInput;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already logged in: skip the form.
    let ctx_mount = ctx.clone();
    Effect::new(move || {
        if ctx_mount.session.is_authenticated() {
            ctx_mount.redirect.redirect(&ctx_mount.config().home_path);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                if crate::hooks::auth::login(&ctx, &input).await.is_err() {
                    password.set(String::new());
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ctx, input);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"RentDesk"</h1>
                <p class="login-card__subtitle">"Sign in to manage your properties"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Trim the email and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<LoginInput, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginInput { email: email.to_owned(), password: password.to_owned() })
}
