//! Signup Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SignupArgs};
use crate::context::{AppContext, Screen};
use crate::session::use_session;

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);
        let session = session.clone();
        spawn_local(async move {
            let args = SignupArgs {
                name: &name_value,
                email: &email_value,
                password: &password_value,
            };
            match api::signup(&args).await {
                Ok(auth) => {
                    session.establish(&auth.token, &auth.user.name);
                    ctx.navigate(Screen::Dashboard);
                }
                // Entered fields stay put for correction
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="auth-card" on:submit=on_submit>
                <h2>"Sign Up"</h2>

                <Show when=move || !error.get().is_empty()>
                    <p class="form-error">{move || error.get()}</p>
                </Show>

                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        placeholder="Choose a password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <div class="auth-actions">
                    <button type="submit" class="primary-btn" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                    <button
                        type="button"
                        class="link-btn"
                        on:click=move |_| ctx.navigate(Screen::Login)
                    >
                        "Back to Login"
                    </button>
                </div>
            </form>
        </div>
    }
}
