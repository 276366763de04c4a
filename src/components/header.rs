//! App Header Component
//!
//! Brand, identity display, and the logout dropdown.

use leptos::prelude::*;

use crate::context::{AppContext, Screen};
use crate::session::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (show_dropdown, set_show_dropdown) = signal(false);

    let identity = {
        let session = session.clone();
        move || session.identity()
    };

    let logout = {
        let session = session.clone();
        move |_| {
            session.clear();
            ctx.navigate(Screen::Login);
        }
    };

    view! {
        <header class="app-header">
            <h1 class="app-brand" on:click=move |_| ctx.navigate(Screen::Dashboard)>
                "Project Manager"
            </h1>

            {move || identity().map(|name| {
                let logout = logout.clone();
                view! {
                    <div class="user-menu">
                        <span class="user-name">{name}</span>
                        <button
                            class="user-toggle"
                            on:click=move |_| set_show_dropdown.update(|open| *open = !*open)
                        >
                            "👤"
                        </button>
                        <Show when=move || show_dropdown.get()>
                            <div class="user-dropdown">
                                <button on:click=logout.clone()>"Logout"</button>
                            </div>
                        </Show>
                    </div>
                }
            })}
        </header>
    }
}
