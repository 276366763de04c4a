//! Application Root
//!
//! Owns the screen signal, provides the session, store, and context, and
//! applies the session gate to screen dispatch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Header, LoginForm, ProjectBoard, SignupForm, TaskBoard};
use crate::context::{AppContext, Screen};
use crate::session::{resolve_screen, Session};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let session = Session::browser();
    let initial = if session.has_session() {
        Screen::Dashboard
    } else {
        Screen::Login
    };

    let (screen, set_screen) = signal(initial);
    let (projects_reload, set_projects_reload) = signal(0u32);
    let (tasks_reload, set_tasks_reload) = signal(0u32);

    let store: AppStore = Store::new(AppState::default());

    provide_context(session.clone());
    provide_context(store);
    provide_context(AppContext::new(
        (screen, set_screen),
        (projects_reload, set_projects_reload),
        (tasks_reload, set_tasks_reload),
    ));

    // Session gate: the requested screen only renders if the session state
    // allows it. A protected screen without a session resolves to the
    // login screen before its component mounts, so no authenticated
    // request can fire without a credential.
    let gated = Memo::new(move |_| resolve_screen(screen.get(), session.has_session()));

    view! {
        {move || match gated.get() {
            Screen::Login => view! { <LoginForm /> }.into_any(),
            Screen::Signup => view! { <SignupForm /> }.into_any(),
            Screen::Dashboard => view! {
                <Header />
                <ProjectBoard />
            }
            .into_any(),
            Screen::Tasks { project } => view! {
                <Header />
                <TaskBoard initial_project=project />
            }
            .into_any(),
        }}
    }
}
