//! Project Board Component
//!
//! Dashboard screen: the project grid with its create/edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ProjectModal;
use crate::context::{AppContext, Screen};
use crate::modal::ModalState;
use crate::models::{format_date, Project};
use crate::session::use_session;
use crate::store::{refresh_projects, use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let (modal, set_modal) = signal(ModalState::<Project>::Closed);

    // Reload projects on entry and whenever a mutation bumps the trigger
    {
        let session = session.clone();
        Effect::new(move |_| {
            let _ = ctx.projects_reload.get();
            let session = session.clone();
            spawn_local(async move {
                refresh_projects(store, session).await;
            });
        });
    }

    let loading = move || !store.projects_loaded().get() && store.projects_error().get().is_none();

    view! {
        <div class="board">
            <div class="board-head">
                <div>
                    <h2>"Project Dashboard"</h2>
                    <p class="board-subtitle">"Track and manage all your projects"</p>
                </div>
                <button class="primary-btn" on:click=move |_| set_modal.set(ModalState::Create)>
                    "Create New Project"
                </button>
            </div>

            // Fetch-failure banner; the previous contents stay on screen below
            {move || store.projects_error().get().map(|message| view! {
                <div class="error-banner">
                    <p>{message}</p>
                    <button on:click=move |_| { *store.projects_error().write() = None; }>
                        "Dismiss"
                    </button>
                </div>
            })}

            {move || {
                let loaded = store.projects_loaded().get();
                if loading() {
                    view! {
                        <div class="board-empty">
                            <p>"Loading your projects..."</p>
                        </div>
                    }
                    .into_any()
                } else if loaded && store.projects().get().is_empty() {
                    view! {
                        <div class="board-empty">
                            <h3>"No projects found"</h3>
                            <p>"Get started by creating your first project"</p>
                            <button
                                class="primary-btn"
                                on:click=move |_| set_modal.set(ModalState::Create)
                            >
                                "Create Project"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="project-grid">
                            <For
                                each=move || store.projects().get()
                                key=|project| project.id.clone()
                                children=move |project: Project| {
                                    let edit_project = project.clone();
                                    let tasks_id = project.id.clone();
                                    let description = if project.description.is_empty() {
                                        "No description provided".to_string()
                                    } else {
                                        project.description.clone()
                                    };
                                    view! {
                                        <div class="project-card">
                                            <div class="project-card-body">
                                                <div class="project-card-head">
                                                    <h3>{project.title.clone()}</h3>
                                                    <span class=format!(
                                                        "status-badge status-{}",
                                                        project.status.as_str()
                                                    )>
                                                        {project.status.label()}
                                                    </span>
                                                </div>
                                                <p class="project-desc">{description}</p>
                                                <div class="project-meta">
                                                    <span>
                                                        <b>{project.task_count}</b>
                                                        {if project.task_count == 1 { " task" } else { " tasks" }}
                                                    </span>
                                                    <span>"Created: " {format_date(&project.created_at)}</span>
                                                </div>
                                            </div>
                                            <div class="project-card-actions">
                                                <button
                                                    class="link-btn"
                                                    on:click=move |_| {
                                                        ctx.navigate(Screen::Tasks {
                                                            project: Some(tasks_id.clone()),
                                                        })
                                                    }
                                                >
                                                    "View Tasks"
                                                </button>
                                                <button
                                                    class="link-btn"
                                                    on:click=move |_| {
                                                        set_modal.set(ModalState::Edit(edit_project.clone()))
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            <ProjectModal modal=modal set_modal=set_modal />
        </div>
    }
}
