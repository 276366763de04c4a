//! Task Board Component
//!
//! Task list screen: project/status filters, task cards with edit and
//! two-step delete, and the task modal. The project cache is loaded
//! alongside tasks to feed the filter select and the modal dropdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, TaskModal};
use crate::context::AppContext;
use crate::filter::{visible_tasks, ProjectFilter, StatusFilter};
use crate::modal::ModalState;
use crate::models::{format_date, Task};
use crate::session::use_session;
use crate::store::{refresh_projects, refresh_tasks, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskBoard(
    /// Project the screen was opened for, pre-seeding the project filter
    #[prop(optional_no_strip)]
    initial_project: Option<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let initial_filter = initial_project
        .map(ProjectFilter::Project)
        .unwrap_or(ProjectFilter::All);
    let (project_filter, set_project_filter) = signal(initial_filter);
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (modal, set_modal) = signal(ModalState::<Task>::Closed);
    let (mutation_error, set_mutation_error) = signal(String::new());

    // Reload tasks on entry and whenever a mutation bumps the trigger
    {
        let session = session.clone();
        Effect::new(move |_| {
            let _ = ctx.tasks_reload.get();
            let session = session.clone();
            spawn_local(async move {
                refresh_tasks(store, session).await;
            });
        });
    }
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

    // The visible subset is a pure derivation of the cache and the two
    // selectors, recomputed on any change
    let visible = Memo::new(move |_| {
        visible_tasks(
            &store.tasks().get(),
            &project_filter.get(),
            &status_filter.get(),
        )
    });

    let delete_task = {
        let session = session.clone();
        move |task_id: String| {
            let session = session.clone();
            spawn_local(async move {
                match api::delete_task(&session, &task_id).await {
                    Ok(()) => {
                        set_mutation_error.set(String::new());
                        // No optimistic removal: the row disappears once the
                        // refreshed list omits it
                        ctx.reload_tasks();
                    }
                    Err(err) => set_mutation_error.set(format!("Failed to delete task. {err}")),
                }
            });
        }
    };

    // Four distinct list states: loading, failed (banner above, previous
    // contents kept), empty collection, and empty-after-filtering
    let task_list = move || {
        let loaded = store.tasks_loaded().get();
        let failed = store.tasks_error().get().is_some();
        if !loaded {
            if failed {
                ().into_any()
            } else {
                view! {
                    <div class="board-empty">
                        <p>"Loading tasks..."</p>
                    </div>
                }
                .into_any()
            }
        } else if store.tasks().get().is_empty() {
            view! {
                <div class="board-empty">
                    <p>"No tasks found. Create a new task to get started."</p>
                </div>
            }
            .into_any()
        } else if visible.get().is_empty() {
            view! {
                <div class="board-empty">
                    <p>"No tasks match the current filters."</p>
                </div>
            }
            .into_any()
        } else {
            let delete_task = delete_task.clone();
            view! {
                <div class="task-list">
                    <For
                        each=move || visible.get()
                        key=|task| task.id.clone()
                        children=move |task: Task| {
                            let edit_task = task.clone();
                            let delete_task = delete_task.clone();
                            let delete_id = task.id.clone();
                            let updated = (task.updated_at != task.created_at)
                                .then(|| task.updated_at.clone());
                            view! {
                                <div class="task-card">
                                    <div class="task-card-main">
                                        <div class="task-card-head">
                                            <h3>{task.title.clone()}</h3>
                                            <span class=format!(
                                                "status-badge status-{}",
                                                task.status.as_str()
                                            )>
                                                {task.status.label()}
                                            </span>
                                        </div>
                                        {(!task.description.is_empty())
                                            .then(|| view! {
                                                <p class="task-desc">{task.description.clone()}</p>
                                            })}
                                        <div class="task-meta">
                                            <span>"Due: " {format_date(&task.due_date)}</span>
                                            <span>"Created: " {format_date(&task.created_at)}</span>
                                            {updated.map(|at| view! {
                                                <span>"Updated: " {format_date(&at)}</span>
                                            })}
                                        </div>
                                    </div>
                                    <div class="task-card-actions">
                                        <button
                                            class="link-btn"
                                            on:click=move |_| {
                                                set_modal.set(ModalState::Edit(edit_task.clone()))
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| {
                                                delete_task(delete_id.clone())
                                            })
                                        />
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="board">
            <div class="board-head">
                <div>
                    <h2>"Task Management"</h2>
                    <p class="board-subtitle">"View and manage all your tasks"</p>
                </div>
            </div>

            <div class="filter-bar">
                <label>
                    "Filter by Project"
                    <select
                        prop:value=move || project_filter.get().value()
                        on:change=move |ev| {
                            set_project_filter.set(ProjectFilter::from_value(&event_target_value(&ev)))
                        }
                    >
                        <option value="all">"All Projects"</option>
                        <For
                            each=move || store.projects().get()
                            key=|project| project.id.clone()
                            children=|project| {
                                view! {
                                    <option value=project.id.clone()>{project.title.clone()}</option>
                                }
                            }
                        />
                    </select>
                </label>

                <label>
                    "Filter by Status"
                    <select
                        prop:value=move || status_filter.get().value()
                        on:change=move |ev| {
                            set_status_filter.set(StatusFilter::from_value(&event_target_value(&ev)))
                        }
                    >
                        <option value="all">"All Statuses"</option>
                        <option value="todo">"To Do"</option>
                        <option value="in-progress">"In Progress"</option>
                        <option value="done">"Done"</option>
                    </select>
                </label>
            </div>

            <div class="action-bar">
                <Show when=move || !visible.get().is_empty()>
                    <p class="task-count">
                        {move || {
                            let count = visible.get().len();
                            format!("Showing {} {}", count, if count == 1 { "task" } else { "tasks" })
                        }}
                    </p>
                </Show>
                <button class="primary-btn" on:click=move |_| set_modal.set(ModalState::Create)>
                    "Create New Task"
                </button>
            </div>

            // Fetch-failure banner; the previous contents stay on screen below
            {move || store.tasks_error().get().map(|message| view! {
                <div class="error-banner">
                    <p>{message}</p>
                    <button on:click=move |_| { *store.tasks_error().write() = None; }>
                        "Dismiss"
                    </button>
                </div>
            })}

            <Show when=move || !mutation_error.get().is_empty()>
                <p class="form-error">{move || mutation_error.get()}</p>
            </Show>

            {task_list}

            <TaskModal modal=modal set_modal=set_modal />
        </div>
    }
}
