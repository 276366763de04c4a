//! Task Modal Component
//!
//! Create/edit form for tasks. The project reference is a required
//! selection fed from the project cache; on a failed submit the modal
//! stays open and the entered values are kept.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TaskPayload};
use crate::context::AppContext;
use crate::modal::{ModalState, TaskForm};
use crate::models::{Task, TaskStatus};
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskModal(
    modal: ReadSignal<ModalState<Task>>,
    set_modal: WriteSignal<ModalState<Task>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Todo);
    let (due_date, set_due_date) = signal(String::new());
    let (project_id, set_project_id) = signal(String::new());
    let (error, set_error) = signal(String::new());

    // Initialize the form whenever the modal opens: blank for create,
    // prefilled (with the due date cut to a calendar date) for edit
    Effect::new(move |_| {
        let form = match modal.get() {
            ModalState::Closed => return,
            ModalState::Create => TaskForm::blank(),
            ModalState::Edit(ref task) => TaskForm::for_task(task),
        };
        set_title.set(form.title);
        set_description.set(form.description);
        set_status.set(form.status);
        set_due_date.set(form.due_date);
        set_project_id.set(form.project_id);
        set_error.set(String::new());
    });

    let close = move |_| set_modal.set(ModalState::Closed);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = TaskForm {
            title: title.get(),
            description: description.get(),
            status: status.get(),
            due_date: due_date.get(),
            project_id: project_id.get(),
        };
        if !form.is_complete() {
            return;
        }
        let session = session.clone();
        spawn_local(async move {
            let payload = TaskPayload {
                title: form.title.trim(),
                description: form.description.trim(),
                status: form.status,
                due_date: &form.due_date,
                project_id: &form.project_id,
            };
            let result = match modal.get_untracked() {
                ModalState::Edit(task) => {
                    api::update_task(&session, &task.id, &payload).await.map(|_| ())
                }
                _ => api::create_task(&session, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    ctx.reload_tasks();
                    set_modal.set(ModalState::Closed);
                }
                // Stay open, keep the entered values
                Err(err) => set_error.set(err.to_string()),
            }
        });
    };

    view! {
        <Show when=move || modal.get().is_open()>
            <div class="modal-overlay">
                <div class="modal">
                    <div class="modal-head">
                        <h3>
                            {move || if modal.get().is_edit() { "Update Task" } else { "Create Task" }}
                        </h3>
                        <button class="modal-close" on:click=close>"×"</button>
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error">{move || error.get()}</p>
                    </Show>

                    <form on:submit=on_submit.clone()>
                        <label>
                            "Project"
                            <select
                                required
                                prop:value=move || project_id.get()
                                on:change=move |ev| set_project_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select Project"</option>
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
                            "Title"
                            <input
                                type="text"
                                required
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                        </label>

                        <label>
                            "Description"
                            <textarea
                                required
                                rows="3"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <label>
                            "Status"
                            <select
                                required
                                prop:value=move || status.get().as_str().to_string()
                                on:change=move |ev| {
                                    set_status.set(TaskStatus::from_value(&event_target_value(&ev)))
                                }
                            >
                                <option value="todo">"To Do"</option>
                                <option value="in-progress">"In Progress"</option>
                                <option value="done">"Done"</option>
                            </select>
                        </label>

                        <label>
                            "Due Date"
                            <input
                                type="date"
                                required
                                prop:value=move || due_date.get()
                                on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            />
                        </label>

                        <div class="modal-actions">
                            <button type="button" on:click=close>"Cancel"</button>
                            <button type="submit" class="primary-btn">
                                {move || if modal.get().is_edit() { "Update" } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
