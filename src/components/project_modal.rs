//! Project Modal Component
//!
//! Create/edit form for projects. On a failed submit the modal stays open
//! and the entered values are kept.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ProjectPayload};
use crate::context::AppContext;
use crate::modal::{ModalState, ProjectForm};
use crate::models::{Project, ProjectStatus};
use crate::session::use_session;

#[component]
pub fn ProjectModal(
    modal: ReadSignal<ModalState<Project>>,
    set_modal: WriteSignal<ModalState<Project>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(ProjectStatus::Active);
    let (error, set_error) = signal(String::new());

    // Initialize the form whenever the modal opens: blank for create,
    // prefilled from the entity for edit
    Effect::new(move |_| {
        let form = match modal.get() {
            ModalState::Closed => return,
            ModalState::Create => ProjectForm::blank(),
            ModalState::Edit(ref project) => ProjectForm::for_project(project),
        };
        set_title.set(form.title);
        set_description.set(form.description);
        set_status.set(form.status);
        set_error.set(String::new());
    });

    let close = move |_| set_modal.set(ModalState::Closed);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ProjectForm {
            title: title.get(),
            description: description.get(),
            status: status.get(),
        };
        if !form.is_complete() {
            return;
        }
        let session = session.clone();
        spawn_local(async move {
            let payload = ProjectPayload {
                title: form.title.trim(),
                description: form.description.trim(),
                status: form.status,
            };
            let result = match modal.get_untracked() {
                ModalState::Edit(project) => {
                    api::update_project(&session, &project.id, &payload).await.map(|_| ())
                }
                _ => api::create_project(&session, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    ctx.reload_projects();
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
                            {move || if modal.get().is_edit() { "Edit Project" } else { "New Project" }}
                        </h3>
                        <button class="modal-close" on:click=close>"×"</button>
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <p class="form-error">{move || error.get()}</p>
                    </Show>

                    <form on:submit=on_submit.clone()>
                        <label>
                            "Project Title *"
                            <input
                                type="text"
                                required
                                placeholder="Enter project title"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                        </label>

                        <label>
                            "Description *"
                            <textarea
                                required
                                rows="3"
                                placeholder="Describe your project"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <label>
                            "Status"
                            <select
                                prop:value=move || status.get().as_str().to_string()
                                on:change=move |ev| {
                                    set_status.set(ProjectStatus::from_value(&event_target_value(&ev)))
                                }
                            >
                                <option value="active">"Active"</option>
                                <option value="completed">"Completed"</option>
                            </select>
                        </label>

                        <div class="modal-actions">
                            <button type="button" on:click=close>"Cancel"</button>
                            <button type="submit" class="primary-btn">
                                {move || if modal.get().is_edit() { "Update Project" } else { "Create Project" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
