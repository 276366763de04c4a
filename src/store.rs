//! Resource Cache
//!
//! Full-replace, in-memory copies of the server collections, with
//! field-level reactivity via reactive_stores. Collections keep the
//! server-returned order; the client never re-sorts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::models::{Project, Task};
use crate::session::Session;

/// Cached server collections plus per-collection load state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Projects in server-returned order
    pub projects: Vec<Project>,
    /// Tasks in server-returned order
    pub tasks: Vec<Task>,
    /// Set once the first project snapshot has arrived
    pub projects_loaded: bool,
    /// Set once the first task snapshot has arrived
    pub tasks_loaded: bool,
    /// Collection-scoped fetch error; dismissible banner
    pub projects_error: Option<String>,
    /// Collection-scoped fetch error; dismissible banner
    pub tasks_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the project cache with the latest server snapshot.
///
/// This is the only write path into `projects`: mutations never patch the
/// cache, they bump the reload trigger and land here. A failed fetch
/// leaves the previous contents in place and raises the collection's
/// error flag. Overlapping refreshes are not cancelled or de-duplicated;
/// the last response to arrive wins.
pub async fn refresh_projects(store: AppStore, session: Session) {
    match api::list_projects(&session).await {
        Ok(projects) => {
            web_sys::console::log_1(&format!("loaded {} projects", projects.len()).into());
            *store.projects().write() = projects;
            *store.projects_loaded().write() = true;
            *store.projects_error().write() = None;
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("project refresh failed: {err}").into());
            *store.projects_error().write() = Some(format!("Failed to load projects. {err}"));
        }
    }
}

/// Replace the task cache with the latest server snapshot. Same policy as
/// [`refresh_projects`].
pub async fn refresh_tasks(store: AppStore, session: Session) {
    match api::list_tasks(&session).await {
        Ok(tasks) => {
            web_sys::console::log_1(&format!("loaded {} tasks", tasks.len()).into());
            *store.tasks().write() = tasks;
            *store.tasks_loaded().write() = true;
            *store.tasks_error().write() = None;
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("task refresh failed: {err}").into());
            *store.tasks_error().write() = Some(format!("Failed to load tasks. {err}"));
        }
    }
}
