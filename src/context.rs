//! Application Context
//!
//! Navigation and reload signals provided via the Leptos Context API.

use leptos::prelude::*;

/// Screens of the application
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
    /// Task list, optionally scoped to one project on entry
    Tasks { project: Option<String> },
}

impl Screen {
    /// Screens that require an established session
    pub fn is_protected(&self) -> bool {
        matches!(self, Screen::Dashboard | Screen::Tasks { .. })
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Trigger to reload projects from the server - read
    pub projects_reload: ReadSignal<u32>,
    set_projects_reload: WriteSignal<u32>,
    /// Trigger to reload tasks from the server - read
    pub tasks_reload: ReadSignal<u32>,
    set_tasks_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        projects_reload: (ReadSignal<u32>, WriteSignal<u32>),
        tasks_reload: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            projects_reload: projects_reload.0,
            set_projects_reload: projects_reload.1,
            tasks_reload: tasks_reload.0,
            set_tasks_reload: tasks_reload.1,
        }
    }

    /// Switch screens
    pub fn navigate(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Trigger a reload of the project collection
    pub fn reload_projects(&self) {
        self.set_projects_reload.update(|v| *v += 1);
    }

    /// Trigger a reload of the task collection
    pub fn reload_tasks(&self) {
        self.set_tasks_reload.update(|v| *v += 1);
    }
}
