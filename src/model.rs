use serde::{Deserialize, Serialize};

fn default_show_task_progress() -> bool {
    true
}

fn default_show_quotes() -> bool {
    true
}

/// Everything `pls` persists: preferences plus the ordered task list.
///
/// Missing keys fall back to their defaults so a hand-edited or older file
/// still loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub initial_setup_done: bool,
    #[serde(default = "default_show_task_progress")]
    pub show_task_progress: bool,
    #[serde(default = "default_show_quotes")]
    pub show_quotes: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            initial_setup_done: false,
            show_task_progress: default_show_task_progress(),
            show_quotes: default_show_quotes(),
            tasks: Vec::new(),
        }
    }
}

impl SettingsDocument {
    /// True when every task is done. An empty list counts as done.
    pub fn all_done(&self) -> bool {
        self.tasks.iter().all(|t| t.done)
    }

    pub fn undone_tasks(&self) -> Vec<Task> {
        self.tasks.iter().filter(|t| !t.done).cloned().collect()
    }

    pub fn count_done(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn count_undone(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
        }
    }
}
