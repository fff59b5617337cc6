//! Task list operations.
//!
//! IDs are 1-based positions in the current list. Nothing here touches the
//! filesystem: callers load the document, run one operation and persist the
//! result only when it succeeded.

use crate::error::TaskError;
use crate::model::{SettingsDocument, Task};

/// Convert a display ID to a list index.
fn position(tasks: &[Task], id: usize) -> Result<usize, TaskError> {
    if tasks.is_empty() {
        return Err(TaskError::NoTasks);
    }
    if id == 0 || id > tasks.len() {
        return Err(TaskError::InvalidId(id));
    }
    Ok(id - 1)
}

/// Append an undone task and return its display ID.
pub fn add(doc: &mut SettingsDocument, name: &str) -> usize {
    doc.tasks.push(Task::new(name));
    tracing::info!(id = doc.tasks.len(), "added task");
    doc.tasks.len()
}

pub fn done(doc: &mut SettingsDocument, id: usize) -> Result<(), TaskError> {
    let idx = position(&doc.tasks, id)?;
    if doc.tasks[idx].done {
        return Err(TaskError::NoUpdate);
    }
    // Unreachable while the target is pending; kept so the refusal order
    // stays NoUpdate then AlreadyComplete.
    if doc.all_done() {
        return Err(TaskError::AlreadyComplete);
    }
    doc.tasks[idx].done = true;
    tracing::info!(id, "marked task done");
    Ok(())
}

pub fn undone(doc: &mut SettingsDocument, id: usize) -> Result<(), TaskError> {
    let idx = position(&doc.tasks, id)?;
    if !doc.tasks[idx].done {
        return Err(TaskError::NoUpdate);
    }
    doc.tasks[idx].done = false;
    tracing::info!(id, "marked task undone");
    Ok(())
}

/// Remove a task, returning it. Later IDs shift down by one.
pub fn delete(doc: &mut SettingsDocument, id: usize) -> Result<Task, TaskError> {
    let idx = position(&doc.tasks, id)?;
    let task = doc.tasks.remove(idx);
    tracing::info!(id, "deleted task");
    Ok(task)
}

/// Rename a task and return its previous name.
pub fn edit(doc: &mut SettingsDocument, id: usize, name: &str) -> Result<String, TaskError> {
    let idx = position(&doc.tasks, id)?;
    let old = std::mem::replace(&mut doc.tasks[idx].name, name.to_string());
    tracing::info!(id, "edited task");
    Ok(old)
}

/// Take the task at `from` out of the list and reinsert it at `to`.
pub fn move_task(doc: &mut SettingsDocument, from: usize, to: usize) -> Result<(), TaskError> {
    let (from_idx, to_idx) = pair(&doc.tasks, from, to)?;
    let task = doc.tasks.remove(from_idx);
    doc.tasks.insert(to_idx, task);
    tracing::info!(from, to, "moved task");
    Ok(())
}

/// Exchange two tasks.
pub fn swap(doc: &mut SettingsDocument, a: usize, b: usize) -> Result<(), TaskError> {
    let (a_idx, b_idx) = pair(&doc.tasks, a, b)?;
    doc.tasks.swap(a_idx, b_idx);
    tracing::info!(a, b, "swapped tasks");
    Ok(())
}

// Equal IDs are a no-op even when out of range.
fn pair(tasks: &[Task], a: usize, b: usize) -> Result<(usize, usize), TaskError> {
    if tasks.is_empty() {
        return Err(TaskError::NoTasks);
    }
    if a == b {
        return Err(TaskError::NoUpdate);
    }
    Ok((position(tasks, a)?, position(tasks, b)?))
}

/// Drop every task. Returns how many were removed.
pub fn clear(doc: &mut SettingsDocument) -> usize {
    let removed = doc.tasks.len();
    doc.tasks.clear();
    tracing::info!(removed, "cleared task list");
    removed
}

/// Keep only undone tasks. Returns how many were removed.
pub fn clean(doc: &mut SettingsDocument) -> usize {
    let before = doc.tasks.len();
    doc.tasks = doc.undone_tasks();
    let removed = before - doc.tasks.len();
    tracing::info!(removed, "cleaned done tasks");
    removed
}
