//! Client-side label narrowing over the server-returned collection.
//!
//! The remote listing endpoint has no label predicate, so the label
//! dimension is applied here after the fetch. Selection uses AND semantics:
//! a task must carry every selected label to stay visible. A task with no
//! labels is therefore never visible while any label is selected.

use crate::api::Task;
use std::collections::BTreeSet;

/// Returns the subset of tasks to display under the given label selection.
/// An empty selection returns the input unchanged.
///
pub fn visible_tasks(tasks: &[Task], selected_labels: &BTreeSet<String>) -> Vec<Task> {
    if selected_labels.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|task| selected_labels.iter().all(|label| task.labels.contains(label)))
        .cloned()
        .collect()
}
