//! Multi-dimensional filter state for the task board.

use crate::api::Status;
use std::collections::BTreeSet;

/// Houses the current value of every filter dimension. An empty set or
/// string means "no constraint on this dimension", never "match nothing".
///
/// Compared by value: setting a dimension to its current value leaves the
/// state equal, so downstream consumers keyed on the full state see no
/// change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    statuses: BTreeSet<Status>,
    assignees: BTreeSet<String>,
    labels: BTreeSet<String>,
}

impl FilterState {
    /// Returns a new, fully-unconstrained filter state.
    ///
    pub fn new() -> FilterState {
        FilterState::default()
    }

    /// Returns the settled search term.
    ///
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sets the settled search term.
    ///
    pub fn set_search(&mut self, search: impl Into<String>) -> &mut Self {
        self.search = search.into();
        self
    }

    /// Returns the selected statuses.
    ///
    pub fn statuses(&self) -> &BTreeSet<Status> {
        &self.statuses
    }

    /// Replaces the status selection.
    ///
    pub fn set_statuses(&mut self, statuses: BTreeSet<Status>) -> &mut Self {
        self.statuses = statuses;
        self
    }

    /// Adds or removes a status from the selection.
    ///
    pub fn toggle_status(&mut self, status: Status) -> &mut Self {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
        self
    }

    /// Returns the selected assignee ids.
    ///
    pub fn assignees(&self) -> &BTreeSet<String> {
        &self.assignees
    }

    /// Replaces the assignee selection.
    ///
    pub fn set_assignees(&mut self, assignees: BTreeSet<String>) -> &mut Self {
        self.assignees = assignees;
        self
    }

    /// Adds or removes an assignee id from the selection.
    ///
    pub fn toggle_assignee(&mut self, assignee_id: &str) -> &mut Self {
        if !self.assignees.remove(assignee_id) {
            self.assignees.insert(assignee_id.to_string());
        }
        self
    }

    /// Returns the selected labels.
    ///
    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    /// Replaces the label selection.
    ///
    pub fn set_labels(&mut self, labels: BTreeSet<String>) -> &mut Self {
        self.labels = labels;
        self
    }

    /// Adds or removes a label from the selection.
    ///
    pub fn toggle_label(&mut self, label: &str) -> &mut Self {
        if !self.labels.remove(label) {
            self.labels.insert(label.to_string());
        }
        self
    }

    /// Resets every dimension to its unconstrained value. Idempotent.
    ///
    pub fn clear(&mut self) -> &mut Self {
        self.search.clear();
        self.statuses.clear();
        self.assignees.clear();
        self.labels.clear();
        self
    }

    /// Check whether no dimension constrains the result set.
    ///
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.statuses.is_empty()
            && self.assignees.is_empty()
            && self.labels.is_empty()
    }
}
