//! Board view session: read-through task cache and mutation coordination.
//!
//! The session owns the filter state for one displayed board, fetches tasks
//! through the remote API, and derives the visible set, columns, and facets
//! from the cached collection. The cache is keyed by the full filter tuple:
//! a fetch that resolves for a since-changed filter simply no longer matches
//! the current key and is discarded on the next read, never merged.

use super::column::{partition_columns, BoardColumn};
use super::debounce::{Debouncer, SEARCH_DEBOUNCE};
use super::error::BoardError;
use super::facet::{assignee_facets, label_facets, Facet};
use super::filter::FilterState;
use super::query::list_params;
use super::{share, visibility};
use crate::api::{NewTask, Status, Task, TaskApi, TaskPatch, User};
use log::*;

/// Owns the filter state and task cache for one displayed board.
///
pub struct BoardSession {
    api: TaskApi,
    filter: FilterState,
    search_input: String,
    search_debouncer: Debouncer<String>,
    cache: Option<(FilterState, Vec<Task>)>,
}

impl BoardSession {
    /// Returns a new session over the given API with unconstrained filters.
    ///
    pub fn new(api: TaskApi) -> BoardSession {
        BoardSession {
            api,
            filter: FilterState::new(),
            search_input: String::new(),
            search_debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            cache: None,
        }
    }

    /// Returns the current filter state.
    ///
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Returns mutable access to the filter state. The cache stays keyed by
    /// the previous value, so the next read notices the change.
    ///
    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    /// Resets every filter dimension and discards any pending or
    /// already-settled search value, so nothing typed before the clear can
    /// leak back into the unconstrained state.
    ///
    pub fn clear_filters(&mut self) -> &mut Self {
        self.filter.clear();
        self.search_input.clear();
        self.search_debouncer.reset();
        self
    }

    /// Returns the raw, in-flight search input for immediate display.
    ///
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Record a keystroke-level search change. The raw value is readable
    /// immediately; the filter state only picks it up once it settles.
    ///
    pub fn set_search_input(&mut self, text: &str) -> &mut Self {
        self.search_input = text.to_string();
        self.search_debouncer.push(self.search_input.clone());
        self
    }

    /// Fold the most recent settled search value into the filter state.
    /// Returns whether the filter changed.
    ///
    pub fn apply_settled_search(&mut self) -> bool {
        match self.search_debouncer.try_settled() {
            Some(settled) if settled != self.filter.search() => {
                debug!("Search input settled to '{}'.", settled);
                self.filter.set_search(settled);
                true
            }
            _ => false,
        }
    }

    /// Externalize the filter state as flat key/value pairs for deep
    /// linking.
    ///
    pub fn share_state(&self) -> Vec<(String, String)> {
        share::encode(&self.filter)
    }

    /// Restore the filter state from a shared representation. Missing keys
    /// leave their dimension unconstrained.
    ///
    pub fn restore_share_state<'a, I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.filter = share::decode(pairs);
        self.search_input = self.filter.search().to_string();
        self.search_debouncer.reset();
        self
    }

    /// Check whether the cached collection no longer matches the current
    /// filter and a refresh is due.
    ///
    pub fn needs_refresh(&self) -> bool {
        match &self.cache {
            Some((key, _)) => key != &self.filter,
            None => true,
        }
    }

    /// Read-through fetch of the task collection for the current filter.
    /// On failure the prior cache is left untouched so the previous state
    /// stays visible.
    ///
    pub async fn refresh(&mut self) -> Result<&[Task], BoardError> {
        let key = self.filter.clone();
        info!("Fetching tasks for current board filters...");
        let tasks = self.api.list(&list_params(&key)).await?;
        info!("Received {} tasks.", tasks.len());
        self.cache = Some((key, tasks));
        Ok(self.tasks())
    }

    /// Returns the cached server-returned collection, or empty before the
    /// first successful fetch. Prior results remain visible while a newer
    /// fetch is outstanding or failed.
    ///
    pub fn tasks(&self) -> &[Task] {
        self.cache
            .as_ref()
            .map(|(_, tasks)| tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the visible set: the cached collection narrowed by the
    /// client-only label dimension.
    ///
    pub fn visible(&self) -> Vec<Task> {
        visibility::visible_tasks(self.tasks(), self.filter.labels())
    }

    /// Returns the visible set partitioned into ordered board columns.
    ///
    pub fn columns(&self) -> Vec<BoardColumn> {
        partition_columns(&self.visible())
    }

    /// Returns the label choices present in the loaded collection.
    ///
    pub fn label_facets(&self) -> Vec<String> {
        label_facets(self.tasks())
    }

    /// Returns the assignee choices present in the loaded collection.
    ///
    pub fn assignee_facets(&self) -> Vec<Facet> {
        assignee_facets(self.tasks())
    }

    /// Drop the cached collection so the next read fetches fresh data.
    ///
    pub fn invalidate(&mut self) -> &mut Self {
        self.cache = None;
        self
    }

    /// Create a task with the given title and initial status. An empty or
    /// whitespace-only title is rejected before any request is issued.
    ///
    pub async fn create(&mut self, title: &str, status: Status) -> Result<Task, BoardError> {
        let title = title.trim();
        if title.is_empty() {
            warn!("Rejected task creation with empty title.");
            return Err(BoardError::EmptyTitle);
        }
        info!("Creating task '{}' in column '{}'...", title, status);
        let task = self.api.create(&NewTask::new(title, status)).await?;
        info!("Task '{}' created with id {}.", task.title, task.id);
        self.invalidate();
        Ok(task)
    }

    /// Move a task to an arbitrary status.
    ///
    pub async fn move_to(&mut self, id: &str, status: Status) -> Result<Task, BoardError> {
        info!("Moving task {} to column '{}'...", id, status);
        let task = self.api.move_task(id, status, None).await?;
        self.invalidate();
        Ok(task)
    }

    /// Move a task one step right along the column order, as triggered by
    /// the adjacent-column control. Returns `None` without issuing a request
    /// when the task is already in the last column.
    ///
    pub async fn move_right(&mut self, id: &str) -> Result<Option<Task>, BoardError> {
        match self.loaded_status(id)?.next() {
            Some(next) => Ok(Some(self.move_to(id, next).await?)),
            None => Ok(None),
        }
    }

    /// Move a task one step left along the column order. Returns `None`
    /// without issuing a request when the task is already in the first
    /// column.
    ///
    pub async fn move_left(&mut self, id: &str) -> Result<Option<Task>, BoardError> {
        match self.loaded_status(id)?.previous() {
            Some(previous) => Ok(Some(self.move_to(id, previous).await?)),
            None => Ok(None),
        }
    }

    /// Delete a task.
    ///
    pub async fn delete(&mut self, id: &str) -> Result<(), BoardError> {
        info!("Deleting task {}...", id);
        self.api.delete(id).await?;
        info!("Task {} deleted.", id);
        self.invalidate();
        Ok(())
    }

    /// Apply a partial update to a task.
    ///
    pub async fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<Task, BoardError> {
        info!("Updating task {}...", id);
        let task = self.api.update(id, patch).await?;
        self.invalidate();
        Ok(task)
    }

    /// Assign a task to a user.
    ///
    pub async fn assign(&mut self, id: &str, assignee_id: &str) -> Result<Task, BoardError> {
        info!("Assigning task {} to user {}...", id, assignee_id);
        let task = self.api.assign(id, assignee_id).await?;
        self.invalidate();
        Ok(task)
    }

    /// Returns the users known to the server, for the assignee filter
    /// control when a server-side list is available.
    ///
    pub async fn users(&self) -> Result<Vec<User>, BoardError> {
        Ok(self.api.list_users().await?)
    }

    fn loaded_status(&self, id: &str) -> Result<Status, BoardError> {
        self.tasks()
            .iter()
            .find(|task| task.id == id)
            .map(|task| task.status)
            .ok_or_else(|| BoardError::UnknownTask { id: id.to_string() })
    }
}
