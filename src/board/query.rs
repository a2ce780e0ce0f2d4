//! Projection of filter state into remote listing parameters.

use super::filter::FilterState;
use crate::api::Status;

/// Build the query parameters for the remote task-listing endpoint from the
/// given filter state. Only the dimensions the endpoint supports are
/// forwarded: settled search text, status selection, and assignee
/// selection, each omitted when unconstrained.
///
/// The label selection is deliberately not forwarded. The listing endpoint
/// has no label predicate, so label narrowing happens client-side on the
/// fetched collection.
///
pub fn list_params(filter: &FilterState) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if !filter.search().is_empty() {
        params.push(("search".to_string(), filter.search().to_string()));
    }
    if !filter.statuses().is_empty() {
        let joined = filter
            .statuses()
            .iter()
            .map(Status::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push(("status".to_string(), joined));
    }
    if !filter.assignees().is_empty() {
        let joined = filter
            .assignees()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(",");
        params.push(("assignee".to_string(), joined));
    }
    params
}
