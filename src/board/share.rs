//! Shareable-state codec for deep linking.
//!
//! Filter state is externalized as flat string key/value pairs suitable for
//! embedding in a URL query. Multi-valued dimensions are comma-joined under
//! a single key; an absent key decodes to the unconstrained value.

use super::filter::FilterState;
use crate::api::Status;
use std::collections::BTreeSet;

pub const KEY_SEARCH: &str = "search";
pub const KEY_STATUS: &str = "status";
pub const KEY_ASSIGNEE: &str = "assignee";
pub const KEY_LABELS: &str = "labels";

const SEPARATOR: char = ',';

/// Encode the filter state into flat key/value pairs. Unconstrained
/// dimensions are omitted entirely.
///
pub fn encode(filter: &FilterState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if !filter.search().is_empty() {
        pairs.push((KEY_SEARCH.to_string(), filter.search().to_string()));
    }
    if !filter.statuses().is_empty() {
        let joined = filter
            .statuses()
            .iter()
            .map(Status::as_str)
            .collect::<Vec<_>>()
            .join(&SEPARATOR.to_string());
        pairs.push((KEY_STATUS.to_string(), joined));
    }
    if !filter.assignees().is_empty() {
        pairs.push((KEY_ASSIGNEE.to_string(), join(filter.assignees())));
    }
    if !filter.labels().is_empty() {
        pairs.push((KEY_LABELS.to_string(), join(filter.labels())));
    }
    pairs
}

/// Decode flat key/value pairs back into a filter state. Missing keys leave
/// their dimension unconstrained; empty tokens from trailing or duplicate
/// separators are dropped, as are status tokens outside the fixed enum.
///
pub fn decode<'a, I>(pairs: I) -> FilterState
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut filter = FilterState::new();
    for (key, value) in pairs {
        match key {
            KEY_SEARCH => {
                filter.set_search(value);
            }
            KEY_STATUS => {
                filter.set_statuses(
                    split(value)
                        .filter_map(|token| token.parse::<Status>().ok())
                        .collect(),
                );
            }
            KEY_ASSIGNEE => {
                filter.set_assignees(split(value).map(str::to_string).collect());
            }
            KEY_LABELS => {
                filter.set_labels(split(value).map(str::to_string).collect());
            }
            _ => {}
        }
    }
    filter
}

fn join(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

fn split(value: &str) -> impl Iterator<Item = &str> {
    value.split(SEPARATOR).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_pairs(pairs: &[(String, String)]) -> FilterState {
        decode(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    #[test]
    fn round_trips_constrained_state() {
        let mut filter = FilterState::new();
        filter
            .set_search("auth flow")
            .toggle_status(Status::Todo)
            .toggle_status(Status::InProgress)
            .toggle_assignee("u1")
            .toggle_assignee("u2")
            .toggle_label("bug")
            .toggle_label("ui");

        let pairs = encode(&filter);
        assert_eq!(decode_pairs(&pairs), filter);
    }

    #[test]
    fn round_trips_unconstrained_state() {
        let filter = FilterState::new();
        let pairs = encode(&filter);
        assert!(pairs.is_empty());
        assert_eq!(decode_pairs(&pairs), filter);
    }

    #[test]
    fn encode_omits_empty_dimensions() {
        let mut filter = FilterState::new();
        filter.toggle_label("bug");

        let pairs = encode(&filter);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0], (KEY_LABELS.to_string(), "bug".to_string()));
    }

    #[test]
    fn decode_tolerates_empty_input() {
        let filter = decode(std::iter::empty::<(&str, &str)>());
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn decode_drops_empty_tokens() {
        let filter = decode(vec![(KEY_LABELS, "bug,,ui,"), (KEY_ASSIGNEE, ",")]);
        assert_eq!(filter.labels().len(), 2);
        assert!(filter.labels().contains("bug"));
        assert!(filter.labels().contains("ui"));
        assert!(filter.assignees().is_empty());
    }

    #[test]
    fn decode_drops_unknown_status_tokens() {
        let filter = decode(vec![(KEY_STATUS, "todo,blocked,done")]);
        assert_eq!(filter.statuses().len(), 2);
        assert!(filter.statuses().contains(&Status::Todo));
        assert!(filter.statuses().contains(&Status::Done));
    }

    #[test]
    fn decode_ignores_unknown_keys() {
        let filter = decode(vec![("page", "2"), (KEY_SEARCH, "auth")]);
        assert_eq!(filter.search(), "auth");
        assert!(filter.labels().is_empty());
    }
}
