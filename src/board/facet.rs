//! Facet extraction for filter control population.

use crate::api::Task;
use std::collections::BTreeSet;

/// A distinct (id, display name) pair observed across the loaded task
/// collection, used to populate one filter control's choices.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facet {
    pub id: String,
    pub name: String,
}

/// Returns the distinct labels present across all tasks, sorted
/// lexicographically for stable control rendering.
///
pub fn label_facets(tasks: &[Task]) -> Vec<String> {
    let mut labels = BTreeSet::new();
    for task in tasks {
        labels.extend(task.labels.iter().cloned());
    }
    labels.into_iter().collect()
}

/// Returns the distinct assignees present across all tasks, deduplicated by
/// id and kept in first-seen order. Identity alone implies no total order,
/// so none is imposed.
///
pub fn assignee_facets(tasks: &[Task]) -> Vec<Facet> {
    let mut seen = BTreeSet::new();
    let mut facets = Vec::new();
    for task in tasks {
        if let Some(assignee) = &task.assignee {
            if seen.insert(assignee.id.clone()) {
                facets.push(Facet {
                    id: assignee.id.clone(),
                    name: assignee.username.clone(),
                });
            }
        }
    }
    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Status, User};
    use std::collections::BTreeSet;

    fn task(id: &str, labels: &[&str], assignee: Option<(&str, &str)>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status: Status::Todo,
            assignee: assignee.map(|(id, username)| User {
                id: id.to_string(),
                username: username.to_string(),
                email: None,
            }),
            labels: labels.iter().map(|l| l.to_string()).collect::<BTreeSet<_>>(),
            position: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn labels_are_deduplicated_union_sorted() {
        let tasks = vec![
            task("1", &["b", "a"], None),
            task("2", &["c", "b"], None),
            task("3", &[], None),
        ];
        assert_eq!(label_facets(&tasks), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_labels_yields_empty_facet() {
        let tasks = vec![task("1", &[], None), task("2", &[], None)];
        assert!(label_facets(&tasks).is_empty());
    }

    #[test]
    fn assignees_keep_first_seen_order() {
        let tasks = vec![
            task("1", &[], Some(("u2", "beth"))),
            task("2", &[], None),
            task("3", &[], Some(("u1", "ada"))),
            task("4", &[], Some(("u2", "beth"))),
        ];
        let facets = assignee_facets(&tasks);
        assert_eq!(facets.len(), 2);
        assert_eq!(facets[0].id, "u2");
        assert_eq!(facets[0].name, "beth");
        assert_eq!(facets[1].id, "u1");
    }

    #[test]
    fn assignees_dedup_keeps_one_display_name() {
        let tasks = vec![
            task("1", &[], Some(("u1", "ada"))),
            task("2", &[], Some(("u1", "ada.l"))),
        ];
        let facets = assignee_facets(&tasks);
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].name, "ada");
    }
}
