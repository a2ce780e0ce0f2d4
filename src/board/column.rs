//! Stable partition of the visible set into ordered board columns.

use crate::api::{Status, Task};

/// A status-identified grouping of tasks shown as a vertical lane. Derived
/// from the post-filter collection, never stored.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BoardColumn {
    pub status: Status,
    pub tasks: Vec<Task>,
}

impl BoardColumn {
    /// Returns the human-readable column title.
    ///
    pub fn title(&self) -> &'static str {
        self.status.title()
    }
}

/// Partition tasks into one column per status in the fixed board order,
/// preserving the relative order in which tasks were returned. No secondary
/// sort is imposed.
///
pub fn partition_columns(tasks: &[Task]) -> Vec<BoardColumn> {
    Status::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            tasks: tasks
                .iter()
                .filter(|task| task.status == status)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: Status) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status,
            assignee: None,
            labels: Default::default(),
            position: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn one_column_per_status_in_board_order() {
        let columns = partition_columns(&[]);
        assert_eq!(columns.len(), 5);
        let statuses: Vec<_> = columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, Status::ALL.to_vec());
        assert!(columns.iter().all(|c| c.tasks.is_empty()));
    }

    #[test]
    fn tasks_land_only_in_their_status_column() {
        let tasks = vec![
            task("1", Status::Todo),
            task("2", Status::Done),
            task("3", Status::Todo),
        ];
        let columns = partition_columns(&tasks);

        for column in &columns {
            let expected = if column.status == Status::Todo {
                vec!["1", "3"]
            } else if column.status == Status::Done {
                vec!["2"]
            } else {
                vec![]
            };
            let ids: Vec<_> = column.tasks.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn partition_conserves_task_count() {
        let tasks: Vec<Task> = Status::ALL
            .iter()
            .cycle()
            .take(13)
            .enumerate()
            .map(|(i, &status)| task(&i.to_string(), status))
            .collect();

        let columns = partition_columns(&tasks);
        let total: usize = columns.iter().map(|c| c.tasks.len()).sum();
        assert_eq!(total, tasks.len());
    }

    #[test]
    fn preserves_source_order_within_columns() {
        let tasks = vec![
            task("z", Status::InReview),
            task("a", Status::InReview),
            task("m", Status::InReview),
        ];
        let columns = partition_columns(&tasks);
        let review = columns
            .iter()
            .find(|c| c.status == Status::InReview)
            .unwrap();
        let ids: Vec<_> = review.tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
