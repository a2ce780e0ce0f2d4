use chrono::{DateTime, Utc};
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Defines the fixed workflow statuses, in board column order.
///
#[derive(Clone, Copy, Debug, Dummy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Backlog,
    Todo,
    InProgress,
    InReview,
    Done,
}

impl Status {
    /// Fixed column order for the board.
    pub const ALL: [Status; 5] = [
        Status::Backlog,
        Status::Todo,
        Status::InProgress,
        Status::InReview,
        Status::Done,
    ];

    /// Returns the wire/display name for the status.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "backlog",
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::InReview => "in_review",
            Status::Done => "done",
        }
    }

    /// Returns the human-readable column title.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::InReview => "In Review",
            Status::Done => "Done",
        }
    }

    /// Returns the next status along the column order, or `None` at `Done`.
    ///
    pub fn next(&self) -> Option<Status> {
        let index = Status::ALL.iter().position(|s| s == self)?;
        Status::ALL.get(index + 1).copied()
    }

    /// Returns the previous status along the column order, or `None` at
    /// `Backlog`.
    ///
    pub fn previous(&self) -> Option<Status> {
        let index = Status::ALL.iter().position(|s| s == self)?;
        index.checked_sub(1).and_then(|i| Status::ALL.get(i)).copied()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for status tokens outside the fixed enum.
#[derive(Debug, thiserror::Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Status::Backlog),
            "todo" => Ok(Status::Todo),
            "in_progress" => Ok(Status::InProgress),
            "in_review" => Ok(Status::InReview),
            "done" => Ok(Status::Done),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Defines user data structure.
///
#[derive(Clone, Debug, Dummy, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Defines task data structure.
///
/// Labels are kept as an ordered set so duplicate values cannot occur and
/// superset checks stay cheap.
#[derive(Clone, Debug, Dummy, Deserialize, Serialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(default)]
    pub labels: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Defines the fields for task creation.
///
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    pub labels: BTreeSet<String>,
}

impl NewTask {
    /// Returns a new task payload with the given title and initial status.
    ///
    pub fn new(title: &str, status: Status) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: None,
            status,
            labels: BTreeSet::new(),
        }
    }
}

/// Defines a partial update; only set fields are sent.
///
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeSet<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}
