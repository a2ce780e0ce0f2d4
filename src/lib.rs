//! Filtering and view-state engine for a developer productivity task
//! board.
//!
//! The crate is a pure client-side derivation layer over the dashboard's
//! JSON REST task API. A [`board::BoardSession`] owns the filter state for
//! one displayed board: it settles rapid search input, projects the
//! server-supported dimensions into listing parameters, narrows the fetched
//! collection by the client-only label dimension, partitions the visible
//! set into columns, and invalidates its cache when a mutation succeeds.
//!
//! ```no_run
//! use taskboard::api::{Status, TaskApi};
//! use taskboard::board::BoardSession;
//! use taskboard::config::Config;
//!
//! # async fn run() -> taskboard::error::AppResult<()> {
//! let mut config = Config::new();
//! config.load(None)?;
//!
//! let api = TaskApi::new(&config.base_url, config.access_token.as_deref());
//! let mut session = BoardSession::new(api);
//! session.filter_mut().toggle_label("bug");
//! session.refresh().await?;
//!
//! for column in session.columns() {
//!     println!("{}: {} tasks", column.title(), column.tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod error;

pub use api::{Status, Task, TaskApi, User};
pub use board::{BoardSession, FilterState};
pub use config::Config;
pub use error::{AppError, AppResult};
