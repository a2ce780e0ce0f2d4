//! Task board filtering and view-state engine.
//!
//! This module contains the board's state-derivation core:
//! - `FilterState` holding all filter dimensions
//! - `Debouncer` settling rapid search input
//! - the shareable-state codec for deep linking
//! - the remote query projection
//! - facet extraction, visibility filtering, and column partitioning
//! - `BoardSession` coordinating fetches, mutations, and cache invalidation

mod column;
mod debounce;
mod error;
mod facet;
mod filter;
mod query;
mod session;
mod share;
mod visibility;

pub use column::{partition_columns, BoardColumn};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use error::BoardError;
pub use facet::{assignee_facets, label_facets, Facet};
pub use filter::FilterState;
pub use query::list_params;
pub use session::BoardSession;
pub use share::{decode, encode, KEY_ASSIGNEE, KEY_LABELS, KEY_SEARCH, KEY_STATUS};
pub use visibility::visible_tasks;
