//! Dynamic search table for student records.
//!
//! This crate provides:
//! - [`SearchTable`]: an unbalanced binary search tree keyed by a unique integer, with
//!   insertion, instrumented search, successor-based deletion and in-order traversal.
//! - [`Record`]: the student record stored in the table.
//! - [`Session`]: the interactive menu used by the `searchtable` binary.
//!
//! The source records the table starts from live in [`seed`]; command-line options and
//! logging setup for the binary live in [`options`] and [`logger`].

pub mod logger;
pub mod options;
pub mod record;
pub mod render;
pub mod search_tree;
pub mod seed;
pub mod session;
pub mod table;

pub use record::{Key, Record, COLUMN_NAMES};
pub use render::render_records;
pub use search_tree::{Iter, Search, SearchTable, TableState};
pub use seed::SeedError;
pub use session::{Flow, Session};
pub use table::{TableError, TableResult};
