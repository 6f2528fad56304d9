//! A terminal to-do list.
//!
//! The core is [`ops::task_store::TaskStore`], the sole owner and mutator of
//! the task list and theme, persisted through [`io::storage::Storage`] after
//! every change. [`ops::view`] derives the filtered list and counts. The
//! [`tui`] module is a thin presentation layer over both.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
