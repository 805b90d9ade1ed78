//! # Expense Common
//!
//! Shared types, error handling and logging for the expense report workspace.
//!
//! Every other crate in the workspace reports failures through [`ReportError`]
//! and exchanges [`ExpenseRow`] / [`AggregateRow`] values between stages.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod macros;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, ReportError};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use types::*;
