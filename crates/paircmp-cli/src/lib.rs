//! # paircmp-cli
//!
//! Report presenters, output formatting, terminal styling, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{JsonPresenter, ReportPresenter, TextPresenter};
