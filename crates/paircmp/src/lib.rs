//! paircmp library: application logic for the paired comparison tool.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
