//! Workspace-level reference tests for paircmp. See `tests/`.
