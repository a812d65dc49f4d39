//! Input/output operations and error handling

/// Command-line interface and result printing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for algorithm operations
pub mod error;
