//! Algorithm constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum accepted weight sequence length
pub const MAX_SEQUENCE_LENGTH: usize = 100_000;

// The queue holds roughly one pending string per emitted string
/// Maximum binary strings a single enumeration may produce
pub const MAX_ENUMERATION_COUNT: usize = 1_000_000;

// Default values for configurable parameters
/// Default number of binary strings emitted by the CLI
pub const DEFAULT_ENUMERATION_COUNT: usize = 5;
