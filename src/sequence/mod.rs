//! Lazy, finite sequence generators

/// Breadth-first binary counting string enumeration
pub mod binary;

pub use binary::BinaryCounting;
