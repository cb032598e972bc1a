//! Core types for server probing.

pub mod errors;

pub use errors::{FunctionalityFailure, InspectorError};
