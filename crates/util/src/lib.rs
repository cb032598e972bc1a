//! Utility helpers shared by the MCP Inspector crates.

pub mod http;
pub mod path_processing;
pub mod text_processing;

pub use http::{join_endpoint, normalize_server_url};
pub use path_processing::expand_tilde;
pub use text_processing::{redact_json, redact_sensitive, redact_sensitive_with};
