//! Connectivity and functionality testing for remote MCP servers.
//!
//! The crate exposes two entry points:
//!
//! - [`parse_installation_code`] turns a loosely structured installation code
//!   (typically copied from a marketplace listing) into a [`ServerConfig`].
//! - [`ServerProber::test_server`] runs a connectivity probe followed by a
//!   functionality probe and returns a [`TestResult`].
//!
//! Neither entry point returns an error. Every failure is folded into the
//! returned record so callers only ever render results.

pub mod config;
pub mod installation;
pub mod probe;
pub mod types;

pub use config::{ProbeOverrides, ProbeSettings, SettingsError, ValidationError};
pub use inspector_types::{ConnectionStatus, FunctionalityTest, ServerConfig, ServerInfo, TestResult};
pub use installation::parse_installation_code;
pub use probe::{ServerProber, test_server};
pub use types::{FunctionalityFailure, InspectorError};
