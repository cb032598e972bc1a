//! Shared data model for the MCP Inspector.
//!
//! These types cross every crate boundary: the installation code parser
//! produces a [`ServerConfig`], the prober consumes it and produces a
//! [`TestResult`], and the front end renders or serializes that result.
//! Wire names are camelCase so serialized results match what users paste
//! into bug reports and issue trackers.

mod result;
mod server;

pub use result::{ConnectionStatus, FunctionalityTest, ServerInfo, TestResult};
pub use server::ServerConfig;
