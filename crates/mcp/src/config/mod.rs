//! Configuration for the prober.
//!
//! Probe policy (timeouts, endpoint paths, the test prompt) lives in
//! [`ProbeSettings`]. Defaults reproduce the long-standing behavior; a JSON
//! settings file and explicit overrides can adjust them.

mod io;
mod model;
mod validation;

pub use io::{SETTINGS_PATH_ENV, SettingsError, default_settings_path, load_settings, load_settings_from_path};
pub use model::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_FUNCTIONALITY_TIMEOUT_MS, DEFAULT_MAX_TOKENS, DEFAULT_TEST_PROMPT, ProbeOverrides,
    ProbeSettings,
};
pub use validation::{ValidationError, validate_server_url, validate_settings};
