//! Collecting a server configuration from command line input.

use anyhow::{Context, Result, bail};
use inspector_types::ServerConfig;
use std::io::Read;
use std::path::Path;

/// Config for a URL and key typed in directly.
pub fn manual_config(url: String, api_key: Option<String>) -> ServerConfig {
    ServerConfig::manual(url, api_key)
}

/// Read an installation code from `--code` (or stdin for `-`) or `--code-file`.
///
/// Returns `Ok(None)` when neither source was given. A code that is blank
/// after trimming is rejected, since there is nothing to test.
pub fn read_installation_code(code: Option<&str>, code_file: Option<&Path>) -> Result<Option<String>> {
    let text = match (code, code_file) {
        (Some("-"), _) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read installation code from stdin")?;
            buffer
        }
        (Some(code), _) => code.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read installation code from {}", path.display()))?,
        (None, None) => return Ok(None),
    };

    if text.trim().is_empty() {
        bail!("installation code is empty");
    }
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_source_is_none() {
        assert!(read_installation_code(None, None).unwrap().is_none());
    }

    #[test]
    fn inline_code_is_returned_verbatim() {
        let code = read_installation_code(Some("  API_KEY=x  "), None).unwrap();
        assert_eq!(code.as_deref(), Some("  API_KEY=x  "));
    }

    #[test]
    fn reads_code_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"url\": \"svc:1\"}}").unwrap();
        let code = read_installation_code(None, Some(file.path())).unwrap();
        assert_eq!(code.as_deref(), Some("{\"url\": \"svc:1\"}"));
    }

    #[test]
    fn blank_code_is_rejected() {
        assert!(read_installation_code(Some("   "), None).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_installation_code(None, Some(&dir.path().join("nope.txt"))).is_err());
    }

    #[test]
    fn manual_config_drops_empty_key() {
        let config = manual_config("http://h".to_string(), Some(String::new()));
        assert_eq!(config.server_url, "http://h");
        assert!(config.api_key.is_none());
    }
}
