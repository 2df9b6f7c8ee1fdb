//! Response documents loaded from TOML
//!
//! A document is a serialized [`Response`]:
//!
//! ```toml
//! ignore_validation_errors = false
//!
//! [[verbs]]
//! verb = "Say"
//! text = "Hello"
//! ```

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use twiml::Response;

/// Load a response document from a TOML file
pub fn load_config(path: &Path) -> Result<Response> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read response file: {:?}", path))?;

    let response: Response = toml::from_str(&content)
        .with_context(|| format!("Failed to parse response file: {:?}", path))?;

    log::debug!("Loaded {} verbs from {:?}", response.len(), path);
    Ok(response)
}
