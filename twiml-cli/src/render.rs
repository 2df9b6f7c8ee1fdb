//! Render response documents to TwiML

use anyhow::{Context, Result};
use twiml::Response;

/// Validate and encode a response, forcing the ignore flag on when
/// `force_ignore` is set
pub fn render_document(mut response: Response, force_ignore: bool) -> Result<String> {
    response.ignore_validation_errors |= force_ignore;
    log::info!("Rendering response with {} verbs", response.len());

    if response.ignore_validation_errors {
        log::debug!("Semantic validation errors will be ignored");
    }

    response
        .to_xml_string()
        .context("Failed to encode response")
}
