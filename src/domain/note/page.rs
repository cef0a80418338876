//! Slot page parsing
//!
//! The service renders a slot as an HTML page whose stored text sits,
//! entity-escaped, inside `<textarea class="content">`. Only the first such
//! element counts.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::PageParseError;

static CONTENT_AREA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<textarea class="content">(.*?)</textarea>"#)
        .expect("content area pattern is valid")
});

/// Extract and decode the stored text from a slot page.
///
/// An empty content area yields `Ok("")`; a page without one is an error.
pub fn extract_content(body: &str) -> Result<String, PageParseError> {
    let raw = CONTENT_AREA
        .captures(body)
        .and_then(|caps| caps.get(1))
        .ok_or(PageParseError::MarkerNotFound {
            body_len: body.len(),
        })?;

    Ok(html_escape::decode_html_entities(raw.as_str()).into_owned())
}
