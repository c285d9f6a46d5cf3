use std::borrow::Cow;

/// Escape text for use as element content or a quoted attribute value.
///
/// Neutralises `&`, `<`, `>`, `"`, `'` and `/`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Like [`escape_html`], with absent input mapping to an empty string.
pub fn escape_optional(text: Option<&str>) -> Cow<'_, str> {
    match text {
        Some(text) => escape_html(text),
        None => Cow::Borrowed(""),
    }
}
