//! Biography text to HTML.

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<[a-z].*>").expect("valid regex"));
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Normalizes a stored biography into HTML.
///
/// Text that already contains markup is returned unchanged. Plain text is
/// split into paragraphs on blank lines; single newlines become `<br />`.
pub fn to_paragraph_html(input: Option<&str>) -> Option<String> {
    let input = input?;
    if input.is_empty() {
        return None;
    }
    if HTML_TAG.is_match(input) {
        return Some(input.to_string());
    }

    let html: String = BLANK_LINES
        .split(input)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| format!("<p>{}</p>", escape_html(chunk).replace('\n', "<br />")))
        .collect();

    if html.is_empty() { None } else { Some(html) }
}
