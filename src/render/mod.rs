pub mod error_card;
pub mod theme;
pub mod trophy;

pub use error_card::render_error_card;
pub use theme::{Theme, ThemePalette, TierStyle};
pub use trophy::render_trophy;

/// Escape the five XML-significant characters for embedding user-controlled
/// text in text nodes and attribute values.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
