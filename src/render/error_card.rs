use crate::render::escape_xml;

/// Compact fallback card shown when stats cannot be produced, so embedding
/// pages always receive a valid SVG document.
pub fn render_error_card(message: &str) -> String {
    let safe = escape_xml(if message.is_empty() { "Error" } else { message });

    format!(
        r##"<svg width="400" height="60" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" rx="8" fill="#141924"/>
  <text x="50%" y="50%" fill="#ff5f56" font-size="14"
      text-anchor="middle" alignment-baseline="middle"
      font-family="Segoe UI, Roboto, Arial, sans-serif">
      Error: {safe}
  </text>
</svg>"##
    )
}
