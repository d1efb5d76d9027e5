//! Display helpers for blog cards.

/// Collapsed previews show this many characters of the body.
const PREVIEW_CHARS: usize = 100;

/// Body text for a card: the full body when expanded or short enough,
/// otherwise the first 100 characters plus an ellipsis marker.
pub fn body_preview(body: &str, expanded: bool) -> String {
    if expanded || body.chars().count() <= PREVIEW_CHARS {
        return body.to_string();
    }
    let head: String = body.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
