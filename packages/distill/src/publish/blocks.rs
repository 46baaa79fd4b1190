//! Notion block builders.
//!
//! Shortcuts for the handful of block shapes the published pages use.

use serde_json::{json, Value};

/// A bulleted list item block.
pub fn bullet(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "bulleted_list_item",
        "bulleted_list_item": {
            "rich_text": [{"type": "text", "text": {"content": text}}]
        }
    })
}

/// A heading_2 block.
pub fn heading(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "heading_2",
        "heading_2": {
            "rich_text": [{"type": "text", "text": {"content": text}}]
        }
    })
}

/// A divider block.
pub fn divider() -> Value {
    json!({"object": "block", "type": "divider", "divider": {}})
}

/// A callout block with an emoji icon.
pub fn callout(text: &str, emoji: &str, color: &str) -> Value {
    json!({
        "object": "block",
        "type": "callout",
        "callout": {
            "rich_text": [{"type": "text", "text": {"content": text}}],
            "icon": {"emoji": emoji},
            "color": color
        }
    })
}

/// A bookmark block linking to a URL.
pub fn bookmark(url: &str) -> Value {
    json!({
        "object": "block",
        "type": "bookmark",
        "bookmark": {"url": url}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_shape() {
        let block = bullet("Do the thing");
        assert_eq!(block["type"], "bulleted_list_item");
        assert_eq!(
            block["bulleted_list_item"]["rich_text"][0]["text"]["content"],
            "Do the thing"
        );
    }

    #[test]
    fn test_callout_carries_icon_and_color() {
        let block = callout("Summary here", "💡", "blue_background");
        assert_eq!(block["callout"]["icon"]["emoji"], "💡");
        assert_eq!(block["callout"]["color"], "blue_background");
    }

    #[test]
    fn test_bookmark_url() {
        let block = bookmark("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(block["bookmark"]["url"], "https://youtu.be/dQw4w9WgXcQ");
    }
}
