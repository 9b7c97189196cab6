//! Snapshot rendering helpers.
//!
//! Functions for converting a scene graph and a control's skins into plain
//! text suitable for snapshot testing and assertions.

use crate::dom::{Dom, NodeId};
use crate::theme::Skin;
use crate::widget::Scrollable;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the subtree under `root` as an indented outline.
///
/// Each node is one line: two spaces of indent per depth, the node's name,
/// then `*` if it is resizable and `(hidden)` if it is invisible. Children
/// appear in insertion order. Lines are joined with `'\n'`.
///
/// # Examples
///
/// ```ignore
/// use gilt_kit::dom::{Dom, NodeData};
/// use gilt_kit::testing::tree_to_string;
///
/// let mut dom = Dom::new();
/// let root = dom.insert(NodeData::new("Root"));
/// assert_eq!(tree_to_string(&dom, root), "Root");
/// ```
pub fn tree_to_string(dom: &Dom, root: NodeId) -> String {
    fn walk(dom: &Dom, id: NodeId, depth: usize, lines: &mut Vec<String>) {
        let Some(node) = dom.get(id) else { return };
        let mut line = format!("{}{}", "  ".repeat(depth), node.name);
        if node.resizable {
            line.push('*');
        }
        if !node.visible {
            line.push_str(" (hidden)");
        }
        lines.push(line);
        for &child in dom.children(id) {
            walk(dom, child, depth + 1, lines);
        }
    }

    let mut lines = Vec::new();
    walk(dom, root, 0, &mut lines);
    lines.join("\n")
}

/// Describe one skin as `key @x,y wxh`.
pub fn skin_to_string(skin: &Skin) -> String {
    format!(
        "{} @{},{} {}x{}",
        skin.key,
        skin.x(),
        skin.y(),
        skin.width(),
        skin.height()
    )
}

/// Describe a control's thumb, progress and track, one per line.
///
/// Missing parts render as `<part>: none`.
pub fn scrollable_to_string(control: &Scrollable) -> String {
    let thumb = match control.thumb() {
        Some(thumb) => format!(
            "thumb: @{},{} {}x{}",
            thumb.position.x, thumb.position.y, thumb.size.width, thumb.size.height
        ),
        None => "thumb: none".to_owned(),
    };
    let describe = |part: &str, skin: Option<&Skin>| match skin {
        Some(skin) => format!("{part}: {}", skin_to_string(skin)),
        None => format!("{part}: none"),
    };
    [
        thumb,
        describe("progress", control.progress_skin()),
        describe("track", control.track_skin()),
    ]
    .join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;
    use crate::geometry::Orientation;
    use crate::theme::SkinTheme;
    use std::rc::Rc;

    // ── tree_to_string ───────────────────────────────────────────────

    #[test]
    fn single_node() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Root"));
        assert_eq!(tree_to_string(&dom, root), "Root");
    }

    #[test]
    fn nested_outline() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Root").resizable(true));
        let panel = dom.insert_child(root, NodeData::new("Panel")).unwrap();
        dom.insert_child(panel, NodeData::new("Bar").resizable(true)).unwrap();
        dom.insert_child(root, NodeData::new("Popup").visible(false)).unwrap();

        insta::assert_snapshot!(tree_to_string(&dom, root), @r"
        Root*
          Panel
            Bar*
          Popup (hidden)
        ");
    }

    #[test]
    fn stale_root_renders_empty() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Root"));
        dom.remove(root);
        assert!(tree_to_string(&dom, root).is_empty());
    }

    // ── scrollable_to_string ─────────────────────────────────────────

    #[test]
    fn fresh_control_has_no_skins() {
        let theme = Rc::new(SkinTheme::slider_defaults());
        let control = Scrollable::new(Orientation::Horizontal, theme).with_size(200.0, 20.0);
        assert_eq!(
            scrollable_to_string(&control),
            "thumb: @0,0 20x20\nprogress: none\ntrack: none"
        );
    }

    #[test]
    fn redrawn_control() {
        let theme = Rc::new(SkinTheme::slider_defaults());
        let mut control = Scrollable::new(Orientation::Horizontal, theme).with_size(200.0, 20.0);
        control.redraw();
        control.move_thumb(50.0, 0.0);

        insta::assert_snapshot!(scrollable_to_string(&control), @r"
        thumb: @50,0 20x20
        progress: horizontal_progress @0,0 60x20
        track: horizontal_track @0,0 200x20
        ");
    }

    #[test]
    fn missing_thumb() {
        let theme = Rc::new(SkinTheme::slider_defaults());
        let mut control = Scrollable::new(Orientation::Vertical, theme);
        control.take_thumb();
        assert!(scrollable_to_string(&control).starts_with("thumb: none"));
    }
}
