use crate::node::{Children, Element, TagKind};
use crate::style::{LOADING_CLASS, LOADING_IMAGE_CLASS};

/// Rebuild a children tree, appending shimmer classes to loading leaves.
///
/// Decoration targets leaf elements only: an element with at least one
/// element child is left untouched so shimmer regions never nest, while its
/// leaf descendants are decorated recursively. The input is never mutated;
/// touched ancestors are rebuilt and everything else is cloned as-is.
///
/// Class tokens are appended by plain concatenation. Running this over an
/// already-decorated tree appends the token again; callers are expected to
/// re-derive from the pristine input on every change, as [`Placeholder`]
/// does.
///
/// [`Placeholder`]: crate::container::Placeholder
pub fn decorate(children: &Children, is_loading: bool) -> Children {
    match children {
        Children::One(element) => Children::One(Box::new(decorate_element(element, is_loading))),
        Children::Many(items) => {
            Children::Many(items.iter().map(|c| decorate(c, is_loading)).collect())
        }
        // Absent slots and bare primitives pass through untouched.
        other => other.clone(),
    }
}

fn decorate_element(element: &Element, is_loading: bool) -> Element {
    let kind = element.kind();
    if kind == TagKind::Void {
        return element.clone();
    }

    let mut rebuilt = element.clone();
    if is_loading && !element.children.has_element() {
        let token = match kind {
            TagKind::Image => LOADING_IMAGE_CLASS,
            _ => LOADING_CLASS,
        };
        rebuilt.push_class(token);
    }
    if !element.children.is_empty() {
        rebuilt.children = decorate(&element.children, is_loading);
    }
    rebuilt
}
