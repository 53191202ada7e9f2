use tracing::debug;

use crate::config::AnimationOverrides;
use crate::decorate::decorate;
use crate::node::Children;
use crate::style::style_block;

/// Output of one placeholder render pass: a style block to inject wherever
/// the tree is displayed, followed by the decorated content tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub style: String,
    pub children: Children,
}

impl Rendered {
    /// Serialize as markup: the style block wrapped in a `<style>` tag,
    /// followed by the tree.
    pub fn to_html(&self) -> String {
        format!("<style>{}</style>{}", self.style, self.children)
    }
}

/// Render a content tree in one pass, with no retained state.
///
/// The pure form of [`Placeholder`]: overrides are resolved against the
/// defaults and the tree is decorated from scratch.
pub fn render(children: &Children, is_loading: bool, overrides: &AnimationOverrides) -> Rendered {
    Rendered {
        style: style_block(&overrides.resolve()),
        children: decorate(children, is_loading),
    }
}

/// A placeholder instance that keeps its decorated tree between render
/// passes.
///
/// The cached tree is keyed on `(children, is_loading)` and is always
/// re-derived from the pristine stored children, never from prior decorated
/// output. Changing the animation overrides alone swaps the style block on
/// the next [`render`](Placeholder::render) without recomputing the tree.
#[derive(Debug, Clone)]
pub struct Placeholder {
    children: Children,
    is_loading: bool,
    overrides: AnimationOverrides,
    decorated: Children,
}

impl Placeholder {
    pub fn new(children: Children, is_loading: bool) -> Self {
        let decorated = decorate(&children, is_loading);
        Self {
            children,
            is_loading,
            overrides: AnimationOverrides::default(),
            decorated,
        }
    }

    pub fn with_animation(mut self, overrides: AnimationOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Replace the public inputs, recomputing the decorated tree only when
    /// either actually changed.
    pub fn update(&mut self, children: Children, is_loading: bool) {
        if children == self.children && is_loading == self.is_loading {
            return;
        }
        debug!(is_loading, "recomputing decorated placeholder tree");
        self.decorated = decorate(&children, is_loading);
        self.children = children;
        self.is_loading = is_loading;
    }

    /// Flip the loading flag, keeping the current children.
    pub fn set_loading(&mut self, is_loading: bool) {
        if is_loading == self.is_loading {
            return;
        }
        debug!(is_loading, "recomputing decorated placeholder tree");
        self.decorated = decorate(&self.children, is_loading);
        self.is_loading = is_loading;
    }

    /// Swap animation overrides without touching the decorated tree.
    pub fn set_animation(&mut self, overrides: AnimationOverrides) {
        self.overrides = overrides;
    }

    /// Produce the current frame.
    ///
    /// Overrides are resolved fresh on every pass; the decorated tree is
    /// the cached one.
    pub fn render(&self) -> Rendered {
        Rendered {
            style: style_block(&self.overrides.resolve()),
            children: self.decorated.clone(),
        }
    }
}
