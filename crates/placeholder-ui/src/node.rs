use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Markup tags that cannot host nested content and never take the shimmer.
const VOID_TAGS: &[&str] = &["br", "hr", "input"];

/// Tags rendered as images, which take the image loading style instead.
const IMAGE_TAGS: &[&str] = &["img"];

/// How the decorator treats an element's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Void markup tags (line break, rule, input) pass through untouched.
    Void,
    /// Image tags take the image loading class.
    Image,
    /// Everything else takes the generic loading class.
    Generic,
}

/// The children slot of an element: absent, a bare primitive, a single
/// element, or an ordered sequence mixing the above.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Children {
    /// No children at all.
    #[default]
    Empty,
    /// A bare text (or stringified numeric) child.
    Text(String),
    /// A single element child.
    One(Box<Element>),
    /// An ordered sequence of children; entries may themselves be sequences.
    Many(Vec<Children>),
}

impl Children {
    /// Whether any entry in this slot is itself an element.
    ///
    /// Nested sequences are searched through, matching the flattened view a
    /// renderer presents. This is the leaf test the decorator relies on.
    pub fn has_element(&self) -> bool {
        match self {
            Children::One(_) => true,
            Children::Many(items) => items.iter().any(Children::has_element),
            Children::Empty | Children::Text(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Children::Empty)
    }
}

impl From<&str> for Children {
    fn from(value: &str) -> Self {
        Children::Text(value.to_string())
    }
}

impl From<String> for Children {
    fn from(value: String) -> Self {
        Children::Text(value)
    }
}

impl From<i64> for Children {
    fn from(value: i64) -> Self {
        Children::Text(value.to_string())
    }
}

impl From<f64> for Children {
    fn from(value: f64) -> Self {
        Children::Text(value.to_string())
    }
}

impl From<Element> for Children {
    fn from(value: Element) -> Self {
        Children::One(Box::new(value))
    }
}

impl From<Vec<Children>> for Children {
    fn from(value: Vec<Children>) -> Self {
        Children::Many(value)
    }
}

/// A node in the content tree handed to the placeholder.
///
/// Trees are plain values: the decorator rebuilds nodes rather than
/// mutating them, so callers may keep references to the originals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Markup tag name or custom component name.
    pub tag: String,
    /// Attribute map; the style-class list lives under `"class"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Nested content.
    #[serde(default, skip_serializing_if = "Children::is_empty")]
    pub children: Children,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Children::Empty,
        }
    }

    /// Set an attribute, replacing any previous value under the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the style-class list.
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Append a child; successive calls grow an ordered sequence.
    pub fn child(mut self, child: impl Into<Children>) -> Self {
        let child = child.into();
        self.children = match self.children {
            Children::Empty => child,
            Children::Many(mut items) => {
                items.push(child);
                Children::Many(items)
            }
            existing => Children::Many(vec![existing, child]),
        };
        self
    }

    /// The current class list, or `""` when none is set.
    pub fn class_list(&self) -> &str {
        self.attrs.get("class").map(String::as_str).unwrap_or("")
    }

    /// Append a class token to the class list.
    ///
    /// Space-joined and trimmed; tokens are not deduplicated, matching the
    /// plain-concatenation contract of the decorator.
    pub fn push_class(&mut self, token: &str) {
        let merged = format!("{} {}", self.class_list(), token)
            .trim()
            .to_string();
        self.attrs.insert("class".to_string(), merged);
    }

    /// Classify this element's tag for the decorator.
    pub fn kind(&self) -> TagKind {
        let tag = self.tag.as_str();
        if IMAGE_TAGS.contains(&tag) {
            TagKind::Image
        } else if VOID_TAGS.contains(&tag) {
            TagKind::Void
        } else {
            TagKind::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn children_default_is_empty() {
        assert_eq!(Children::default(), Children::Empty);
        assert!(Children::default().is_empty());
    }

    #[test]
    fn has_element_on_flat_shapes() {
        assert!(!Children::Empty.has_element());
        assert!(!Children::from("hello").has_element());
        assert!(Children::from(Element::new("span")).has_element());
    }

    #[test]
    fn has_element_searches_nested_sequences() {
        let nested = Children::Many(vec![
            Children::from("text"),
            Children::Many(vec![Children::from(Element::new("em"))]),
        ]);
        assert!(nested.has_element());

        let text_only = Children::Many(vec![
            Children::from("a"),
            Children::Many(vec![Children::from("b")]),
        ]);
        assert!(!text_only.has_element());
    }

    #[test]
    fn child_builder_grows_a_sequence() {
        let el = Element::new("div").child("one").child(Element::new("b")).child(2_i64);
        match &el.children {
            Children::Many(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Children::from("one"));
                assert_eq!(items[2], Children::from("2"));
            }
            other => panic!("expected a sequence, got {other:?}"),
        }
    }

    #[test]
    fn single_child_stays_unwrapped() {
        let el = Element::new("p").child("hello");
        assert_eq!(el.children, Children::from("hello"));
    }

    #[test]
    fn push_class_appends_without_dedup() {
        let mut el = Element::new("div");
        el.push_class("loading");
        assert_eq!(el.class_list(), "loading");

        let mut styled = Element::new("div").class("card");
        styled.push_class("loading");
        assert_eq!(styled.class_list(), "card loading");

        styled.push_class("loading");
        assert_eq!(styled.class_list(), "card loading loading");
    }

    #[test]
    fn tag_classification() {
        assert_eq!(Element::new("br").kind(), TagKind::Void);
        assert_eq!(Element::new("hr").kind(), TagKind::Void);
        assert_eq!(Element::new("input").kind(), TagKind::Void);
        assert_eq!(Element::new("img").kind(), TagKind::Image);
        assert_eq!(Element::new("div").kind(), TagKind::Generic);
        assert_eq!(Element::new("CustomWidget").kind(), TagKind::Generic);
    }

    #[test]
    fn element_serde_round_trip() {
        let el = Element::new("div")
            .class("card")
            .attr("id", "main")
            .child("hello")
            .child(Element::new("img").attr("src", "a.png"));
        let json = serde_json::to_string(&el).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, el);
    }
}
