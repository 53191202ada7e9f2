//! Markup serialization for content trees.
//!
//! `Display` output is deterministic (attributes render in name order) so a
//! rendered fragment can be embedded directly in a host document or compared
//! in tests.

use std::fmt;

use crate::node::{Children, Element, TagKind};

fn escape_text(value: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            _ => write!(f, "{ch}")?,
        }
    }
    Ok(())
}

fn escape_attr(value: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for ch in value.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            _ => write!(f, "{ch}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"")?;
            escape_attr(value, f)?;
            f.write_str("\"")?;
        }
        if self.kind() == TagKind::Void && self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        write!(f, "{}", self.children)?;
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Empty => Ok(()),
            Children::Text(text) => escape_text(text, f),
            Children::One(element) => element.fmt(f),
            Children::Many(items) => {
                for item in items {
                    item.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_nested_tree() {
        let tree = Children::from(
            Element::new("div")
                .class("card")
                .child(Element::new("p").child("Hello"))
                .child(Element::new("img").attr("src", "a.png")),
        );
        assert_eq!(
            tree.to_string(),
            "<div class=\"card\"><p>Hello</p><img src=\"a.png\"></img></div>"
        );
    }

    #[test]
    fn attributes_render_in_name_order() {
        let el = Element::new("div").attr("id", "x").attr("class", "c").attr("role", "note");
        assert_eq!(el.to_string(), "<div class=\"c\" id=\"x\" role=\"note\"></div>");
    }

    #[test]
    fn void_tags_self_close() {
        assert_eq!(Element::new("br").to_string(), "<br/>");
        assert_eq!(
            Element::new("input").attr("type", "text").to_string(),
            "<input type=\"text\"/>"
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let el = Element::new("p").attr("title", "a \"b\"").child("1 < 2 & 3 > 2");
        assert_eq!(
            el.to_string(),
            "<p title=\"a &quot;b&quot;\">1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(Children::Empty.to_string(), "");
        assert_eq!(Children::Many(vec![]).to_string(), "");
    }
}
