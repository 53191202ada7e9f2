//! Shimmer loading placeholder for element trees.
//!
//! Wraps caller-provided content and, while a loading flag is set, decorates
//! the leaf elements of the tree with a shimmering skeleton style in place
//! of their real content. The crate is framework-independent: content is a
//! plain value tree, decoration is a pure function, and the
//! [`Placeholder`] container models the re-render contract as an explicit
//! derived-value recomputation.
//!
//! ```
//! use placeholder_ui::{Children, Element, Placeholder};
//!
//! let tree = Children::from(
//!     Element::new("div")
//!         .child(Element::new("h2").child("Title"))
//!         .child(Element::new("img").attr("src", "cover.png")),
//! );
//!
//! let placeholder = Placeholder::new(tree, true);
//! let frame = placeholder.render();
//! assert!(frame.to_html().starts_with("<style>"));
//! ```

pub mod config;
pub mod container;
pub mod decorate;
pub mod node;
pub mod render;
pub mod style;

pub use config::{AnimationConfig, AnimationOverrides, Timing, ALL_TIMINGS};
pub use container::{render, Placeholder, Rendered};
pub use decorate::decorate;
pub use node::{Children, Element, TagKind};
pub use style::{style_block, LOADING_CLASS, LOADING_IMAGE_CLASS};
