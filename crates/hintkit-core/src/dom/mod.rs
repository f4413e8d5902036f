//! The browser surface hint mode runs against.
//!
//! Hint mode never owns page content. It reads geometry, style and the frame
//! tree through [`Dom`], creates its own overlay nodes through the same
//! trait, and acts on elements with `focus`/`click`. A host browser
//! implements the trait over its real DOM; [`memory::MemoryDom`] implements
//! it over an in-memory page description for tests and offline replay.
//!
//! # Element categories
//!
//! Activation dispatches on a closed set of categories rather than on raw
//! tag strings:
//!
//! | Category | Tags | Action |
//! |----------|------|--------|
//! | **EditableControl** | `input`, `select`, `textarea` (not `type=button/submit`) | focus, insert mode |
//! | **Frame** | `frame`, `iframe` | focus, normal mode |
//! | **Clickable** | everything else | synthetic click, normal mode |

pub mod memory;
pub mod query;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Computed `display` value, reduced to what visibility checks need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Display {
    #[default]
    Inline,
    Block,
    InlineBlock,
    None,
    /// Any other value (`flex`, `grid`, `table-cell`, ...).
    #[serde(other)]
    Other,
}

/// Computed `visibility` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl Visibility {
    /// CSS keyword for this value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
            Visibility::Collapse => "collapse",
        }
    }
}

/// The subset of an element's computed style that hint mode inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ComputedStyle {
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub visibility: Visibility,
}

impl ComputedStyle {
    /// Whether the element is drawn at all: not `display: none` and
    /// explicitly `visibility: visible`.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.display != Display::None && self.visibility == Visibility::Visible
    }
}

/// How activating an element behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    /// Text-accepting form control; gets focus and switches to insert mode.
    EditableControl,
    /// A `frame`/`iframe`; gets focus.
    Frame,
    /// Anything else; receives a synthetic click.
    Clickable,
}

impl ElementCategory {
    /// Classify an element from its lower-case tag name and `type` attribute.
    ///
    /// The attribute only matters for `input`.
    #[must_use]
    pub fn classify(tag_name: &str, input_type: Option<&str>) -> Self {
        match tag_name {
            "input" => {
                let is_button = input_type
                    .map(|t| t.eq_ignore_ascii_case("button") || t.eq_ignore_ascii_case("submit"))
                    .unwrap_or(false);
                if is_button {
                    ElementCategory::Clickable
                } else {
                    ElementCategory::EditableControl
                }
            }
            // Their `type` property is fixed, whatever the attribute says.
            "select" | "textarea" => ElementCategory::EditableControl,
            "frame" | "iframe" => ElementCategory::Frame,
            _ => ElementCategory::Clickable,
        }
    }
}

/// Access to a browser's windows, documents and elements.
///
/// Handles are cheap to clone and never owned by hint mode; a node handle
/// may outlive the node it refers to, which [`Dom::is_connected`] detects.
///
/// All geometry is in CSS pixels relative to the owning window's viewport.
pub trait Dom {
    /// A window (top level or the content window of a frame).
    type Window: Clone + fmt::Debug;
    /// An element in some window's document.
    type Node: Clone + PartialEq + fmt::Debug;

    // ------------------------------------------------------------------
    // Windows and frames
    // ------------------------------------------------------------------

    /// Viewport size (`innerWidth`/`innerHeight`).
    fn inner_size(&self, window: &Self::Window) -> Size;

    /// Document scroll position (`scrollX`/`scrollY`).
    fn scroll_offset(&self, window: &Self::Window) -> Point;

    /// The document's root element, where overlay containers are attached.
    fn document_element(&self, window: &Self::Window) -> Self::Node;

    /// Snapshot of the document's interactive elements in document order
    /// (see [`query::INTERACTIVE_XPATH`]).
    ///
    /// The result must not change if the document is mutated afterwards.
    fn query_interactive(&self, window: &Self::Window) -> Vec<Self::Node>;

    /// Every `frame` and `iframe` element of the document, in document order.
    fn frames(&self, window: &Self::Window) -> Vec<Self::Node>;

    /// Content window of a frame element, or `None` when it is not
    /// reachable (cross-origin, not loaded).
    fn content_window(&self, frame: &Self::Node) -> Option<Self::Window>;

    // ------------------------------------------------------------------
    // Elements
    // ------------------------------------------------------------------

    /// Bounding client rectangle, or `None` if the element has no box.
    fn bounding_rect(&self, node: &Self::Node) -> Option<Rect>;

    fn computed_style(&self, node: &Self::Node) -> ComputedStyle;

    /// Lower-case tag name.
    fn tag_name(&self, node: &Self::Node) -> String;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Whether the node is still part of its document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Give the element input focus.
    fn focus(&mut self, node: &Self::Node);

    /// Dispatch a synthetic click.
    fn click(&mut self, node: &Self::Node);

    // ------------------------------------------------------------------
    // Overlay construction
    // ------------------------------------------------------------------

    /// Create a detached element in the window's document.
    fn create_element(&mut self, window: &Self::Window, tag: &str) -> Self::Node;

    /// Set an inline style property.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Read an inline style property.
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;

    /// Replace all children with a single text run (empty clears them).
    fn set_text(&mut self, node: &Self::Node, text: &str);

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Remove the node from its parent; no-op when already detached.
    fn detach(&mut self, node: &Self::Node);
}
