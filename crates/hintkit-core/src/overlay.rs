//! Overlay badges: creation, visual updates and teardown.
//!
//! Every visited document gets one container `<div>` appended to its root
//! element; each hint gets one absolutely positioned `<span>` badge inside
//! the container of its element's document. The [`Overlay`] tracks every
//! node it created so [`Overlay::teardown`] can remove all of them, however
//! far installation got.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dom::{Dom, Visibility};
use crate::geometry::Point;

/// Visual style of hint badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeStyle {
    /// Badge background color.
    pub background: String,
    /// Label text color.
    pub foreground: String,
    /// Color of the already-typed part of a matching label.
    pub typed_color: String,
    /// Stacking order; must beat page content.
    pub z_index: u32,
    pub font_family: String,
    pub font_size: String,
    pub padding: String,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            background: "#ffd76e".to_string(),
            foreground: "#000000".to_string(),
            typed_color: "#a07555".to_string(),
            z_index: 100_000,
            font_family: "monospace".to_string(),
            font_size: "1em".to_string(),
            padding: "0.2em".to_string(),
        }
    }
}

impl BadgeStyle {
    /// Inline style declarations applied to every new badge.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("z-index", self.z_index.to_string()),
            ("position", "absolute".to_string()),
            ("padding", self.padding.clone()),
            ("border", "none".to_string()),
            ("background-color", self.background.clone()),
            ("color", self.foreground.clone()),
            ("font-family", self.font_family.clone()),
            ("font-size", self.font_size.clone()),
            ("line-height", "1".to_string()),
            ("font-weight", "bold".to_string()),
            ("white-space", "nowrap".to_string()),
            ("text-shadow", "none".to_string()),
        ]
    }
}

/// The typed and remaining parts of a badge showing progress.
#[derive(Debug)]
struct Segments<D: Dom> {
    badge: D::Node,
    typed: D::Node,
    remaining: D::Node,
}

/// Every overlay node created during one session.
#[derive(Debug)]
pub struct Overlay<D: Dom> {
    style: BadgeStyle,
    containers: Vec<D::Node>,
    badges: Vec<D::Node>,
    // Created on a badge's first progress display, reused afterwards.
    segments: Vec<Segments<D>>,
}

impl<D: Dom> Overlay<D> {
    pub fn new(style: BadgeStyle) -> Self {
        Self {
            style,
            containers: Vec::new(),
            badges: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Create the (still detached) badge container for a document.
    pub fn create_container(&mut self, dom: &mut D, window: &D::Window) -> D::Node {
        let container = dom.create_element(window, "div");
        self.containers.push(container.clone());
        container
    }

    /// Append a finished container to its document's root element.
    pub fn attach_container(&mut self, dom: &mut D, window: &D::Window, container: &D::Node) {
        let root = dom.document_element(window);
        dom.append_child(&root, container);
    }

    /// Create a badge showing `label` at `anchor` (document coordinates).
    pub fn add_badge(
        &mut self,
        dom: &mut D,
        window: &D::Window,
        container: &D::Node,
        label: &str,
        anchor: Point,
    ) -> D::Node {
        let badge = dom.create_element(window, "span");
        for (property, value) in self.style.declarations() {
            dom.set_style(&badge, property, &value);
        }
        dom.set_style(&badge, "left", &format!("{}px", anchor.x));
        dom.set_style(&badge, "top", &format!("{}px", anchor.y));
        dom.set_text(&badge, label);
        dom.append_child(container, &badge);

        self.badges.push(badge.clone());
        badge
    }

    /// Show a badge with its complete, unhighlighted label.
    pub fn show_label(&self, dom: &mut D, badge: &D::Node, label: &str) {
        set_visibility(dom, badge, Visibility::Visible);
        dom.set_text(badge, label);
    }

    /// Show a badge split into the typed prefix (accent color) and the
    /// remaining characters.
    ///
    /// The two segment nodes are created once per badge and reused on
    /// later keystrokes.
    pub fn show_progress(
        &mut self,
        dom: &mut D,
        window: &D::Window,
        badge: &D::Node,
        typed: &str,
        remaining: &str,
    ) {
        set_visibility(dom, badge, Visibility::Visible);

        let index = match self.segments.iter().position(|s| &s.badge == badge) {
            Some(index) => index,
            None => {
                let typed_part = dom.create_element(window, "span");
                dom.set_style(&typed_part, "color", &self.style.typed_color);
                let remaining_part = dom.create_element(window, "span");
                self.segments.push(Segments {
                    badge: badge.clone(),
                    typed: typed_part,
                    remaining: remaining_part,
                });
                self.segments.len() - 1
            }
        };
        let segments = &self.segments[index];

        dom.set_text(&segments.typed, typed);
        dom.set_text(&segments.remaining, remaining);

        // show_label replaces the badge's children with plain text
        if dom.parent(&segments.typed).as_ref() != Some(badge) {
            dom.set_text(badge, "");
            dom.append_child(badge, &segments.typed);
            dom.append_child(badge, &segments.remaining);
        }
    }

    /// Hide a badge without removing it.
    pub fn hide(&self, dom: &mut D, badge: &D::Node) {
        set_visibility(dom, badge, Visibility::Hidden);
    }

    /// Remove every badge and container and forget them.
    ///
    /// Safe to call repeatedly and after a partial install.
    pub fn teardown(&mut self, dom: &mut D) {
        if self.badges.is_empty() && self.containers.is_empty() {
            return;
        }
        debug!(
            "Removing {} badges and {} containers",
            self.badges.len(),
            self.containers.len()
        );
        for badge in self.badges.drain(..) {
            dom.detach(&badge);
        }
        for container in self.containers.drain(..) {
            dom.detach(&container);
        }
        self.segments.clear();
    }

    /// Number of tracked overlay nodes (badges plus containers).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.badges.len() + self.containers.len()
    }
}

/// Set `visibility` only when it actually changes.
fn set_visibility<D: Dom>(dom: &mut D, node: &D::Node, visibility: Visibility) {
    let wanted = visibility.as_css();
    if dom.style(node, "visibility").as_deref() != Some(wanted) {
        dom.set_style(node, "visibility", wanted);
    }
}
