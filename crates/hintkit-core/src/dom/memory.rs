//! In-memory page model implementing [`Dom`].
//!
//! A page is described as a tree of [`ElementSpec`]s with explicit geometry
//! and computed style; frame elements may carry a nested [`PageSpec`] for
//! their content window. The model records focus, clicks and node removals
//! as [`DomEvent`]s so callers can check what hint mode did, and in which
//! order.
//!
//! ```ignore
//! let page: PageSpec = serde_json::from_str(json)?;
//! let mut dom = MemoryDom::from_page(&page)?;
//! let top = dom.top_window();
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{query, ComputedStyle, Display, Dom, Visibility};
use crate::error::ApiError;
use crate::geometry::{Point, Rect, Size};

/// Viewport used when the top-level page does not specify one.
pub const DEFAULT_VIEWPORT: Size = Size {
    width: 1280.0,
    height: 800.0,
};

/// Deepest frame nesting accepted when building a page.
pub const MAX_FRAME_DEPTH: usize = 32;

/// Index of a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Index of a window in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub usize);

/// Description of one window's document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageSpec {
    /// Viewport size. Top level defaults to [`DEFAULT_VIEWPORT`]; a frame
    /// defaults to the size of its frame element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Size>,
    /// Document scroll position.
    #[serde(default)]
    pub scroll: Point,
    /// Top-level elements below the document element.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

impl PageSpec {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            viewport: Some(Size::new(width, height)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_scroll(mut self, x: f64, y: f64) -> Self {
        self.scroll = Point::new(x, y);
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: ElementSpec) -> Self {
        self.elements.push(element);
        self
    }

    #[must_use]
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.elements.extend(elements);
        self
    }
}

/// Description of one element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Bounding rectangle; `None` for elements without a box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,
    #[serde(flatten)]
    pub style: ComputedStyle,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
    /// Content of a `frame`/`iframe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Box<PageSpec>>,
    /// Frame whose content window is unreachable.
    #[serde(default, skip_serializing_if = "is_false")]
    pub cross_origin: bool,
}

/// Helper for serde skip_serializing_if.
fn is_false(b: &bool) -> bool {
    !*b
}

impl ElementSpec {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_rect(mut self, left: f64, top: f64, width: f64, height: f64) -> Self {
        self.rect = Some(Rect::new(left, top, width, height));
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: Display) -> Self {
        self.style.display = display;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.style.visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_frame(mut self, page: PageSpec) -> Self {
        self.frame = Some(Box::new(page));
        self
    }

    #[must_use]
    pub fn cross_origin(mut self) -> Self {
        self.cross_origin = true;
        self
    }
}

/// Something hint mode did to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomEvent {
    /// Synthetic click, with the element's `target` attribute at that moment.
    Click { node: NodeId, target: Option<String> },
    Focus { node: NodeId },
    /// Node removed from its parent.
    Detach { node: NodeId },
}

#[derive(Debug, Clone)]
struct WindowData {
    inner: Size,
    scroll: Point,
    root: NodeId,
}

#[derive(Debug, Clone)]
struct NodeData {
    window: WindowId,
    tag: String,
    attributes: BTreeMap<String, String>,
    inline_style: BTreeMap<String, String>,
    computed: ComputedStyle,
    rect: Option<Rect>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    content_window: Option<WindowId>,
    /// Created through [`Dom::create_element`] rather than from a [`PageSpec`].
    created: bool,
}

impl NodeData {
    fn new(window: WindowId, tag: &str) -> Self {
        Self {
            window,
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            inline_style: BTreeMap::new(),
            computed: ComputedStyle::default(),
            rect: None,
            text: String::new(),
            parent: None,
            children: Vec::new(),
            content_window: None,
            created: false,
        }
    }
}

/// Arena-backed DOM for one top-level page and its frames.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    windows: Vec<WindowData>,
    nodes: Vec<NodeData>,
    events: Vec<DomEvent>,
    focused: Option<NodeId>,
}

impl MemoryDom {
    /// Build a page model from its description.
    pub fn from_page(page: &PageSpec) -> Result<Self, ApiError> {
        let mut dom = Self::default();
        let inner = page.viewport.unwrap_or(DEFAULT_VIEWPORT);
        dom.build_window(page, inner, 0)?;
        Ok(dom)
    }

    /// The top-level window.
    #[must_use]
    pub fn top_window(&self) -> WindowId {
        WindowId(0)
    }

    fn build_window(
        &mut self,
        page: &PageSpec,
        inner: Size,
        depth: usize,
    ) -> Result<WindowId, ApiError> {
        if depth > MAX_FRAME_DEPTH {
            return Err(ApiError::frame_depth_exceeded(MAX_FRAME_DEPTH));
        }
        if !(inner.width.is_finite() && inner.height.is_finite())
            || inner.width < 0.0
            || inner.height < 0.0
        {
            return Err(ApiError::invalid_page(format!(
                "Viewport {}x{} must be finite and non-negative",
                inner.width, inner.height
            )));
        }

        let window = WindowId(self.windows.len());
        let root = self.push_node(NodeData::new(window, "html"));
        self.nodes[root.0].rect = Some(Rect::new(0.0, 0.0, inner.width, inner.height));
        self.windows.push(WindowData {
            inner,
            scroll: page.scroll,
            root,
        });

        for element in &page.elements {
            self.build_element(element, window, root, depth)?;
        }

        Ok(window)
    }

    fn build_element(
        &mut self,
        spec: &ElementSpec,
        window: WindowId,
        parent: NodeId,
        depth: usize,
    ) -> Result<NodeId, ApiError> {
        if spec.tag.trim().is_empty() {
            return Err(ApiError::invalid_page("Element with an empty tag name"));
        }

        let mut data = NodeData::new(window, spec.tag.trim());
        let is_frame = matches!(data.tag.as_str(), "frame" | "iframe");
        if spec.frame.is_some() && !is_frame {
            return Err(ApiError::invalid_page(format!(
                "<{}> cannot contain a page; only frame and iframe can",
                data.tag
            )));
        }

        data.attributes = spec.attributes.clone();
        data.computed = spec.style;
        data.rect = spec.rect;
        data.text = spec.text.clone();

        let node = self.push_node(data);
        self.link(parent, node);

        for child in &spec.children {
            self.build_element(child, window, node, depth)?;
        }

        if is_frame && !spec.cross_origin {
            let empty = PageSpec::default();
            let content = spec.frame.as_deref().unwrap_or(&empty);
            let inner = content.viewport.unwrap_or_else(|| {
                spec.rect
                    .map(|r| Size::new(r.width, r.height))
                    .unwrap_or_default()
            });
            let content_window = self.build_window(content, inner, depth + 1)?;
            self.nodes[node.0].content_window = Some(content_window);
        }

        Ok(node)
    }

    fn push_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || parent == child {
            return;
        }
        if let Some(old) = self.nodes.get(child.0).and_then(|n| n.parent) {
            self.unlink(old, child);
        }
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child.0) {
            c.parent = Some(parent);
        }
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.retain(|&c| c != child);
        }
        if let Some(c) = self.nodes.get_mut(child.0) {
            c.parent = None;
        }
    }

    fn node(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0)
    }

    fn window(&self, window: WindowId) -> Option<&WindowData> {
        self.windows.get(window.0)
    }

    /// Pre-order walk of the window's document, root excluded.
    fn descendants(&self, window: WindowId) -> Vec<NodeId> {
        let Some(root) = self.window(window).map(|w| w.root) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(root)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            out.push(id);
            if let Some(n) = self.node(id) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Inspection helpers
    // ------------------------------------------------------------------

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[DomEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<DomEvent> {
        std::mem::take(&mut self.events)
    }

    /// The element that last received focus.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// First element (in any window) whose `id` attribute equals `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.attributes.get("id").map(String::as_str) == Some(id))
            .map(NodeId)
    }

    /// The window whose document contains `node`.
    #[must_use]
    pub fn window_of(&self, node: NodeId) -> Option<WindowId> {
        self.node(node).map(|n| n.window)
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Text of the node and all its descendants, concatenated.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(n) = self.node(node) {
            out.push_str(&n.text);
            for &child in &n.children {
                out.push_str(&self.text_content(child));
            }
        }
        out
    }

    /// Number of nodes created through [`Dom::create_element`] that are
    /// still reachable from a document element.
    #[must_use]
    pub fn attached_created_nodes(&self) -> usize {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| self.nodes[id.0].created && self.is_connected(id))
            .count()
    }

    /// Short human-readable description like `a#home` or `iframe`.
    #[must_use]
    pub fn describe(&self, node: NodeId) -> String {
        match self.node(node) {
            Some(n) => match n.attributes.get("id") {
                Some(id) => format!("{}#{}", n.tag, id),
                None => n.tag.clone(),
            },
            None => format!("<missing {}>", node.0),
        }
    }
}

impl Dom for MemoryDom {
    type Window = WindowId;
    type Node = NodeId;

    fn inner_size(&self, window: &WindowId) -> Size {
        self.window(*window).map(|w| w.inner).unwrap_or_default()
    }

    fn scroll_offset(&self, window: &WindowId) -> Point {
        self.window(*window).map(|w| w.scroll).unwrap_or_default()
    }

    fn document_element(&self, window: &WindowId) -> NodeId {
        self.window(*window)
            .map(|w| w.root)
            .unwrap_or(NodeId(usize::MAX))
    }

    fn query_interactive(&self, window: &WindowId) -> Vec<NodeId> {
        self.descendants(*window)
            .into_iter()
            .filter(|&id| {
                self.node(id).is_some_and(|n| {
                    query::is_interactive(&n.tag, |name| {
                        n.attributes.get(name).map(String::as_str)
                    })
                })
            })
            .collect()
    }

    fn frames(&self, window: &WindowId) -> Vec<NodeId> {
        self.descendants(*window)
            .into_iter()
            .filter(|&id| {
                self.node(id)
                    .is_some_and(|n| matches!(n.tag.as_str(), "frame" | "iframe"))
            })
            .collect()
    }

    fn content_window(&self, frame: &NodeId) -> Option<WindowId> {
        self.node(*frame).and_then(|n| n.content_window)
    }

    fn bounding_rect(&self, node: &NodeId) -> Option<Rect> {
        self.node(*node).and_then(|n| n.rect)
    }

    fn computed_style(&self, node: &NodeId) -> ComputedStyle {
        self.node(*node).map(|n| n.computed).unwrap_or_default()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.node(*node).map(|n| n.tag.clone()).unwrap_or_default()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.node(*node).and_then(|n| n.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.remove(name);
        }
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        let Some(window) = self.node(*node).and_then(|n| self.window(n.window)) else {
            return false;
        };

        let mut current = *node;
        loop {
            if current == window.root {
                return true;
            }
            match self.node(current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn focus(&mut self, node: &NodeId) {
        trace!("focus {}", self.describe(*node));
        self.focused = Some(*node);
        self.events.push(DomEvent::Focus { node: *node });
    }

    fn click(&mut self, node: &NodeId) {
        trace!("click {}", self.describe(*node));
        let target = self.attribute(node, "target");
        self.events.push(DomEvent::Click {
            node: *node,
            target,
        });
    }

    fn create_element(&mut self, window: &WindowId, tag: &str) -> NodeId {
        let mut data = NodeData::new(*window, tag);
        data.created = true;
        self.push_node(data)
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.inline_style
                .insert(property.to_string(), value.to_string());
            // Inline visibility wins over the computed value in this model.
            if property == "visibility" {
                n.computed.visibility = match value {
                    "hidden" => Visibility::Hidden,
                    "collapse" => Visibility::Collapse,
                    _ => Visibility::Visible,
                };
            }
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.node(*node)
            .and_then(|n| n.inline_style.get(property).cloned())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let children = self
            .node(*node)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        for child in children {
            self.unlink(*node, child);
        }
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.text = text.to_string();
        }
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.link(*parent, *child);
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node).and_then(|n| n.parent)
    }

    fn detach(&mut self, node: &NodeId) {
        if let Some(parent) = self.parent(node) {
            self.unlink(parent, *node);
            self.events.push(DomEvent::Detach { node: *node });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(id: &str) -> ElementSpec {
        ElementSpec::new("a")
            .with_attr("id", id)
            .with_attr("href", format!("/{}", id))
            .with_rect(0.0, 0.0, 50.0, 20.0)
    }

    #[test]
    fn test_builds_top_window_with_default_viewport() {
        let dom = MemoryDom::from_page(&PageSpec::default()).unwrap();
        let top = dom.top_window();
        assert_eq!(dom.inner_size(&top), DEFAULT_VIEWPORT);
        assert!(dom.query_interactive(&top).is_empty());
    }

    #[test]
    fn test_query_returns_document_order() {
        let page = PageSpec::new(800.0, 600.0)
            .with_element(
                ElementSpec::new("div")
                    .with_child(link("first"))
                    .with_child(ElementSpec::new("p").with_child(link("second"))),
            )
            .with_element(link("third"))
            .with_element(ElementSpec::new("input").with_attr("type", "hidden"));
        let dom = MemoryDom::from_page(&page).unwrap();

        let found: Vec<String> = dom
            .query_interactive(&dom.top_window())
            .into_iter()
            .map(|n| dom.describe(n))
            .collect();
        assert_eq!(found, vec!["a#first", "a#second", "a#third"]);
    }

    #[test]
    fn test_frames_get_content_windows_unless_cross_origin() {
        let page = PageSpec::new(800.0, 600.0)
            .with_element(
                ElementSpec::new("iframe")
                    .with_attr("id", "same")
                    .with_rect(10.0, 10.0, 300.0, 200.0)
                    .with_frame(PageSpec::default().with_element(link("inner"))),
            )
            .with_element(
                ElementSpec::new("iframe")
                    .with_attr("id", "other")
                    .with_rect(10.0, 300.0, 300.0, 200.0)
                    .cross_origin(),
            );
        let dom = MemoryDom::from_page(&page).unwrap();
        let top = dom.top_window();

        let frames = dom.frames(&top);
        assert_eq!(frames.len(), 2);

        let inner = dom.content_window(&frames[0]).unwrap();
        assert_eq!(dom.inner_size(&inner), Size::new(300.0, 200.0));
        assert_eq!(dom.query_interactive(&inner).len(), 1);
        assert!(dom.content_window(&frames[1]).is_none());
    }

    #[test]
    fn test_rejects_page_content_on_non_frames() {
        let page = PageSpec::default()
            .with_element(ElementSpec::new("div").with_frame(PageSpec::default()));
        let err = MemoryDom::from_page(&page).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidPage);
    }

    #[test]
    fn test_rejects_empty_tags_and_bad_viewports() {
        assert!(MemoryDom::from_page(&PageSpec::default().with_element(ElementSpec::new(" "))).is_err());
        assert!(MemoryDom::from_page(&PageSpec::new(-1.0, 10.0)).is_err());
        assert!(MemoryDom::from_page(&PageSpec::new(f64::NAN, 10.0)).is_err());
    }

    #[test]
    fn test_rejects_runaway_frame_nesting() {
        let mut page = PageSpec::default();
        for _ in 0..=MAX_FRAME_DEPTH {
            page = PageSpec::default().with_element(
                ElementSpec::new("iframe")
                    .with_rect(0.0, 0.0, 10.0, 10.0)
                    .with_frame(page),
            );
        }
        let err = MemoryDom::from_page(&page).unwrap_err();
        assert!(err.message.contains("Frame nesting"));
    }

    #[test]
    fn test_detach_disconnects_subtree_and_records_event() {
        let page = PageSpec::default()
            .with_element(ElementSpec::new("div").with_attr("id", "box").with_child(link("x")));
        let mut dom = MemoryDom::from_page(&page).unwrap();
        let wrapper = dom.find_by_id("box").unwrap();
        let anchor = dom.find_by_id("x").unwrap();

        assert!(dom.is_connected(&anchor));
        dom.detach(&wrapper);
        assert!(!dom.is_connected(&anchor));
        assert_eq!(dom.events(), &[DomEvent::Detach { node: wrapper }]);

        // Second detach is a no-op
        dom.detach(&wrapper);
        assert_eq!(dom.events().len(), 1);
    }

    #[test]
    fn test_created_nodes_are_tracked_while_attached() {
        let mut dom = MemoryDom::from_page(&PageSpec::default()).unwrap();
        let top = dom.top_window();
        let root = dom.document_element(&top);

        let container = dom.create_element(&top, "div");
        let badge = dom.create_element(&top, "span");
        assert_eq!(dom.attached_created_nodes(), 0);

        dom.append_child(&container, &badge);
        dom.append_child(&root, &container);
        assert_eq!(dom.attached_created_nodes(), 2);
        assert_eq!(dom.parent(&badge), Some(container));

        dom.detach(&badge);
        dom.detach(&container);
        assert_eq!(dom.attached_created_nodes(), 0);
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut dom = MemoryDom::from_page(&PageSpec::default()).unwrap();
        let top = dom.top_window();
        let badge = dom.create_element(&top, "span");
        let part = dom.create_element(&top, "span");
        dom.set_text(&part, "A");
        dom.append_child(&badge, &part);
        assert_eq!(dom.text_content(badge), "A");

        dom.set_text(&badge, "AS");
        assert!(dom.children(badge).is_empty());
        assert_eq!(dom.text_content(badge), "AS");
    }

    #[test]
    fn test_click_records_current_target() {
        let mut dom = MemoryDom::from_page(&PageSpec::default().with_element(link("x"))).unwrap();
        let anchor = dom.find_by_id("x").unwrap();

        dom.set_attribute(&anchor, "target", "_blank");
        dom.click(&anchor);
        dom.remove_attribute(&anchor, "target");
        dom.click(&anchor);

        assert_eq!(
            dom.take_events(),
            vec![
                DomEvent::Click {
                    node: anchor,
                    target: Some("_blank".to_string())
                },
                DomEvent::Click {
                    node: anchor,
                    target: None
                },
            ]
        );
        assert!(dom.events().is_empty());
    }

    #[test]
    fn test_page_spec_parses_from_json() {
        let json = r#"{
            "viewport": {"width": 640, "height": 480},
            "scroll": {"x": 0, "y": 120},
            "elements": [
                {"tag": "a", "attributes": {"href": "/"}, "rect": {"left": 1, "top": 2, "width": 3, "height": 4}},
                {"tag": "button", "display": "none"},
                {"tag": "iframe", "cross_origin": true}
            ]
        }"#;
        let page: PageSpec = serde_json::from_str(json).unwrap();
        assert_eq!(page.scroll, Point::new(0.0, 120.0));
        assert_eq!(page.elements[1].style.display, Display::None);
        assert!(page.elements[2].cross_origin);

        let dom = MemoryDom::from_page(&page).unwrap();
        assert_eq!(dom.scroll_offset(&dom.top_window()), Point::new(0.0, 120.0));
    }
}
