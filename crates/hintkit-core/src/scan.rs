//! Element scanning across the frame tree.
//!
//! The scan walks the top window's document, then every reachable frame
//! inside it, depth-first, in document order. Each document contributes the
//! elements matched by the interactivity query that have a box, overlap the
//! visible part of the top viewport and are rendered. Survivors receive
//! consecutive labels and a badge.
//!
//! # Coordinates
//!
//! Element rectangles are relative to their own window. The scan threads a
//! [`FrameContext`] holding the frame's offset from the top window and
//! re-expresses the top viewport in that frame's space (see
//! [`ClipRect::for_frame`]). Badges are placed in document coordinates, so
//! the window's scroll offset is added and the anchor is clamped to the
//! scroll origin.

use std::fmt;
use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::config::HintConfig;
use crate::dom::Dom;
use crate::geometry::{ClipRect, Point, Rect, Size};
use crate::label::LabelAllocator;
use crate::overlay::Overlay;

/// A labeled reference to one interactive element.
pub struct Hint<D: Dom> {
    /// The page element. Not owned; may go stale.
    pub element: D::Node,
    /// Window whose document contains the element (and the badge).
    pub window: D::Window,
    /// Label the user types. Unique within the session.
    pub sequence: String,
    /// Overlay badge showing the label. Owned by the [`Overlay`].
    pub badge: D::Node,
}

impl<D: Dom> fmt::Debug for Hint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hint")
            .field("element", &self.element)
            .field("window", &self.window)
            .field("sequence", &self.sequence)
            .field("badge", &self.badge)
            .finish()
    }
}

/// Position of a frame's origin relative to the top window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameContext {
    pub offset: Point,
}

impl FrameContext {
    /// Context for a frame element whose rectangle is `rect` in this context.
    #[must_use]
    pub fn enter(self, rect: &Rect) -> Self {
        Self {
            offset: self.offset.offset_by(rect),
        }
    }
}

/// Scan `top` and its frames, creating one badge per hint.
///
/// Returns hints in discovery order. Never returns more than
/// `config.max_hints`; once the cap is reached no further elements or
/// frames are visited.
pub fn scan<D: Dom>(
    dom: &mut D,
    top: &D::Window,
    config: &HintConfig,
    overlay: &mut Overlay<D>,
) -> Vec<Hint<D>> {
    let mut scanner = Scanner {
        max_hints: config.max_hints,
        top_viewport: dom.inner_size(top),
        labels: LabelAllocator::new(&config.alphabet),
        hints: Vec::new(),
        documents: 0,
    };

    let flow = scanner.scan_window(dom, overlay, top, FrameContext::default());
    if flow.is_break() {
        debug!("Hint cap of {} reached, scan stopped early", config.max_hints);
    }
    debug!(
        "Scanned {} hints across {} documents",
        scanner.hints.len(),
        scanner.documents
    );

    scanner.hints
}

struct Scanner<'a, D: Dom> {
    max_hints: usize,
    top_viewport: Size,
    labels: LabelAllocator<'a>,
    hints: Vec<Hint<D>>,
    documents: usize,
}

impl<D: Dom> Scanner<'_, D> {
    fn cap_reached(&self) -> bool {
        self.hints.len() >= self.max_hints
    }

    fn scan_window(
        &mut self,
        dom: &mut D,
        overlay: &mut Overlay<D>,
        window: &D::Window,
        context: FrameContext,
    ) -> ControlFlow<()> {
        self.documents += 1;

        let clip = ClipRect::for_frame(self.top_viewport, context.offset, dom.inner_size(window));
        let scroll = dom.scroll_offset(window);

        // Snapshot before the overlay mutates the document.
        let candidates = dom.query_interactive(window);
        let container = overlay.create_container(dom, window);

        let mut flow = ControlFlow::Continue(());
        for element in candidates {
            if self.cap_reached() {
                flow = ControlFlow::Break(());
                break;
            }

            let Some(rect) = dom.bounding_rect(&element) else {
                continue;
            };
            if !clip.overlaps(&rect) {
                trace!("Skipping {:?}: outside viewport", element);
                continue;
            }
            if !dom.computed_style(&element).is_rendered() {
                trace!("Skipping {:?}: not rendered", element);
                continue;
            }

            let anchor = Point::new(
                (rect.left + scroll.x).max(scroll.x),
                (rect.top + scroll.y).max(scroll.y),
            );
            let sequence = self.labels.next_label();
            let badge = overlay.add_badge(dom, window, &container, &sequence, anchor);

            self.hints.push(Hint {
                element,
                window: window.clone(),
                sequence,
                badge,
            });
        }

        overlay.attach_container(dom, window, &container);

        if flow.is_break() {
            return flow;
        }

        for frame in dom.frames(window) {
            if self.cap_reached() {
                return ControlFlow::Break(());
            }

            let Some(content) = dom.content_window(&frame) else {
                debug!("Skipping inaccessible frame {:?}", frame);
                continue;
            };
            let Some(rect) = dom.bounding_rect(&frame) else {
                continue;
            };
            if !clip.overlaps(&rect) {
                continue;
            }

            if self
                .scan_window(dom, overlay, &content, context.enter(&rect))
                .is_break()
            {
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }
}
