//! Acting on a selected element.
//!
//! Activation is split in two so the caller can tear the overlay down in
//! between: [`resolve`] checks the element is still live and classifies it,
//! then [`perform`] focuses or clicks it. The overlay must be gone before
//! `perform` runs, because focus and click handlers may re-enter hint mode.

use tracing::debug;

use crate::dom::{Dom, ElementCategory};
use crate::mode::ModeSignal;

/// `target` value requesting a new browsing context.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Classify a hint's element, or `None` if it is no longer in its document.
pub fn resolve<D: Dom>(dom: &D, element: &D::Node) -> Option<ElementCategory> {
    if !dom.is_connected(element) {
        debug!("Hint element {:?} is stale", element);
        return None;
    }
    let tag = dom.tag_name(element);
    let input_type = dom.attribute(element, "type");
    Some(ElementCategory::classify(&tag, input_type.as_deref()))
}

/// Focus or click `element` according to its category.
///
/// With `open_in_new_context`, clickable elements are clicked with
/// `target="_blank"` set for the duration of the click; the previous
/// `target` (or its absence) is restored afterwards.
pub fn perform<D: Dom>(
    dom: &mut D,
    element: &D::Node,
    category: ElementCategory,
    open_in_new_context: bool,
) -> ModeSignal {
    match category {
        ElementCategory::EditableControl => {
            dom.focus(element);
            ModeSignal::Insert
        }
        ElementCategory::Frame => {
            dom.focus(element);
            ModeSignal::Normal
        }
        ElementCategory::Clickable if open_in_new_context => {
            let previous = dom.attribute(element, "target");
            dom.set_attribute(element, "target", NEW_CONTEXT_TARGET);
            dom.click(element);
            match previous {
                Some(value) => dom.set_attribute(element, "target", &value),
                None => dom.remove_attribute(element, "target"),
            }
            ModeSignal::Normal
        }
        ElementCategory::Clickable => {
            dom.click(element);
            ModeSignal::Normal
        }
    }
}
