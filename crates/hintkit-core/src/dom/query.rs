//! The fixed interactivity query.
//!
//! Hosts with a native XPath engine evaluate [`INTERACTIVE_XPATH`] as an
//! ordered snapshot. [`is_interactive`] is the same predicate for hosts
//! (like [`MemoryDom`](super::memory::MemoryDom)) that filter elements
//! themselves.

/// Ordered-snapshot XPath selecting every element hint mode labels.
pub const INTERACTIVE_XPATH: &str = "//*[@onclick or @onmouseover or @onmousedown or \
     @onmouseup or @oncommand or @href] | //input[not(@type=\"hidden\")] | \
     //a[href] | //area | //textarea | //button | //select";

/// Attributes that make any element interactive.
const HANDLER_ATTRIBUTES: &[&str] = &[
    "onclick",
    "onmouseover",
    "onmousedown",
    "onmouseup",
    "oncommand",
    "href",
];

/// Tags that are always interactive.
const INTERACTIVE_TAGS: &[&str] = &["area", "textarea", "button", "select"];

/// Evaluate the interactivity predicate for one element.
///
/// `tag_name` is lower case; `attribute` looks up an attribute by name.
pub fn is_interactive<'a>(tag_name: &str, attribute: impl Fn(&str) -> Option<&'a str>) -> bool {
    if HANDLER_ATTRIBUTES
        .iter()
        .any(|name| attribute(name).is_some())
    {
        return true;
    }

    match tag_name {
        "input" => attribute("type") != Some("hidden"),
        tag => INTERACTIVE_TAGS.contains(&tag),
    }
}
