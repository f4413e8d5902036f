//! JSON reports describing a hint-mode run over an in-memory page.
//!
//! These are the output types of the `hintkit` CLI. A [`HintListing`] shows
//! what a fresh install labels; a [`ReplayReport`] shows what a key
//! sequence did to the page.
//!
//! | Report | Content | Use Case |
//! |--------|---------|----------|
//! | **Listing** | labels, elements, badge positions | Checking scan results |
//! | **Replay** | per-key signals, DOM events, leftovers | Checking activation |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HintConfig;
use crate::dom::memory::{DomEvent, MemoryDom, WindowId};
use crate::dom::Dom;
use crate::input::HintKey;
use crate::mode::ModeSignal;
use crate::scan::Hint;
use crate::session::{HintModeSlot, HintSession};

/// One labeled element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintEntry {
    pub label: String,
    /// Discovery position (1-based), recovered from the label.
    pub ordinal: u32,
    /// Element description like `a#home`.
    pub element: String,
    pub window: WindowId,
    /// Badge `left`/`top` as written to its inline style.
    pub left: String,
    pub top: String,
}

impl HintEntry {
    fn from_hint(dom: &MemoryDom, config: &HintConfig, hint: &Hint<MemoryDom>) -> Self {
        Self {
            label: hint.sequence.clone(),
            ordinal: config.alphabet.decode(&hint.sequence).unwrap_or_default(),
            element: dom.describe(hint.element),
            window: hint.window,
            left: dom.style(&hint.badge, "left").unwrap_or_default(),
            top: dom.style(&hint.badge, "top").unwrap_or_default(),
        }
    }
}

/// Hints produced by installing hint mode on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintListing {
    pub count: usize,
    pub hints: Vec<HintEntry>,
}

impl HintListing {
    /// Install a throwaway session on `dom` and list its hints.
    pub fn capture(dom: &mut MemoryDom, config: &HintConfig) -> Self {
        let top = dom.top_window();
        let mut session = HintSession::install(dom, &top, config);
        let hints: Vec<HintEntry> = session
            .hints()
            .iter()
            .map(|hint| HintEntry::from_hint(dom, config, hint))
            .collect();
        session.uninstall(dom);

        Self {
            count: hints.len(),
            hints,
        }
    }
}

/// Signal returned for one replayed key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOutcome {
    pub key: String,
    pub signal: ModeSignal,
}

/// Result of feeding a key sequence to a fresh hint-mode install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Hints labeled at install time.
    pub hints: Vec<HintEntry>,
    pub keys: Vec<KeyOutcome>,
    /// Last non-`ignore` signal, or `ignore` if hint mode never ended.
    pub final_signal: ModeSignal,
    /// Whether a session is still installed after the last key.
    pub installed: bool,
    /// Typed sequence of the installed session, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    /// Focus, click and removal events, in order.
    pub events: Vec<DomEvent>,
    /// Overlay nodes still attached to a document.
    pub overlay_nodes: usize,
}

impl ReplayReport {
    /// Install hint mode on `dom`, then feed `keys` one by one.
    ///
    /// Keys after the session ends are still dispatched (and ignored), so
    /// the per-key list always matches the input.
    pub fn run(
        dom: &mut MemoryDom,
        config: &HintConfig,
        keys: &[HintKey],
        open_in_new_context: bool,
    ) -> Self {
        let top = dom.top_window();
        let mut slot = HintModeSlot::new();
        let session = slot.install(dom, &top, config);
        if open_in_new_context {
            session.set_open_in_new_context();
        }
        let hints: Vec<HintEntry> = session
            .hints()
            .iter()
            .map(|hint| HintEntry::from_hint(dom, config, hint))
            .collect();
        dom.take_events();

        let mut outcomes = Vec::with_capacity(keys.len());
        let mut final_signal = ModeSignal::Ignore;
        for key in keys {
            let signal = key.dispatch(&mut slot, dom);
            debug!("{} -> {}", key, signal);
            if signal.is_transition() {
                final_signal = signal;
            }
            outcomes.push(KeyOutcome {
                key: key.to_string(),
                signal,
            });
        }

        Self {
            hints,
            keys: outcomes,
            final_signal,
            installed: slot.is_installed(),
            sequence: slot.current().map(|s| s.current_sequence().to_string()),
            events: dom.take_events(),
            overlay_nodes: dom.attached_created_nodes(),
        }
    }
}
