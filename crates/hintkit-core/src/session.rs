//! Hint-mode sessions and the slot that holds the active one.
//!
//! A [`HintSession`] lives from install to uninstall: it scans the page,
//! owns the overlay, tracks the typed sequence and activates hints. Once
//! uninstalled (explicitly or by activating a hint) it is inert.
//!
//! A [`HintModeSlot`] is what the browser's key dispatcher talks to. It
//! holds at most one active session; installing over an existing session
//! keeps the old one as the restore target, and uninstalling the new one
//! puts the old one back.

use tracing::{debug, info};

use crate::activate;
use crate::config::HintConfig;
use crate::dom::Dom;
use crate::matcher::{self, Matcher};
use crate::mode::ModeSignal;
use crate::overlay::Overlay;
use crate::scan::{self, Hint};

/// One install-to-uninstall lifetime of hint mode.
pub struct HintSession<D: Dom> {
    hints: Vec<Hint<D>>,
    overlay: Overlay<D>,
    matcher: Matcher,
    open_in_new_context: bool,
    finished: bool,
    previous: Option<Box<HintSession<D>>>,
}

impl<D: Dom> HintSession<D> {
    /// Scan `window` and draw badges for every hint.
    pub fn install(dom: &mut D, window: &D::Window, config: &HintConfig) -> Self {
        let mut overlay = Overlay::new(config.badge.clone());
        let hints = scan::scan(dom, window, config, &mut overlay);
        info!("Hint mode installed with {} hints", hints.len());

        Self {
            hints,
            overlay,
            matcher: Matcher::new(config.alphabet.clone()),
            open_in_new_context: false,
            finished: false,
            previous: None,
        }
    }

    /// Feed one typed character.
    ///
    /// Invalid input is ignored. When the new sequence narrows the
    /// registry to a single hint, that hint is activated immediately.
    pub fn add_char(&mut self, dom: &mut D, input: &str) -> ModeSignal {
        if self.finished || !self.matcher.push(input) {
            return ModeSignal::Ignore;
        }

        let partition = self.matcher.partition(&self.hints);
        if let Some(index) = partition.unique() {
            return self.activate_hint(dom, index);
        }

        matcher::render(
            dom,
            &mut self.overlay,
            &self.hints,
            self.matcher.sequence(),
            &partition,
        );
        ModeSignal::Ignore
    }

    /// Undo the last typed character. Never activates a hint.
    pub fn remove_char(&mut self, dom: &mut D) {
        if self.finished || !self.matcher.pop() {
            return;
        }
        let partition = self.matcher.partition(&self.hints);
        matcher::render(
            dom,
            &mut self.overlay,
            &self.hints,
            self.matcher.sequence(),
            &partition,
        );
    }

    /// Activate the hint whose label equals the typed sequence exactly.
    pub fn activate_current_match(&mut self, dom: &mut D) -> ModeSignal {
        if self.finished {
            return ModeSignal::Ignore;
        }
        match self.matcher.exact_match(&self.hints) {
            Some(index) => self.activate_hint(dom, index),
            None => ModeSignal::Ignore,
        }
    }

    /// Make later activations request a new browsing context.
    pub fn set_open_in_new_context(&mut self) {
        self.open_in_new_context = true;
    }

    /// Remove the overlay and drop all session state. Idempotent.
    pub fn uninstall(&mut self, dom: &mut D) {
        self.overlay.teardown(dom);
        self.hints.clear();
        self.matcher.clear();
        if !self.finished {
            debug!("Hint mode uninstalled");
        }
        self.finished = true;
    }

    fn activate_hint(&mut self, dom: &mut D, index: usize) -> ModeSignal {
        let Some(hint) = self.hints.get(index) else {
            return ModeSignal::Ignore;
        };
        let element = hint.element.clone();
        debug!("Activating hint {}", hint.sequence);

        let Some(category) = activate::resolve(dom, &element) else {
            return ModeSignal::Ignore;
        };

        // Overlay goes first: the action may re-enter hint mode.
        self.uninstall(dom);
        activate::perform(dom, &element, category, self.open_in_new_context)
    }

    #[must_use]
    pub fn hints(&self) -> &[Hint<D>] {
        &self.hints
    }

    #[must_use]
    pub fn current_sequence(&self) -> &str {
        self.matcher.sequence()
    }

    #[must_use]
    pub fn opens_in_new_context(&self) -> bool {
        self.open_in_new_context
    }

    /// Whether the session has been uninstalled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Overlay nodes still tracked (zero once uninstalled).
    #[must_use]
    pub fn overlay_nodes(&self) -> usize {
        self.overlay.node_count()
    }
}

impl<D: Dom> std::fmt::Debug for HintSession<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintSession")
            .field("hints", &self.hints.len())
            .field("sequence", &self.matcher.sequence())
            .field("open_in_new_context", &self.open_in_new_context)
            .field("finished", &self.finished)
            .field("has_previous", &self.previous.is_some())
            .finish()
    }
}

/// The single hint-mode entry point for a browser tab.
pub struct HintModeSlot<D: Dom> {
    current: Option<HintSession<D>>,
}

impl<D: Dom> Default for HintModeSlot<D> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<D: Dom> HintModeSlot<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new session, keeping any current one to restore later.
    pub fn install(
        &mut self,
        dom: &mut D,
        window: &D::Window,
        config: &HintConfig,
    ) -> &mut HintSession<D> {
        let mut session = HintSession::install(dom, window, config);
        session.previous = self.current.take().map(Box::new);
        self.current.insert(session)
    }

    /// The active session, if any.
    #[must_use]
    pub fn current(&self) -> Option<&HintSession<D>> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.current.is_some()
    }

    pub fn add_char(&mut self, dom: &mut D, input: &str) -> ModeSignal {
        let signal = match self.current.as_mut() {
            Some(session) => session.add_char(dom, input),
            None => ModeSignal::Ignore,
        };
        self.restore_if_finished();
        signal
    }

    pub fn remove_char(&mut self, dom: &mut D) {
        if let Some(session) = self.current.as_mut() {
            session.remove_char(dom);
        }
    }

    pub fn activate_current_match(&mut self, dom: &mut D) -> ModeSignal {
        let signal = match self.current.as_mut() {
            Some(session) => session.activate_current_match(dom),
            None => ModeSignal::Ignore,
        };
        self.restore_if_finished();
        signal
    }

    pub fn set_open_in_new_context(&mut self) {
        if let Some(session) = self.current.as_mut() {
            session.set_open_in_new_context();
        }
    }

    /// Tear the active session down and restore the one it replaced.
    ///
    /// Safe to call at any time, any number of times.
    pub fn uninstall(&mut self, dom: &mut D) {
        if let Some(session) = self.current.as_mut() {
            session.uninstall(dom);
        }
        self.restore_if_finished();
    }

    fn restore_if_finished(&mut self) {
        if self.current.as_ref().is_some_and(HintSession::is_finished) {
            self.current = self
                .current
                .take()
                .and_then(|mut finished| finished.previous.take())
                .map(|previous| *previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{DomEvent, ElementSpec, MemoryDom, NodeId, PageSpec};

    fn link(id: &str, top: f64) -> ElementSpec {
        ElementSpec::new("a")
            .with_attr("id", id)
            .with_attr("href", "#")
            .with_rect(0.0, top, 40.0, 16.0)
    }

    fn links(count: usize) -> PageSpec {
        PageSpec::new(800.0, 600.0)
            .with_elements((0..count).map(|i| link(&format!("l{}", i + 1), i as f64 * 20.0)))
    }

    fn install(page: &PageSpec) -> (MemoryDom, HintSession<MemoryDom>) {
        let mut dom = MemoryDom::from_page(page).unwrap();
        let top = dom.top_window();
        let session = HintSession::install(&mut dom, &top, &HintConfig::default());
        (dom, session)
    }

    fn clicks(dom: &MemoryDom) -> Vec<NodeId> {
        dom.events()
            .iter()
            .filter_map(|e| match e {
                DomEvent::Click { node, .. } => Some(*node),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_typing_unique_label_clicks_first_link() {
        let (mut dom, mut session) = install(&links(3));
        let first = dom.find_by_id("l1").unwrap();

        assert_eq!(session.add_char(&mut dom, "a"), ModeSignal::Normal);
        assert_eq!(clicks(&dom), vec![first]);
        assert!(session.is_finished());
        assert_eq!(dom.attached_created_nodes(), 0);
    }

    #[test]
    fn test_shared_prefix_waits_for_more_input() {
        let (mut dom, mut session) = install(&links(12));

        assert_eq!(session.add_char(&mut dom, "a"), ModeSignal::Ignore);
        assert!(clicks(&dom).is_empty());
        assert_eq!(session.current_sequence(), "A");

        let twelfth = dom.find_by_id("l12").unwrap();
        assert_eq!(session.add_char(&mut dom, "D"), ModeSignal::Normal);
        assert_eq!(clicks(&dom), vec![twelfth]);
    }

    #[test]
    fn test_invalid_input_changes_nothing() {
        let (mut dom, mut session) = install(&links(12));
        let events_before = dom.events().len();

        for input in ["", "x", "as", "7", "\n"] {
            assert_eq!(session.add_char(&mut dom, input), ModeSignal::Ignore);
        }
        assert_eq!(session.current_sequence(), "");
        assert_eq!(dom.events().len(), events_before);
    }

    #[test]
    fn test_backspace_never_activates() {
        let (mut dom, mut session) = install(&links(12));

        assert_eq!(session.add_char(&mut dom, "a"), ModeSignal::Ignore);
        // "AJ" matches nothing
        assert_eq!(session.add_char(&mut dom, "j"), ModeSignal::Ignore);
        session.remove_char(&mut dom);
        assert_eq!(session.current_sequence(), "A");
        session.remove_char(&mut dom);
        session.remove_char(&mut dom);
        assert_eq!(session.current_sequence(), "");

        assert!(clicks(&dom).is_empty());
        assert!(!session.is_finished());
        for hint in session.hints() {
            assert_eq!(dom.style(&hint.badge, "visibility").as_deref(), Some("visible"));
            assert_eq!(dom.text_content(hint.badge), hint.sequence);
        }
    }

    #[test]
    fn test_label_without_longer_siblings_activates_at_once() {
        let (mut dom, mut session) = install(&links(12));
        let second = dom.find_by_id("l2").unwrap();

        assert_eq!(session.add_char(&mut dom, "D"), ModeSignal::Normal);
        assert_eq!(clicks(&dom), vec![second]);
    }

    #[test]
    fn test_exact_match_confirms_shorter_label() {
        let (mut dom, mut session) = install(&links(12));
        let first = dom.find_by_id("l1").unwrap();

        session.add_char(&mut dom, "a");
        assert_eq!(session.activate_current_match(&mut dom), ModeSignal::Normal);
        assert_eq!(clicks(&dom), vec![first]);
    }

    #[test]
    fn test_exact_match_without_sequence_or_label_is_ignored() {
        let (mut dom, mut session) = install(&links(12));
        assert_eq!(session.activate_current_match(&mut dom), ModeSignal::Ignore);

        session.add_char(&mut dom, "a");
        session.add_char(&mut dom, "j");
        assert_eq!(session.activate_current_match(&mut dom), ModeSignal::Ignore);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_textarea_enters_insert_mode_with_focus() {
        let page = PageSpec::new(800.0, 600.0).with_element(
            ElementSpec::new("textarea")
                .with_attr("id", "notes")
                .with_rect(0.0, 0.0, 200.0, 80.0),
        );
        let (mut dom, mut session) = install(&page);
        let notes = dom.find_by_id("notes").unwrap();

        assert_eq!(session.add_char(&mut dom, "a"), ModeSignal::Insert);
        assert_eq!(dom.focused(), Some(notes));
    }

    #[test]
    fn test_new_context_flag_sets_and_restores_target() {
        let page = PageSpec::new(800.0, 600.0).with_elements([
            link("plain", 0.0),
            link("framed", 20.0).with_attr("target", "content"),
        ]);

        let (mut dom, mut session) = install(&page);
        session.set_open_in_new_context();
        assert!(session.opens_in_new_context());
        session.add_char(&mut dom, "a");
        let plain = dom.find_by_id("plain").unwrap();
        assert_eq!(
            dom.events().last(),
            Some(&DomEvent::Click {
                node: plain,
                target: Some("_blank".to_string())
            })
        );
        assert_eq!(dom.attribute(&plain, "target"), None);

        let (mut dom, mut session) = install(&page);
        session.set_open_in_new_context();
        session.add_char(&mut dom, "d");
        let framed = dom.find_by_id("framed").unwrap();
        assert_eq!(dom.attribute(&framed, "target").as_deref(), Some("content"));
    }

    #[test]
    fn test_overlay_is_removed_before_the_click() {
        let (mut dom, mut session) = install(&links(3));
        session.add_char(&mut dom, "f");

        let events = dom.events();
        let click_at = events
            .iter()
            .position(|e| matches!(e, DomEvent::Click { .. }))
            .unwrap();
        assert!(click_at > 0);
        assert!(events[..click_at]
            .iter()
            .all(|e| matches!(e, DomEvent::Detach { .. })));
        assert!(events[click_at + 1..].is_empty());
    }

    #[test]
    fn test_stale_hint_is_ignored_without_teardown() {
        let (mut dom, mut session) = install(&links(3));
        let first = dom.find_by_id("l1").unwrap();
        dom.detach(&first);
        dom.take_events();

        assert_eq!(session.add_char(&mut dom, "a"), ModeSignal::Ignore);
        assert!(dom.events().is_empty());
        assert!(!session.is_finished());
        assert_eq!(session.hints().len(), 3);
    }

    #[test]
    fn test_uninstall_twice_leaves_nothing() {
        let (mut dom, mut session) = install(&links(12));
        session.add_char(&mut dom, "a");
        assert!(dom.attached_created_nodes() > 0);

        session.uninstall(&mut dom);
        session.uninstall(&mut dom);
        assert_eq!(dom.attached_created_nodes(), 0);
        assert_eq!(session.overlay_nodes(), 0);
        assert!(session.hints().is_empty());
        assert_eq!(session.current_sequence(), "");
    }

    #[test]
    fn test_finished_session_ignores_everything() {
        let (mut dom, mut session) = install(&links(12));
        session.uninstall(&mut dom);
        dom.take_events();

        assert_eq!(session.add_char(&mut dom, "a"), ModeSignal::Ignore);
        session.remove_char(&mut dom);
        assert_eq!(session.activate_current_match(&mut dom), ModeSignal::Ignore);
        assert!(dom.events().is_empty());
    }

    #[test]
    fn test_slot_restores_previous_session_on_uninstall() {
        let mut dom = MemoryDom::from_page(&links(12)).unwrap();
        let top = dom.top_window();
        let mut slot = HintModeSlot::new();
        assert!(!slot.is_installed());

        slot.install(&mut dom, &top, &HintConfig::default());
        slot.add_char(&mut dom, "a");

        let config = HintConfig {
            max_hints: 2,
            ..HintConfig::default()
        };
        slot.install(&mut dom, &top, &config);
        assert_eq!(slot.current().unwrap().hints().len(), 2);

        slot.uninstall(&mut dom);
        let restored = slot.current().unwrap();
        assert_eq!(restored.hints().len(), 12);
        assert_eq!(restored.current_sequence(), "A");

        slot.uninstall(&mut dom);
        assert!(!slot.is_installed());
        assert_eq!(dom.attached_created_nodes(), 0);

        // Nothing left to uninstall
        slot.uninstall(&mut dom);
        assert!(!slot.is_installed());
    }

    #[test]
    fn test_slot_restores_previous_session_after_activation() {
        let mut dom = MemoryDom::from_page(&links(3)).unwrap();
        let top = dom.top_window();
        let mut slot = HintModeSlot::new();

        slot.install(&mut dom, &top, &HintConfig::default());
        slot.install(&mut dom, &top, &HintConfig::default());
        slot.set_open_in_new_context();

        assert_eq!(slot.add_char(&mut dom, "d"), ModeSignal::Normal);
        let restored = slot.current().unwrap();
        assert!(!restored.is_finished());
        assert!(!restored.opens_in_new_context());
    }

    #[test]
    fn test_empty_slot_ignores_input() {
        let mut dom = MemoryDom::from_page(&links(3)).unwrap();
        let mut slot: HintModeSlot<MemoryDom> = HintModeSlot::new();

        assert_eq!(slot.add_char(&mut dom, "a"), ModeSignal::Ignore);
        assert_eq!(slot.activate_current_match(&mut dom), ModeSignal::Ignore);
        slot.remove_char(&mut dom);
        slot.set_open_in_new_context();
        assert!(dom.events().is_empty());
    }
}
