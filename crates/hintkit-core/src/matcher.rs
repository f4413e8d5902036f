//! Incremental prefix matching over the hint registry.
//!
//! The [`Matcher`] owns the typed sequence. After each change the registry
//! is split into hints whose label starts with the sequence and the rest;
//! [`render`] reflects that split on the badges. An empty sequence matches
//! nothing, and every badge is then shown with its full label.

use crate::dom::Dom;
use crate::label::Alphabet;
use crate::overlay::Overlay;
use crate::scan::Hint;

/// Indices into the registry, split by the current sequence.
///
/// `matches` and `non_matches` are disjoint and together cover every hint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub matches: Vec<usize>,
    pub non_matches: Vec<usize>,
}

impl Partition {
    /// The single remaining candidate, if exactly one hint matches.
    #[must_use]
    pub fn unique(&self) -> Option<usize> {
        match self.matches.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// The typed-sequence state machine.
#[derive(Debug, Clone)]
pub struct Matcher {
    alphabet: Alphabet,
    sequence: String,
}

impl Matcher {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            sequence: String::new(),
        }
    }

    /// Append one typed character.
    ///
    /// Returns `false`, leaving the sequence untouched, unless `input` is
    /// exactly one character from the alphabet (case-insensitive).
    pub fn push(&mut self, input: &str) -> bool {
        let mut chars = input.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };
        match self.alphabet.normalize(c) {
            Some(upper) => {
                self.sequence.push(upper);
                true
            }
            None => false,
        }
    }

    /// Drop the last typed character; `false` if nothing was typed.
    pub fn pop(&mut self) -> bool {
        self.sequence.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.sequence.clear();
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Split the registry by prefix.
    #[must_use]
    pub fn partition<D: Dom>(&self, hints: &[Hint<D>]) -> Partition {
        if self.sequence.is_empty() {
            return Partition {
                matches: Vec::new(),
                non_matches: (0..hints.len()).collect(),
            };
        }

        let (matches, non_matches): (Vec<usize>, Vec<usize>) = (0..hints.len())
            .partition(|&i| hints[i].sequence.starts_with(self.sequence.as_str()));
        Partition {
            matches,
            non_matches,
        }
    }

    /// Index of the hint whose whole label equals the sequence.
    #[must_use]
    pub fn exact_match<D: Dom>(&self, hints: &[Hint<D>]) -> Option<usize> {
        if self.sequence.is_empty() {
            return None;
        }
        hints.iter().position(|h| h.sequence == self.sequence)
    }
}

/// Update badge visuals for `partition` under `sequence`.
pub fn render<D: Dom>(
    dom: &mut D,
    overlay: &mut Overlay<D>,
    hints: &[Hint<D>],
    sequence: &str,
    partition: &Partition,
) {
    if sequence.is_empty() {
        for hint in hints {
            overlay.show_label(dom, &hint.badge, &hint.sequence);
        }
        return;
    }

    for &i in &partition.matches {
        let hint = &hints[i];
        let remaining = &hint.sequence[sequence.len()..];
        overlay.show_progress(dom, &hint.window, &hint.badge, sequence, remaining);
    }
    for &i in &partition.non_matches {
        overlay.hide(dom, &hints[i].badge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HintConfig;
    use crate::dom::memory::{ElementSpec, MemoryDom, PageSpec};
    use crate::overlay::BadgeStyle;
    use crate::scan::scan;

    fn registry(count: usize) -> (MemoryDom, Overlay<MemoryDom>, Vec<Hint<MemoryDom>>) {
        let page = PageSpec::new(800.0, 600.0).with_elements((0..count).map(|i| {
            ElementSpec::new("a")
                .with_attr("href", "#")
                .with_rect(0.0, i as f64, 10.0, 10.0)
        }));
        let mut dom = MemoryDom::from_page(&page).unwrap();
        let top = dom.top_window();
        let mut overlay = Overlay::new(BadgeStyle::default());
        let hints = scan(&mut dom, &top, &HintConfig::default(), &mut overlay);
        (dom, overlay, hints)
    }

    fn matcher() -> Matcher {
        Matcher::new(Alphabet::default())
    }

    #[test]
    fn test_push_accepts_single_alphabet_chars_case_insensitively() {
        let mut m = matcher();
        assert!(m.push("a"));
        assert!(m.push("S"));
        assert_eq!(m.sequence(), "AS");
    }

    #[test]
    fn test_push_rejects_invalid_input() {
        let mut m = matcher();
        assert!(!m.push(""));
        assert!(!m.push("as"));
        assert!(!m.push("x"));
        assert!(!m.push("1"));
        assert!(!m.push("é"));
        assert_eq!(m.sequence(), "");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut m = matcher();
        assert!(!m.pop());
        m.push("a");
        assert!(m.pop());
        assert_eq!(m.sequence(), "");
    }

    #[test]
    fn test_empty_sequence_matches_nothing() {
        let (_, _, hints) = registry(3);
        let partition = matcher().partition(&hints);
        assert!(partition.matches.is_empty());
        assert_eq!(partition.non_matches, vec![0, 1, 2]);
        assert_eq!(partition.unique(), None);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let (_, _, hints) = registry(25);
        let mut m = matcher();
        for key in ["a", "d", "d"] {
            m.push(key);
            let p = m.partition(&hints);
            let mut all: Vec<usize> = p.matches.iter().chain(&p.non_matches).copied().collect();
            all.sort_unstable();
            assert_eq!(all, (0..hints.len()).collect::<Vec<_>>());
            assert!(p.matches.iter().all(|i| !p.non_matches.contains(i)));
        }
    }

    #[test]
    fn test_shared_prefix_is_not_unique() {
        let (_, _, hints) = registry(12);
        let mut m = matcher();
        m.push("a");
        let p = m.partition(&hints);
        // A, AS, AA, AD
        assert_eq!(p.matches, vec![0, 9, 10, 11]);
        assert_eq!(p.unique(), None);

        m.push("d");
        assert_eq!(m.partition(&hints).unique(), Some(11));
    }

    #[test]
    fn test_exact_match_requires_whole_label() {
        let (_, _, hints) = registry(12);
        let mut m = matcher();
        assert_eq!(m.exact_match(&hints), None);
        m.push("a");
        assert_eq!(m.exact_match(&hints), Some(0));
        m.push("s");
        assert_eq!(m.exact_match(&hints), Some(9));
        m.push("s");
        assert_eq!(m.exact_match(&hints), None);
    }

    #[test]
    fn test_render_hides_non_matches_and_splits_matches() {
        let (mut dom, mut overlay, hints) = registry(12);
        let mut m = matcher();
        m.push("a");
        let p = m.partition(&hints);
        render(&mut dom, &mut overlay, &hints, m.sequence(), &p);

        let hidden = &hints[1].badge;
        assert_eq!(dom.style(hidden, "visibility").as_deref(), Some("hidden"));
        assert!(dom.is_connected(hidden));

        let badge = hints[9].badge;
        assert_eq!(dom.style(&badge, "visibility").as_deref(), Some("visible"));
        let parts = dom.children(badge).to_vec();
        assert_eq!(dom.text_content(parts[0]), "A");
        assert_eq!(dom.text_content(parts[1]), "S");
    }

    #[test]
    fn test_render_with_empty_sequence_restores_full_labels() {
        let (mut dom, mut overlay, hints) = registry(12);
        let mut m = matcher();
        m.push("a");
        render(&mut dom, &mut overlay, &hints, m.sequence(), &m.partition(&hints));

        m.pop();
        render(&mut dom, &mut overlay, &hints, m.sequence(), &m.partition(&hints));
        for hint in &hints {
            assert_eq!(dom.style(&hint.badge, "visibility").as_deref(), Some("visible"));
            assert_eq!(dom.text_content(hint.badge), hint.sequence);
            assert!(dom.children(hint.badge).is_empty());
        }
    }
}
