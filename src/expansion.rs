//! Single-Expansion State
//!
//! At most one card of a section shows its long description at a time.

/// Which card of a section is expanded, if any
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    expanded: Option<usize>,
}

impl Expansion {
    /// Collapse `index` if it is the expanded card, otherwise expand it
    /// (replacing whatever was expanded before).
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }
}

/// True only when a card goes from collapsed (or unmounted) to expanded
pub fn entered_expansion(previous: Option<bool>, now: bool) -> bool {
    now && !previous.unwrap_or(false)
}

/// A card scrolls into view when it just expanded and has details to show
pub fn should_scroll(previous: Option<bool>, now: bool, has_details: bool) -> bool {
    has_details && entered_expansion(previous, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = Expansion::default();
        assert_eq!(state.expanded(), None);
        assert!((0..3).all(|i| !state.is_expanded(i)));
    }

    #[test]
    fn test_toggle_sequence() {
        // Items [A, B, C]
        let mut state = Expansion::default();
        state.toggle(1);
        assert_eq!(state.expanded(), Some(1));
        state.toggle(1);
        assert_eq!(state.expanded(), None);
        state.toggle(2);
        assert_eq!(state.expanded(), Some(2));
    }

    #[test]
    fn test_new_index_replaces_old() {
        let mut state = Expansion::default();
        state.toggle(0);
        state.toggle(2);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(2));
    }

    #[test]
    fn test_at_most_one_expanded() {
        let mut state = Expansion::default();
        let sequence = [0, 1, 1, 3, 2, 2, 2, 0, 3, 3, 1];
        for index in sequence {
            state.toggle(index);
            let expanded = (0..4).filter(|&i| state.is_expanded(i)).count();
            assert!(expanded <= 1);
        }
        // 1 was toggled last and was not expanded before
        assert_eq!(state.expanded(), Some(1));
    }

    #[test]
    fn test_entered_expansion() {
        assert!(!entered_expansion(None, false));
        assert!(entered_expansion(None, true));
        assert!(entered_expansion(Some(false), true));
        assert!(!entered_expansion(Some(true), true));
        assert!(!entered_expansion(Some(true), false));
    }

    #[test]
    fn test_should_scroll_needs_details() {
        assert!(should_scroll(Some(false), true, true));
        assert!(!should_scroll(Some(false), true, false));
        assert!(!should_scroll(None, true, false));
        // Staying expanded never scrolls again
        assert!(!should_scroll(Some(true), true, true));
    }
}
