//! Overflow slot ("More" dropdown) state.

use crate::config::DISMISS_KEYS;

/// Inputs that drive the overflow dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The "More" trigger was activated.
    Trigger,
    /// A click landed outside the dropdown.
    ClickOutside,
    /// The dismiss key was pressed.
    DismissKey,
}

/// Entries moved out of the bar, plus the dropdown's open state.
///
/// `contained` is ordered most recently evicted first. The slot can only be
/// open while it holds at least one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowSlot {
    is_open: bool,
    contained: Vec<usize>,
}

impl OverflowSlot {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Hidden slots are never rendered and never open.
    pub fn is_hidden(&self) -> bool {
        self.contained.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.contained.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contained.len()
    }

    /// Entry indices, most recently evicted first.
    pub fn contained(&self) -> &[usize] {
        &self.contained
    }

    /// Count shown next to the trigger, e.g. `(3)`.
    pub fn count_label(&self) -> String {
        format!("({})", self.contained.len())
    }

    pub fn open(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = !self.contained.is_empty();
        self.is_open != was_open
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = false;
        was_open
    }

    /// Applies a dropdown event. Returns `true` if the open state changed.
    pub fn handle(&mut self, event: DropdownEvent) -> bool {
        match event {
            DropdownEvent::Trigger if self.is_open => self.close(),
            DropdownEvent::Trigger => self.open(),
            DropdownEvent::ClickOutside | DropdownEvent::DismissKey => self.close(),
        }
    }

    /// Forces the slot closed when it no longer holds anything.
    pub fn settle(&mut self) {
        if self.contained.is_empty() {
            self.is_open = false;
        }
    }

    pub(crate) fn push_front(&mut self, index: usize) {
        self.contained.insert(0, index);
    }

    pub(crate) fn pop_front(&mut self) -> Option<usize> {
        if self.contained.is_empty() {
            return None;
        }
        Some(self.contained.remove(0))
    }

    pub(crate) fn take_all(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.contained)
    }
}

/// Whether a `KeyboardEvent.key` value dismisses the dropdown.
pub fn is_dismiss_key(key: &str) -> bool {
    DISMISS_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_with(indices: &[usize]) -> OverflowSlot {
        let mut slot = OverflowSlot::default();
        for &i in indices.iter().rev() {
            slot.push_front(i);
        }
        slot
    }

    #[test]
    fn test_contained_order() {
        let slot = slot_with(&[2, 3, 4]);
        assert_eq!(slot.contained(), &[2, 3, 4]);
        assert_eq!(slot.count_label(), "(3)");
    }

    #[test]
    fn test_trigger_toggles() {
        let mut slot = slot_with(&[4]);
        assert!(slot.handle(DropdownEvent::Trigger));
        assert!(slot.is_open());
        assert!(slot.handle(DropdownEvent::Trigger));
        assert!(!slot.is_open());
    }

    #[test]
    fn test_cannot_open_empty_slot() {
        let mut slot = OverflowSlot::default();
        assert!(!slot.handle(DropdownEvent::Trigger));
        assert!(!slot.is_open());
        assert!(slot.is_hidden());
    }

    #[test]
    fn test_click_outside_closes() {
        let mut slot = slot_with(&[3, 4]);
        slot.open();
        assert!(slot.handle(DropdownEvent::ClickOutside));
        assert!(!slot.is_open());
        // Already closed: nothing changes
        assert!(!slot.handle(DropdownEvent::ClickOutside));
    }

    #[test]
    fn test_dismiss_key_closes() {
        let mut slot = slot_with(&[3, 4]);
        slot.open();
        assert!(slot.handle(DropdownEvent::DismissKey));
        assert!(!slot.is_open());
    }

    #[test]
    fn test_dismiss_keys() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("escape"));
    }

    #[test]
    fn test_settle_forces_closed_when_empty() {
        let mut slot = slot_with(&[1]);
        slot.open();
        slot.pop_front();
        slot.settle();
        assert!(!slot.is_open());
    }
}
