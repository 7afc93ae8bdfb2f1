//! Navigation bar model.
//!
//! A [`NavBar`] owns its entries for the lifetime of a page load. Entries
//! never move inside the model: the bar only tracks which entry indices are
//! visible inline and which sit in the [`OverflowSlot`].

use serde::Deserialize;

use super::overflow::OverflowSlot;

/// One row of the static link list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A page that highlights another page's entry instead of its own.
///
/// e.g. `gallery.html` has no entry of its own, so `events.html` is marked
/// active while the gallery is open.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageAlias {
    pub page: String,
    pub target: String,
}

/// A built navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    label: String,
    href: String,
    is_active: bool,
}

impl NavEntry {
    pub fn new(link: &NavLink, is_active: bool) -> Self {
        Self {
            label: link.label.clone(),
            href: link.href.clone(),
            is_active,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Ordered navigation entries plus the overflow slot and call-to-action.
///
/// Invariant: every entry index appears exactly once, either in `visible`
/// or in the overflow slot. The call-to-action is stored apart from the
/// entries and so can never be evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    entries: Vec<NavEntry>,
    visible: Vec<usize>,
    overflow: OverflowSlot,
    cta: NavEntry,
}

impl NavBar {
    /// Creates a bar with every entry visible and an empty overflow slot.
    pub fn new(entries: Vec<NavEntry>, cta: NavEntry) -> Self {
        let visible = (0..entries.len()).collect();
        Self {
            entries,
            visible,
            overflow: OverflowSlot::default(),
            cta,
        }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn cta(&self) -> &NavEntry {
        &self.cta
    }

    pub fn overflow(&self) -> &OverflowSlot {
        &self.overflow
    }

    pub fn overflow_mut(&mut self) -> &mut OverflowSlot {
        &mut self.overflow
    }

    /// Indices of the inline entries, in bar order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.visible.iter().map(|&i| &self.entries[i])
    }

    pub fn contained_entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.overflow.contained().iter().map(|&i| &self.entries[i])
    }

    pub fn active_entry(&self) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.is_active())
    }

    /// Moves every contained entry back inline, in original order.
    ///
    /// The overflow list is "most recently evicted first", which is the
    /// order those entries had at the end of the bar.
    pub fn restore_all(&mut self) {
        let contained = self.overflow.take_all();
        self.visible.extend(contained);
        self.overflow.settle();
    }

    /// Evicts the last inline entry into the front of the overflow slot.
    pub fn evict_last(&mut self) -> Option<usize> {
        let index = self.visible.pop()?;
        self.overflow.push_front(index);
        Some(index)
    }

    /// Brings the most recently evicted entry back to the end of the bar.
    pub fn restore_one(&mut self) -> Option<usize> {
        let index = self.overflow.pop_front()?;
        self.visible.push(index);
        Some(index)
    }
}
