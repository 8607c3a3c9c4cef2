//! Selection Tracker
//!
//! Checked rows of one pane's visible page.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`
    pub fn toggle(&mut self, id: u32) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Clear when every visible row is already checked, otherwise check them all.
    ///
    /// Only `visible` is considered; rows on other pages are never selected.
    pub fn toggle_all(&mut self, visible: &[u32]) {
        let all_selected = !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id));
        self.ids.clear();
        if !all_selected {
            self.ids.extend(visible.iter().copied());
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
