//! Relation Snapshot - Staging Diff Engine
//!
//! Holds the server-confirmed relation set captured at load time plus the
//! staged additions/removals against it. Never performs I/O.
//!
//! Invariants, checked after every mutation in debug builds:
//! - `pending_add ∩ original = ∅`
//! - `pending_remove ⊆ original`
//! - `pending_add ∩ pending_remove = ∅`
//! - ids of `displayed` == `(original ∪ pending_add) \ pending_remove`

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::RelatableItem;

/// Soft failures of a transfer action; state is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("nothing selected")]
    EmptySelection,
    #[error("selected items are already related")]
    AlreadyRelated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationSnapshot {
    original: BTreeSet<u32>,
    displayed: Vec<RelatableItem>,
    pending_add: BTreeSet<u32>,
    pending_remove: BTreeSet<u32>,
}

impl RelationSnapshot {
    /// Fresh snapshot from the complete, unfiltered related set
    pub fn capture(related: Vec<RelatableItem>) -> Self {
        let mut seen = BTreeSet::new();
        let displayed: Vec<_> = related.into_iter().filter(|item| seen.insert(item.id)).collect();
        Self {
            original: seen,
            displayed,
            pending_add: BTreeSet::new(),
            pending_remove: BTreeSet::new(),
        }
    }

    pub fn original_ids(&self) -> &BTreeSet<u32> {
        &self.original
    }

    /// Original set with staged changes applied, in display order
    pub fn displayed(&self) -> &[RelatableItem] {
        &self.displayed
    }

    pub fn pending_add(&self) -> &BTreeSet<u32> {
        &self.pending_add
    }

    pub fn pending_remove(&self) -> &BTreeSet<u32> {
        &self.pending_remove
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending_add.is_empty() || !self.pending_remove.is_empty()
    }

    /// Related once staged changes are taken into account
    pub fn is_effectively_related(&self, id: u32) -> bool {
        self.pending_add.contains(&id)
            || (self.original.contains(&id) && !self.pending_remove.contains(&id))
    }

    pub fn is_displayed(&self, id: u32) -> bool {
        self.displayed.iter().any(|item| item.id == id)
    }

    /// Staged addition items, in the order they were staged
    pub fn staged_additions(&self) -> impl Iterator<Item = &RelatableItem> {
        self.displayed
            .iter()
            .filter(|item| self.pending_add.contains(&item.id))
    }

    /// Stage candidate items for addition.
    ///
    /// Returns how many items were staged. Re-adding an item cancels its
    /// staged removal instead of creating a pending addition.
    pub fn stage_add(&mut self, selected: Vec<RelatableItem>) -> Result<usize, StageError> {
        if selected.is_empty() {
            return Err(StageError::EmptySelection);
        }

        let mut fresh = BTreeSet::new();
        let to_add: Vec<_> = selected
            .into_iter()
            .filter(|item| !self.is_displayed(item.id) && fresh.insert(item.id))
            .collect();
        if to_add.is_empty() {
            return Err(StageError::AlreadyRelated);
        }

        let count = to_add.len();
        for item in to_add {
            if !self.original.contains(&item.id) {
                self.pending_add.insert(item.id);
            }
            self.pending_remove.remove(&item.id);
            self.displayed.push(item);
        }

        self.debug_check();
        Ok(count)
    }

    /// Stage related items for removal.
    ///
    /// Returns how many displayed items were dropped. Removing an item that
    /// was only staged for addition cancels the addition.
    pub fn stage_remove(&mut self, selected: &[u32]) -> Result<usize, StageError> {
        let ids: BTreeSet<u32> = selected
            .iter()
            .copied()
            .filter(|id| self.is_displayed(*id))
            .collect();
        if ids.is_empty() {
            return Err(StageError::EmptySelection);
        }

        self.displayed.retain(|item| !ids.contains(&item.id));
        for id in &ids {
            if self.original.contains(id) {
                self.pending_remove.insert(*id);
            }
            self.pending_add.remove(id);
        }

        self.debug_check();
        Ok(ids.len())
    }

    /// Fold a committed removal batch into the snapshot
    pub fn commit_removals(&mut self) -> Vec<u32> {
        let removed: Vec<u32> = std::mem::take(&mut self.pending_remove).into_iter().collect();
        for id in &removed {
            self.original.remove(id);
        }
        self.debug_check();
        removed
    }

    /// Fold a committed addition batch into the snapshot
    pub fn commit_additions(&mut self) -> Vec<u32> {
        let added: Vec<u32> = std::mem::take(&mut self.pending_add).into_iter().collect();
        self.original.extend(added.iter().copied());
        self.debug_check();
        added
    }

    /// True when every snapshot invariant holds
    pub fn is_consistent(&self) -> bool {
        let displayed: BTreeSet<u32> = self.displayed.iter().map(|item| item.id).collect();
        let expected: BTreeSet<u32> = self
            .original
            .union(&self.pending_add)
            .copied()
            .filter(|id| !self.pending_remove.contains(id))
            .collect();

        self.pending_add.is_disjoint(&self.original)
            && self.pending_remove.is_subset(&self.original)
            && self.pending_add.is_disjoint(&self.pending_remove)
            && displayed.len() == self.displayed.len()
            && displayed == expected
    }

    fn debug_check(&self) {
        debug_assert!(self.is_consistent(), "relation snapshot invariants violated: {:?}", self);
    }
}
