//! Relation Staging Editor
//!
//! Two-pane editor for a parent's many-to-many coloring page relations:
//! - loader: related/candidate panes, each paged and searchable on its own
//! - selection: checked rows per pane
//! - snapshot: staged additions/removals against the captured relation set
//! - commit: turns staged changes into batch requests

mod commit;
mod loader;
mod selection;
mod snapshot;


use std::sync::Arc;

use tracing::{info, warn};

use crate::commands::RelationApi;
use crate::config::EditorConfig;
use crate::models::{ParentRef, RelatableItem};
use crate::notify::Notifier;

pub use commit::{CommitOutcome, CommitStep};
pub use loader::Pane;
pub use selection::SelectionSet;
pub use snapshot::{RelationSnapshot, StageError};

type Callback = Box<dyn FnMut() + Send + Sync>;

/// A row of the candidate pane
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    pub item: RelatableItem,
    /// Shown checked and locked
    pub already_related: bool,
    pub selected: bool,
}

/// Editing session for one parent's relations
pub struct RelationEditor {
    api: Arc<dyn RelationApi>,
    parent: ParentRef,
    config: EditorConfig,
    notifier: Arc<dyn Notifier>,
    snapshot: RelationSnapshot,
    related: Pane,
    candidates: Pane,
    open: bool,
    on_update: Option<Callback>,
    on_close: Option<Callback>,
}

impl RelationEditor {
    pub fn new(
        api: Arc<dyn RelationApi>,
        parent: ParentRef,
        config: EditorConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            parent,
            config,
            notifier,
            snapshot: RelationSnapshot::default(),
            related: Pane::default(),
            candidates: Pane::default(),
            open: true,
            on_update: None,
            on_close: None,
        }
    }

    /// Fired once after every successful commit
    pub fn on_update(mut self, callback: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Fired when the editor is dismissed, saved or not
    pub fn on_close(mut self, callback: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn parent(&self) -> ParentRef {
        self.parent
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn snapshot(&self) -> &RelationSnapshot {
        &self.snapshot
    }

    pub fn related_pane(&self) -> &Pane {
        &self.related
    }

    pub fn candidate_pane(&self) -> &Pane {
        &self.candidates
    }

    // ========================
    // Views
    // ========================

    /// Left pane rows: the fetched related page with staged changes applied.
    ///
    /// Staged additions are listed after the first page's rows when they
    /// match the pane's search text.
    pub fn related_rows(&self) -> Vec<RelatableItem> {
        let mut rows: Vec<RelatableItem> = self
            .related
            .items()
            .iter()
            .filter(|item| self.snapshot.is_effectively_related(item.id))
            .cloned()
            .collect();

        if self.related.page() <= 1 {
            for item in self.snapshot.staged_additions() {
                if item.matches(self.related.search()) && !rows.iter().any(|r| r.id == item.id) {
                    rows.push(item.clone());
                }
            }
        }
        rows
    }

    /// Right pane rows, flagged against the effective related set
    pub fn candidate_rows(&self) -> Vec<CandidateRow> {
        self.candidates
            .items()
            .iter()
            .map(|item| {
                let already_related = self.snapshot.is_effectively_related(item.id);
                CandidateRow {
                    item: item.clone(),
                    already_related,
                    selected: already_related || self.candidates.selection().contains(item.id),
                }
            })
            .collect()
    }

    // ========================
    // Selection
    // ========================

    pub fn toggle_related(&mut self, id: u32) {
        if self.related_rows().iter().any(|item| item.id == id) {
            self.related.selection_mut().toggle(id);
        }
    }

    pub fn toggle_all_related(&mut self) {
        let visible: Vec<u32> = self.related_rows().iter().map(|item| item.id).collect();
        self.related.selection_mut().toggle_all(&visible);
    }

    /// Returns false for rows that are locked as already related
    pub fn toggle_candidate(&mut self, id: u32) -> bool {
        let selectable = self
            .candidates
            .items()
            .iter()
            .any(|item| item.id == id && !self.snapshot.is_effectively_related(id));
        if selectable {
            self.candidates.selection_mut().toggle(id);
        }
        selectable
    }

    pub fn toggle_all_candidates(&mut self) {
        let visible: Vec<u32> = self
            .candidates
            .items()
            .iter()
            .map(|item| item.id)
            .filter(|id| !self.snapshot.is_effectively_related(*id))
            .collect();
        self.candidates.selection_mut().toggle_all(&visible);
    }

    fn clear_selections(&mut self) {
        self.related.selection_mut().clear();
        self.candidates.selection_mut().clear();
    }

    // ========================
    // Transfer actions
    // ========================

    /// Stage the checked candidates for addition
    pub fn stage_add(&mut self) -> Result<usize, StageError> {
        let selected: Vec<RelatableItem> = self
            .candidates
            .items()
            .iter()
            .filter(|item| self.candidates.selection().contains(item.id))
            .cloned()
            .collect();

        match self.snapshot.stage_add(selected) {
            Ok(count) => {
                self.clear_selections();
                self.notifier.success(&format!(
                    "{} staged for addition, save to apply",
                    pages(count)
                ));
                Ok(count)
            }
            Err(StageError::EmptySelection) => {
                self.notifier.warning("Please select coloring pages to add");
                Err(StageError::EmptySelection)
            }
            Err(StageError::AlreadyRelated) => {
                self.notifier.info("Selected coloring pages are already related");
                Err(StageError::AlreadyRelated)
            }
        }
    }

    /// Stage the checked related rows for removal
    pub fn stage_remove(&mut self) -> Result<usize, StageError> {
        let selected = self.related.selection().ids();

        match self.snapshot.stage_remove(&selected) {
            Ok(count) => {
                self.clear_selections();
                self.notifier.success(&format!(
                    "{} staged for removal, save to apply",
                    pages(count)
                ));
                Ok(count)
            }
            Err(err) => {
                self.notifier.warning("Please select coloring pages to remove");
                Err(err)
            }
        }
    }

    /// Dismiss the editor, dropping any unsaved staged changes
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        if self.snapshot.has_pending_changes() {
            warn!(
                parent_type = %self.parent.parent_type,
                parent_id = self.parent.id,
                pending_add = self.snapshot.pending_add().len(),
                pending_remove = self.snapshot.pending_remove().len(),
                "closing relation editor with unsaved changes"
            );
        }
        self.open = false;
        self.snapshot = RelationSnapshot::default();
        self.related = Pane::default();
        self.candidates = Pane::default();
        info!(parent_type = %self.parent.parent_type, parent_id = self.parent.id, "relation editor closed");

        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }
}

/// "1 coloring page" / "3 coloring pages"
fn pages(count: usize) -> String {
    if count == 1 {
        "1 coloring page".to_string()
    } else {
        format!("{} coloring pages", count)
    }
}
