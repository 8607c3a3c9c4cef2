//! Commit Coordinator
//!
//! Sends staged removals, then staged additions, as two sequential batch
//! requests. A failed batch keeps its ids staged for a retry; a batch the
//! server already applied is folded into the snapshot and not rolled back.

use std::time::Duration;

use tracing::{error, info};

use super::RelationEditor;
use crate::commands::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStep {
    Remove,
    Add,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Both pending sets were empty; no request was made
    NothingToSave,
    /// `related` is the relation set recaptured after the save
    Saved {
        added: Vec<u32>,
        removed: Vec<u32>,
        related: Vec<u32>,
    },
    /// `removed` lists ids whose batch went through before `step` failed
    Failed {
        step: CommitStep,
        error: ApiError,
        removed: Vec<u32>,
    },
}

impl RelationEditor {
    /// Apply staged changes on the server.
    ///
    /// On full success the session is reloaded from page 1, `on_update`
    /// fires and the editor closes after the configured delay.
    pub async fn commit(&mut self) -> CommitOutcome {
        if !self.snapshot.has_pending_changes() {
            self.notifier.info("No changes to save");
            return CommitOutcome::NothingToSave;
        }

        let parent = self.parent;
        let mut removed = Vec::new();

        let to_remove: Vec<u32> = self.snapshot.pending_remove().iter().copied().collect();
        if !to_remove.is_empty() {
            match self.api.remove_relations(parent, &to_remove).await {
                Ok(change) => {
                    info!(
                        parent_type = %parent.parent_type,
                        parent_id = parent.id,
                        affected = change.affected,
                        "removed relations"
                    );
                    removed = self.snapshot.commit_removals();
                }
                Err(e) => return self.commit_failed(CommitStep::Remove, e, removed),
            }
        }

        let mut added = Vec::new();
        let to_add: Vec<u32> = self.snapshot.pending_add().iter().copied().collect();
        if !to_add.is_empty() {
            match self.api.add_relations(parent, &to_add).await {
                Ok(change) => {
                    info!(
                        parent_type = %parent.parent_type,
                        parent_id = parent.id,
                        affected = change.affected,
                        "added relations"
                    );
                    added = self.snapshot.commit_additions();
                }
                Err(e) => {
                    // The removal half is already live; show it
                    if !removed.is_empty() {
                        let search = self.related.search().to_string();
                        self.load_related(self.related.page(), &search).await;
                    }
                    return self.commit_failed(CommitStep::Add, e, removed);
                }
            }
        }

        self.notifier.success(&format!(
            "Saved: {} added, {} removed",
            added.len(),
            removed.len()
        ));

        self.load_session().await;
        let related: Vec<u32> = self.snapshot.original_ids().iter().copied().collect();
        if let Some(callback) = self.on_update.as_mut() {
            callback();
        }

        if self.config.close_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.close_delay_ms)).await;
        }
        self.close();

        CommitOutcome::Saved {
            added,
            removed,
            related,
        }
    }

    fn commit_failed(&self, step: CommitStep, err: ApiError, removed: Vec<u32>) -> CommitOutcome {
        error!(
            parent_type = %self.parent.parent_type,
            parent_id = self.parent.id,
            ?step,
            error = %err,
            "relation commit failed"
        );
        self.notifier.error(&err.user_message());
        CommitOutcome::Failed {
            step,
            error: err,
            removed,
        }
    }
}
