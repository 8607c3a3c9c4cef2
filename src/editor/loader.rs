//! Dual-List Loader
//!
//! Fetches the related and candidate panes independently. Paging and
//! searching never touch the captured relation snapshot; only a session
//! load (or explicit reload) recaptures it.

use tracing::{debug, info};

use super::{RelationEditor, RelationSnapshot, SelectionSet};
use crate::commands::{ApiError, ApiResult};
use crate::models::{Page, PageQuery, Pagination, RelatableItem};

/// Upper bound on pages walked while capturing the related set
const MAX_SNAPSHOT_PAGES: u32 = 1000;

/// One side of the editor: a fetched page plus its search and selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pane {
    items: Vec<RelatableItem>,
    pagination: Pagination,
    search: String,
    selection: SelectionSet,
}

impl Pane {
    pub fn items(&self) -> &[RelatableItem] {
        &self.items
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn page(&self) -> u32 {
        self.pagination.current_page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub(super) fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    fn replace(&mut self, page: Page<RelatableItem>, search: &str) {
        self.items = page.items;
        self.pagination = page.pagination;
        self.search = search.trim().to_string();
    }
}

const RELATED: &str = "related coloring pages";
const CANDIDATES: &str = "coloring pages";

/// Everything a session load fetches before any state is replaced
struct SessionData {
    related: Vec<RelatableItem>,
    related_page: Page<RelatableItem>,
    candidate_page: Page<RelatableItem>,
}

impl RelationEditor {
    /// Capture the relation snapshot and load page 1 of both panes.
    ///
    /// Nothing is replaced unless all three fetches succeed.
    pub async fn load_session(&mut self) -> bool {
        let data = match self.fetch_session().await {
            Ok(data) => data,
            Err((what, e)) => {
                self.notify_load_failure(what, &e);
                return false;
            }
        };
        info!(
            parent_type = %self.parent.parent_type,
            parent_id = self.parent.id,
            count = data.related.len(),
            "captured relation snapshot"
        );
        self.snapshot = RelationSnapshot::capture(data.related);
        self.related.replace(data.related_page, "");
        self.candidates.replace(data.candidate_page, "");
        self.clear_selections();
        true
    }

    /// Drop staged changes and reload everything from the server
    pub async fn reload(&mut self) -> bool {
        if self.snapshot.has_pending_changes() {
            debug!(parent_id = self.parent.id, "reload discards staged changes");
        }
        self.load_session().await
    }

    /// Fetch one page of the related pane
    pub async fn load_related(&mut self, page: u32, search: &str) -> bool {
        let query = PageQuery::new(page, self.config.page_size, search);
        match self.api.list_related(self.parent, &query).await {
            Ok(result) => {
                debug!(page = query.page, count = result.items.len(), "loaded related page");
                self.related.replace(result, search);
                self.clear_selections();
                true
            }
            Err(e) => {
                self.notify_load_failure(RELATED, &e);
                false
            }
        }
    }

    /// Fetch one page of the candidate pane (the whole catalog)
    pub async fn load_candidates(&mut self, page: u32, search: &str) -> bool {
        let query = PageQuery::new(page, self.config.page_size, search);
        match self.api.list_candidates(&query).await {
            Ok(result) => {
                debug!(page = query.page, count = result.items.len(), "loaded candidate page");
                self.candidates.replace(result, search);
                self.clear_selections();
                true
            }
            Err(e) => {
                self.notify_load_failure(CANDIDATES, &e);
                false
            }
        }
    }

    pub async fn search_related(&mut self, text: &str) -> bool {
        self.load_related(1, text).await
    }

    pub async fn search_candidates(&mut self, text: &str) -> bool {
        self.load_candidates(1, text).await
    }

    pub async fn next_related_page(&mut self) -> bool {
        if !self.related.pagination.has_next_page {
            return false;
        }
        let search = self.related.search.clone();
        self.load_related(self.related.page() + 1, &search).await
    }

    pub async fn prev_related_page(&mut self) -> bool {
        if !self.related.pagination.has_prev_page {
            return false;
        }
        let search = self.related.search.clone();
        self.load_related(self.related.page().saturating_sub(1), &search).await
    }

    pub async fn next_candidates_page(&mut self) -> bool {
        if !self.candidates.pagination.has_next_page {
            return false;
        }
        let search = self.candidates.search.clone();
        self.load_candidates(self.candidates.page() + 1, &search).await
    }

    pub async fn prev_candidates_page(&mut self) -> bool {
        if !self.candidates.pagination.has_prev_page {
            return false;
        }
        let search = self.candidates.search.clone();
        self.load_candidates(self.candidates.page().saturating_sub(1), &search).await
    }

    async fn fetch_session(&self) -> Result<SessionData, (&'static str, ApiError)> {
        let related = self.fetch_all_related().await.map_err(|e| (RELATED, e))?;
        let first = PageQuery::new(1, self.config.page_size, "");
        let related_page = self
            .api
            .list_related(self.parent, &first)
            .await
            .map_err(|e| (RELATED, e))?;
        let candidate_page = self
            .api
            .list_candidates(&first)
            .await
            .map_err(|e| (CANDIDATES, e))?;
        Ok(SessionData {
            related,
            related_page,
            candidate_page,
        })
    }

    /// Walk every unfiltered page of the related set
    async fn fetch_all_related(&self) -> ApiResult<Vec<RelatableItem>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let query = PageQuery::new(page, self.config.snapshot_page_size, "");
            let result = self.api.list_related(self.parent, &query).await?;
            let done = !result.pagination.has_next_page
                || result.items.is_empty()
                || page >= MAX_SNAPSHOT_PAGES;
            items.extend(result.items);
            if done {
                return Ok(items);
            }
            page += 1;
        }
    }

    fn notify_load_failure(&self, what: &str, err: &ApiError) {
        tracing::error!(
            parent_type = %self.parent.parent_type,
            parent_id = self.parent.id,
            error = %err,
            "failed to load {}", what
        );
        self.notifier
            .error(&format!("Failed to load {}: {}", what, err.user_message()));
    }
}
