//! Coloring Page Repository
//!
//! CRUD plus the filtered/sorted/paged listing behind `GET /coloring-pages`.

use async_trait::async_trait;

use super::db::SharedDb;
use super::query::{paginate, sort_pages, ListQuery, Paged};
use super::traits::{Repository, SearchableRepository};
use crate::domain::{ColoringPage, DomainError, DomainResult};

pub struct ColoringPageRepository {
    db: SharedDb,
}

impl ColoringPageRepository {
    pub fn new(db: SharedDb) -> Self {
        Self { db }
    }

    /// Filtered, sorted and paged listing
    pub async fn query(&self, query: &ListQuery, max_limit: u32) -> DomainResult<Paged<ColoringPage>> {
        let (page, limit) = query.bounds(max_limit);
        let (field, descending) = query.ordering()?;

        let db = self.db.lock().await;
        let mut matched = Vec::new();
        for candidate in db.pages.values() {
            if query.accepts(candidate)? {
                matched.push(candidate.clone());
            }
        }
        sort_pages(&mut matched, field, descending);
        Ok(paginate(matched, page, limit))
    }
}

#[async_trait]
impl Repository<ColoringPage> for ColoringPageRepository {
    async fn create(&self, entity: &ColoringPage) -> DomainResult<ColoringPage> {
        entity.validate()?;
        let mut db = self.db.lock().await;

        if db.slug_in_use(&entity.slug, None) {
            return Err(DomainError::Conflict(format!("slug {:?} already exists", entity.slug)));
        }

        let mut page = entity.clone();
        page.id = db.allocate_page_id();
        db.insert_page(page.clone());
        Ok(page)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<ColoringPage>> {
        let db = self.db.lock().await;
        Ok(db.pages.get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ColoringPage>> {
        let db = self.db.lock().await;
        Ok(db.pages.values().cloned().collect())
    }

    async fn update(&self, entity: &ColoringPage) -> DomainResult<ColoringPage> {
        entity.validate()?;
        let mut db = self.db.lock().await;

        if !db.pages.contains_key(&entity.id) {
            return Err(DomainError::not_found("Coloring page", entity.id));
        }
        if db.slug_in_use(&entity.slug, Some(entity.id)) {
            return Err(DomainError::Conflict(format!("slug {:?} already exists", entity.slug)));
        }

        db.pages.insert(entity.id, entity.clone());
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut db = self.db.lock().await;
        if db.pages.remove(&id).is_none() {
            return Err(DomainError::not_found("Coloring page", id));
        }
        let unlinked = db.unlink_page(id);
        log::info!("Deleted coloring page {} ({} relations dropped)", id, unlinked);
        Ok(())
    }
}

#[async_trait]
impl SearchableRepository<ColoringPage> for ColoringPageRepository {
    async fn search(&self, query: &str) -> DomainResult<Vec<ColoringPage>> {
        let db = self.db.lock().await;
        Ok(db.pages.values().filter(|p| p.matches(query)).cloned().collect())
    }
}
