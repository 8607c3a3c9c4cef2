//! In-Memory Catalog Store
//!
//! Tables for coloring pages, parents and the three join tables, shared
//! by every repository behind one async mutex.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::Mutex;

use super::seed;
use crate::domain::{ColoringPage, ParentEntity, ParentKind};

/// Join rows keyed by parent, page ids in insertion order
pub(crate) type RelationTable = HashMap<(ParentKind, u32), Vec<u32>>;

#[derive(Debug, Default)]
pub struct CatalogDb {
    pub(crate) pages: BTreeMap<u32, ColoringPage>,
    pub(crate) parents: BTreeMap<(ParentKind, u32), ParentEntity>,
    pub(crate) relations: RelationTable,
    next_page_id: u32,
}

impl CatalogDb {
    pub fn new() -> Self {
        Self {
            next_page_id: 1,
            ..Default::default()
        }
    }

    pub(crate) fn allocate_page_id(&mut self) -> u32 {
        let id = self.next_page_id;
        self.next_page_id += 1;
        id
    }

    /// Insert a page as-is, keeping the id allocator ahead of it
    pub(crate) fn insert_page(&mut self, page: ColoringPage) {
        self.next_page_id = self.next_page_id.max(page.id + 1);
        self.pages.insert(page.id, page);
    }

    /// Whether another page (not `except`) already uses `slug`
    pub(crate) fn slug_in_use(&self, slug: &str, except: Option<u32>) -> bool {
        self.pages
            .values()
            .any(|page| Some(page.id) != except && page.slug == slug)
    }

    pub(crate) fn insert_parent(&mut self, parent: ParentEntity) {
        self.parents.insert((parent.parent_type, parent.id), parent);
    }

    pub(crate) fn has_parent(&self, kind: ParentKind, id: u32) -> bool {
        self.parents.contains_key(&(kind, id))
    }

    /// Drop a page from every join table
    pub(crate) fn unlink_page(&mut self, page_id: u32) -> usize {
        let mut removed = 0;
        for ids in self.relations.values_mut() {
            let before = ids.len();
            ids.retain(|id| *id != page_id);
            removed += before - ids.len();
        }
        removed
    }
}

pub type SharedDb = Arc<Mutex<CatalogDb>>;

/// Create the store, optionally filled with the example dataset
pub fn init_db(seed_data: bool) -> SharedDb {
    let mut db = CatalogDb::new();
    if seed_data {
        seed::populate(&mut db);
        log::info!(
            "Seeded catalog: {} pages, {} parents",
            db.pages.len(),
            db.parents.len()
        );
    }
    Arc::new(Mutex::new(db))
}
