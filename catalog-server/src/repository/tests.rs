//! Repository Integration Tests
//!
//! Repositories sharing one seeded in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{ColoringPage, Difficulty, DomainError, ParentKind};
    use crate::repository::{
        init_db, ColoringPageRepository, ListQuery, ParentRepository, RelationOperations,
        RelationRepository, Repository, SearchableRepository,
    };

    struct Repos {
        pages: ColoringPageRepository,
        parents: ParentRepository,
        relations: RelationRepository,
    }

    fn setup(seed: bool) -> Repos {
        let db = init_db(seed);
        Repos {
            pages: ColoringPageRepository::new(db.clone()),
            parents: ParentRepository::new(db.clone()),
            relations: RelationRepository::new(db),
        }
    }

    #[tokio::test]
    async fn test_create_page() {
        let repos = setup(false);

        let page = ColoringPage::new("Happy Dragon", Difficulty::Easy, "fantasy");
        let created = repos.pages.create(&page).await.expect("Failed to create");

        assert_eq!(created.id, 1);
        assert_eq!(created.slug, "happy-dragon");
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let repos = setup(false);
        let page = ColoringPage::new("Happy Dragon", Difficulty::Easy, "fantasy");
        repos.pages.create(&page).await.unwrap();

        let err = repos.pages.create(&page).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_and_find() {
        let repos = setup(false);
        let mut created = repos
            .pages
            .create(&ColoringPage::new("Original", Difficulty::Easy, "misc"))
            .await
            .unwrap();

        created.title = "Updated".to_string();
        created.difficulty = Difficulty::Hard;
        repos.pages.update(&created).await.expect("Update failed");

        let found = repos.pages.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Updated");
        assert_eq!(found.difficulty, Difficulty::Hard);

        let mut ghost = found.clone();
        ghost.id = 99;
        assert!(matches!(repos.pages.update(&ghost).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_unlinks_relations() {
        let repos = setup(true);
        assert!(repos.relations.related_ids(ParentKind::Category, 1).await.unwrap().contains(&2));

        repos.pages.delete(2).await.expect("Delete failed");

        assert!(repos.pages.find_by_id(2).await.unwrap().is_none());
        assert_eq!(repos.relations.related_ids(ParentKind::Category, 1).await.unwrap(), vec![1, 3]);
        assert!(matches!(repos.pages.delete(2).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_and_query() {
        let repos = setup(true);

        let sharks = repos.pages.search("shark").await.unwrap();
        assert_eq!(sharks.len(), 1);

        let mut query = ListQuery::paged(1, 5);
        query.theme = Some("animals".to_string());
        query.sort = Some("title".to_string());
        let page = repos.pages.query(&query, 100).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Butterfly Mandala", "Jungle Lion", "Owl at Night", "Panda Picnic", "Puppy and Ball"]
        );
        assert_eq!(page.pagination.total_count, 5);

        let mut desc = ListQuery::paged(1, 3);
        desc.order = Some("desc".to_string());
        let page = repos.pages.query(&desc, 100).await.unwrap();
        assert_eq!(page.items[0].id, 24);
        assert!(page.pagination.has_next_page);
    }

    #[tokio::test]
    async fn test_parents_by_kind() {
        let repos = setup(true);
        let books = repos.parents.list(ParentKind::Book).await.unwrap();
        assert_eq!(books.len(), 2);
        assert!(books.iter().all(|b| b.parent_type == ParentKind::Book));
        assert!(repos.parents.find(ParentKind::Collection, 2).await.unwrap().is_some());
        assert!(repos.parents.find(ParentKind::Collection, 9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_relations_is_idempotent() {
        let repos = setup(true);

        let change = repos.relations.add_relations(ParentKind::Category, 1, &[3, 5, 7, 999]).await.unwrap();
        assert_eq!(change.affected, 2);
        assert_eq!(change.related_count, 5);

        let again = repos.relations.add_relations(ParentKind::Category, 1, &[5, 7]).await.unwrap();
        assert_eq!(again.affected, 0);
        assert_eq!(
            repos.relations.related_ids(ParentKind::Category, 1).await.unwrap(),
            vec![1, 2, 3, 5, 7]
        );
    }

    #[tokio::test]
    async fn test_remove_relations() {
        let repos = setup(true);
        let change = repos.relations.remove_relations(ParentKind::Book, 1, &[4, 10, 11]).await.unwrap();
        assert_eq!(change.affected, 2);
        assert_eq!(change.related_count, 5);
    }

    #[tokio::test]
    async fn test_relation_errors() {
        let repos = setup(true);
        assert!(matches!(
            repos.relations.add_relations(ParentKind::Category, 42, &[1]).await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            repos.relations.remove_relations(ParentKind::Category, 1, &[]).await,
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_list_related_search_and_paging() {
        let repos = setup(true);

        let page = repos
            .relations
            .list_related(ParentKind::Book, 1, &ListQuery::paged(2, 3), 100)
            .await
            .unwrap();
        let ids: Vec<u32> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 17, 21]);
        assert_eq!(page.pagination.total_pages, 3);

        let found = repos
            .relations
            .list_related(ParentKind::Book, 1, &ListQuery::paged(1, 10).with_search("truck"), 100)
            .await
            .unwrap();
        assert!(found.items.is_empty());

        let found = repos
            .relations
            .list_related(ParentKind::Book, 1, &ListQuery::paged(1, 10).with_search("tractor"), 100)
            .await
            .unwrap();
        assert_eq!(found.items[0].id, 17);
    }
}
