//! End-to-end: the admin editor talking to the catalog server over HTTP.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use catalog_server::domain::ParentKind;
use catalog_server::repository::RelationOperations;
use catalog_server::{serve, AppState, ServerConfig};
use coloring_admin::{
    ApiError, CommitOutcome, CredentialProvider, EditorConfig, EnvToken, HttpRelationApi, NotificationCenter,
    NotificationLevel, PageQuery, ParentRef, ParentType, RelationApi, RelationEditor, StaticToken,
};
use tokio::net::TcpListener;

const TOKEN: &str = "e2e-token";

async fn spawn_server() -> (String, AppState) {
    let config = ServerConfig {
        admin_token: TOKEN.to_string(),
        ..ServerConfig::default()
    };
    let state = AppState::new(config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, state.clone()));
    (format!("http://{}/api", addr), state)
}

fn editor_config(base_url: &str) -> EditorConfig {
    EditorConfig {
        base_url: base_url.to_string(),
        page_size: 10,
        snapshot_page_size: 2,
        close_delay_ms: 0,
        ..EditorConfig::default()
    }
}

fn client(config: &EditorConfig, credentials: impl CredentialProvider + 'static) -> Arc<HttpRelationApi> {
    Arc::new(HttpRelationApi::new(config, Arc::new(credentials)).unwrap())
}

#[tokio::test]
async fn test_stage_and_commit_against_server() {
    let (base_url, state) = spawn_server().await;
    let config = editor_config(&base_url);
    let api = client(&config, StaticToken::new(TOKEN));
    let notifier = Arc::new(NotificationCenter::new());
    let updates = Arc::new(AtomicUsize::new(0));
    let closes = Arc::new(AtomicUsize::new(0));

    let parent = ParentRef::new(ParentType::Category, 1);
    let (u, c) = (updates.clone(), closes.clone());
    let mut editor = RelationEditor::new(api, parent, config, notifier.clone())
        .on_update(move || {
            u.fetch_add(1, Ordering::SeqCst);
        })
        .on_close(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

    assert!(editor.load_session().await);
    let original: Vec<u32> = editor.snapshot().original_ids().iter().copied().collect();
    assert_eq!(original, vec![1, 2, 3]);

    // already related candidates are locked
    assert!(!editor.toggle_candidate(1));

    editor.toggle_related(2);
    assert_eq!(editor.stage_remove(), Ok(1));
    assert!(editor.toggle_candidate(5));
    assert!(editor.toggle_candidate(7));
    assert_eq!(editor.stage_add(), Ok(2));

    let shown: Vec<u32> = editor.related_rows().iter().map(|item| item.id).collect();
    assert_eq!(shown, vec![1, 3, 5, 7]);

    match editor.commit().await {
        CommitOutcome::Saved { added, removed, related } => {
            assert_eq!(added, vec![5, 7]);
            assert_eq!(removed, vec![2]);
            assert_eq!(related, vec![1, 3, 5, 7]);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let stored = state.relations.related_ids(ParentKind::Category, 1).await.unwrap();
    assert_eq!(stored, vec![1, 3, 5, 7]);
    assert_eq!(updates.load(Ordering::SeqCst), 1);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(!editor.is_open());
    assert!(notifier
        .all()
        .iter()
        .any(|n| n.level == NotificationLevel::Success && n.message == "Saved: 2 added, 1 removed"));
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let (base_url, _state) = spawn_server().await;
    let config = editor_config(&base_url);
    let api = client(&config, StaticToken::new("not-the-token"));

    let result = api
        .list_related(ParentRef::new(ParentType::Book, 1), &PageQuery::new(1, 10, ""))
        .await;
    assert_eq!(result, Err(ApiError::Unauthorized("Unauthorized".to_string())));
}

#[tokio::test]
async fn test_missing_token_fails_before_request() {
    let (base_url, _state) = spawn_server().await;
    let config = editor_config(&base_url);
    let api = client(&config, EnvToken::from_var("CATALOG_E2E_TOKEN_THAT_IS_NEVER_SET"));
    let notifier = Arc::new(NotificationCenter::new());

    let mut editor = RelationEditor::new(
        api,
        ParentRef::new(ParentType::Collection, 1),
        config,
        notifier.clone(),
    );
    assert!(!editor.load_session().await);
    assert!(editor.snapshot().original_ids().is_empty());
    assert_eq!(
        notifier.last().map(|n| n.level),
        Some(NotificationLevel::Error)
    );
}

#[tokio::test]
async fn test_unknown_parent_message_is_passed_through() {
    let (base_url, _state) = spawn_server().await;
    let config = editor_config(&base_url);
    let api = client(&config, StaticToken::new(TOKEN));

    let err = api
        .add_relations(ParentRef::new(ParentType::Category, 99), &[1])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
    assert_eq!(err.user_message(), "Category 99 not found");
}

#[tokio::test]
async fn test_candidate_search_and_paging() {
    let (base_url, _state) = spawn_server().await;
    let config = editor_config(&base_url);
    let api = client(&config, StaticToken::new(TOKEN));

    let page = api.list_candidates(&PageQuery::new(3, 10, "")).await.unwrap();
    assert_eq!(page.pagination.total_count, 24);
    assert_eq!(page.pagination.total_pages, 3);
    assert!(!page.pagination.has_next_page);
    assert_eq!(page.items.len(), 4);

    let found = api.list_candidates(&PageQuery::new(1, 10, "shark")).await.unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].title, "Friendly Shark");
}
