//! Coloring Admin - Relation Staging Editor
//!
//! Layered like the rest of the admin:
//! - models: wire types shared with the catalog backend
//! - commands: API bindings (`RelationApi`) and the HTTP implementation
//! - editor: staging editor for a parent's coloring page relations
//! - config / credentials / notify: host-provided capabilities

pub mod commands;
pub mod config;
pub mod credentials;
pub mod editor;
pub mod models;
pub mod notify;

pub use commands::{ApiError, ApiResult, HttpRelationApi, RelationApi};
pub use config::EditorConfig;
pub use credentials::{CredentialProvider, EnvToken, StaticToken};
pub use editor::{
    CandidateRow, CommitOutcome, CommitStep, Pane, RelationEditor, RelationSnapshot, SelectionSet,
    StageError,
};
pub use models::{
    ApiEnvelope, Page, PageQuery, Pagination, ParentEntity, ParentRef, ParentType, RelatableItem,
    RelationChange, RelationIds,
};
pub use notify::{Notification, NotificationCenter, NotificationLevel, Notifier};
