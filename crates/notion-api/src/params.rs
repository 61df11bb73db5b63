//! Typed call arguments for each operation.
//!
//! Every struct serializes to the flat argument object the endpoint table
//! partitions. `None` fields serialize to `null` and are never sent. The
//! `auth` field overrides the client's default token for that call only.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrieveDatabaseParameters {
    pub database_id: String,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryDatabaseParameters {
    pub database_id: String,
    /// Property IDs to include in the results.
    pub filter_properties: Option<Vec<String>>,
    pub filter: Option<Value>,
    pub sorts: Option<Vec<Value>>,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
    pub archived: Option<bool>,
    pub in_trash: Option<bool>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDatabasesParameters {
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDatabaseParameters {
    pub parent: Value,
    pub properties: Value,
    pub title: Option<Vec<Value>>,
    pub description: Option<Vec<Value>>,
    pub icon: Option<Value>,
    pub cover: Option<Value>,
    pub is_inline: Option<bool>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDatabaseParameters {
    pub database_id: String,
    pub title: Option<Vec<Value>>,
    pub description: Option<Vec<Value>>,
    pub icon: Option<Value>,
    pub cover: Option<Value>,
    pub properties: Option<Value>,
    pub is_inline: Option<bool>,
    pub archived: Option<bool>,
    pub in_trash: Option<bool>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePageParameters {
    pub parent: Value,
    pub properties: Value,
    pub icon: Option<Value>,
    pub cover: Option<Value>,
    pub content: Option<Vec<Value>>,
    pub children: Option<Vec<Value>>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievePageParameters {
    pub page_id: String,
    pub filter_properties: Option<Vec<String>>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePageParameters {
    pub page_id: String,
    pub properties: Option<Value>,
    pub icon: Option<Value>,
    pub cover: Option<Value>,
    pub archived: Option<bool>,
    pub in_trash: Option<bool>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievePagePropertyParameters {
    pub page_id: String,
    pub property_id: String,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrieveBlockParameters {
    pub block_id: String,
    pub auth: Option<String>,
}

/// Block update. The block-type payload (`paragraph`, `to_do`, ...) goes in
/// `content`, keyed by block type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlockParameters {
    pub block_id: String,
    pub archived: Option<bool>,
    pub in_trash: Option<bool>,
    #[serde(flatten)]
    pub content: Map<String, Value>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteBlockParameters {
    pub block_id: String,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppendBlockChildrenParameters {
    pub block_id: String,
    pub children: Vec<Value>,
    /// Insert after this child block instead of at the end.
    pub after: Option<String>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBlockChildrenParameters {
    pub block_id: String,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrieveUserParameters {
    pub user_id: String,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersParameters {
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetSelfParameters {
    pub auth: Option<String>,
}

/// Either `parent` (new discussion on a page) or `discussion_id` (reply).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentParameters {
    pub parent: Option<Value>,
    pub discussion_id: Option<String>,
    pub rich_text: Vec<Value>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCommentsParameters {
    pub block_id: String,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
    pub auth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParameters {
    pub query: Option<String>,
    pub sort: Option<Value>,
    pub filter: Option<Value>,
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
    pub auth: Option<String>,
}
