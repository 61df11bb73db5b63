use serde::de::DeserializeOwned;
use tracing::instrument;

use notionkit_client::Result;

use crate::endpoints::databases;
use crate::params::{
    CreateDatabaseParameters, ListDatabasesParameters, QueryDatabaseParameters,
    RetrieveDatabaseParameters, UpdateDatabaseParameters,
};

/// Database operations. Obtained from [`super::NotionClient::databases`].
#[derive(Debug, Clone, Copy)]
pub struct Databases<'a> {
    pub(super) client: &'a super::NotionClient,
}

impl Databases<'_> {
    /// Retrieve a database object.
    #[instrument(skip_all, fields(database_id = %params.database_id))]
    pub async fn retrieve<T: DeserializeOwned>(
        self,
        params: &RetrieveDatabaseParameters,
    ) -> Result<T> {
        self.client.call(&databases::RETRIEVE, params).await
    }

    /// Query a database with optional filter and sorts.
    ///
    /// Returns a single page of results; follow `next_cursor` with
    /// `start_cursor` to fetch more.
    #[instrument(skip_all, fields(database_id = %params.database_id))]
    pub async fn query<T: DeserializeOwned>(self, params: &QueryDatabaseParameters) -> Result<T> {
        self.client.call(&databases::QUERY, params).await
    }

    /// List databases shared with the integration.
    #[instrument(skip_all)]
    pub async fn list<T: DeserializeOwned>(self, params: &ListDatabasesParameters) -> Result<T> {
        self.client.call(&databases::LIST, params).await
    }

    /// Create a database under a parent page.
    #[instrument(skip_all)]
    pub async fn create<T: DeserializeOwned>(
        self,
        params: &CreateDatabaseParameters,
    ) -> Result<T> {
        self.client.call(&databases::CREATE, params).await
    }

    /// Update title, description, properties or archive state.
    #[instrument(skip_all, fields(database_id = %params.database_id))]
    pub async fn update<T: DeserializeOwned>(
        self,
        params: &UpdateDatabaseParameters,
    ) -> Result<T> {
        self.client.call(&databases::UPDATE, params).await
    }
}
