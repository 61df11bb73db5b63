use serde::de::DeserializeOwned;
use tracing::instrument;

use notionkit_client::Result;

use crate::endpoints::blocks;
use crate::params::{
    AppendBlockChildrenParameters, DeleteBlockParameters, ListBlockChildrenParameters,
    RetrieveBlockParameters, UpdateBlockParameters,
};

/// Block operations. Obtained from [`super::NotionClient::blocks`].
#[derive(Debug, Clone, Copy)]
pub struct Blocks<'a> {
    pub(super) client: &'a super::NotionClient,
}

impl<'a> Blocks<'a> {
    /// Child block operations.
    pub fn children(self) -> BlockChildren<'a> {
        BlockChildren {
            client: self.client,
        }
    }

    #[instrument(skip_all, fields(block_id = %params.block_id))]
    pub async fn retrieve<T: DeserializeOwned>(
        self,
        params: &RetrieveBlockParameters,
    ) -> Result<T> {
        self.client.call(&blocks::RETRIEVE, params).await
    }

    #[instrument(skip_all, fields(block_id = %params.block_id))]
    pub async fn update<T: DeserializeOwned>(self, params: &UpdateBlockParameters) -> Result<T> {
        self.client.call(&blocks::UPDATE, params).await
    }

    /// Archive a block. The API returns the archived block.
    #[instrument(skip_all, fields(block_id = %params.block_id))]
    pub async fn delete<T: DeserializeOwned>(self, params: &DeleteBlockParameters) -> Result<T> {
        self.client.call(&blocks::DELETE, params).await
    }
}

/// Child block operations.
#[derive(Debug, Clone, Copy)]
pub struct BlockChildren<'a> {
    client: &'a super::NotionClient,
}

impl BlockChildren<'_> {
    /// Append children to a block or page.
    #[instrument(skip_all, fields(block_id = %params.block_id))]
    pub async fn append<T: DeserializeOwned>(
        self,
        params: &AppendBlockChildrenParameters,
    ) -> Result<T> {
        self.client.call(&blocks::APPEND_CHILDREN, params).await
    }

    /// List one page of child blocks.
    #[instrument(skip_all, fields(block_id = %params.block_id))]
    pub async fn list<T: DeserializeOwned>(
        self,
        params: &ListBlockChildrenParameters,
    ) -> Result<T> {
        self.client.call(&blocks::LIST_CHILDREN, params).await
    }
}
