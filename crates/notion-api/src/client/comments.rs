use serde::de::DeserializeOwned;
use tracing::instrument;

use notionkit_client::Result;

use crate::endpoints::comments;
use crate::params::{CreateCommentParameters, ListCommentsParameters};

/// Comment operations. Obtained from [`super::NotionClient::comments`].
#[derive(Debug, Clone, Copy)]
pub struct Comments<'a> {
    pub(super) client: &'a super::NotionClient,
}

impl Comments<'_> {
    #[instrument(skip_all)]
    pub async fn create<T: DeserializeOwned>(
        self,
        params: &CreateCommentParameters,
    ) -> Result<T> {
        self.client.call(&comments::CREATE, params).await
    }

    /// List unresolved comments on a page or block.
    #[instrument(skip_all, fields(block_id = %params.block_id))]
    pub async fn list<T: DeserializeOwned>(self, params: &ListCommentsParameters) -> Result<T> {
        self.client.call(&comments::LIST, params).await
    }
}
