use serde::de::DeserializeOwned;
use tracing::instrument;

use notionkit_client::Result;

use crate::endpoints::users;
use crate::params::{GetSelfParameters, ListUsersParameters, RetrieveUserParameters};

/// User operations. Obtained from [`super::NotionClient::users`].
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    pub(super) client: &'a super::NotionClient,
}

impl Users<'_> {
    #[instrument(skip_all, fields(user_id = %params.user_id))]
    pub async fn retrieve<T: DeserializeOwned>(
        self,
        params: &RetrieveUserParameters,
    ) -> Result<T> {
        self.client.call(&users::RETRIEVE, params).await
    }

    #[instrument(skip_all)]
    pub async fn list<T: DeserializeOwned>(self, params: &ListUsersParameters) -> Result<T> {
        self.client.call(&users::LIST, params).await
    }

    /// The bot user behind the token.
    #[instrument(skip_all)]
    pub async fn me<T: DeserializeOwned>(self, params: &GetSelfParameters) -> Result<T> {
        self.client.call(&users::ME, params).await
    }
}
