use serde::de::DeserializeOwned;
use tracing::instrument;

use notionkit_client::Result;

use crate::endpoints::pages;
use crate::params::{
    CreatePageParameters, RetrievePageParameters, RetrievePagePropertyParameters,
    UpdatePageParameters,
};

/// Page operations. Obtained from [`super::NotionClient::pages`].
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a> {
    pub(super) client: &'a super::NotionClient,
}

impl<'a> Pages<'a> {
    /// Page property item operations.
    pub fn properties(self) -> PageProperties<'a> {
        PageProperties {
            client: self.client,
        }
    }

    /// Create a page in a database or under another page.
    #[instrument(skip_all)]
    pub async fn create<T: DeserializeOwned>(self, params: &CreatePageParameters) -> Result<T> {
        self.client.call(&pages::CREATE, params).await
    }

    /// Retrieve a page object.
    #[instrument(skip_all, fields(page_id = %params.page_id))]
    pub async fn retrieve<T: DeserializeOwned>(
        self,
        params: &RetrievePageParameters,
    ) -> Result<T> {
        self.client.call(&pages::RETRIEVE, params).await
    }

    /// Update page properties, icon, cover or archive state.
    #[instrument(skip_all, fields(page_id = %params.page_id))]
    pub async fn update<T: DeserializeOwned>(self, params: &UpdatePageParameters) -> Result<T> {
        self.client.call(&pages::UPDATE, params).await
    }
}

/// Page property item operations.
#[derive(Debug, Clone, Copy)]
pub struct PageProperties<'a> {
    client: &'a super::NotionClient,
}

impl PageProperties<'_> {
    /// Retrieve a single property item, paginated for rollups and relations.
    #[instrument(skip_all, fields(page_id = %params.page_id, property_id = %params.property_id))]
    pub async fn retrieve<T: DeserializeOwned>(
        self,
        params: &RetrievePagePropertyParameters,
    ) -> Result<T> {
        self.client.call(&pages::RETRIEVE_PROPERTY, params).await
    }
}
