use serde::de::DeserializeOwned;
use tracing::instrument;

use notionkit_client::Result;

use crate::endpoints::SEARCH;
use crate::params::SearchParameters;

impl super::NotionClient {
    /// Search pages and databases shared with the integration by title.
    #[instrument(skip_all)]
    pub async fn search<T: DeserializeOwned>(&self, params: &SearchParameters) -> Result<T> {
        self.call(&SEARCH, params).await
    }
}
