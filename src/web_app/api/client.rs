// web_app/api/client.rs - HTTP client for the product API
//
// `ProductApi` is the seam the search session is generic over, so tests
// can substitute a recording fake. `HttpProductApi` is the reqwest-backed
// implementation used by the pages (fetch under WASM) and the CLI probe.

use std::future::Future;

use reqwest::header::ACCEPT;

use super::error::ApiError;
use crate::config::CatalogConfig;
use crate::web_app::model::{CreateOutcome, NewProduct, ProductPage};
use crate::web_app::search::{SearchQueryState, PARAM_PAGE, PARAM_PER_PAGE, PARAM_TEXT};

/// Operations the catalog needs from the remote API
pub trait ProductApi {
    /// `GET /api/products?q=&page=&per_page=`
    fn search(
        &self,
        query: &SearchQueryState,
    ) -> impl Future<Output = Result<ProductPage, ApiError>>;

    /// `POST /api/products`
    fn create(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = Result<CreateOutcome, ApiError>>;
}

/// Query pairs sent for a search request
pub fn search_params(query: &SearchQueryState) -> [(&'static str, String); 3] {
    [
        (PARAM_TEXT, query.text.clone()),
        (PARAM_PAGE, query.page.to_string()),
        (PARAM_PER_PAGE, query.page_size.to_string()),
    ]
}

#[derive(Clone, Debug)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    /// Plain listing, used by the products page (no search text)
    pub async fn list(&self, page: u32, per_page: u32) -> Result<ProductPage, ApiError> {
        let params = [(PARAM_PAGE, page.to_string()), (PARAM_PER_PAGE, per_page.to_string())];
        self.fetch_page(&params).await
    }

    async fn fetch_page(&self, params: &[(&str, String)]) -> Result<ProductPage, ApiError> {
        let response = self
            .client
            .get(self.products_url())
            .query(params)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ProductApi for HttpProductApi {
    async fn search(&self, query: &SearchQueryState) -> Result<ProductPage, ApiError> {
        tracing::debug!("Search request: {:?}", query);
        let page = self.fetch_page(&search_params(query)).await?;
        tracing::debug!("Search returned {} items, last page {}", page.data.len(), page.last_page);
        Ok(page)
    }

    async fn create(&self, product: &NewProduct) -> Result<CreateOutcome, ApiError> {
        let response = self
            .client
            .post(self.products_url())
            .header(ACCEPT, "application/json")
            .json(product)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let outcome = CreateOutcome::from_body(serde_json::from_str(&body)?)?;
        if let CreateOutcome::Rejected(errors) = &outcome {
            tracing::info!("Create rejected with {} field errors", errors.len());
        }
        Ok(outcome)
    }
}
