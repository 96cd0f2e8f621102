use crate::client::{Access, ApiClient, ApiResult};
use crate::params::SearchParams;
use serde_json::Value;
use std::fmt::Display;
use tracing::instrument;

impl ApiClient {
    /// Paginated invoice search.
    ///
    /// GET /invoices
    #[instrument(skip(self))]
    pub async fn get_invoices(&self, params: &SearchParams) -> ApiResult<Value> {
        params.validate()?;
        self.get(&["invoices"], Access::Bearer, Some(params)).await
    }

    /// GET /invoice/{id}
    ///
    /// The single-invoice path is singular, unlike the search.
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn get_invoice(&self, id: impl Display) -> ApiResult<Value> {
        let id = id.to_string();
        self.get(&["invoice", id.as_str()], Access::Bearer, None::<&()>).await
    }
}
