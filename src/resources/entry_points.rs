use crate::client::{decode_enveloped, Access, ApiClient, ApiResult};
use crate::models::EntryPoint;
use std::fmt::Display;
use tracing::instrument;

impl ApiClient {
    /// Lists every drop-off location. Needs no token.
    ///
    /// GET /entry-points
    #[instrument(skip(self))]
    pub async fn get_entry_points(&self) -> ApiResult<Vec<EntryPoint>> {
        let response = self.get(&["entry-points"], Access::Public, None::<&()>).await?;
        decode_enveloped(response, "entry_points")
    }

    /// GET /entry-points/{id}
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn get_entry_point(&self, id: impl Display) -> ApiResult<EntryPoint> {
        let id = id.to_string();
        let response = self
            .get(&["entry-points", id.as_str()], Access::Public, None::<&()>)
            .await?;
        decode_enveloped(response, "entry_point")
    }
}
