use crate::client::{Access, ApiClient, ApiResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::instrument;

impl ApiClient {
    /// POST /manifests
    #[instrument(skip(self, manifest))]
    pub async fn create_manifest<M>(&self, manifest: &M) -> ApiResult<Value>
    where
        M: Serialize + ?Sized,
    {
        self.post(&["manifests"], Access::Bearer, Some(manifest)).await
    }

    /// GET /manifests/{id}
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn get_manifest(&self, id: impl Display) -> ApiResult<Value> {
        let id = id.to_string();
        self.get(&["manifests", id.as_str()], Access::Bearer, None::<&()>).await
    }
}
