use crate::client::{Access, ApiClient, ApiResult};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use tracing::instrument;

#[derive(Serialize)]
struct LabelEnvelope<'a, L: ?Sized> {
    label: &'a L,
}

impl ApiClient {
    /// GET /labels/{id}
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn get_label(&self, id: impl Display) -> ApiResult<Value> {
        let id = id.to_string();
        self.get(&["labels", id.as_str()], Access::Bearer, None::<&()>).await
    }

    /// Creates a label; the payload is sent as `{"label": ...}`.
    ///
    /// POST /labels
    #[instrument(skip(self, label))]
    pub async fn create_label<L>(&self, label: &L) -> ApiResult<Value>
    where
        L: Serialize + ?Sized,
    {
        let body = LabelEnvelope { label };
        self.post(&["labels"], Access::Bearer, Some(&body)).await
    }

    /// PUT /labels/{id}
    #[instrument(skip(self, id, label), fields(id = %id))]
    pub async fn update_label<L>(&self, id: impl Display, label: &L) -> ApiResult<Value>
    where
        L: Serialize + ?Sized,
    {
        let id = id.to_string();
        self.put(&["labels", id.as_str()], Some(label)).await
    }

    /// PUT /labels/{id}/cancel
    #[instrument(skip(self, id), fields(id = %id))]
    pub async fn cancel_label(&self, id: impl Display) -> ApiResult<Value> {
        let id = id.to_string();
        self.put(&["labels", id.as_str(), "cancel"], None::<&()>).await
    }
}
