use crate::client::{Access, ApiClient, ApiResult};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

impl ApiClient {
    /// Profile of the user the token belongs to.
    ///
    /// GET /users/me
    #[instrument(skip(self))]
    pub async fn get_user(&self) -> ApiResult<Value> {
        self.get(&["users", "me"], Access::Bearer, None::<&()>).await
    }

    /// PUT /users/me
    #[instrument(skip(self, user))]
    pub async fn update_user<U>(&self, user: &U) -> ApiResult<Value>
    where
        U: Serialize + ?Sized,
    {
        self.put(&["users", "me"], Some(user)).await
    }
}
