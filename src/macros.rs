/// Generates the search/get/create/update/delete method set for a resource
/// that follows the plain CRUD layout under a single path.
///
/// ```ignore
/// define_crud_resource! {
///     resource: shipment / shipments;
///     path: "shipments";
/// }
/// ```
///
/// expands to `get_shipments`, `get_shipment`, `create_shipment`,
/// `update_shipment` and `delete_shipment` on `ApiClient`.
macro_rules! define_crud_resource {
    (
        resource: $singular:ident / $plural:ident;
        path: $path:literal;
    ) => {
        paste::paste! {
            impl $crate::client::ApiClient {
                #[doc = concat!("Searches ", stringify!($plural), ", optionally filtered and paged.")]
                #[doc = ""]
                #[doc = concat!("GET /", $path)]
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $plural>](
                    &self,
                    params: Option<&$crate::params::SearchParams>,
                ) -> $crate::client::ApiResult<serde_json::Value> {
                    if let Some(params) = params {
                        params.validate()?;
                    }
                    self.get(&[$path], $crate::client::Access::Bearer, params).await
                }

                #[doc = concat!("GET /", $path, "/{id}")]
                #[tracing::instrument(skip(self, id), fields(id = %id))]
                pub async fn [<get_ $singular>](
                    &self,
                    id: impl std::fmt::Display,
                ) -> $crate::client::ApiResult<serde_json::Value> {
                    let id = id.to_string();
                    self.get(&[$path, id.as_str()], $crate::client::Access::Bearer, None::<&()>).await
                }

                #[doc = concat!("POST /", $path)]
                #[tracing::instrument(skip(self, $singular))]
                pub async fn [<create_ $singular>]<B>(
                    &self,
                    $singular: &B,
                ) -> $crate::client::ApiResult<serde_json::Value>
                where
                    B: serde::Serialize + ?Sized,
                {
                    self.post(&[$path], $crate::client::Access::Bearer, Some($singular)).await
                }

                #[doc = concat!("PUT /", $path, "/{id}")]
                #[tracing::instrument(skip(self, id, $singular), fields(id = %id))]
                pub async fn [<update_ $singular>]<B>(
                    &self,
                    id: impl std::fmt::Display,
                    $singular: &B,
                ) -> $crate::client::ApiResult<serde_json::Value>
                where
                    B: serde::Serialize + ?Sized,
                {
                    let id = id.to_string();
                    self.put(&[$path, id.as_str()], Some($singular)).await
                }

                #[doc = concat!("DELETE /", $path, "/{id}")]
                #[tracing::instrument(skip(self, id), fields(id = %id))]
                pub async fn [<delete_ $singular>](
                    &self,
                    id: impl std::fmt::Display,
                ) -> $crate::client::ApiResult<serde_json::Value> {
                    let id = id.to_string();
                    self.delete(&[$path, id.as_str()]).await
                }
            }
        }
    };
}
