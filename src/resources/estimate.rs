use crate::client::{decode_enveloped, Access, ApiClient, ApiResult};
use crate::models::Estimate;
use crate::params::EstimateParams;
use tracing::instrument;

impl ApiClient {
    /// Quotes the available services for a parcel.
    ///
    /// GET /estimate
    ///
    /// Parameters are validated first, so an overweight parcel fails without
    /// a round trip.
    #[instrument(skip(self))]
    pub async fn estimate(&self, params: &EstimateParams) -> ApiResult<Estimate> {
        params.validate()?;
        let response = self.get(&["estimate"], Access::Bearer, Some(params)).await?;
        decode_enveloped(response, "estimate")
    }
}
