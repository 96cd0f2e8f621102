use crate::client::{decode, Access, ApiClient, ApiResult};
use crate::error::BoxcError;
use crate::models::AccessToken;
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Serialize)]
struct AccessTokenRequest<'a> {
    application_id: &'a str,
    application_secret: &'a str,
    nonce: &'a str,
}

impl ApiClient {
    /// Exchanges the nonce from the authorization redirect for an access token.
    ///
    /// POST /oauth/access_token
    ///
    /// The token is returned, not stored; see [`ApiClient::authenticate`].
    #[instrument(skip(self, application_secret, nonce))]
    pub async fn create_access_token(
        &self,
        application_id: &str,
        application_secret: &str,
        nonce: &str,
    ) -> ApiResult<AccessToken> {
        let body = AccessTokenRequest {
            application_id,
            application_secret,
            nonce,
        };

        let response = self
            .post(&["oauth", "access_token"], Access::Public, Some(&body))
            .await
            .map_err(|err| match err {
                BoxcError::Http { status, body } => BoxcError::Auth { status, body },
                other => other,
            })?;
        decode(response)
    }

    /// Exchanges the nonce and stores the resulting token on this client.
    #[instrument(skip(self, application_secret, nonce))]
    pub async fn authenticate(
        &self,
        application_id: &str,
        application_secret: &str,
        nonce: &str,
    ) -> ApiResult<String> {
        let token = self
            .create_access_token(application_id, application_secret, nonce)
            .await?;
        info!("Obtained access token for application {}", application_id);
        Ok(self.set_access_token(token.access_token))
    }
}
