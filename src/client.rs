use crate::auth::{AuthStrategy, BearerAuth};
use crate::config::ClientConfig;
use crate::error::BoxcError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, info, instrument};
use url::Url;

pub type ApiResult<T> = Result<T, BoxcError>;

/// Whether an endpoint needs the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Bearer,
}

/// Client for the BoxC v1 REST API.
///
/// The token slot is shared by every call made through this instance. Each
/// call snapshots it when the request is built, so replacing the token never
/// affects a request that is already in flight.
#[derive(Debug)]
pub struct ApiClient {
    base_url: Url,
    client: ReqwestClient,
    auth_strategy: RwLock<Option<Arc<dyn AuthStrategy>>>,
}

impl Clone for ApiClient {
    fn clone(&self) -> Self {
        ApiClient {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_strategy: RwLock::new(self.current_auth()),
        }
    }
}

impl ApiClient {
    /// Client against the production endpoint, optionally already holding a token.
    pub fn new(token: Option<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::default(), token)
    }

    pub fn with_config(config: ClientConfig, token: Option<String>) -> ApiResult<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(BoxcError::Config(format!(
                "base URL `{}` cannot carry resource paths",
                config.base_url
            )));
        }

        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;

        let api = ApiClient {
            base_url,
            client,
            auth_strategy: RwLock::new(None),
        };
        if let Some(token) = token {
            api.set_access_token(token);
        }
        Ok(api)
    }

    /// Stores the bearer token used by every authenticated call from now on.
    ///
    /// An empty token clears the slot instead of producing a malformed header.
    pub fn set_access_token(&self, token: impl Into<String>) -> String {
        let token = token.into();
        if token.trim().is_empty() {
            self.store_auth(None);
            info!("Access token cleared");
            return "Access token cleared".to_string();
        }

        let message = format!("Active Token: {}", token);
        self.store_auth(Some(Arc::new(BearerAuth::new(token))));
        info!("Access token updated");
        message
    }

    pub fn set_auth_strategy(&self, strategy: Arc<dyn AuthStrategy>) {
        self.store_auth(Some(strategy));
    }

    pub fn clear_access_token(&self) {
        self.store_auth(None);
    }

    pub fn has_access_token(&self) -> bool {
        self.current_auth().is_some()
    }

    /// URL the user is sent to for granting this application access.
    ///
    /// Pure; nothing is sent over the network.
    pub fn get_authorization_url(&self, application_id: &str, return_uri: &str) -> ApiResult<String> {
        let mut url = self.endpoint_url(&["oauth", "authorize"])?;
        url.query_pairs_mut()
            .append_pair("application_id", application_id)
            .append_pair("return_uri", return_uri);
        Ok(url.into())
    }

    fn current_auth(&self) -> Option<Arc<dyn AuthStrategy>> {
        match self.auth_strategy.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store_auth(&self, auth: Option<Arc<dyn AuthStrategy>>) {
        match self.auth_strategy.write() {
            Ok(mut guard) => *guard = auth,
            Err(poisoned) => *poisoned.into_inner() = auth,
        }
    }

    fn endpoint_url(&self, segments: &[&str]) -> ApiResult<Url> {
        // The url crate drops `.`/`..` segments, which would retarget the request.
        if let Some(segment) = segments
            .iter()
            .find(|segment| segment.is_empty() || **segment == "." || **segment == "..")
        {
            return Err(BoxcError::Validation(format!(
                "`{}` is not a valid resource id",
                segment
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BoxcError::Config(format!("base URL `{}` cannot carry resource paths", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str], access: Access) -> ApiResult<RequestBuilder> {
        // Captured once; a later set_access_token does not reach this request.
        let auth = match access {
            Access::Public => None,
            Access::Bearer => Some(self.current_auth().ok_or(BoxcError::Unauthorized)?),
        };

        let url = self.endpoint_url(segments)?;
        info!("Sending {} request to URL: {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(auth) = auth {
            request = auth.apply_auth(request);
        }
        Ok(request)
    }

    #[instrument(skip(self, params))]
    pub(crate) async fn get<Q>(&self, segments: &[&str], access: Access, params: Option<&Q>) -> ApiResult<Value>
    where
        Q: Serialize + Debug + ?Sized,
    {
        let mut request = self.request(Method::GET, segments, access)?;

        if let Some(params) = params {
            request = request.query(params);
            debug!("Added query parameters: {:?}", params);
        }

        self.execute(request).await
    }

    #[instrument(skip(self, body))]
    pub(crate) async fn post<B>(&self, segments: &[&str], access: Access, body: Option<&B>) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::POST, segments, access, body).await
    }

    #[instrument(skip(self, body))]
    pub(crate) async fn put<B>(&self, segments: &[&str], body: Option<&B>) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_body(Method::PUT, segments, Access::Bearer, body).await
    }

    #[instrument(skip(self))]
    pub(crate) async fn delete(&self, segments: &[&str]) -> ApiResult<Value> {
        let request = self.request(Method::DELETE, segments, Access::Bearer)?;
        self.execute(request).await
    }

    async fn send_with_body<B>(
        &self,
        method: Method,
        segments: &[&str],
        access: Access,
        body: Option<&B>,
    ) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.request(method, segments, access)?;

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(|e| {
                error!("Failed to serialize body: {:?}", e);
                BoxcError::Serialize(e)
            })?;
            // Bodies may carry application secrets, so only the size is logged.
            debug!("Serialized body ({} bytes)", encoded.len());
            request = request.header(CONTENT_TYPE, "application/json").body(encoded);
        }

        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await.map_err(|e| {
            error!("Network error while sending request: {:?}", e);
            BoxcError::Network(e)
        })?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> ApiResult<Value> {
        let status = response.status();
        debug!("Received response with status {}", status);

        let text = response.text().await.map_err(|e| {
            error!("Failed to read response body: {:?}", e);
            BoxcError::Network(e)
        })?;
        let body = parse_body(&text);

        if status.is_success() {
            Ok(body)
        } else {
            error!("API returned status {}", status);
            Err(BoxcError::Http { status, body })
        }
    }
}

/// JSON when the body is JSON, the raw text otherwise, `null` when empty.
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

pub(crate) fn decode<T>(body: Value) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(body).map_err(|err| {
        let path = err.path().to_string();
        error!("Failed to parse JSON response at {}: {}", path, err.inner());
        BoxcError::Deserialize {
            path,
            message: err.inner().to_string(),
        }
    })
}

/// Like [`decode`], but first strips a single-key `{"<envelope>": ...}` wrapper.
pub(crate) fn decode_enveloped<T>(body: Value, envelope: &str) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    let body = match body {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(envelope) => {
            map.remove(envelope).unwrap_or(Value::Null)
        }
        other => other,
    };
    decode(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn client() -> ApiClient {
        ApiClient::new(None).unwrap()
    }

    #[test]
    fn authorization_url_round_trips_parameters() {
        let url = client()
            .get_authorization_url("app 42&x", "https://example.com/callback?next=/a b")
            .unwrap();
        assert!(url.starts_with("https://api.boxc.com/v1/oauth/authorize?"));

        let parsed = Url::parse(&url).unwrap();
        let pairs: HashMap<_, _> = parsed.query_pairs().into_owned().collect();
        assert_eq!(pairs["application_id"], "app 42&x");
        assert_eq!(pairs["return_uri"], "https://example.com/callback?next=/a b");
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn endpoint_url_keeps_base_path_and_encodes_ids() {
        let url = client().endpoint_url(&["labels", "a/b c", "cancel"]).unwrap();
        assert_eq!(url.as_str(), "https://api.boxc.com/v1/labels/a%2Fb%20c/cancel");
    }

    #[test]
    fn empty_and_dot_segments_are_rejected() {
        for id in ["", ".", ".."] {
            let err = client().endpoint_url(&["shipments", id]).unwrap_err();
            assert!(matches!(err, BoxcError::Validation(_)), "id {id:?}");
        }
        assert!(client().endpoint_url(&["shipments", "..."]).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = ApiClient::with_config(ClientConfig::with_base_url("http://localhost:3000/"), None).unwrap();
        let url = api.endpoint_url(&["users", "me"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/users/me");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::with_config(ClientConfig::with_base_url("not a url"), None).unwrap_err();
        assert!(matches!(err, BoxcError::Url(_)));

        let err = ApiClient::with_config(ClientConfig::with_base_url("mailto:ops@example.com"), None).unwrap_err();
        assert!(matches!(err, BoxcError::Config(_)));
    }

    #[test]
    fn constructor_token_is_kept() {
        let api = ApiClient::new(Some("abc".to_string())).unwrap();
        assert!(api.has_access_token());
        assert!(!client().has_access_token());
    }

    #[test]
    fn set_access_token_reports_and_clears() {
        let api = client();
        assert_eq!(api.set_access_token("abc"), "Active Token: abc");
        assert!(api.has_access_token());

        assert_eq!(api.set_access_token("  "), "Access token cleared");
        assert!(!api.has_access_token());
    }

    #[test]
    fn clone_snapshots_token() {
        let api = ApiClient::new(Some("first".to_string())).unwrap();
        let copy = api.clone();
        api.clear_access_token();
        assert!(copy.has_access_token());
        assert!(!api.has_access_token());
    }

    #[test]
    fn authenticated_request_requires_token() {
        let err = client().request(Method::GET, &["users", "me"], Access::Bearer).unwrap_err();
        assert!(matches!(err, BoxcError::Unauthorized));
        assert!(client().request(Method::GET, &["entry-points"], Access::Public).is_ok());
    }

    #[test]
    fn parse_body_falls_back_to_text() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("{\"ok\":true}"), json!({"ok": true}));
        assert_eq!(parse_body("[1,2]"), json!([1, 2]));
        assert_eq!(parse_body("Bad Gateway"), json!("Bad Gateway"));
    }

    #[test]
    fn decode_enveloped_accepts_both_shapes() {
        let wrapped: Vec<u32> = decode_enveloped(json!({"items": [1, 2]}), "items").unwrap();
        let bare: Vec<u32> = decode_enveloped(json!([1, 2]), "items").unwrap();
        assert_eq!(wrapped, bare);
    }

    #[test]
    fn decode_reports_failing_path() {
        let err = decode::<Vec<u32>>(json!([1, "two"])).unwrap_err();
        match err {
            BoxcError::Deserialize { path, .. } => assert_eq!(path, "[1]"),
            other => panic!("expected deserialize error, got {other:?}"),
        }
    }
}
