use reqwest::RequestBuilder;
use std::fmt::{self, Debug};

/// Decorates an outgoing request with credentials.
pub trait AuthStrategy: Send + Sync {
    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder;
}

impl Debug for dyn AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthStrategy")
    }
}

/// `Authorization: Bearer <token>` as issued by the BoxC OAuth exchange.
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        BearerAuth {
            token: token.into(),
        }
    }
}

impl AuthStrategy for BearerAuth {
    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"***") // Don't expose the actual token
            .finish()
    }
}
