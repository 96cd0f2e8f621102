//! Async client for the BoxC shipping API.
//!
//! ```no_run
//! # async fn run() -> boxc_rs::ApiResult<()> {
//! use boxc_rs::{ApiClient, EstimateParams};
//!
//! let client = ApiClient::new(Some("my-token".to_string()))?;
//! let params = EstimateParams::builder()
//!     .postal_code("90210")
//!     .weight(1.2)
//!     .build()?;
//! let estimate = client.estimate(&params).await?;
//! println!("{} services quoted", estimate.services().len());
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
mod resources;

pub use auth::{AuthStrategy, BearerAuth};
pub use client::{ApiClient, ApiResult};
pub use config::{ClientConfig, BASE_URL};
pub use error::BoxcError;
pub use models::{AccessToken, EntryPoint, Estimate, EstimateService};
pub use params::{EstimateParams, EstimateParamsBuilder, SearchParams, SearchParamsBuilder, SortOrder};
