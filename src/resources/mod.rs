//! One module per BoxC resource, each adding its methods to [`ApiClient`].
//!
//! [`ApiClient`]: crate::client::ApiClient

mod entry_points;
mod estimate;
mod invoices;
mod labels;
mod manifests;
mod oauth;
mod overpacks;
mod shipments;
mod users;
