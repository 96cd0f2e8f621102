//! Typed query parameters for the search and estimate endpoints.
//!
//! Each struct serializes straight into a query string; fields left as `None`
//! are omitted. `validate` runs before any request is sent.

use crate::error::BoxcError;
use chrono::NaiveDate;
use derive_builder::Builder;
use serde::{Deserialize, Serialize, Serializer};

/// Heaviest parcel the estimate endpoint accepts, in kilograms.
pub const MAX_WEIGHT_KG: f64 = 11.363;

/// Largest page size the search endpoints accept.
pub const MAX_PAGE_LIMIT: u32 = 50;

/// Query for `GET /estimate`. Dimensions are in centimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "BoxcError"))]
#[serde(deny_unknown_fields)]
pub struct EstimateParams {
    /// ISO 3166-1 alpha-2 destination country.
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Drop-off location code, see the entry points endpoint.
    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,

    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_opt_decimal")]
    pub height: Option<f64>,

    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_opt_decimal")]
    pub length: Option<f64>,

    #[builder(setter(into))]
    pub postal_code: String,

    /// Kilograms, at most [`MAX_WEIGHT_KG`].
    #[builder(setter(into))]
    #[serde(serialize_with = "serialize_decimal")]
    pub weight: f64,

    #[builder(setter(into, strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none", serialize_with = "serialize_opt_decimal")]
    pub width: Option<f64>,
}

impl EstimateParams {
    pub fn builder() -> EstimateParamsBuilder {
        EstimateParamsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), BoxcError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(BoxcError::Validation(format!(
                "weight must be a positive number of kilograms, got {}",
                self.weight
            )));
        }
        if self.weight > MAX_WEIGHT_KG {
            return Err(BoxcError::Validation(format!(
                "weight {} kg exceeds the maximum of {} kg",
                self.weight, MAX_WEIGHT_KG
            )));
        }

        for (name, value) in [("height", self.height), ("length", self.length), ("width", self.width)] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(BoxcError::Validation(format!(
                        "{} must be a positive number of centimetres, got {}",
                        name, value
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Paging and date window shared by the invoice, overpack and shipment searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(build_fn(error = "BoxcError"), default)]
#[serde(deny_unknown_fields)]
pub struct SearchParams {
    /// Inclusive, sent as `YYYY-MM-DD`.
    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<NaiveDate>,

    /// Inclusive, sent as `YYYY-MM-DD`.
    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<NaiveDate>,

    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl SearchParams {
    pub fn builder() -> SearchParamsBuilder {
        SearchParamsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), BoxcError> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_PAGE_LIMIT {
                return Err(BoxcError::Validation(format!(
                    "limit must be between 1 and {}, got {}",
                    MAX_PAGE_LIMIT, limit
                )));
            }
        }
        if self.page == Some(0) {
            return Err(BoxcError::Validation("page numbers start at 1".to_string()));
        }
        if let (Some(start), Some(end)) = (self.date_start, self.date_end) {
            if start > end {
                return Err(BoxcError::Validation(format!(
                    "date_start {} is after date_end {}",
                    start, end
                )));
            }
        }
        Ok(())
    }
}

// Display gives the shortest form, so 5.0 goes out as `5` rather than `5.0`.
fn serialize_decimal<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

fn serialize_opt_decimal<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn estimate(weight: f64) -> EstimateParams {
        EstimateParams::builder()
            .postal_code("90210")
            .weight(weight)
            .build()
            .unwrap()
    }

    #[rstest]
    #[case(0.1)]
    #[case(5.0)]
    #[case(MAX_WEIGHT_KG)]
    fn accepts_weights_within_limit(#[case] weight: f64) {
        assert!(estimate(weight).validate().is_ok());
    }

    #[rstest]
    #[case(12.0)]
    #[case(11.364)]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn rejects_weights_outside_limit(#[case] weight: f64) {
        assert!(matches!(estimate(weight).validate(), Err(BoxcError::Validation(_))));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut params = estimate(1.0);
        params.height = Some(0.0);
        assert!(matches!(params.validate(), Err(BoxcError::Validation(_))));
    }

    #[test]
    fn builder_reports_missing_weight() {
        let err = EstimateParams::builder().postal_code("90210").build().unwrap_err();
        match err {
            BoxcError::Validation(message) => assert!(message.contains("weight")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn estimate_serializes_shortest_decimals_and_skips_absent_fields() {
        let params = EstimateParams::builder()
            .postal_code("90210")
            .weight(5.0)
            .height(2.5)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"height": "2.5", "postal_code": "90210", "weight": "5"})
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<EstimateParams>(json!({
            "postal_code": "90210",
            "weight": 1.0,
            "insurance": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn search_params_serialize_dates_and_order() {
        let params = SearchParams::builder()
            .date_start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .date_end(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
            .order(SortOrder::Asc)
            .limit(25u32)
            .build()
            .unwrap();
        assert!(params.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"date_start": "2024-01-01", "date_end": "2024-01-31", "limit": 25, "order": "asc"})
        );
    }

    #[rstest]
    #[case(SearchParams { limit: Some(51), ..Default::default() })]
    #[case(SearchParams { limit: Some(0), ..Default::default() })]
    #[case(SearchParams { page: Some(0), ..Default::default() })]
    #[case(SearchParams {
        date_start: NaiveDate::from_ymd_opt(2024, 2, 1),
        date_end: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..Default::default()
    })]
    fn rejects_invalid_search_params(#[case] params: SearchParams) {
        assert!(matches!(params.validate(), Err(BoxcError::Validation(_))));
    }
}
