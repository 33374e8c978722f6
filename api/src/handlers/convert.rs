//! Conversion handlers
//!
//! Endpoints for the basic and culinary unit converters. Both are
//! stateless; incompatible requests get an explicit outcome, not an error
//! status.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::conversion::{self, Conversion, CulinaryConversion};
use crate::domain::entities::{Measure, Unit};

/// Request body for a basic unit conversion
#[derive(Debug, Deserialize)]
pub struct BasicConversionRequest {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

/// Request body for a culinary-measure conversion
#[derive(Debug, Deserialize)]
pub struct CulinaryConversionRequest {
    pub value: f64,
    pub measure: Measure,
    pub to: Unit,
}

/// Response body for a culinary conversion
#[derive(Debug, Serialize)]
pub struct CulinaryConversionResponse {
    #[serde(flatten)]
    pub outcome: CulinaryConversion,
    /// Present on numeric results; the measure factors are approximations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// POST /convert/basic
///
/// Convert a value between two units of the same group.
pub async fn convert_basic(Json(request): Json<BasicConversionRequest>) -> Json<Conversion> {
    Json(conversion::convert_basic(
        request.value,
        request.from,
        request.to,
    ))
}

/// POST /convert/culinary
///
/// Convert a culinary measure into a concrete unit.
pub async fn convert_culinary(
    Json(request): Json<CulinaryConversionRequest>,
) -> Json<CulinaryConversionResponse> {
    let outcome = conversion::convert_culinary(request.value, request.measure, request.to);
    let note = match &outcome {
        CulinaryConversion::Converted { .. } => Some("Culinary conversions are approximations."),
        _ => None,
    };

    Json(CulinaryConversionResponse { outcome, note })
}
