//! BMI calculation endpoint.
//! Used by: server.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::bmi::{BmiResult, Measurements};
use crate::error::{Error, Result};
use crate::state::AppState;

/// Fields stay untyped so a wrong type yields a per-field message instead of a serde error.
#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    pub height: Option<Value>,
    pub weight: Option<Value>,
}

pub async fn calculate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BmiRequest>, JsonRejection>,
) -> Result<Json<BmiResult>> {
    let outcome = payload
        .map_err(Error::from)
        .and_then(|Json(req)| Measurements::from_fields(req.height.as_ref(), req.weight.as_ref()))
        .and_then(|m| m.compute());

    match outcome {
        Ok(result) => {
            tracing::info!(bmi = result.bmi, category = result.category.label(), "bmi computed");
            state.metrics.record_computed();
            Ok(Json(result))
        }
        Err(err) => {
            if let Error::Validation(_) | Error::InvalidBody(_) = err {
                tracing::info!(error = %err, "bmi request rejected");
                state.metrics.record_validation_failure();
            }
            Err(err)
        }
    }
}
