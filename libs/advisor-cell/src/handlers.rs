use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Map, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::extractor::PatientParams;

use crate::services::{DoctorAdvisor, DrugAdvisor};

/// GET /doctors
///
/// Returns a JSON object mapping doctor name to distance, rounded to two
/// decimal places. The advisor decides matching and ordering; this layer
/// only shapes the pairs into the response mapping.
#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppConfig>>,
    params: PatientParams,
) -> Result<Json<Value>, AppError> {
    let advisor = DoctorAdvisor::new(&state);

    let matches = advisor
        .find(
            &params.symptoms,
            params.age,
            &params.allergies,
            params.latitude,
            params.longitude,
        )
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // When the advisor repeats a name, the later pair wins.
    let mut doctors = Map::new();
    for entry in matches {
        doctors.insert(entry.doctor.name, json!(round_distance(entry.distance)));
    }

    Ok(Json(Value::Object(doctors)))
}

/// GET /drugs
///
/// Returns a JSON array of drug names in advisor order, duplicates kept.
#[axum::debug_handler]
pub async fn list_drugs(
    State(state): State<Arc<AppConfig>>,
    params: PatientParams,
) -> Result<Json<Value>, AppError> {
    let advisor = DrugAdvisor::new(&state);

    let drugs = advisor
        .find(&params.symptoms, params.age, &params.allergies)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let names: Vec<String> = drugs.into_iter().map(|drug| drug.name).collect();

    Ok(Json(json!(names)))
}

// Two decimal places, half away from zero.
fn round_distance(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}
