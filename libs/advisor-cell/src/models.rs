use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: Option<String>,
}

/// One ranked match from the doctor advisor: a doctor and how far away
/// they practice from the patient's coordinates, in kilometers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorDistance {
    pub doctor: Doctor,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drug {
    pub id: Uuid,
    pub name: String,
}
