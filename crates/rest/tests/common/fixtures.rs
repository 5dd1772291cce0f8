//! Test fixtures for REST API testing.

use doctr_persistence::types::DoctorDraft;
use serde_json::{Value, json};

/// A valid doctor payload.
pub fn srikanth() -> Value {
    json!({
        "firstName": "Srikanth",
        "lastName": "Kakumanu",
        "address": "Lakshmi Prasad Arcade",
        "city": "Tenali",
        "pincode": "522201"
    })
}

/// A valid payload with a custom first name and pincode.
pub fn doctor_json(first_name: &str, pincode: &str) -> Value {
    let mut doctor = srikanth();
    doctor["firstName"] = json!(first_name);
    doctor["pincode"] = json!(pincode);
    doctor
}

/// A valid draft for seeding the backend directly.
pub fn draft(first_name: &str, pincode: &str) -> DoctorDraft {
    DoctorDraft::new(
        first_name,
        "Kakumanu",
        "Lakshmi Prasad Arcade",
        "Tenali",
        pincode,
    )
}
