//! Doctor record types.
//!
//! [`Doctor`] is a persisted record carrying its store-assigned id;
//! [`DoctorDraft`] is the id-less payload accepted by create and update.

use serde::{Deserialize, Serialize};

/// A persisted doctor record.
///
/// # Examples
///
/// ```
/// use doctr_persistence::types::{Doctor, DoctorDraft};
///
/// let draft = DoctorDraft::new("Srikanth", "Kakumanu", "Lakshmi Prasad Arcade", "Tenali", "522201");
/// let doctor = Doctor::from_draft(7, draft);
///
/// assert_eq!(doctor.id, 7);
/// assert_eq!(doctor.pincode, "522201");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal index number, 5 or 6 digits.
    pub pincode: String,
}

impl Doctor {
    /// Builds a record from a draft and the id the store assigned to it.
    pub fn from_draft(id: i64, draft: DoctorDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            address: draft.address,
            city: draft.city,
            pincode: draft.pincode,
        }
    }

    /// Returns the mutable fields of this record as a draft.
    pub fn to_draft(&self) -> DoctorDraft {
        DoctorDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            pincode: self.pincode.clone(),
        }
    }
}

/// The mutable fields of a doctor, as submitted by a client.
///
/// Missing members deserialize to empty strings so that they surface as
/// "required" validation failures instead of JSON errors. Unknown members,
/// including any client-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal index number.
    pub pincode: String,
}

impl DoctorDraft {
    /// Creates a draft from its five fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            pincode: pincode.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doctor_serializes_camel_case() {
        let doctor = Doctor::from_draft(
            1,
            DoctorDraft::new("John", "Doe", "1 Main St", "Springfield", "12345"),
        );
        let value = serde_json::to_value(&doctor).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["firstName"], "John");
        assert_eq!(value["lastName"], "Doe");
        assert_eq!(value["pincode"], "12345");
    }

    #[test]
    fn test_draft_ignores_id_and_unknown_members() {
        let draft: DoctorDraft = serde_json::from_value(json!({
            "id": 99,
            "firstName": "John",
            "lastName": "Doe",
            "address": "1 Main St",
            "city": "Springfield",
            "pincode": "12345",
            "_links": {}
        }))
        .unwrap();

        assert_eq!(draft.first_name, "John");
        assert_eq!(draft.pincode, "12345");
    }

    #[test]
    fn test_draft_missing_members_default_to_empty() {
        let draft: DoctorDraft = serde_json::from_value(json!({"firstName": "John"})).unwrap();

        assert_eq!(draft.first_name, "John");
        assert!(draft.last_name.is_empty());
        assert!(draft.pincode.is_empty());
    }

    #[test]
    fn test_to_draft_drops_id() {
        let draft = DoctorDraft::new("A", "B", "C", "D", "123456");
        let doctor = Doctor::from_draft(3, draft.clone());
        assert_eq!(doctor.to_draft(), draft);
    }
}
