use allertrack_core::domain::ingredient::entities::UnsafeFoodStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn default_status() -> UnsafeFoodStatus {
    UnsafeFoodStatus::Confirmed
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddUnsafeFoodValidator {
    pub ingredient_id: Uuid,
    /// Defaults to `confirmed`
    #[serde(default = "default_status")]
    pub status: UnsafeFoodStatus,
    /// Allergy known before the user started logging
    #[serde(default)]
    pub pre_existing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_confirmed() {
        let payload: AddUnsafeFoodValidator = serde_json::from_str(&format!(
            r#"{{"ingredientId":"{}"}}"#,
            Uuid::new_v4()
        ))
        .unwrap();

        assert_eq!(payload.status, UnsafeFoodStatus::Confirmed);
        assert!(!payload.pre_existing);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let payload: Result<AddUnsafeFoodValidator, _> = serde_json::from_str(&format!(
            r#"{{"ingredientId":"{}","status":"maybe"}}"#,
            Uuid::new_v4()
        ));

        assert!(payload.is_err());
    }
}
