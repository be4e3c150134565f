use rust_decimal::Decimal;

use super::{FieldErrors, Form};
use crate::models::{CreatePositionRequest, Position, UpdatePositionRequest};
use crate::services::MAX_POSITION_NAME;

/// Create/edit form for a position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionForm {
    /// Position name, 1..=100 characters.
    pub name: String,
    /// Free-text description; blank means none.
    pub description: String,
    /// Whether the position can be assigned.
    pub active: bool,
    /// Optional pay multiplier within 0..=1.
    pub multiplier: Option<Decimal>,
    /// Set when editing a position that has a description; blanking the
    /// field then clears it on the service.
    pub had_description: bool,
}

impl Default for PositionForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            active: true,
            multiplier: None,
            had_description: false,
        }
    }
}

impl PositionForm {
    /// Prefills the form from an existing position.
    pub fn from_position(position: &Position) -> Self {
        Self {
            name: position.name.clone(),
            description: position.description.clone().unwrap_or_default(),
            active: position.active,
            multiplier: position.multiplier,
            had_description: position
                .description
                .as_deref()
                .is_some_and(|d| !d.trim().is_empty()),
        }
    }

    /// Validates and builds a create payload.
    pub fn to_create_request(&self) -> Result<CreatePositionRequest, FieldErrors> {
        self.validate()?;
        Ok(CreatePositionRequest {
            name: self.name.clone(),
            description: self.description_value(),
            active: Some(self.active),
            multiplier: self.multiplier,
        })
    }

    /// Validates and builds an update payload carrying every field.
    ///
    /// A blank description is sent as an empty string when the position had
    /// one, since an absent field leaves it untouched.
    pub fn to_update_request(&self) -> Result<UpdatePositionRequest, FieldErrors> {
        self.validate()?;
        let description = match self.description_value() {
            None if self.had_description => Some(String::new()),
            value => value,
        };
        Ok(UpdatePositionRequest {
            name: Some(self.name.clone()),
            description,
            active: Some(self.active),
            multiplier: self.multiplier,
        })
    }

    fn description_value(&self) -> Option<String> {
        let description = self.description.trim();
        (!description.is_empty()).then(|| description.to_string())
    }
}

impl Form for PositionForm {
    const SUBJECT: &'static str = "Position";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let length = self.name.trim().chars().count();
        if length == 0 {
            errors.insert("name", "Position name is required");
        } else if length > MAX_POSITION_NAME {
            errors.insert("name", "Name too long");
        }

        if let Some(multiplier) = self.multiplier {
            if multiplier < Decimal::ZERO || multiplier > Decimal::ONE {
                errors.insert("multiplier", "Multiplier must be between 0 and 1");
            }
        }

        errors.into_result()
    }

    fn display_name(&self) -> String {
        self.name.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults_to_active() {
        let form = PositionForm::default();
        assert!(form.active);
        assert_eq!(form.multiplier, None);
    }

    #[test]
    fn test_name_bounds() {
        let blank = PositionForm {
            name: "   ".to_string(),
            ..PositionForm::default()
        };
        let errors = blank.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Position name is required"));

        let long = PositionForm {
            name: "x".repeat(101),
            ..PositionForm::default()
        };
        assert_eq!(long.validate().unwrap_err().get("name"), Some("Name too long"));

        let exact = PositionForm {
            name: "x".repeat(100),
            ..PositionForm::default()
        };
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_multiplier_range() {
        let mut form = PositionForm {
            name: "SUPERVISOR".to_string(),
            multiplier: Some(Decimal::new(15, 1)),
            ..PositionForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("multiplier"),
            Some("Multiplier must be between 0 and 1")
        );

        form.multiplier = Some(Decimal::ZERO);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_create_request_drops_blank_description() {
        let form = PositionForm {
            name: "SUPERVISOR".to_string(),
            description: "  ".to_string(),
            multiplier: Some(Decimal::ONE),
            ..PositionForm::default()
        };
        let request = form.to_create_request().unwrap();
        assert_eq!(request.name, "SUPERVISOR");
        assert_eq!(request.description, None);
        assert_eq!(request.active, Some(true));
        assert_eq!(request.multiplier, Some(Decimal::ONE));
    }

    fn position(description: Option<&str>) -> Position {
        Position {
            uuid: uuid::Uuid::new_v4(),
            name: "SUPERVISOR".to_string(),
            active: true,
            description: description.map(str::to_string),
            multiplier: Some(Decimal::ONE),
            created_at: None,
        }
    }

    #[test]
    fn test_blanking_existing_description_clears_it() {
        let mut form = PositionForm::from_position(&position(Some("Leads the night crew")));
        assert_eq!(form.description, "Leads the night crew");
        form.description = "   ".to_string();

        let request = form.to_update_request().unwrap();
        assert_eq!(request.description, Some(String::new()));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["description"], "");
    }

    #[test]
    fn test_blank_description_stays_absent_when_none_existed() {
        let form = PositionForm::from_position(&position(None));
        let request = form.to_update_request().unwrap();
        assert_eq!(request.description, None);

        let mut edited = form.clone();
        edited.description = " Sweeps ".to_string();
        assert_eq!(
            edited.to_update_request().unwrap().description.as_deref(),
            Some("Sweeps")
        );
    }
}
