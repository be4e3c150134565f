use chrono::NaiveDate;

use super::{FieldErrors, Form};
use crate::models::{CreatePayPeriodRequest, PayFrequency, PayPeriod, UpdatePayPeriodRequest};
use crate::validation::INVALID_DATE_RANGE;

/// Create/edit form for a pay period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayPeriodForm {
    /// Pay frequency the period covers.
    pub frequency: Option<PayFrequency>,
    /// First day of the period.
    pub start_date: Option<NaiveDate>,
    /// Last day of the period; must be after the start.
    pub end_date: Option<NaiveDate>,
    /// Optional label; blank means none.
    pub label: String,
}

impl PayPeriodForm {
    /// Prefills the form from an existing pay period.
    pub fn from_pay_period(period: &PayPeriod) -> Self {
        Self {
            frequency: Some(period.frequency),
            start_date: Some(period.start_date),
            end_date: Some(period.end_date),
            label: period.label.clone().unwrap_or_default(),
        }
    }

    /// Validates and builds a create payload.
    pub fn to_create_request(&self) -> Result<CreatePayPeriodRequest, FieldErrors> {
        self.validate()?;
        let (Some(frequency), Some(start_date), Some(end_date)) =
            (self.frequency, self.start_date, self.end_date)
        else {
            return Err(FieldErrors::new());
        };
        Ok(CreatePayPeriodRequest {
            frequency,
            start_date,
            end_date,
            label: self.label_value(),
        })
    }

    /// Validates and builds an update payload carrying every field.
    pub fn to_update_request(&self) -> Result<UpdatePayPeriodRequest, FieldErrors> {
        self.validate()?;
        Ok(UpdatePayPeriodRequest {
            frequency: self.frequency,
            start_date: self.start_date,
            end_date: self.end_date,
            label: self.label_value(),
        })
    }

    fn label_value(&self) -> Option<String> {
        let label = self.label.trim();
        (!label.is_empty()).then(|| label.to_string())
    }
}

impl Form for PayPeriodForm {
    const SUBJECT: &'static str = "Pay period";

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.frequency.is_none() {
            errors.insert("frequency", "Frequency is required");
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start >= end => {
                errors.insert("startDate", INVALID_DATE_RANGE);
            }
            (start, end) => {
                if start.is_none() {
                    errors.insert("startDate", "Start date is required");
                }
                if end.is_none() {
                    errors.insert("endDate", "End date is required");
                }
            }
        }
        errors.into_result()
    }

    fn display_name(&self) -> String {
        match (self.label_value(), self.start_date, self.end_date) {
            (Some(label), _, _) => label,
            (None, Some(start), Some(end)) => format!("{start} to {end}"),
            _ => "Pay period".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_requires_every_field() {
        let errors = PayPeriodForm::default().validate().unwrap_err();
        assert_eq!(errors.get("frequency"), Some("Frequency is required"));
        assert_eq!(errors.get("startDate"), Some("Start date is required"));
        assert_eq!(errors.get("endDate"), Some("End date is required"));
    }

    #[test]
    fn test_end_must_follow_start() {
        let form = PayPeriodForm {
            frequency: Some(PayFrequency::Weekly),
            start_date: Some(date(2026, 3, 9)),
            end_date: Some(date(2026, 3, 9)),
            label: String::new(),
        };
        assert_eq!(
            form.validate().unwrap_err().get("startDate"),
            Some(INVALID_DATE_RANGE)
        );
    }

    #[test]
    fn test_display_name_falls_back_to_dates() {
        let form = PayPeriodForm {
            frequency: Some(PayFrequency::Weekly),
            start_date: Some(date(2026, 3, 9)),
            end_date: Some(date(2026, 3, 15)),
            label: " ".to_string(),
        };
        assert_eq!(form.display_name(), "2026-03-09 to 2026-03-15");
        assert_eq!(form.to_create_request().unwrap().label, None);
    }
}
