use crate::domain::plan::PlanRequest;
use chrono::NaiveDate;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBudget,
    EmptyDestinations,
    MalformedDate(&'static str),
    DateOrder,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBudget => write!(f, "budget must be > 0"),
            ValidationError::EmptyDestinations => write!(f, "destinations cannot be empty"),
            ValidationError::MalformedDate(field) => write!(f, "{field} must be YYYY-MM-DD"),
            ValidationError::DateOrder => write!(f, "end_date must be >= start_date"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check basic inputs and parse the trip dates.
/// Equal start and end dates are allowed (a single-day, zero-night trip).
pub fn validate(req: &PlanRequest) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    if req.budget <= 0 {
        return Err(ValidationError::InvalidBudget);
    }
    if req.destinations.is_empty() {
        return Err(ValidationError::EmptyDestinations);
    }
    let start = NaiveDate::parse_from_str(&req.start_date, DATE_FORMAT)
        .map_err(|_| ValidationError::MalformedDate("start_date"))?;
    let end = NaiveDate::parse_from_str(&req.end_date, DATE_FORMAT)
        .map_err(|_| ValidationError::MalformedDate("end_date"))?;
    if end < start {
        return Err(ValidationError::DateOrder);
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanRequest {
        PlanRequest {
            origin: "Nairobi".to_string(),
            destinations: vec!["Diani".to_string()],
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-03".to_string(),
            budget: 50000,
            interests: vec![],
        }
    }

    #[test]
    fn accepts_valid_request() {
        let (start, end) = validate(&request()).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn accepts_equal_dates() {
        let mut req = request();
        req.end_date = req.start_date.clone();
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn rejects_non_positive_budget() {
        let mut req = request();
        req.budget = 0;
        assert_eq!(validate(&req), Err(ValidationError::InvalidBudget));
        req.budget = -100;
        assert_eq!(validate(&req), Err(ValidationError::InvalidBudget));
    }

    #[test]
    fn rejects_empty_destinations() {
        let mut req = request();
        req.destinations.clear();
        assert_eq!(validate(&req), Err(ValidationError::EmptyDestinations));
    }

    #[test]
    fn rejects_malformed_dates() {
        let mut req = request();
        req.start_date = "01/01/2024".to_string();
        assert_eq!(
            validate(&req),
            Err(ValidationError::MalformedDate("start_date"))
        );

        let mut req = request();
        req.end_date = "not-a-date".to_string();
        assert_eq!(
            validate(&req),
            Err(ValidationError::MalformedDate("end_date"))
        );
    }

    #[test]
    fn rejects_end_before_start() {
        let mut req = request();
        req.start_date = "2024-01-03".to_string();
        req.end_date = "2024-01-01".to_string();
        assert_eq!(validate(&req), Err(ValidationError::DateOrder));
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(ValidationError::InvalidBudget.to_string(), "budget must be > 0");
        assert_eq!(
            ValidationError::MalformedDate("start_date").to_string(),
            "start_date must be YYYY-MM-DD"
        );
        assert_eq!(
            ValidationError::DateOrder.to_string(),
            "end_date must be >= start_date"
        );
    }
}
