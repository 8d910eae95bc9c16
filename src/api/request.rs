//! Request and response bodies for the Budget Allocation Engine API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DateRange;

/// Request body for the `/allocate` and `/budget` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl From<AllocationRequest> for DateRange {
    fn from(req: AllocationRequest) -> Self {
        DateRange::new(req.start_date, req.end_date)
    }
}

/// Response body for the `/budget` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetTotalResponse {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// The allocated budget.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_allocation_request() {
        let json = r#"{"start_date": "2024-01-30", "end_date": "2024-02-02"}"#;

        let request: AllocationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap());
    }

    #[test]
    fn test_missing_end_date_is_rejected() {
        let json = r#"{"start_date": "2024-01-30"}"#;
        let err = serde_json::from_str::<AllocationRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `end_date`"));
    }

    #[test]
    fn test_range_conversion_keeps_order() {
        let req = AllocationRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };

        let range: DateRange = req.into();
        assert!(!range.is_valid());
    }

    #[test]
    fn test_serialize_total_response() {
        let response = BudgetTotalResponse {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            total: Decimal::from(10000),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"total\":\"10000\""));
    }
}
