use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Incoming plan request. Unknown fields are rejected at the decoder;
/// missing fields decode to their zero values and fail validation instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanRequest {
    pub origin: String,
    /// Ordered city names, assigned to days round-robin.
    pub destinations: Vec<String>,
    /// YYYY-MM-DD; kept as text until the validator parses it.
    pub start_date: String,
    /// YYYY-MM-DD, inclusive end of the trip.
    pub end_date: String,
    pub budget: i64,
    /// Free-text tags, matched case-insensitively.
    pub interests: Vec<String>,
}

/// Budget split across the four spend categories.
/// The categories always sum exactly to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub accommodation: i64,
    pub transport: i64,
    pub food: i64,
    pub activities: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub city: String,
    /// One or two activity descriptions for the day.
    pub plan: Vec<String>,
    pub est_cost: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub nights: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub id: String,
    pub summary: PlanSummary,
    #[serde(rename = "itinerary")]
    pub days: Vec<DayPlan>,
    pub notes: Vec<String>,
    /// Originating request, retained for internal use only.
    #[serde(skip_serializing)]
    pub request: PlanRequest,
    #[serde(rename = "budget_split")]
    pub budget: BudgetBreakdown,
}
