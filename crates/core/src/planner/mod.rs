mod budget;
mod validate;

pub use budget::allocate_budget;
pub use validate::{validate, ValidationError};

use crate::catalog;
use crate::domain::plan::{DayPlan, Plan, PlanRequest, PlanSummary};
use chrono::Duration;

pub const ADVISORY_NOTE: &str =
    "This is a simple draft plan. Adjust activities and budget as you like.";

/// Build a draft plan for the request, or fail with the validation error.
pub fn build_plan(id: &str, req: PlanRequest) -> Result<Plan, ValidationError> {
    let (start, end) = validate(&req)?;

    // Inclusive date range, so equal dates still make a one-day trip.
    let day_count = (end - start).num_days() + 1;

    let budget = allocate_budget(req.budget, &req.interests);
    // Remainder of the per-day division is dropped, not redistributed.
    let per_day_food = budget.food / day_count;
    let per_day_activities = budget.activities / day_count;

    let mut days = Vec::with_capacity(day_count as usize);
    for i in 0..day_count {
        let city = &req.destinations[i as usize % req.destinations.len()];

        // Up to 2 activities per day, rotating through the city's catalog.
        let plan = match catalog::activities_for(city) {
            None => vec!["Free exploration".to_string()],
            Some(acts) => {
                let i = i as usize;
                let mut picked = vec![acts[i % acts.len()].to_string()];
                if acts.len() > 1 {
                    picked.push(acts[(i + 1) % acts.len()].to_string());
                }
                picked
            }
        };

        days.push(DayPlan {
            date: start + Duration::days(i),
            city: city.clone(),
            plan,
            est_cost: per_day_food + per_day_activities,
        });
    }

    Ok(Plan {
        id: id.to_string(),
        summary: PlanSummary {
            nights: day_count - 1,
        },
        days,
        notes: vec![ADVISORY_NOTE.to_string()],
        request: req,
        budget,
    })
}
