use crate::domain::plan::BudgetBreakdown;
use std::collections::HashSet;

/// Split a total budget across the four categories.
///
/// Base split is 40/25/20 percent for accommodation, transport and food;
/// activities take the remainder, which also absorbs integer-division
/// rounding so the categories always sum to the total. Interest tags then
/// shift a further 5 percent: beach or wildlife moves it from accommodation
/// to activities, food moves it from transport to food. A shift that the
/// source category cannot cover is skipped silently.
pub fn allocate_budget(total: i64, interests: &[String]) -> BudgetBreakdown {
    let mut accommodation = total * 40 / 100;
    let mut transport = total * 25 / 100;
    let mut food = total * 20 / 100;
    let mut activities = total - accommodation - transport - food;

    let interest_set: HashSet<String> = interests.iter().map(|s| s.to_lowercase()).collect();

    if interest_set.contains("beach") || interest_set.contains("wildlife") {
        let moved = total * 5 / 100;
        if accommodation >= moved {
            accommodation -= moved;
            activities += moved;
        }
    }
    if interest_set.contains("food") {
        let moved = total * 5 / 100;
        if transport >= moved {
            transport -= moved;
            food += moved;
        }
    }

    BudgetBreakdown {
        accommodation,
        transport,
        food,
        activities,
        total,
    }
}
