//! Derived views computed locally from a full employee listing.

use crate::domain::model::Employee;
use std::cmp::Reverse;

pub const TOP_EARNERS_LIMIT: usize = 10;

/// Maximum salary, or `None` for an empty collection.
pub fn highest_salary(employees: &[Employee]) -> Option<i64> {
    employees.iter().map(|e| e.salary).max()
}

/// Names of the `limit` best paid employees, highest salary first.
///
/// Equal salaries keep the order they arrived in.
pub fn top_earning_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = employees.iter().collect();
    // sort_by_key is stable
    ranked.sort_by_key(|e| Reverse(e.salary));
    ranked
        .into_iter()
        .take(limit)
        .map(|e| e.name.clone())
        .collect()
}
