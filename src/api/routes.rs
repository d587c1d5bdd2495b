use crate::api::handlers::{
    create_employee, delete_employee, get_employee, health_check, highest_salary, list_employees,
    search_employees, top_ten_earning_names, SharedAggregator,
};
use crate::core::EmployeeSource;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub const EMPLOYEE_API_PREFIX: &str = "/api/v1/employee";

/// Build the full application router around a shared aggregator.
pub fn build_router<S: EmployeeSource + 'static>(aggregator: SharedAggregator<S>) -> Router {
    // Static segments win over `:id`, so the derived views stay reachable.
    let employee_routes = Router::new()
        .route("/", get(list_employees::<S>).post(create_employee::<S>))
        .route("/search/:search_string", get(search_employees::<S>))
        .route("/highestSalary", get(highest_salary::<S>))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(top_ten_earning_names::<S>),
        )
        .route("/:id", get(get_employee::<S>).delete(delete_employee::<S>));

    Router::new()
        .route("/health", get(health_check))
        .nest(EMPLOYEE_API_PREFIX, employee_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(aggregator)
}
