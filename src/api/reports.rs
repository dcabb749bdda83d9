use crate::api::{api_client, ApiError};
use crate::models::{CallLog, CategoryReport, DashboardReport};

pub async fn get_dashboard() -> Result<DashboardReport, ApiError> {
    api_client().get("/api/reports/dashboard").await
}

pub async fn get_categories() -> Result<CategoryReport, ApiError> {
    api_client().get("/api/reports/categories").await
}

pub async fn get_calls() -> Result<CallLog, ApiError> {
    api_client().get("/api/calls").await
}
