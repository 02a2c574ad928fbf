use super::error::{ApiError, Context};
use super::params::{ListQuery, MonthQuery};
use super::AppState;
use crate::models::{BarChartEntry, PieChartEntry, Statistics, TransactionView};
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn initialize_database(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state
        .seeder
        .initialize_database()
        .await
        .context("Error initializing database")?;
    Ok("Database initialized with seed data.")
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TransactionView>>, ApiError> {
    const CONTEXT: &str = "Error fetching transactions";
    let params = query.into_params(&state.config).context(CONTEXT)?;
    let transactions = state
        .transactions
        .list_transactions(&params)
        .await
        .context(CONTEXT)?;
    let views = transactions.into_iter().map(TransactionView::from).collect();
    Ok(Json(views))
}

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Statistics>, ApiError> {
    const CONTEXT: &str = "Error fetching statistics";
    let month = query.resolve(&state.config).context(CONTEXT)?;
    let statistics = state
        .transactions
        .get_statistics(month)
        .await
        .context(CONTEXT)?;
    Ok(Json(statistics))
}

pub async fn get_bar_chart_data(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<BarChartEntry>>, ApiError> {
    const CONTEXT: &str = "Error fetching bar chart data";
    let month = query.resolve(&state.config).context(CONTEXT)?;
    let bars = state
        .transactions
        .get_bar_chart_data(month)
        .await
        .context(CONTEXT)?;
    Ok(Json(bars))
}

pub async fn get_pie_chart_data(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<PieChartEntry>>, ApiError> {
    const CONTEXT: &str = "Error fetching pie chart data";
    let month = query.resolve(&state.config).context(CONTEXT)?;
    let slices = state
        .transactions
        .get_pie_chart_data(month)
        .await
        .context(CONTEXT)?;
    Ok(Json(slices))
}
