use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Redirect},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{error::AppError, registry::Activity, state::AppState};

pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Deserialize)]
pub struct EmailQuery {
    email: String,
}

#[derive(Serialize)]
pub struct Message {
    message: String,
}

pub async fn root_handler() -> impl IntoResponse {
    Redirect::temporary(LANDING_PAGE)
}

pub async fn activities_handler(
    State(state): State<Arc<AppState>>,
) -> Json<IndexMap<String, Activity>> {
    Json(state.registry.read().await.list().clone())
}

pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, AppError> {
    let email = email_from(query)?;

    let message = state
        .registry
        .write()
        .await
        .signup(&activity_name, &email)
        .inspect_err(|e| warn!("Signup of {email} for {activity_name} rejected: {e}"))?;

    info!("{message}");

    Ok(Json(Message { message }))
}

pub async fn unregister_handler(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Message>, AppError> {
    let email = email_from(query)?;

    let message = state
        .registry
        .write()
        .await
        .unregister(&activity_name, &email)
        .inspect_err(|e| warn!("Unregister of {email} from {activity_name} rejected: {e}"))?;

    info!("{message}");

    Ok(Json(Message { message }))
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, AppError> {
    query.map(|Query(q)| q.email).map_err(|e| {
        warn!("Rejected query: {e}");
        AppError::MalformedQuery
    })
}
