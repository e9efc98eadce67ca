//! Informational greeting endpoint.

use axum::extract::State;

use crate::state::AppState;

/// Returns the greeting from the injected [`InfoService`](crate::service::InfoService).
pub async fn info(State(state): State<AppState>) -> String {
    state.info.info()
}
