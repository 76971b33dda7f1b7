use axum::extract::State;
use crate::{api_error::ApiError, app_state::SharedState};

pub struct HealthController {}

impl HealthController {
    pub async fn get(State(state): State<SharedState>) -> Result<&'static str, ApiError> {
        state.data_context.ping().await?;
        Ok("OK")
    }
}
