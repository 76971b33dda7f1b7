use axum::{Router, routing::get};
use crate::{app_state::SharedState, tarea_controller::TareaController};

pub const ROUTER_PATH: &str = "/api/tareas";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(TareaController::get_all).post(TareaController::add).put(TareaController::edit))
        .route(format!("{}/:id", ROUTER_PATH).as_str(), get(TareaController::get).delete(TareaController::delete))
        .with_state(app_state)
}
