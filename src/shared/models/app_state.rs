use std::sync::Arc;
use mockable::Clock;
use crate::data_access::{data_context::DataContext, tarea_repository::{DieselTareaRepository, TareaRepository}};

pub struct AppState {
    pub data_context: DataContext,
    pub tareas: Arc<dyn TareaRepository>,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    pub fn new(data_context: DataContext, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let tareas = Arc::new(DieselTareaRepository::new(data_context.pool()));
        Self { data_context, tareas, clock }
    }
}

pub type SharedState = Arc<AppState>;
