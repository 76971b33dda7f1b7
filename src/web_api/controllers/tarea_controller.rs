use axum::{Json, extract::{Path, State}};
use tracing::info;

use crate::{
    api_error::ApiError,
    app_state::SharedState,
    tarea::{CambiosTarea, NuevaTarea, TareaConEstatus},
    tarea_add_request::TareaAddRequest,
    tarea_add_response::TareaAddResponse,
    tarea_edit_request::TareaEditRequest,
    tarea_get_response::TareaGetResponse,
    tarea_list_response::TareaListResponse,
};

pub struct TareaController {}

impl TareaController {
    pub async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<TareaListResponse>>, ApiError> {
        let tareas = state.tareas.get_tareas().await?;
        Ok(Json(tareas.iter().map(TareaConEstatus::to_list_dto).collect()))
    }

    pub async fn get(
        State(state): State<SharedState>,
        Path(id): Path<i32>) -> Result<Json<TareaGetResponse>, ApiError> {
        state.tareas.get_tarea_by_id(id).await?
            .map(|tarea| Json(tarea.to_get_dto()))
            .ok_or(ApiError::TareaNoEncontrada)
    }

    pub async fn add(
        State(state): State<SharedState>,
        Json(body): Json<TareaAddRequest>) -> Result<Json<TareaAddResponse>, ApiError> {
        let titulo = titulo_requerido(body.titulo)?;
        let nueva = NuevaTarea::new(body.id_estatus, titulo, body.descripcion, state.clock.as_ref());
        let tarea = state.tareas.agregar_tarea(nueva).await?;
        info!(id = tarea.id, "tarea created");
        Ok(Json(tarea.to_add_dto()))
    }

    pub async fn edit(
        State(state): State<SharedState>,
        Json(body): Json<TareaEditRequest>) -> Result<(), ApiError> {
        let cambios = CambiosTarea {
            id: body.id,
            titulo: titulo_requerido(body.titulo)?,
            descripcion: body.descripcion,
            id_estatus: body.id_estatus,
        };
        state.tareas.actualizar_tarea(cambios).await?;
        info!(id = body.id, "tarea updated");
        Ok(())
    }

    pub async fn delete(
        State(state): State<SharedState>,
        Path(id): Path<i32>) -> Result<(), ApiError> {
        state.tareas.eliminar_tarea(id).await?;
        info!(id, "tarea deleted");
        Ok(())
    }
}

fn titulo_requerido(titulo: Option<String>) -> Result<String, ApiError> {
    titulo.filter(|t| !t.is_empty()).ok_or(ApiError::TituloRequerido)
}
