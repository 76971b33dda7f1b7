use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::{
    estatus::Estatus, tarea_add_response::TareaAddResponse, tarea_get_response::TareaGetResponse,
    tarea_list_response::TareaListResponse,
};

/// A persisted task. `id` and `fecha_registro` never change after insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tarea {
    pub id: i32,
    pub id_estatus: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha_registro: DateTime<Utc>,
}

impl Tarea {
    pub fn to_add_dto(&self) -> TareaAddResponse {
        TareaAddResponse {
            id: self.id,
            id_estatus: self.id_estatus,
            titulo: self.titulo.clone(),
            descripcion: self.descripcion.clone(),
            fecha_registro: self.fecha_registro,
        }
    }
}

/// A task joined with the status it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TareaConEstatus {
    pub tarea: Tarea,
    pub estatus: Estatus,
}

impl TareaConEstatus {
    pub fn to_get_dto(&self) -> TareaGetResponse {
        TareaGetResponse {
            id: self.tarea.id,
            id_estatus: self.tarea.id_estatus,
            titulo: self.tarea.titulo.clone(),
            descripcion: self.tarea.descripcion.clone(),
            fecha_registro: self.tarea.fecha_registro,
            estatus: self.estatus.to_get_dto(),
        }
    }

    pub fn to_list_dto(&self) -> TareaListResponse {
        TareaListResponse {
            id: self.tarea.id,
            id_estatus: self.tarea.id_estatus,
            titulo: self.tarea.titulo.clone(),
            descripcion: self.tarea.descripcion.clone(),
            fecha_registro: self.tarea.fecha_registro,
            estatus: self.estatus.nombre.clone(),
        }
    }
}

/// A task that has not been stored yet; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuevaTarea {
    pub id_estatus: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha_registro: DateTime<Utc>,
}

impl NuevaTarea {
    /// Stamps the registration time from `clock`.
    pub fn new(
        id_estatus: i32,
        titulo: String,
        descripcion: Option<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            id_estatus,
            titulo,
            descripcion,
            fecha_registro: clock.utc(),
        }
    }
}

/// Changes to apply to an existing task.
///
/// `titulo` is always written. `None` on the other fields keeps the stored
/// value; `descripcion: Some(None)` clears the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CambiosTarea {
    pub id: i32,
    pub titulo: String,
    pub descripcion: Option<Option<String>>,
    pub id_estatus: Option<i32>,
}
