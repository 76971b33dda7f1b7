use crate::tarea_get_response::EstatusGetResponse;

/// Lookup row a task points at through `id_estatus`. Read-only for the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estatus {
    pub id: i32,
    pub nombre: String,
}

impl Estatus {
    pub fn to_get_dto(&self) -> EstatusGetResponse {
        EstatusGetResponse {
            id: self.id,
            nombre: self.nombre.clone(),
        }
    }
}
