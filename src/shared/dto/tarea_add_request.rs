use serde::Deserialize;

/// Body of `POST /api/tareas`. A missing `Titulo` is reported as a 400 by the
/// controller, not as a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct TareaAddRequest {
    #[serde(rename = "Id_Estatus", default)]
    pub id_estatus: i32,
    #[serde(rename = "Titulo", default)]
    pub titulo: Option<String>,
    #[serde(rename = "Descripcion", default)]
    pub descripcion: Option<String>,
}
