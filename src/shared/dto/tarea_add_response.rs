use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TareaAddResponse {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Id_Estatus")]
    pub id_estatus: i32,
    #[serde(rename = "Titulo")]
    pub titulo: String,
    #[serde(rename = "Descripcion")]
    pub descripcion: Option<String>,
    #[serde(rename = "Fecha_Registro")]
    pub fecha_registro: DateTime<Utc>,
}
