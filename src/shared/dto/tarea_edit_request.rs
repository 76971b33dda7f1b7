use serde::{Deserialize, Deserializer};

/// Body of `PUT /api/tareas`.
///
/// `Descripcion` distinguishes an absent key (`None`) from an explicit
/// `null` (`Some(None)`).
#[derive(Debug, Clone, Deserialize)]
pub struct TareaEditRequest {
    #[serde(rename = "Id", default)]
    pub id: i32,
    #[serde(rename = "Id_Estatus", default)]
    pub id_estatus: Option<i32>,
    #[serde(rename = "Titulo", default)]
    pub titulo: Option<String>,
    #[serde(rename = "Descripcion", default, deserialize_with = "present")]
    pub descripcion: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
