//! Diesel schema for the task tables.

diesel::table! {
    /// Status lookup rows.
    estatus (id) {
        id -> Integer,
        nombre -> Text,
    }
}

diesel::table! {
    /// Tasks; `id_estatus` references `estatus.id`.
    tareas (id) {
        id -> Integer,
        id_estatus -> Integer,
        titulo -> Text,
        descripcion -> Nullable<Text>,
        fecha_registro -> Timestamp,
    }
}

diesel::joinable!(tareas -> estatus (id_estatus));
diesel::allow_tables_to_appear_in_same_query!(estatus, tareas);
