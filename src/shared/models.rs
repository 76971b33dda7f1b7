pub mod app_state;
pub mod estatus;
pub mod settings;
pub mod tarea;
