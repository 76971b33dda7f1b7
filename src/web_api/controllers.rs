pub mod health_controller;
pub mod tarea_controller;
