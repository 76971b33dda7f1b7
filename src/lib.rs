
//---------------------------------------
pub mod web_api {
    pub mod routes;
    pub mod controllers;
    pub mod api_error;
    pub mod layers;
}

pub use web_api::routes::map_routes;
pub use web_api::controllers::*;
pub use web_api::{api_error, layers};
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod models;
    pub mod dto;
    pub mod telemetry;
}

pub use shared::models::*;
pub use shared::dto::*;
pub use shared::telemetry;
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
    pub mod schema;
    pub mod rows;
    pub mod tarea_repository;
}
//---------------------------------------
