// Requests
pub mod tarea_add_request;
pub mod tarea_edit_request;


// Responses
pub mod tarea_add_response;
pub mod tarea_get_response;
pub mod tarea_list_response;
