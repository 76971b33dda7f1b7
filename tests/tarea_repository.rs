//! Diesel repository against an in-memory SQLite database.

mod test_helpers;

use chrono::Duration;
use rstest::{fixture, rstest};
use tareas_server::{
    data_access::tarea_repository::{DieselTareaRepository, TareaRepository, TareaRepositoryError},
    tarea::{CambiosTarea, NuevaTarea},
};
use test_helpers::{memory_context, registro};

#[fixture]
fn repository() -> DieselTareaRepository {
    DieselTareaRepository::new(memory_context().pool())
}

fn nueva(titulo: &str, id_estatus: i32) -> NuevaTarea {
    NuevaTarea {
        id_estatus,
        titulo: titulo.to_string(),
        descripcion: None,
        fecha_registro: registro(),
    }
}

#[rstest]
#[tokio::test]
async fn insert_assigns_increasing_ids_and_list_keeps_insertion_order(
    repository: DieselTareaRepository,
) {
    let primera = repository.agregar_tarea(nueva("primera", 1)).await.unwrap();
    let segunda = repository.agregar_tarea(nueva("segunda", 3)).await.unwrap();

    assert!(segunda.id > primera.id);

    let tareas = repository.get_tareas().await.unwrap();
    let titulos: Vec<_> = tareas.iter().map(|t| t.tarea.titulo.as_str()).collect();
    assert_eq!(titulos, ["primera", "segunda"]);
    assert_eq!(tareas[1].estatus.nombre, "Completada");
}

#[rstest]
#[tokio::test]
async fn lookup_joins_status_and_preserves_registration_time(repository: DieselTareaRepository) {
    let mut con_descripcion = nueva("con descripcion", 2);
    con_descripcion.descripcion = Some("notas".to_string());
    con_descripcion.fecha_registro = registro() + Duration::milliseconds(250);
    let creada = repository.agregar_tarea(con_descripcion.clone()).await.unwrap();

    let encontrada = repository
        .get_tarea_by_id(creada.id)
        .await
        .unwrap()
        .expect("task should exist");

    assert_eq!(encontrada.tarea, creada);
    assert_eq!(encontrada.tarea.fecha_registro, con_descripcion.fecha_registro);
    assert_eq!(encontrada.estatus.id, 2);
    assert_eq!(encontrada.estatus.nombre, "En progreso");
}

#[rstest]
#[tokio::test]
async fn lookup_of_missing_id_is_none(repository: DieselTareaRepository) {
    assert!(repository.get_tarea_by_id(5).await.unwrap().is_none());
}

#[rstest]
#[tokio::test]
async fn insert_with_unknown_status_fails_in_storage(repository: DieselTareaRepository) {
    let err = repository.agregar_tarea(nueva("sin estatus", 0)).await.unwrap_err();

    assert!(matches!(err, TareaRepositoryError::Persistence(_)));
    assert!(repository.get_tareas().await.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn update_applies_present_fields_only(repository: DieselTareaRepository) {
    let mut original = nueva("original", 1);
    original.descripcion = Some("conservar".to_string());
    let creada = repository.agregar_tarea(original).await.unwrap();

    repository
        .actualizar_tarea(CambiosTarea {
            id: creada.id,
            titulo: "renombrada".to_string(),
            descripcion: None,
            id_estatus: Some(3),
        })
        .await
        .unwrap();

    let tarea = repository.get_tarea_by_id(creada.id).await.unwrap().unwrap().tarea;
    assert_eq!(tarea.titulo, "renombrada");
    assert_eq!(tarea.descripcion.as_deref(), Some("conservar"));
    assert_eq!(tarea.id_estatus, 3);
    assert_eq!(tarea.fecha_registro, creada.fecha_registro);
}

#[rstest]
#[tokio::test]
async fn update_of_missing_id_is_not_found(repository: DieselTareaRepository) {
    let err = repository
        .actualizar_tarea(CambiosTarea {
            id: 999,
            titulo: "x".to_string(),
            descripcion: None,
            id_estatus: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TareaRepositoryError::NotFound(999)));
}

#[rstest]
#[tokio::test]
async fn delete_removes_once(repository: DieselTareaRepository) {
    let creada = repository.agregar_tarea(nueva("borrar", 1)).await.unwrap();

    repository.eliminar_tarea(creada.id).await.unwrap();
    let again = repository.eliminar_tarea(creada.id).await.unwrap_err();

    assert!(matches!(again, TareaRepositoryError::NotFound(id) if id == creada.id));
    assert!(repository.get_tarea_by_id(creada.id).await.unwrap().is_none());
}

#[rstest]
#[tokio::test]
async fn ids_of_deleted_tasks_are_never_reused(repository: DieselTareaRepository) {
    let primera = repository.agregar_tarea(nueva("primera", 1)).await.unwrap();
    repository.eliminar_tarea(primera.id).await.unwrap();

    let segunda = repository.agregar_tarea(nueva("segunda", 1)).await.unwrap();

    assert_ne!(segunda.id, primera.id);
    assert!(segunda.id > primera.id);
}
