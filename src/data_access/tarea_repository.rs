//! Task persistence: the repository contract and its Diesel implementation.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use thiserror::Error;
use tracing::debug;

use super::{
    data_context::SqlitePool,
    rows::{EstatusRow, NewTareaRow, TareaChangeset, TareaRow},
    schema::{estatus, tareas},
};
use crate::tarea::{CambiosTarea, NuevaTarea, Tarea, TareaConEstatus};

pub type TareaRepositoryResult<T> = Result<T, TareaRepositoryError>;

/// Task persistence contract. Every call is one statement against storage.
#[async_trait]
pub trait TareaRepository: Send + Sync {
    /// All tasks in insertion order, each joined with its status.
    async fn get_tareas(&self) -> TareaRepositoryResult<Vec<TareaConEstatus>>;

    /// Returns `None` when no task has the given id.
    async fn get_tarea_by_id(&self, id: i32) -> TareaRepositoryResult<Option<TareaConEstatus>>;

    /// Inserts the task and returns it with the id storage assigned.
    ///
    /// # Errors
    ///
    /// An unknown `id_estatus` is rejected by the foreign key and comes back
    /// as [`TareaRepositoryError::Persistence`].
    async fn agregar_tarea(&self, tarea: NuevaTarea) -> TareaRepositoryResult<Tarea>;

    /// # Errors
    ///
    /// Returns [`TareaRepositoryError::NotFound`] when no task has `cambios.id`.
    async fn actualizar_tarea(&self, cambios: CambiosTarea) -> TareaRepositoryResult<()>;

    /// Hard delete.
    ///
    /// # Errors
    ///
    /// Returns [`TareaRepositoryError::NotFound`] when no task has the given id.
    async fn eliminar_tarea(&self, id: i32) -> TareaRepositoryResult<()>;
}

#[derive(Debug, Clone, Error)]
pub enum TareaRepositoryError {
    #[error("task not found: {0}")]
    NotFound(i32),

    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TareaRepositoryError {
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

#[derive(Debug, Clone)]
pub struct DieselTareaRepository {
    pool: SqlitePool,
}

impl DieselTareaRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TareaRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TareaRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TareaRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TareaRepositoryError::persistence)?
    }
}

#[async_trait]
impl TareaRepository for DieselTareaRepository {
    async fn get_tareas(&self) -> TareaRepositoryResult<Vec<TareaConEstatus>> {
        self.run_blocking(|connection| {
            let rows = tareas::table
                .inner_join(estatus::table)
                .order(tareas::id.asc())
                .select((TareaRow::as_select(), EstatusRow::as_select()))
                .load::<(TareaRow, EstatusRow)>(connection)
                .map_err(TareaRepositoryError::persistence)?;
            Ok(rows.into_iter().map(TareaConEstatus::from).collect())
        })
        .await
    }

    async fn get_tarea_by_id(&self, id: i32) -> TareaRepositoryResult<Option<TareaConEstatus>> {
        self.run_blocking(move |connection| {
            let row = tareas::table
                .inner_join(estatus::table)
                .filter(tareas::id.eq(id))
                .select((TareaRow::as_select(), EstatusRow::as_select()))
                .first::<(TareaRow, EstatusRow)>(connection)
                .optional()
                .map_err(TareaRepositoryError::persistence)?;
            Ok(row.map(TareaConEstatus::from))
        })
        .await
    }

    async fn agregar_tarea(&self, tarea: NuevaTarea) -> TareaRepositoryResult<Tarea> {
        let new_row = NewTareaRow::from(tarea);
        let row = self
            .run_blocking(move |connection| {
                diesel::insert_into(tareas::table)
                    .values(&new_row)
                    .returning(TareaRow::as_returning())
                    .get_result::<TareaRow>(connection)
                    .map_err(TareaRepositoryError::persistence)
            })
            .await?;
        debug!(id = row.id, id_estatus = row.id_estatus, "tarea inserted");
        Ok(row.into())
    }

    async fn actualizar_tarea(&self, cambios: CambiosTarea) -> TareaRepositoryResult<()> {
        let id = cambios.id;
        let changeset = TareaChangeset::from(cambios);
        let updated = self
            .run_blocking(move |connection| {
                diesel::update(tareas::table.find(id))
                    .set(&changeset)
                    .execute(connection)
                    .map_err(TareaRepositoryError::persistence)
            })
            .await?;
        if updated == 0 {
            return Err(TareaRepositoryError::NotFound(id));
        }
        debug!(id, "tarea updated");
        Ok(())
    }

    async fn eliminar_tarea(&self, id: i32) -> TareaRepositoryResult<()> {
        let deleted = self
            .run_blocking(move |connection| {
                diesel::delete(tareas::table.find(id))
                    .execute(connection)
                    .map_err(TareaRepositoryError::persistence)
            })
            .await?;
        if deleted == 0 {
            return Err(TareaRepositoryError::NotFound(id));
        }
        debug!(id, "tarea deleted");
        Ok(())
    }
}
