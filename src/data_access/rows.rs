//! Diesel row models and their conversions to the domain types.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{estatus, tareas};
use crate::{
    estatus::Estatus,
    tarea::{CambiosTarea, NuevaTarea, Tarea, TareaConEstatus},
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tareas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TareaRow {
    pub id: i32,
    pub id_estatus: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    /// Stored as UTC without offset.
    pub fecha_registro: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = estatus)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EstatusRow {
    pub id: i32,
    pub nombre: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tareas)]
pub struct NewTareaRow {
    pub id_estatus: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha_registro: NaiveDateTime,
}

/// `None` fields are left out of the `SET` clause.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tareas)]
pub struct TareaChangeset {
    pub titulo: String,
    pub descripcion: Option<Option<String>>,
    pub id_estatus: Option<i32>,
}

impl From<TareaRow> for Tarea {
    fn from(row: TareaRow) -> Self {
        Tarea {
            id: row.id,
            id_estatus: row.id_estatus,
            titulo: row.titulo,
            descripcion: row.descripcion,
            fecha_registro: row.fecha_registro.and_utc(),
        }
    }
}

impl From<EstatusRow> for Estatus {
    fn from(row: EstatusRow) -> Self {
        Estatus {
            id: row.id,
            nombre: row.nombre,
        }
    }
}

impl From<(TareaRow, EstatusRow)> for TareaConEstatus {
    fn from((tarea, estatus): (TareaRow, EstatusRow)) -> Self {
        TareaConEstatus {
            tarea: tarea.into(),
            estatus: estatus.into(),
        }
    }
}

impl From<NuevaTarea> for NewTareaRow {
    fn from(nueva: NuevaTarea) -> Self {
        NewTareaRow {
            id_estatus: nueva.id_estatus,
            titulo: nueva.titulo,
            descripcion: nueva.descripcion,
            fecha_registro: nueva.fecha_registro.naive_utc(),
        }
    }
}

impl From<CambiosTarea> for TareaChangeset {
    fn from(cambios: CambiosTarea) -> Self {
        TareaChangeset {
            titulo: cambios.titulo,
            descripcion: cambios.descripcion,
            id_estatus: cambios.id_estatus,
        }
    }
}
