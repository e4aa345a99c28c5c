//! [`SqliteStore`] — the SQLite implementation of [`ReportStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use pulse_core::{
  report::{NewReport, Report, ReportReceipt},
  store::ReportStore,
};

use crate::{
  encode::{encode_coordinate, RawReceipt, RawReport},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A report store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ReportStore impl ────────────────────────────────────────────────────────

impl ReportStore for SqliteStore {
  type Error = Error;

  async fn insert_report(&self, report: NewReport) -> Result<Option<ReportReceipt>> {
    let (field, value) = report.signal.mapping();
    let column         = field.column();
    let latitude       = encode_coordinate(report.location.latitude)?;
    let longitude      = encode_coordinate(report.location.longitude)?;

    tracing::debug!(latitude, longitude, column, value, "inserting report");

    // `column` is one of six static names, never caller input.
    let sql = format!(
      "INSERT INTO reports (latitude, longitude, {column})
       VALUES (?1, ?2, ?3)
       RETURNING id, time"
    );

    let raw: Option<RawReceipt> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(&sql, rusqlite::params![latitude, longitude, value], |row| {
            Ok(RawReceipt { id: row.get(0)?, time: row.get(1)? })
          })
          .optional()?)
      })
      .await?;

    raw.map(RawReceipt::into_receipt).transpose()
  }

  async fn list_reports(&self) -> Result<Vec<Report>> {
    let raws: Vec<RawReport> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {} FROM reports", RawReport::COLUMNS))?;
        let rows = stmt
          .query_map([], RawReport::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReport::into_report).collect()
  }
}
