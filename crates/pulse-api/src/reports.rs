//! Handlers for report endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/report` | Body: [`ReportBody`]; returns `{"id":..,"time":..}` |
//! | `GET`  | `/fetch-reports` | Every stored report, unfiltered |

use std::sync::Arc;

use axum::{Json, extract::State};
use pulse_core::{
  Error,
  location::Location,
  report::{NewReport, Report, ReportReceipt},
  signal::Signal,
  store::ReportStore,
};
use serde::Deserialize;

use crate::error::{ApiError, ApiJson};

// ─── Submit ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /report`.
#[derive(Debug, Deserialize)]
pub struct ReportBody {
  /// One of the keys of the signal table, e.g. `"safe"`.
  pub signal_type: String,
  /// A JSON-encoded string: `{"lat":48.1351,"lng":11.582}`.
  pub location:    String,
}

impl TryFrom<ReportBody> for NewReport {
  type Error = Error;

  fn try_from(b: ReportBody) -> Result<Self, Self::Error> {
    let signal   = Signal::parse(&b.signal_type)?;
    let location = Location::parse(&b.location)?;
    Ok(NewReport::new(location, signal))
  }
}

/// `POST /report` — validates the body and writes exactly one row.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<ReportBody>,
) -> Result<Json<ReportReceipt>, ApiError>
where
  S: ReportStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let report = NewReport::try_from(body)?;

  let receipt = store
    .insert_report(report)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(Error::Persistence)?;

  tracing::info!(
    id = receipt.id,
    signal = %report.signal,
    "report created"
  );
  Ok(Json(receipt))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /fetch-reports`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Report>>, ApiError>
where
  S: ReportStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let reports = store
    .list_reports()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(reports))
}
