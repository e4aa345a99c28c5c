//! The `ReportStore` trait.
//!
//! Implemented by storage backends (e.g. `pulse-store-sqlite`). The API layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::report::{NewReport, Report, ReportReceipt};

/// Abstraction over a report store backend.
///
/// The store is append-only: there is no update or delete operation.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ReportStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert one row setting the report's coordinates and the single column
  /// its signal maps to. The other five columns are left unset.
  ///
  /// Returns the confirmation row (`id`, `time`) produced by the insert, or
  /// `None` if the backend returned none.
  fn insert_report(
    &self,
    report: NewReport,
  ) -> impl Future<Output = Result<Option<ReportReceipt>, Self::Error>> + Send + '_;

  /// Return every stored row in the backend's natural order.
  fn list_reports(
    &self,
  ) -> impl Future<Output = Result<Vec<Report>, Self::Error>> + Send + '_;
}
