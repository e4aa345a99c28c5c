//! Handler for `GET /signal-types`.

use axum::Json;
use pulse_core::signal::{Signal, SignalField};
use serde::Serialize;

/// One entry of the signal table.
#[derive(Debug, Serialize)]
pub struct SignalEntry {
  pub signal: Signal,
  pub field:  SignalField,
  pub value:  bool,
}

/// `GET /signal-types` — the full signal table, in table order.
pub async fn list() -> Json<Vec<SignalEntry>> {
  let entries = Signal::all()
    .map(|signal| {
      let (field, value) = signal.mapping();
      SignalEntry { signal, field, value }
    })
    .collect();
  Json(entries)
}
