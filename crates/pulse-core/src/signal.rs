//! The signal table: every recognised signal type and the report column it
//! sets.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator as _};

use crate::{Error, Result};

// ─── Columns ─────────────────────────────────────────────────────────────────

/// One of the six tri-state columns of a report.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum SignalField {
  #[serde(rename = "is_safe")]
  Safe,
  #[serde(rename = "is_clean")]
  Clean,
  #[serde(rename = "is_accessible")]
  Accessible,
  #[serde(rename = "is_quiet")]
  Quiet,
  #[serde(rename = "is_uncrowded")]
  Uncrowded,
  #[serde(rename = "is_lively")]
  Lively,
}

impl SignalField {
  /// The column name in the `reports` table.
  /// Must match the serde renames above.
  pub fn column(self) -> &'static str {
    match self {
      Self::Safe => "is_safe",
      Self::Clean => "is_clean",
      Self::Accessible => "is_accessible",
      Self::Quiet => "is_quiet",
      Self::Uncrowded => "is_uncrowded",
      Self::Lively => "is_lively",
    }
  }
}

// ─── Signals ─────────────────────────────────────────────────────────────────

/// A condition label a client can report at a location.
///
/// Ten of the eleven signals form positive/negative pairs over five columns.
/// `Lively` has no negative counterpart.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Signal {
  Safe,
  Unsafe,
  Clean,
  Dirty,
  Accessible,
  Inaccessible,
  Quiet,
  Noisy,
  Uncrowded,
  Crowded,
  Lively,
}

impl Signal {
  /// Look up a signal by its exact, case-sensitive key.
  pub fn parse(key: &str) -> Result<Self> {
    key
      .parse()
      .map_err(|_| Error::InvalidSignalType(key.to_owned()))
  }

  /// The column this signal writes to.
  pub fn field(self) -> SignalField { self.mapping().0 }

  /// The value this signal writes.
  pub fn value(self) -> bool { self.mapping().1 }

  pub fn mapping(self) -> (SignalField, bool) {
    match self {
      Self::Safe => (SignalField::Safe, true),
      Self::Unsafe => (SignalField::Safe, false),
      Self::Clean => (SignalField::Clean, true),
      Self::Dirty => (SignalField::Clean, false),
      Self::Accessible => (SignalField::Accessible, true),
      Self::Inaccessible => (SignalField::Accessible, false),
      Self::Quiet => (SignalField::Quiet, true),
      Self::Noisy => (SignalField::Quiet, false),
      Self::Uncrowded => (SignalField::Uncrowded, true),
      Self::Crowded => (SignalField::Uncrowded, false),
      Self::Lively => (SignalField::Lively, true),
    }
  }

  /// Inverse of [`Signal::mapping`]. `None` for pairs with no key.
  pub fn from_mapping(field: SignalField, value: bool) -> Option<Self> {
    Self::all().find(|s| s.mapping() == (field, value))
  }

  /// Every signal, in table order.
  pub fn all() -> impl Iterator<Item = Self> { Self::iter() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_has_eleven_entries() {
    assert_eq!(Signal::all().count(), 11);
  }

  #[test]
  fn parse_maps_every_key_to_its_column() {
    let table = [
      ("safe", "is_safe", true),
      ("unsafe", "is_safe", false),
      ("clean", "is_clean", true),
      ("dirty", "is_clean", false),
      ("accessible", "is_accessible", true),
      ("inaccessible", "is_accessible", false),
      ("quiet", "is_quiet", true),
      ("noisy", "is_quiet", false),
      ("uncrowded", "is_uncrowded", true),
      ("crowded", "is_uncrowded", false),
      ("lively", "is_lively", true),
    ];

    for (key, column, value) in table {
      let signal = Signal::parse(key).unwrap();
      assert_eq!(signal.field().column(), column, "{key}");
      assert_eq!(signal.value(), value, "{key}");
      assert_eq!(signal.as_ref(), key);
    }
  }

  #[test]
  fn unknown_key_is_rejected_with_its_name() {
    let err = Signal::parse("loud").unwrap_err();
    assert!(matches!(err, Error::InvalidSignalType(ref k) if k == "loud"));
    assert_eq!(err.to_string(), "Unknown signal type: loud");
  }

  #[test]
  fn keys_are_case_sensitive() {
    assert!(Signal::parse("Safe").is_err());
    assert!(Signal::parse(" safe").is_err());
    assert!(Signal::parse("").is_err());
  }

  #[test]
  fn lively_has_no_negative_key() {
    assert!(Signal::parse("unlively").is_err());
    assert!(Signal::parse("boring").is_err());
    assert_eq!(Signal::from_mapping(SignalField::Lively, false), None);
    assert_eq!(
      Signal::from_mapping(SignalField::Lively, true),
      Some(Signal::Lively)
    );
  }

  #[test]
  fn from_mapping_inverts_mapping() {
    for signal in Signal::all() {
      let (field, value) = signal.mapping();
      assert_eq!(Signal::from_mapping(field, value), Some(signal));
    }
  }

  #[test]
  fn field_serialises_as_column_name() {
    for field in <SignalField as strum::IntoEnumIterator>::iter() {
      let json = serde_json::to_value(field).unwrap();
      assert_eq!(json, serde_json::Value::String(field.column().into()));
    }
  }
}
