//! SQL schema for the Pulse SQLite store.
//!
//! Executed once at connection startup. There is no migration path beyond
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Reports are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS reports (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    time          TEXT NOT NULL                     -- RFC 3339 UTC; store-assigned
                  DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    latitude      REAL NOT NULL,                    -- rounded to 6 decimals
    longitude     REAL NOT NULL,                    -- rounded to 6 decimals
    is_safe       INTEGER,
    is_clean      INTEGER,
    is_accessible INTEGER,
    is_quiet      INTEGER,
    is_uncrowded  INTEGER,
    is_lively     INTEGER
);

PRAGMA user_version = 1;
";
