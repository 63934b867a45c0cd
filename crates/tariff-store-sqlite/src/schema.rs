//! SQL schema for the Tariff SQLite store.
//!
//! Executed on every open via `execute_batch`. Future migrations will be
//! gated on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One rule per location. The UNIQUE constraint uses the default BINARY
-- collation, so locations are compared byte-wise (case-sensitive).
-- AUTOINCREMENT keeps ids monotonic; an id is never reused after a delete.
CREATE TABLE IF NOT EXISTS delivery_fee_rules (
    id                        INTEGER PRIMARY KEY AUTOINCREMENT,
    location                  TEXT NOT NULL UNIQUE,
    min_order_amount          REAL NOT NULL CHECK (min_order_amount >= 0),
    delivery_charge           REAL NOT NULL CHECK (delivery_charge >= 0),
    amount_for_free_delivery  REAL CHECK (amount_for_free_delivery >= 0),
    zone                      TEXT
);

PRAGMA user_version = 1;
";
