//! [`SqliteStore`] — the SQLite implementation of [`RuleStore`].

use std::path::Path;

use rusqlite::{ErrorCode, OptionalExtension as _};

use tariff_core::{
  error::{Error, Result},
  quote::FeeQuote,
  rule::{FeeRule, NewRule},
  store::RuleStore,
};

use crate::schema::SCHEMA;

/// Column list shared by every SELECT in this module; order matches
/// [`rule_from_row`].
const RULE_COLUMNS: &str =
  "id, location, min_order_amount, delivery_charge, amount_for_free_delivery, zone";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A delivery-fee rule store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted, and all
/// calls are serialised onto the connection's worker thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  ///
  /// Initialisation is idempotent; reopening an existing file never alters
  /// the rules already in it.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_owned();
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(Error::storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(Error::storage)?;
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
      .await
      .map_err(Error::storage)
  }
}

// ─── Row / error mapping ─────────────────────────────────────────────────────

/// Decode one row selected with [`RULE_COLUMNS`].
fn rule_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<FeeRule> {
  Ok(FeeRule {
    id:                       row.get(0)?,
    location:                 row.get(1)?,
    min_order_amount:         row.get(2)?,
    delivery_charge:          row.get(3)?,
    amount_for_free_delivery: row.get(4)?,
    zone:                     row.get(5)?,
  })
}

/// Map a write failure, turning a constraint violation into
/// [`Error::DuplicateLocation`]. Validation runs before any statement is
/// issued, so the UNIQUE constraint on `location` is the only one reachable
/// here.
fn write_err(err: tokio_rusqlite::Error, location: &str) -> Error {
  match err {
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.code == ErrorCode::ConstraintViolation =>
    {
      Error::DuplicateLocation(location.to_owned())
    }
    other => Error::storage(other),
  }
}

// ─── RuleStore impl ──────────────────────────────────────────────────────────

impl RuleStore for SqliteStore {
  // ── Writes ──────────────────────────────────────────────────────────────

  async fn add_rule(&self, rule: NewRule) -> Result<FeeRule> {
    rule.validate()?;

    let insert = rule.clone();
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO delivery_fee_rules
             (location, min_order_amount, delivery_charge,
              amount_for_free_delivery, zone)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            insert.location,
            insert.min_order_amount,
            insert.delivery_charge,
            insert.amount_for_free_delivery,
            insert.zone,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|err| write_err(err, &rule.location))?;

    Ok(rule.into_rule(id))
  }

  async fn update_rule(&self, id: i64, rule: NewRule) -> Result<FeeRule> {
    rule.validate()?;

    let update = rule.clone();
    let changed = self
      .conn
      .call(move |conn| {
        // Single statement, so the full-record replacement is all-or-nothing.
        let n = conn.execute(
          "UPDATE delivery_fee_rules
              SET location                 = ?1,
                  min_order_amount         = ?2,
                  delivery_charge          = ?3,
                  amount_for_free_delivery = ?4,
                  zone                     = ?5
            WHERE id = ?6",
          rusqlite::params![
            update.location,
            update.min_order_amount,
            update.delivery_charge,
            update.amount_for_free_delivery,
            update.zone,
            id,
          ],
        )?;
        Ok(n)
      })
      .await
      .map_err(|err| write_err(err, &rule.location))?;

    if changed == 0 {
      return Err(Error::RuleNotFound(id));
    }
    Ok(rule.into_rule(id))
  }

  async fn delete_rule(&self, id: i64) -> Result<()> {
    let changed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM delivery_fee_rules WHERE id = ?1",
          rusqlite::params![id],
        )?;
        Ok(n)
      })
      .await
      .map_err(Error::storage)?;

    if changed == 0 {
      return Err(Error::RuleNotFound(id));
    }
    Ok(())
  }

  // ── Reads ───────────────────────────────────────────────────────────────

  async fn get_rule(&self, id: i64) -> Result<Option<FeeRule>> {
    self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {RULE_COLUMNS} FROM delivery_fee_rules WHERE id = ?1"),
              rusqlite::params![id],
              rule_from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(Error::storage)
  }

  async fn list_rules(&self, search: Option<&str>) -> Result<Vec<FeeRule>> {
    // An empty needle matches everything, so normalise it away up front.
    // `instr` compares byte-wise with no wildcard language: the filter stays
    // case-sensitive and the needle cannot change the query's shape.
    let needle = search.filter(|s| !s.is_empty()).map(str::to_owned);

    self
      .conn
      .call(move |conn| {
        let rows = if let Some(needle) = needle {
          let mut stmt = conn.prepare(&format!(
            "SELECT {RULE_COLUMNS} FROM delivery_fee_rules
              WHERE instr(location, ?1) > 0 OR instr(zone, ?1) > 0
              ORDER BY id"
          ))?;
          stmt
            .query_map(rusqlite::params![needle], rule_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        } else {
          let mut stmt = conn.prepare(&format!(
            "SELECT {RULE_COLUMNS} FROM delivery_fee_rules ORDER BY id"
          ))?;
          stmt
            .query_map([], rule_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(rows)
      })
      .await
      .map_err(Error::storage)
  }

  async fn locations(&self) -> Result<Vec<String>> {
    self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT location FROM delivery_fee_rules ORDER BY location")?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await
      .map_err(Error::storage)
  }

  async fn quote_fee(&self, location: &str, order_amount: f64) -> Result<FeeQuote> {
    let location = location.to_owned();

    let rule = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {RULE_COLUMNS} FROM delivery_fee_rules WHERE location = ?1"
              ),
              rusqlite::params![location],
              rule_from_row,
            )
            .optional()?,
        )
      })
      .await
      .map_err(Error::storage)?;

    Ok(match rule {
      Some(rule) => rule.quote(order_amount),
      None => FeeQuote::LocationNotFound,
    })
  }
}
