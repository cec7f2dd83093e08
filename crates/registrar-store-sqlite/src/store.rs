//! [`SqliteStore`] — the SQLite implementation of [`Gateway`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use registrar_core::store::Gateway;

use crate::{
  Result,
  encode::encode_uuid,
  schema::SCHEMA,
  table::Table,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Registrar store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. One handle
/// serves every entity type.
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

  /// Fetch every row returned by `sql` (which must select [`Table::COLUMNS`]
  /// in order) and decode them.
  async fn query_all<T: Table>(&self, sql: String) -> Result<Vec<T>> {
    let raws: Vec<T::Raw> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| T::read_row(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(T::from_raw).collect()
  }
}

// ─── SQL ─────────────────────────────────────────────────────────────────────

fn column_list<T: Table>() -> String {
  T::COLUMNS
    .iter()
    .map(|c| format!("\"{c}\""))
    .collect::<Vec<_>>()
    .join(", ")
}

fn placeholders<T: Table>() -> String {
  (1..=T::COLUMNS.len())
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ")
}

fn select_sql<T: Table>() -> String {
  format!("SELECT {} FROM \"{}\"", column_list::<T>(), T::TABLE)
}

fn insert_sql<T: Table>() -> String {
  format!(
    "INSERT INTO \"{}\" ({}) VALUES ({})",
    T::TABLE,
    column_list::<T>(),
    placeholders::<T>()
  )
}

/// Full-row upsert keyed on `id`.
fn upsert_sql<T: Table>() -> String {
  let assignments = T::COLUMNS[1..]
    .iter()
    .map(|c| format!("\"{c}\" = excluded.\"{c}\""))
    .collect::<Vec<_>>()
    .join(", ");
  format!("{} ON CONFLICT(\"id\") DO UPDATE SET {assignments}", insert_sql::<T>())
}

// ─── Gateway impl ────────────────────────────────────────────────────────────

impl<T: Table> Gateway<T> for SqliteStore {
  type Error = crate::Error;

  async fn insert(&self, record: T) -> Result<T> {
    let sql = insert_sql::<T>();
    let values = record.to_row();

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn find_all(&self) -> Result<Vec<T>> {
    self.query_all::<T>(select_sql::<T>()).await
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<T>> {
    let sql = format!("{} WHERE \"id\" = ?1", select_sql::<T>());
    let id_str = encode_uuid(id);

    let raw: Option<T::Raw> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id_str], |row| T::read_row(row))
            .optional()?,
        )
      })
      .await?;

    raw.map(T::from_raw).transpose()
  }

  async fn save(&self, record: T) -> Result<()> {
    let sql = upsert_sql::<T>();
    let values = record.to_row();

    self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete_by_id(&self, id: Uuid) -> Result<()> {
    let sql = format!("DELETE FROM \"{}\" WHERE \"id\" = ?1", T::TABLE);
    let id_str = encode_uuid(id);

    let removed = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![id_str])?))
      .await?;

    tracing::trace!(table = T::TABLE, removed, "delete_by_id");
    Ok(())
  }
}
