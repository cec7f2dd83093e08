//! [`ResourceService`] — the CRUD core, instantiated once per entity type.
//!
//! The service owns the identifier and timestamp policy: ids are fresh v4
//! UUIDs and `created_at` is stamped here, at the moment `create` runs. All
//! persistence goes through a [`Gateway`]; the service keeps no state of its
//! own between calls.

use std::{marker::PhantomData, sync::Arc};

use chrono::Utc;
use uuid::Uuid;

use crate::{Error, Result, entity::Entity, store::Gateway};

pub struct ResourceService<T, G> {
  gateway: Arc<G>,
  _entity: PhantomData<fn() -> T>,
}

impl<T, G> Clone for ResourceService<T, G> {
  fn clone(&self) -> Self {
    Self { gateway: Arc::clone(&self.gateway), _entity: PhantomData }
  }
}

impl<T, G> ResourceService<T, G>
where
  T: Entity,
  G: Gateway<T>,
{
  pub fn new(gateway: Arc<G>) -> Self {
    Self { gateway, _entity: PhantomData }
  }

  /// Stamp `id` and `created_at` onto `draft` and persist it.
  pub async fn create(&self, draft: T::Draft) -> Result<T> {
    let record = T::from_draft(Uuid::new_v4(), Utc::now(), draft);
    let id = record.id();

    let stored = self
      .gateway
      .insert(record)
      .await
      .map_err(|e| storage_error::<T, _>("create", e))?;

    tracing::info!(kind = T::KIND, %id, "created");
    Ok(stored)
  }

  pub async fn list(&self) -> Result<Vec<T>> {
    let records = self
      .gateway
      .find_all()
      .await
      .map_err(|e| storage_error::<T, _>("list", e))?;

    tracing::debug!(kind = T::KIND, count = records.len(), "listed");
    Ok(records)
  }

  /// Fetch one record. An id that is not a UUID can never match a row and
  /// is reported as not found.
  pub async fn get(&self, id: &str) -> Result<T> {
    let uuid = parse_id::<T>(id)?;
    let record = self
      .gateway
      .find_by_id(uuid)
      .await
      .map_err(|e| storage_error::<T, _>("get", e))?
      .ok_or_else(|| not_found::<T>(id))?;

    tracing::debug!(kind = T::KIND, id, "fetched");
    Ok(record)
  }

  /// Overlay `patch` onto the stored record and write it back.
  ///
  /// No version check is made: concurrent updates are last-writer-wins.
  pub async fn update(&self, id: &str, patch: T::Patch) -> Result<()> {
    let mut record = self.get(id).await?;
    record.apply(patch);

    self
      .gateway
      .save(record)
      .await
      .map_err(|e| storage_error::<T, _>("update", e))?;

    tracing::debug!(kind = T::KIND, id, "updated");
    Ok(())
  }

  /// Remove a record. Succeeds whether or not the row existed.
  pub async fn delete(&self, id: &str) -> Result<()> {
    let Ok(uuid) = Uuid::parse_str(id) else {
      tracing::debug!(kind = T::KIND, id, "delete of non-uuid id is a no-op");
      return Ok(());
    };

    self
      .gateway
      .delete_by_id(uuid)
      .await
      .map_err(|e| storage_error::<T, _>("delete", e))?;

    tracing::info!(kind = T::KIND, id, "deleted");
    Ok(())
  }
}

// ─── Error mapping ───────────────────────────────────────────────────────────

fn parse_id<T: Entity>(id: &str) -> Result<Uuid> {
  Uuid::parse_str(id).map_err(|_| not_found::<T>(id))
}

fn not_found<T: Entity>(id: &str) -> Error {
  tracing::debug!(kind = T::KIND, id, "not found");
  Error::not_found(T::KIND, id)
}

fn storage_error<T, E>(op: &'static str, e: E) -> Error
where
  T: Entity,
  E: std::error::Error + Send + Sync + 'static,
{
  tracing::error!(kind = T::KIND, op, error = %e, "store failure");
  Error::Storage(Box::new(e))
}

#[cfg(test)]
mod tests {
  use std::{collections::HashMap, sync::Mutex};

  use chrono::Duration;

  use super::*;
  use crate::professor::{NewProfessor, Professor, ProfessorPatch};

  /// In-process gateway used to exercise the service on its own.
  #[derive(Default)]
  struct MemoryGateway {
    rows: Mutex<HashMap<Uuid, Professor>>,
  }

  #[derive(Debug, thiserror::Error)]
  #[error("disk on fire")]
  struct Broken;

  impl Gateway<Professor> for MemoryGateway {
    type Error = Broken;

    async fn insert(&self, record: Professor) -> Result<Professor, Broken> {
      self.rows.lock().unwrap().insert(record.id, record.clone());
      Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<Professor>, Broken> {
      Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Professor>, Broken> {
      Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, record: Professor) -> Result<(), Broken> {
      self.rows.lock().unwrap().insert(record.id, record);
      Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), Broken> {
      self.rows.lock().unwrap().remove(&id);
      Ok(())
    }
  }

  /// A gateway whose every call fails.
  struct BrokenGateway;

  impl Gateway<Professor> for BrokenGateway {
    type Error = Broken;

    async fn insert(&self, _: Professor) -> Result<Professor, Broken> { Err(Broken) }

    async fn find_all(&self) -> Result<Vec<Professor>, Broken> { Err(Broken) }

    async fn find_by_id(&self, _: Uuid) -> Result<Option<Professor>, Broken> {
      Err(Broken)
    }

    async fn save(&self, _: Professor) -> Result<(), Broken> { Err(Broken) }

    async fn delete_by_id(&self, _: Uuid) -> Result<(), Broken> { Err(Broken) }
  }

  fn service() -> ResourceService<Professor, MemoryGateway> {
    ResourceService::new(Arc::new(MemoryGateway::default()))
  }

  fn grace() -> NewProfessor {
    NewProfessor {
      first_name: "Grace".into(),
      last_name:  "Hopper".into(),
      email:      "grace@navy.mil".into(),
    }
  }

  #[tokio::test]
  async fn create_stamps_id_and_created_at() {
    let svc = service();
    let before = Utc::now();
    let p = svc.create(grace()).await.unwrap();
    let after = Utc::now();

    assert!(!p.id.is_nil());
    assert!(p.created_at >= before && p.created_at <= after + Duration::seconds(1));
  }

  #[tokio::test]
  async fn update_preserves_id_and_created_at() {
    let svc = service();
    let p = svc.create(grace()).await.unwrap();

    let patch = ProfessorPatch { email: Some("g@yale.edu".into()), ..Default::default() };
    svc.update(&p.id.to_string(), patch).await.unwrap();

    let fetched = svc.get(&p.id.to_string()).await.unwrap();
    assert_eq!(fetched.id, p.id);
    assert_eq!(fetched.created_at, p.created_at);
    assert_eq!(fetched.email, "g@yale.edu");
    assert_eq!(fetched.first_name, "Grace");
  }

  #[tokio::test]
  async fn update_unknown_id_is_not_found_and_creates_nothing() {
    let svc = service();
    let err = svc
      .update(&Uuid::new_v4().to_string(), ProfessorPatch::default())
      .await
      .unwrap_err();

    assert!(err.is_not_found());
    assert!(svc.list().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn get_non_uuid_id_is_not_found() {
    let err = service().get("definitely-not-a-uuid").await.unwrap_err();
    assert!(err.is_not_found());
  }

  #[tokio::test]
  async fn delete_is_idempotent() {
    let svc = service();
    let p = svc.create(grace()).await.unwrap();
    let id = p.id.to_string();

    svc.delete(&id).await.unwrap();
    svc.delete(&id).await.unwrap();
    svc.delete("garbage").await.unwrap();

    assert!(svc.get(&id).await.unwrap_err().is_not_found());
  }

  #[tokio::test]
  async fn store_failures_propagate_verbatim() {
    let svc = ResourceService::<Professor, _>::new(Arc::new(BrokenGateway));

    let err = svc.create(grace()).await.unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
    assert_eq!(err.to_string(), "disk on fire");

    let err = svc.get(&Uuid::new_v4().to_string()).await.unwrap_err();
    assert!(!err.is_not_found());

    assert!(svc.list().await.is_err());
    assert!(svc.delete(&Uuid::new_v4().to_string()).await.is_err());
  }
}
