//! Core doctor storage trait.
//!
//! This module defines the [`DoctorStorage`] trait, which provides the CRUD and
//! paginated list operations over the single doctor table. Every operation is
//! one backend call; no operation spans more than one write.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Doctor, DoctorDraft, Page, PageRequest};

/// Core storage trait for doctor records.
///
/// # Identity
///
/// Ids are assigned by the backend on [`create`](DoctorStorage::create) and
/// never change afterwards. [`update`](DoctorStorage::update) overwrites every
/// other field in place.
///
/// # Ordering
///
/// List operations return records in insertion order.
///
/// # Example
///
/// ```ignore
/// use doctr_persistence::core::DoctorStorage;
/// use doctr_persistence::types::{DoctorDraft, PageRequest};
///
/// async fn example<S: DoctorStorage>(storage: &S) -> StorageResult<()> {
///     let draft = DoctorDraft::new("John", "Doe", "1 Main St", "Springfield", "12345");
///     let created = storage.create(draft).await?;
///
///     let read = storage.read(created.id).await?;
///     assert_eq!(read, Some(created.clone()));
///
///     let page = storage.list_by_pincode("12345", PageRequest::new(0, 10)).await?;
///     assert_eq!(page.total_elements, 1);
///
///     storage.delete(created.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DoctorStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new doctor and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation` - If the draft violates a field constraint
    /// * `StorageError::Backend` - If the insert fails
    async fn create(&self, draft: DoctorDraft) -> StorageResult<Doctor>;

    /// Reads a doctor by id.
    ///
    /// # Returns
    ///
    /// The doctor if found, or `None`.
    async fn read(&self, id: i64) -> StorageResult<Option<Doctor>>;

    /// Lists all doctors, one page at a time.
    async fn list_all(&self, request: PageRequest) -> StorageResult<Page<Doctor>>;

    /// Lists the doctors whose pincode equals `pincode` exactly.
    async fn list_by_pincode(
        &self,
        pincode: &str,
        request: PageRequest,
    ) -> StorageResult<Page<Doctor>>;

    /// Overwrites every mutable field of an existing doctor.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no doctor has this id
    /// * `StorageError::Validation` - If the draft violates a field constraint
    async fn update(&self, id: i64, draft: DoctorDraft) -> StorageResult<Doctor>;

    /// Deletes a doctor by id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no doctor has this id
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Deletes every doctor and returns how many were removed.
    async fn delete_all(&self) -> StorageResult<u64>;

    /// Counts all stored doctors.
    async fn count(&self) -> StorageResult<u64>;

    /// Checks if a doctor exists.
    async fn exists(&self, id: i64) -> StorageResult<bool> {
        Ok(self.read(id).await?.is_some())
    }

    /// Verifies that the backend can serve queries.
    async fn health_check(&self) -> StorageResult<()>;
}
