//! Application state for the doctor REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use doctr_persistence::core::DoctorStorage;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`DoctorStorage`])
///
/// # Example
///
/// ```rust,ignore
/// use doctr_rest::{AppState, ServerConfig};
/// use doctr_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig::default();
/// let state = AppState::new(Arc::new(backend), config);
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DoctorStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Returns the default page size for list results.
    pub fn default_page_size(&self) -> usize {
        self.config.default_page_size
    }

    /// Returns the maximum page size for list results.
    pub fn max_page_size(&self) -> usize {
        self.config.max_page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use doctr_persistence::error::StorageResult;
    use doctr_persistence::types::{Doctor, DoctorDraft, Page, PageRequest};

    // Mock storage for testing
    struct MockStorage;

    #[async_trait]
    impl DoctorStorage for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }

        async fn create(&self, _draft: DoctorDraft) -> StorageResult<Doctor> {
            unimplemented!()
        }

        async fn read(&self, _id: i64) -> StorageResult<Option<Doctor>> {
            unimplemented!()
        }

        async fn list_all(&self, _request: PageRequest) -> StorageResult<Page<Doctor>> {
            unimplemented!()
        }

        async fn list_by_pincode(
            &self,
            _pincode: &str,
            _request: PageRequest,
        ) -> StorageResult<Page<Doctor>> {
            unimplemented!()
        }

        async fn update(&self, _id: i64, _draft: DoctorDraft) -> StorageResult<Doctor> {
            unimplemented!()
        }

        async fn delete(&self, _id: i64) -> StorageResult<()> {
            unimplemented!()
        }

        async fn delete_all(&self) -> StorageResult<u64> {
            unimplemented!()
        }

        async fn count(&self) -> StorageResult<u64> {
            unimplemented!()
        }

        async fn health_check(&self) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig::default();
        let state = AppState::new(storage, config);

        assert_eq!(state.storage().backend_name(), "mock");
        assert_eq!(state.default_page_size(), 20);
    }

    #[test]
    fn test_app_state_config_access() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig {
            base_url: "https://doctors.example.com/".to_string(),
            default_page_size: 50,
            max_page_size: 500,
            ..Default::default()
        };
        let state = AppState::new(storage, config);

        assert_eq!(state.base_url(), "https://doctors.example.com");
        assert_eq!(state.default_page_size(), 50);
        assert_eq!(state.max_page_size(), 500);
    }

    #[test]
    fn test_app_state_clone() {
        let storage = Arc::new(MockStorage);
        let state = AppState::new(storage, ServerConfig::default());
        let cloned = state.clone();

        assert_eq!(state.base_url(), cloned.base_url());
        assert!(Arc::ptr_eq(&state.storage, &cloned.storage));
    }
}
