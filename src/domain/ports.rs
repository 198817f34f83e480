use crate::utils::error::Result;

/// Persistence port for the reading list. Keys are opaque strings; values are
/// whatever the caller serialized. Backed by a JSON file in the CLI, by an
/// in-memory map in tests.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn delete(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Read-only view of the application settings consumed by the services.
pub trait SettingsProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn hits_per_page(&self) -> usize;
    fn max_visible_pages(&self) -> usize;
    fn reading_list_capacity(&self) -> usize;
}
