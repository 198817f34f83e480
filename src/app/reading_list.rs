use crate::domain::model::{ReadingList, SavedStory, Story};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use chrono::Utc;

const READING_LIST_KEY: &str = "reading-list.json";

/// Bookmark service over an injected key-value store. The list is kept
/// newest-first and capped so the backing file cannot grow without bound.
pub struct ReadingListService<S: KeyValueStore> {
    store: S,
    capacity: usize,
}

impl<S: KeyValueStore> ReadingListService<S> {
    pub fn new(store: S, capacity: usize) -> Self {
        Self { store, capacity }
    }

    /// The current list. A missing key yields an empty list; a corrupt
    /// payload is discarded rather than surfaced, since losing bookmarks
    /// beats refusing to start.
    pub async fn list(&self) -> Result<ReadingList> {
        let Some(raw) = self.store.get(READING_LIST_KEY).await? else {
            return Ok(ReadingList::default());
        };
        match serde_json::from_slice(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                tracing::warn!("discarding unreadable reading list: {}", e);
                Ok(ReadingList::default())
            }
        }
    }

    /// Bookmarks a story. An already-saved story is refreshed in place with
    /// the latest record and bookmark time; a new one goes to the front.
    /// When the list overflows its capacity the oldest entries fall off.
    pub async fn save(&self, story: &Story) -> Result<()> {
        let mut list = self.list().await?;
        let now = Utc::now().timestamp();
        let saved = SavedStory {
            story: story.clone(),
            saved_at: now,
        };

        if let Some(existing) = list.stories.iter_mut().find(|s| s.story.id == story.id) {
            *existing = saved;
        } else {
            list.stories.insert(0, saved);
            list.stories.truncate(self.capacity);
        }
        list.last_updated = now;
        self.persist(&list).await
    }

    /// Removes a bookmark by story id. Returns whether anything was removed.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let mut list = self.list().await?;
        let before = list.stories.len();
        list.stories.retain(|s| s.story.id != id);
        if list.stories.len() == before {
            return Ok(false);
        }
        list.last_updated = Utc::now().timestamp();
        self.persist(&list).await?;
        Ok(true)
    }

    pub async fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.list().await?.stories.iter().any(|s| s.story.id == id))
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.stories.len())
    }

    pub async fn clear(&self) -> Result<()> {
        let list = ReadingList {
            stories: Vec::new(),
            last_updated: Utc::now().timestamp(),
        };
        self.persist(&list).await
    }

    async fn persist(&self, list: &ReadingList) -> Result<()> {
        let raw = serde_json::to_vec(list)?;
        self.store.set(READING_LIST_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStore {
        entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl KeyValueStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
            self.entries.lock().await.insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<()> {
            self.entries.lock().await.remove(key);
            Ok(())
        }
    }

    fn story(id: &str) -> Story {
        Story {
            id: id.to_string(),
            title: Some(format!("Story {}", id)),
            url: None,
            author: "alice".to_string(),
            points: Some(10),
            num_comments: Some(2),
            created_at: None,
            created_at_i: 1_700_000_000,
            tags: vec!["story".to_string()],
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let service = ReadingListService::new(MemoryStore::default(), 100);
        let list = service.list().await.unwrap();
        assert!(list.stories.is_empty());
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn saves_newest_first() {
        let service = ReadingListService::new(MemoryStore::default(), 100);
        service.save(&story("1")).await.unwrap();
        service.save(&story("2")).await.unwrap();

        let list = service.list().await.unwrap();
        assert_eq!(list.stories.len(), 2);
        assert_eq!(list.stories[0].story.id, "2");
        assert_eq!(list.stories[1].story.id, "1");
        assert!(list.last_updated > 0);
    }

    #[tokio::test]
    async fn resaving_updates_in_place() {
        let service = ReadingListService::new(MemoryStore::default(), 100);
        service.save(&story("1")).await.unwrap();
        service.save(&story("2")).await.unwrap();

        let mut refreshed = story("1");
        refreshed.points = Some(99);
        service.save(&refreshed).await.unwrap();

        let list = service.list().await.unwrap();
        assert_eq!(list.stories.len(), 2);
        // position is kept, record is refreshed
        assert_eq!(list.stories[1].story.id, "1");
        assert_eq!(list.stories[1].story.points, Some(99));
    }

    #[tokio::test]
    async fn capacity_drops_the_oldest() {
        let service = ReadingListService::new(MemoryStore::default(), 3);
        for id in ["1", "2", "3", "4"] {
            service.save(&story(id)).await.unwrap();
        }
        let list = service.list().await.unwrap();
        let ids: Vec<&str> = list.stories.iter().map(|s| s.story.id.as_str()).collect();
        assert_eq!(ids, ["4", "3", "2"]);
    }

    #[tokio::test]
    async fn remove_and_contains() {
        let service = ReadingListService::new(MemoryStore::default(), 100);
        service.save(&story("1")).await.unwrap();

        assert!(service.contains("1").await.unwrap());
        assert!(service.remove("1").await.unwrap());
        assert!(!service.contains("1").await.unwrap());
        assert!(!service.remove("1").await.unwrap());
    }

    #[tokio::test]
    async fn clear_empties_the_list() {
        let service = ReadingListService::new(MemoryStore::default(), 100);
        service.save(&story("1")).await.unwrap();
        service.clear().await.unwrap();
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn corrupt_payload_falls_back_to_empty() {
        let store = MemoryStore::default();
        store.set(READING_LIST_KEY, b"{not json").await.unwrap();
        let service = ReadingListService::new(store, 100);
        assert!(service.list().await.unwrap().stories.is_empty());
    }
}
