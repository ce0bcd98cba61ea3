//! LocalCache - Persisted fallback copy of submitted RSVP entries
//!
//! The whole collection lives in a single JSON array stored under the
//! configured storage key (`{cache_dir}/{storage_key}.json`).

use super::{CacheError, Create, Delete, Read, ReadAll, Update};
use crate::entities::RsvpEntry;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

pub struct LocalCache {
    path: PathBuf,
    /// Serialises read-modify-write sequences on the file
    write_lock: Mutex<()>,
}

impl LocalCache {
    pub fn new(cache_dir: impl AsRef<Path>, storage_key: &str) -> Self {
        Self {
            path: cache_dir.as_ref().join(format!("{}.json", storage_key)),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the stored collection
    #[instrument(skip(self, entries), fields(count = entries.len()))]
    pub async fn save_all(&self, entries: &[RsvpEntry]) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().await;
        self.write_unlocked(entries).await
    }

    async fn read_unlocked(&self) -> Result<Option<Vec<RsvpEntry>>, CacheError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<RsvpEntry> = serde_json::from_str(&raw)?;
        Ok(Some(entries))
    }

    /// Reads the collection, treating an unreadable payload as empty
    async fn read_or_empty(&self) -> Vec<RsvpEntry> {
        match self.read_unlocked().await {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to load saved entries: {}", e);
                Vec::new()
            }
        }
    }

    async fn write_unlocked(&self, entries: &[RsvpEntry]) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec(entries)?;
        // tmp file then rename, readers only ever see a complete array
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!("Saved {} entries to local cache", entries.len());
        Ok(())
    }
}

impl Create<RsvpEntry> for LocalCache {
    #[instrument(skip(self, data), fields(id = %data.id))]
    async fn create(&self, data: &RsvpEntry) -> Result<RsvpEntry, CacheError> {
        let _guard = self.write_lock.lock().await;
        let existing = self.read_or_empty().await;

        let mut updated = Vec::with_capacity(existing.len() + 1);
        updated.push(data.clone());
        updated.extend(existing);

        self.write_unlocked(&updated).await?;
        info!("Entry prepended to local cache");
        Ok(data.clone())
    }
}

impl Read<RsvpEntry, str> for LocalCache {
    async fn read(&self, id: &str) -> Result<Option<RsvpEntry>, CacheError> {
        let entries = self.read_unlocked().await?.unwrap_or_default();
        Ok(entries.into_iter().find(|entry| entry.id == id))
    }
}

impl ReadAll<RsvpEntry> for LocalCache {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Option<Vec<RsvpEntry>>, CacheError> {
        self.read_unlocked().await
    }
}

impl Update<RsvpEntry, str> for LocalCache {
    #[instrument(skip(self, data))]
    async fn update(&self, id: &str, data: &RsvpEntry) -> Result<Option<RsvpEntry>, CacheError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_or_empty().await;

        let Some(slot) = entries.iter_mut().find(|entry| entry.id == id) else {
            debug!("Entry not present in local cache");
            return Ok(None);
        };
        *slot = data.clone();

        self.write_unlocked(&entries).await?;
        info!("Entry updated in local cache");
        Ok(Some(data.clone()))
    }
}

impl Delete<str> for LocalCache {
    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<bool, CacheError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_or_empty().await;

        let Some(position) = entries.iter().position(|entry| entry.id == id) else {
            debug!("Entry not present in local cache");
            return Ok(false);
        };
        entries.remove(position);

        self.write_unlocked(&entries).await?;
        info!("Entry removed from local cache");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Attendance, EntrySource};

    fn entry(id: &str, name: &str) -> RsvpEntry {
        RsvpEntry {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            attending: Attendance::Yes,
            guest_count: 1,
            additional_guests: Vec::new(),
            dietary_restrictions: None,
            song_request: None,
            message: None,
            date: "1/1/2027, 10:00:00 AM".to_string(),
            source: EntrySource::Local,
        }
    }

    #[tokio::test]
    async fn absent_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path(), "wedding-rsvp-entries");
        assert!(cache.read_all().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_prepends_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path(), "wedding-rsvp-entries");

        cache.create(&entry("a", "Ann Lee")).await.unwrap();
        cache.create(&entry("b", "Bob Ray")).await.unwrap();

        let ids: Vec<String> = cache
            .read_all()
            .await
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert!(cache.path().ends_with("wedding-rsvp-entries.json"));
    }

    #[tokio::test]
    async fn update_and_delete_touch_only_the_matching_id() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path(), "rsvp");
        cache
            .save_all(&[entry("a", "Ann Lee"), entry("b", "Bob Ray"), entry("c", "Cy Tan")])
            .await
            .unwrap();

        let mut edited = entry("b", "Robert Ray");
        edited.guest_count = 3;
        assert!(cache.update("b", &edited).await.unwrap().is_some());
        assert!(cache.update("zzz", &edited).await.unwrap().is_none());

        let stored = cache.read_all().await.unwrap().unwrap();
        assert_eq!(stored[0], entry("a", "Ann Lee"));
        assert_eq!(stored[1].name, "Robert Ray");
        assert_eq!(stored[2], entry("c", "Cy Tan"));

        assert!(cache.delete("a").await.unwrap());
        assert!(!cache.delete("a").await.unwrap());
        let remaining: Vec<String> = cache
            .read_all()
            .await
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(remaining, vec!["b", "c"]);
        assert_eq!(cache.read("c").await.unwrap().unwrap().name, "Cy Tan");
    }

    #[tokio::test]
    async fn corrupt_payload_is_reported_on_read_and_replaced_on_create() {
        let dir = tempfile::tempdir().unwrap();
        let cache = LocalCache::new(dir.path(), "rsvp");
        tokio::fs::write(cache.path(), "not json").await.unwrap();

        assert!(matches!(cache.read_all().await, Err(CacheError::Json(_))));

        cache.create(&entry("a", "Ann Lee")).await.unwrap();
        assert_eq!(cache.read_all().await.unwrap().unwrap().len(), 1);
    }
}
