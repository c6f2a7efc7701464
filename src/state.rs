use crate::errors::{AppError, ProfileError};
use crate::profiles::ProfileStore;
use crate::storage::{BlobStore, persist_profiles};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlobStore>,
    pub profiles: Arc<Mutex<ProfileStore>>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>, profiles: ProfileStore) -> Self {
        Self {
            store,
            profiles: Arc::new(Mutex::new(profiles)),
        }
    }

    /// Runs `edit` against a copy of the profiles. The copy replaces the live
    /// store only after it has been persisted, so a failed edit or a failed
    /// write leaves memory and storage as they were.
    pub async fn edit<T, F>(&self, edit: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut ProfileStore) -> Result<T, ProfileError> + Send,
        T: Send,
    {
        let mut profiles = self.profiles.lock().await;
        let mut draft = profiles.clone();
        let output = edit(&mut draft)?;
        persist_profiles(self.store.as_ref(), &draft).await?;
        *profiles = draft;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use crate::models::ProfileSettings;
    use crate::storage::load_profiles;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use std::io;

    struct ReadOnlyStore;

    #[async_trait]
    impl BlobStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> io::Result<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: Vec<u8>) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn seeded() -> (ProfileStore, String) {
        let mut profiles = ProfileStore::default();
        let id = profiles
            .create(ProfileSettings {
                name: "Rin".to_string(),
                join_date: "2025-01-01".to_string(),
                days_per_week: 3,
            })
            .unwrap()
            .id
            .clone();
        (profiles, id)
    }

    #[tokio::test]
    async fn failed_write_leaves_profiles_untouched() {
        let (profiles, id) = seeded();
        let state = AppState::new(Arc::new(ReadOnlyStore), profiles.clone());
        let date = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();

        let err = state
            .edit(|draft| draft.toggle_attendance(&id, date))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(*state.profiles.lock().await, profiles);
        assert!(state.profiles.lock().await.get(&id).unwrap().months.is_empty());
    }

    #[tokio::test]
    async fn rejected_edit_leaves_profiles_untouched() {
        let (profiles, id) = seeded();
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(store.clone(), profiles.clone());

        let err = state
            .edit(|draft| {
                draft.delete(&id)?;
                draft.select("missing")
            })
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(*state.profiles.lock().await, profiles);
        assert_eq!(load_profiles(store.as_ref()).await, ProfileStore::default());
    }

    #[tokio::test]
    async fn successful_edit_is_persisted_and_applied() {
        let (profiles, id) = seeded();
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(store.clone(), profiles);
        let date = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();

        let attended = state
            .edit(|draft| draft.toggle_attendance(&id, date))
            .await
            .unwrap();
        assert!(attended);

        let live = state.profiles.lock().await.clone();
        assert!(live.get(&id).unwrap().months["2025-10"].attendance.contains("2025-10-06"));
        assert_eq!(load_profiles(store.as_ref()).await, live);
    }
}
