//! Process-wide cache of dashboard snapshots.
//!
//! Consumers read the last good snapshot synchronously and call
//! `refresh` after any mutation to re-synchronize. A failed refresh
//! records one aggregate error message and leaves the previous snapshot
//! in place.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

use crate::dashboard::dashboard_model::DashboardSnapshot;
use crate::dashboard::dashboard_service::DashboardServiceTrait;
use crate::errors::Result;

pub struct DashboardStore {
    service: Arc<dyn DashboardServiceTrait>,
    snapshots: RwLock<HashMap<String, DashboardSnapshot>>,
    errors: RwLock<HashMap<String, String>>,
    loading: Mutex<HashSet<String>>,
}

impl DashboardStore {
    pub fn new(service: Arc<dyn DashboardServiceTrait>) -> Self {
        DashboardStore {
            service,
            snapshots: RwLock::new(HashMap::new()),
            errors: RwLock::new(HashMap::new()),
            loading: Mutex::new(HashSet::new()),
        }
    }

    /// Last good snapshot for the user, if any refresh has succeeded.
    pub fn snapshot(&self, user_id: &str) -> Option<DashboardSnapshot> {
        self.snapshots.read().unwrap().get(user_id).cloned()
    }

    /// Error message from the most recent failed refresh, cleared by the
    /// next success.
    pub fn last_error(&self, user_id: &str) -> Option<String> {
        self.errors.read().unwrap().get(user_id).cloned()
    }

    /// Whether a refresh for the user is currently in flight.
    pub fn is_loading(&self, user_id: &str) -> bool {
        self.loading.lock().unwrap().contains(user_id)
    }

    /// Load a fresh snapshot and replace the cached one.
    pub async fn refresh(&self, user_id: &str) -> Result<DashboardSnapshot> {
        self.loading.lock().unwrap().insert(user_id.to_string());
        let result = self.service.load(user_id).await;
        self.loading.lock().unwrap().remove(user_id);

        match result {
            Ok(snapshot) => {
                self.snapshots
                    .write()
                    .unwrap()
                    .insert(user_id.to_string(), snapshot.clone());
                self.errors.write().unwrap().remove(user_id);
                Ok(snapshot)
            }
            Err(err) => {
                log::error!("dashboard refresh failed for {}: {}", user_id, err);
                self.errors
                    .write()
                    .unwrap()
                    .insert(user_id.to_string(), err.to_string());
                Err(err)
            }
        }
    }

    /// Cached snapshot, or a fresh load when the user has none yet.
    pub async fn snapshot_or_refresh(&self, user_id: &str) -> Result<DashboardSnapshot> {
        if let Some(snapshot) = self.snapshot(user_id) {
            return Ok(snapshot);
        }
        self.refresh(user_id).await
    }
}
