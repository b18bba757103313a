use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ingest::importer::DocumentImporter;
use crate::models::candidate::Candidate;
use crate::onboarding::provisioning::AccountProvisioner;

/// The currently loaded candidates. Replaced wholesale, never edited per record.
#[derive(Clone, Default)]
pub struct WorkingSet {
    inner: Arc<RwLock<Vec<Candidate>>>,
}

impl WorkingSet {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(candidates)),
        }
    }

    /// Clones the current set so the pipeline runs without holding the lock.
    pub async fn snapshot(&self) -> Vec<Candidate> {
        self.inner.read().await.clone()
    }

    /// Swaps in a new set, returning its size.
    pub async fn replace(&self, candidates: Vec<Candidate>) -> usize {
        let count = candidates.len();
        *self.inner.write().await = candidates;
        count
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub working_set: WorkingSet,
    /// PDF import collaborator. Default: UnconfiguredImporter.
    pub importer: Arc<dyn DocumentImporter>,
    /// Account + mentor provisioning used by onboarding; falls back locally on failure.
    pub provisioner: Arc<dyn AccountProvisioner>,
}
