//! In-Memory Assessment Store
//!
//! Keeps every form in process memory. Forms are lost on restart, which
//! matches the single-sitting nature of an assessment.
//!
//! Forms left untouched for longer than the idle TTL are evicted, either by
//! the background sweeper or when an insert finds the store full. A form
//! that is locked or mid-submission is never evicted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::domain::assessment::{AssessmentForm, SubmissionPhase};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::ports::{AssessmentStore, SharedForm};

/// Bounds on how many forms are kept and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLimits {
    /// Forms not updated for this long may be evicted.
    pub idle_ttl: Duration,
    /// Inserts beyond this many live forms are rejected.
    pub max_forms: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(24 * 60 * 60),
            max_forms: 10_000,
        }
    }
}

/// In-memory storage for assessment forms
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    forms: Arc<RwLock<HashMap<AssessmentId, SharedForm>>>,
    limits: StoreLimits,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            forms: Arc::default(),
            limits,
        }
    }

    /// Remove every form (useful for tests)
    pub async fn clear(&self) {
        self.forms.write().await.clear();
    }

    /// Drops forms idle past the TTL. Returns how many were removed.
    pub async fn evict_idle(&self) -> usize {
        let mut forms = self.forms.write().await;
        evict_idle_locked(&mut forms, self.limits.idle_ttl)
    }

    /// Runs [`evict_idle`](Self::evict_idle) every `every` until the task is aborted.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle().await;
                if evicted > 0 {
                    tracing::info!(evicted, "Evicted idle assessments");
                }
            }
        })
    }
}

fn evict_idle_locked(forms: &mut HashMap<AssessmentId, SharedForm>, idle_ttl: Duration) -> usize {
    let Some(cutoff) = Timestamp::ago(idle_ttl) else {
        return 0;
    };
    let before = forms.len();
    forms.retain(|_, form| !is_idle(form, &cutoff));
    before - forms.len()
}

fn is_idle(form: &SharedForm, cutoff: &Timestamp) -> bool {
    match form.try_lock() {
        Ok(form) => {
            form.phase() != SubmissionPhase::Submitting && form.updated_at().is_before(cutoff)
        }
        // Locked means in use
        Err(_) => false,
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn insert(&self, form: AssessmentForm) -> Result<SharedForm, DomainError> {
        let id = form.id();
        let mut forms = self.forms.write().await;
        if forms.contains_key(&id) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Assessment {} already exists", id),
            ));
        }

        if forms.len() >= self.limits.max_forms {
            let evicted = evict_idle_locked(&mut forms, self.limits.idle_ttl);
            tracing::debug!(evicted, "Store full, evicted idle assessments");
            if forms.len() >= self.limits.max_forms {
                tracing::warn!(max_forms = self.limits.max_forms, "Assessment store at capacity");
                return Err(DomainError::new(
                    ErrorCode::CapacityExceeded,
                    format!("limit of {} forms reached", self.limits.max_forms),
                ));
            }
        }

        let shared = Arc::new(Mutex::new(form));
        forms.insert(id, Arc::clone(&shared));
        Ok(shared)
    }

    async fn get(&self, id: &AssessmentId) -> Result<Option<SharedForm>, DomainError> {
        Ok(self.forms.read().await.get(id).cloned())
    }

    async fn remove(&self, id: &AssessmentId) -> Result<bool, DomainError> {
        Ok(self.forms.write().await.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.forms.read().await.len())
    }
}
