use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{ApiError, CatFact, CatFactsApi};

/// Shown when the backend rejects a fact without a usable `detail`.
pub const ADD_FACT_FAILED: &str = "Failed to add fact.";
/// Shown when a submission fails before the backend could answer.
pub const SUBMIT_FAILED: &str = "Something went wrong while submitting.";
/// Shown when a random fact cannot be fetched for any reason.
pub const RANDOM_FACT_FAILED: &str = "Could not fetch random fact.";

/// Result of persisting a fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFactOutcome {
    /// The backend stored the fact.
    Saved(CatFact),
    /// Nothing was stored. `entered` is the text the user submitted.
    Rejected { errors: Vec<String>, entered: String },
}

impl AddFactOutcome {
    pub fn errors(&self) -> &[String] {
        match self {
            AddFactOutcome::Saved(_) => &[],
            AddFactOutcome::Rejected { errors, .. } => errors,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, AddFactOutcome::Saved(_))
    }
}

/// Result of asking for a random fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomFactOutcome {
    Fact(String),
    Error(String),
}

/// Persistence seam for the submission form.
#[async_trait]
pub trait FactSink: Send + Sync {
    async fn add_fact(&self, text: &str) -> AddFactOutcome;
}

/// Cloneable handle to the shared fact list.
///
/// Readers take snapshots; writes happen only inside [`FactStore::load`]
/// and [`FactStore::add_fact`].
#[derive(Clone)]
pub struct FactStore {
    api: Arc<dyn CatFactsApi>,
    facts: Arc<RwLock<Vec<CatFact>>>,
}

impl FactStore {
    /// Create an empty store backed by `api`.
    pub fn new(api: Arc<dyn CatFactsApi>) -> Self {
        Self {
            api,
            facts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of the current facts, most recently added first.
    pub fn facts(&self) -> Vec<CatFact> {
        self.facts.read().clone()
    }

    pub fn len(&self) -> usize {
        self.facts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.read().is_empty()
    }

    /// Fetch all facts and replace local state.
    ///
    /// On failure the error is logged and returned; local state is untouched.
    pub async fn load(&self) -> Result<usize, ApiError> {
        match self.api.list_facts().await {
            Ok(facts) => {
                let count = facts.len();
                *self.facts.write() = facts;
                tracing::info!(count, "Loaded cat facts");
                Ok(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load facts");
                Err(err)
            }
        }
    }

    /// Send `text` to the backend and prepend the stored fact on success.
    ///
    /// No validation happens here; that belongs to the form.
    pub async fn add_fact(&self, text: &str) -> AddFactOutcome {
        match self.api.create_fact(text).await {
            Ok(saved) => {
                tracing::info!(id = saved.id, "Added cat fact");
                self.facts.write().insert(0, saved.clone());
                AddFactOutcome::Saved(saved)
            }
            Err(ApiError::Status { status, detail }) => {
                tracing::warn!(
                    status,
                    detail = detail.as_deref().unwrap_or(""),
                    "Backend rejected new fact"
                );
                AddFactOutcome::Rejected {
                    errors: vec![detail.unwrap_or_else(|| ADD_FACT_FAILED.to_string())],
                    entered: text.to_string(),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Error submitting new fact");
                AddFactOutcome::Rejected {
                    errors: vec![SUBMIT_FAILED.to_string()],
                    entered: text.to_string(),
                }
            }
        }
    }

    /// Fetch one random fact. Never touches local state.
    pub async fn random_fact(&self) -> RandomFactOutcome {
        match self.api.random_fact().await {
            Ok(random) => RandomFactOutcome::Fact(random.fact),
            Err(err) => {
                tracing::error!(error = %err, "Error fetching random fact");
                RandomFactOutcome::Error(RANDOM_FACT_FAILED.to_string())
            }
        }
    }
}

#[async_trait]
impl FactSink for FactStore {
    async fn add_fact(&self, text: &str) -> AddFactOutcome {
        FactStore::add_fact(self, text).await
    }
}
