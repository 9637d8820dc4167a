// SPDX-License-Identifier: MPL-2.0
//! Submission collaborators for the search and newsletter forms.
//!
//! Forms never talk to a backend directly: they hand their payload to a
//! [`SearchSubmitter`] or [`NewsletterSubmitter`] and receive a future. The
//! bundled [`SimulatedBackend`] only logs the payload and waits for a
//! configurable latency.

use crate::domain::trip::TripType;
use futures_util::future::BoxFuture;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Record key holding the trip type.
pub const TRIP_TYPE_KEY: &str = "tripType";

/// Failure reported by a submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Future returned by every submission.
pub type Submission = BoxFuture<'static, Result<(), SubmissionError>>;

/// Flat field name → value mapping built for a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRecord {
    fields: BTreeMap<String, String>,
}

impl SearchRecord {
    #[must_use]
    pub fn new(trip_type: TripType) -> Self {
        let mut record = Self::default();
        record.insert(TRIP_TYPE_KEY, trip_type.as_str());
        record
    }

    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn trip_type(&self) -> Option<&str> {
        self.get(TRIP_TYPE_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for SearchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value:?}")?;
        }
        f.write_str("}")
    }
}

/// Accepts flight search records.
pub trait SearchSubmitter: fmt::Debug + Send + Sync {
    fn submit(&self, record: SearchRecord) -> Submission;
}

/// Accepts validated newsletter addresses.
pub trait NewsletterSubmitter: fmt::Debug + Send + Sync {
    fn subscribe(&self, email: String) -> Submission;
}

/// Stand-in backend that logs every payload.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl SearchSubmitter for SimulatedBackend {
    fn submit(&self, record: SearchRecord) -> Submission {
        let latency = self.latency;
        Box::pin(async move {
            tracing::debug!(fields = record.len(), ?latency, "simulated search backend");
            tokio::time::sleep(latency).await;
            Ok(())
        })
    }
}

impl NewsletterSubmitter for SimulatedBackend {
    fn subscribe(&self, email: String) -> Submission {
        Box::pin(async move {
            tracing::info!(%email, "newsletter signup");
            Ok(())
        })
    }
}

/// The collaborators handed to the application.
#[derive(Debug, Clone)]
pub struct Submitters {
    pub search: Arc<dyn SearchSubmitter>,
    pub newsletter: Arc<dyn NewsletterSubmitter>,
}

impl Submitters {
    /// Both forms served by one [`SimulatedBackend`].
    #[must_use]
    pub fn simulated(latency: Duration) -> Self {
        let backend = Arc::new(SimulatedBackend::new(latency));
        Self {
            search: backend.clone(),
            newsletter: backend,
        }
    }
}
