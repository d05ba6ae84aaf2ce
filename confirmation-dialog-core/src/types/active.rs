//! Active confirmation types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::confirmer::{Confirmer, Params};

/// The confirmation currently selected for display.
///
/// Also the payload written to the session store when AJAX is disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveConfirmation {
    pub name: String,
    #[serde(default)]
    pub params: Params,
    /// Binds confirm/cancel requests to this particular display
    pub token: Uuid,
    #[serde(with = "crate::utils::datetime")]
    pub requested_at: DateTime<Utc>,
}

impl ActiveConfirmation {
    /// Create a new active confirmation with a fresh token
    #[must_use]
    pub fn new(name: String, params: Params) -> Self {
        Self {
            name,
            params,
            token: Uuid::new_v4(),
            requested_at: Utc::now(),
        }
    }

    /// Whether the confirmation was requested more than `ttl_secs` before `now`.
    ///
    /// A timestamp in the future also counts as expired.
    #[must_use]
    pub fn is_expired(&self, ttl_secs: u64, now: DateTime<Utc>) -> bool {
        let age = (now - self.requested_at).num_seconds();
        age < 0 || age > i64::try_from(ttl_secs).unwrap_or(i64::MAX)
    }
}

/// Borrowed view handed to the render step
#[derive(Debug, Clone, Copy)]
pub struct ActiveConfirmer<'a> {
    pub confirmer: &'a Confirmer,
    pub confirmation: &'a ActiveConfirmation,
}

impl ActiveConfirmer<'_> {
    pub fn name(&self) -> &str {
        self.confirmer.name()
    }

    pub fn params(&self) -> &Params {
        &self.confirmation.params
    }

    pub fn token(&self) -> Uuid {
        self.confirmation.token
    }

    /// Resolved question text
    pub fn question(&self) -> String {
        self.confirmer
            .resolve_question(self.params())
            .unwrap_or_default()
    }

    /// Resolved heading text
    pub fn heading(&self) -> String {
        self.confirmer
            .resolve_heading(self.params())
            .unwrap_or_default()
    }
}
