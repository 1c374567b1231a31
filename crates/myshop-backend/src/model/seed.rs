use serde::{Deserialize, Serialize};

/// Response from `POST /api/seed-products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub status: String,
}
