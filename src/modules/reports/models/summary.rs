use serde::{Deserialize, Serialize};

/// Requested vs. received volume for one health entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthEntitySummary {
    pub health_entity_id: String,
    pub name: String,
    /// In-window requests issued by the entity
    pub requests: i64,
    pub units_requested: i64,
    pub bags_received: i64,
    pub units_received: i64,
    /// Received volume as a percentage of requested, in [0, 100]
    pub fulfillment_pct: u8,
}

impl HealthEntitySummary {
    /// Empty accumulator for an entity seen among in-window requests
    pub fn new(health_entity_id: String, name: String) -> Self {
        Self {
            health_entity_id,
            name,
            requests: 0,
            units_requested: 0,
            bags_received: 0,
            units_received: 0,
            fulfillment_pct: 0,
        }
    }
}
