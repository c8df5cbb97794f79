use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::requests::models::BloodRequest;

/// Read interface for the blood-request collection
#[async_trait]
pub trait RequestReader: Send + Sync {
    async fn list_requests(&self) -> Result<Vec<BloodRequest>>;
}

/// MySQL-backed request reader
pub struct MySqlRequestRepository {
    pool: MySqlPool,
}

impl MySqlRequestRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RequestReader for MySqlRequestRepository {
    async fn list_requests(&self) -> Result<Vec<BloodRequest>> {
        let requests = sqlx::query_as::<_, BloodRequest>(
            r#"
            SELECT
                r.id,
                r.date_created,
                r.quantity_needed,
                r.due_date,
                b.type AS blood_type,
                b.rh,
                h.id AS health_entity_id,
                h.name AS health_entity_name
            FROM requests r
            JOIN bloods b ON b.id = r.blood_id
            JOIN health_entities h ON h.id = r.health_entity_id
            ORDER BY r.date_created
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }
}
