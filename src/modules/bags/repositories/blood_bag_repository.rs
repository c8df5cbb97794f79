use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::bags::models::BloodBag;

/// Read interface for the blood-bag collection
#[async_trait]
pub trait BloodBagReader: Send + Sync {
    async fn list_blood_bags(&self) -> Result<Vec<BloodBag>>;
}

/// MySQL-backed blood-bag reader
pub struct MySqlBloodBagRepository {
    pool: MySqlPool,
}

impl MySqlBloodBagRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BloodBagReader for MySqlBloodBagRepository {
    async fn list_blood_bags(&self) -> Result<Vec<BloodBag>> {
        let bags = sqlx::query_as::<_, BloodBag>(
            r#"
            SELECT
                g.id,
                g.quantity,
                g.donation_date,
                g.expiration_date,
                b.type AS blood_type,
                b.rh,
                g.donor_id,
                g.request_id
            FROM blood_bags g
            JOIN bloods b ON b.id = g.blood_id
            ORDER BY g.donation_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bags)
    }
}
