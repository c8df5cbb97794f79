use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::donors::models::Donor;

/// Read interface for the donor collection.
///
/// The reporting engine treats donor storage as an external collaborator and
/// only ever fetches the full current snapshot.
#[async_trait]
pub trait DonorReader: Send + Sync {
    async fn list_donors(&self) -> Result<Vec<Donor>>;
}

/// MySQL-backed donor reader
pub struct MySqlDonorRepository {
    pool: MySqlPool,
}

impl MySqlDonorRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonorReader for MySqlDonorRepository {
    async fn list_donors(&self) -> Result<Vec<Donor>> {
        // An empty table is a valid empty snapshot, not an error
        let donors = sqlx::query_as::<_, Donor>(
            r#"
            SELECT id, document, name, lastname, birth_date
            FROM donors
            ORDER BY lastname, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(donors)
    }
}
