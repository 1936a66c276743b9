//! PostgreSQL implementation of DiceRepository

use async_trait::async_trait;
use sqlx::PgPool;

use dice::{Dice, DiceRepository, DomainError};

/// PostgreSQL implementation of DiceRepository
pub struct PgDiceRepository {
    pool: PgPool,
}

impl PgDiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DiceRow {
    id: i32,
    size: i32,
}

impl From<DiceRow> for Dice {
    fn from(row: DiceRow) -> Self {
        Self::with_id(row.id, row.size)
    }
}

#[async_trait]
impl DiceRepository for PgDiceRepository {
    async fn save(&self, dice: &Dice) -> Result<Dice, DomainError> {
        let row = match dice.id {
            // Replace an existing row
            Some(id) => {
                let row = sqlx::query_as::<_, DiceRow>(
                    r#"
                    INSERT INTO dices (id, size)
                    VALUES ($1, $2)
                    ON CONFLICT (id) DO UPDATE SET size = EXCLUDED.size
                    RETURNING id, size
                    "#,
                )
                .bind(id)
                .bind(dice.size)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Repository(e.to_string()))?;

                // Keep the serial sequence ahead of explicitly written ids
                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('dices', 'id'), (SELECT MAX(id) FROM dices))",
                )
                .execute(&self.pool)
                .await
                .map(|_| row)
            }
            None => {
                sqlx::query_as::<_, DiceRow>(
                    "INSERT INTO dices (size) VALUES ($1) RETURNING id, size",
                )
                .bind(dice.size)
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Dice>, DomainError> {
        let row = sqlx::query_as::<_, DiceRow>("SELECT id, size FROM dices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Dice>, DomainError> {
        let rows = sqlx::query_as::<_, DiceRow>("SELECT id, size FROM dices ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM dices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Dice", id));
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM dices")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }
}
