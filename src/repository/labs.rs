//! Labs repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::lab::{CreateLab, Lab, UpdateLab},
};

#[derive(Clone)]
pub struct LabsRepository {
    pool: Pool<Postgres>,
}

impl LabsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all labs
    pub async fn list(&self) -> AppResult<Vec<Lab>> {
        let rows = sqlx::query_as::<_, Lab>("SELECT * FROM labs ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get lab by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Lab> {
        sqlx::query_as::<_, Lab>("SELECT * FROM labs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lab {} not found", id)))
    }

    /// Create a lab; a taken name is a conflict
    pub async fn create(&self, data: &CreateLab) -> AppResult<Lab> {
        let row = sqlx::query_as::<_, Lab>(
            "INSERT INTO labs (name, location) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.name.trim())
        .bind(&data.location)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the given fields of a lab
    pub async fn update(&self, id: i32, data: &UpdateLab) -> AppResult<Lab> {
        sqlx::query_as::<_, Lab>(
            r#"
            UPDATE labs SET
                name = COALESCE($1, name),
                location = COALESCE($2, location),
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(data.name.as_deref().map(str::trim))
        .bind(&data.location)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Lab {} not found", id)))
    }

    /// Delete a lab with everything it owns
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM labs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Lab {} not found", id)));
        }
        Ok(())
    }
}
