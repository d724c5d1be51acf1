//! Per-PC operating system repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::os::{CreateOperatingSystem, OperatingSystem, UpdateOperatingSystem},
};

#[derive(Clone)]
pub struct OperatingSystemsRepository {
    pool: Pool<Postgres>,
}

impl OperatingSystemsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pc_id: Option<i32>) -> AppResult<Vec<OperatingSystem>> {
        let rows = sqlx::query_as::<_, OperatingSystem>(
            "SELECT * FROM pc_operating_systems WHERE ($1::int IS NULL OR pc_id = $1) ORDER BY pc_id",
        )
        .bind(pc_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<OperatingSystem> {
        sqlx::query_as::<_, OperatingSystem>("SELECT * FROM pc_operating_systems WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Operating system {} not found", id)))
    }

    /// A PC holds one OS record; a second one is a conflict
    pub async fn create(&self, data: &CreateOperatingSystem) -> AppResult<OperatingSystem> {
        let row = sqlx::query_as::<_, OperatingSystem>(
            r#"
            INSERT INTO pc_operating_systems (
                pc_id, name, version, install_date, expiration_date, architecture, product_key
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.pc_id)
        .bind(data.name.trim())
        .bind(&data.version)
        .bind(data.install_date)
        .bind(data.expiration_date)
        .bind(data.architecture.as_str())
        .bind(&data.product_key)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateOperatingSystem) -> AppResult<OperatingSystem> {
        sqlx::query_as::<_, OperatingSystem>(
            r#"
            UPDATE pc_operating_systems SET
                name = COALESCE($1, name),
                version = COALESCE($2, version),
                install_date = COALESCE($3, install_date),
                expiration_date = COALESCE($4, expiration_date),
                architecture = COALESCE($5, architecture),
                product_key = COALESCE($6, product_key),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(data.name.as_deref().map(str::trim))
        .bind(&data.version)
        .bind(data.install_date)
        .bind(data.expiration_date)
        .bind(data.architecture.map(|a| a.as_str()))
        .bind(&data.product_key)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Operating system {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM pc_operating_systems WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Operating system {} not found", id)));
        }
        Ok(())
    }
}
