//! Peripherals repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::peripheral::{CreatePeripheral, Peripheral, PeripheralQuery, UpdatePeripheral},
};

#[derive(Clone)]
pub struct PeripheralsRepository {
    pool: Pool<Postgres>,
}

impl PeripheralsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List peripherals with optional filters
    pub async fn list(&self, query: &PeripheralQuery) -> AppResult<Vec<Peripheral>> {
        let rows = sqlx::query_as::<_, Peripheral>(
            r#"
            SELECT * FROM peripherals
            WHERE ($1::int IS NULL OR pc_id = $1)
              AND ($2::text IS NULL OR peripheral_type = $2)
              AND ($3::text IS NULL OR status = $3)
            ORDER BY pc_id, peripheral_type, id
            "#,
        )
        .bind(query.pc_id)
        .bind(query.peripheral_type.map(|t| t.as_str()))
        .bind(query.status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Peripheral> {
        sqlx::query_as::<_, Peripheral>("SELECT * FROM peripherals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Peripheral {} not found", id)))
    }

    pub async fn create(&self, data: &CreatePeripheral) -> AppResult<Peripheral> {
        let row = sqlx::query_as::<_, Peripheral>(
            r#"
            INSERT INTO peripherals (pc_id, peripheral_type, brand, model_name, serial_number, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.pc_id)
        .bind(data.peripheral_type.as_str())
        .bind(&data.brand)
        .bind(&data.model_name)
        .bind(&data.serial_number)
        .bind(data.status.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdatePeripheral) -> AppResult<Peripheral> {
        sqlx::query_as::<_, Peripheral>(
            r#"
            UPDATE peripherals SET
                pc_id = COALESCE($1, pc_id),
                peripheral_type = COALESCE($2, peripheral_type),
                brand = COALESCE($3, brand),
                model_name = COALESCE($4, model_name),
                serial_number = COALESCE($5, serial_number),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(data.pc_id)
        .bind(data.peripheral_type.map(|t| t.as_str()))
        .bind(&data.brand)
        .bind(&data.model_name)
        .bind(&data.serial_number)
        .bind(data.status.map(|s| s.as_str()))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Peripheral {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM peripherals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Peripheral {} not found", id)));
        }
        Ok(())
    }
}
