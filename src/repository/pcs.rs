//! PCs repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::pc::{CreatePc, Pc, UpdatePc},
};

#[derive(Clone)]
pub struct PcsRepository {
    pool: Pool<Postgres>,
}

impl PcsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List PCs, optionally restricted to one lab
    pub async fn list(&self, lab_id: Option<i32>) -> AppResult<Vec<Pc>> {
        let rows = sqlx::query_as::<_, Pc>(
            "SELECT * FROM pcs WHERE ($1::int IS NULL OR lab_id = $1) ORDER BY lab_id, device_name",
        )
        .bind(lab_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get PC by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Pc> {
        sqlx::query_as::<_, Pc>("SELECT * FROM pcs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("PC {} not found", id)))
    }

    /// Create a PC
    pub async fn create(&self, data: &CreatePc) -> AppResult<Pc> {
        let row = sqlx::query_as::<_, Pc>(INSERT_PC)
            .bind(data.lab_id)
            .bind(&data.device_name)
            .bind(&data.product_id)
            .bind(&data.processor)
            .bind(&data.ram)
            .bind(&data.storage)
            .bind(data.status.as_str())
            .bind(data.connected)
            .bind(data.gpu)
            .bind(data.peripherals)
            .bind(&data.brand)
            .bind(&data.serial_number)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Update the given fields of a PC
    pub async fn update(&self, id: i32, data: &UpdatePc) -> AppResult<Pc> {
        sqlx::query_as::<_, Pc>(
            r#"
            UPDATE pcs SET
                lab_id = COALESCE($1, lab_id),
                device_name = COALESCE($2, device_name),
                product_id = COALESCE($3, product_id),
                processor = COALESCE($4, processor),
                ram = COALESCE($5, ram),
                storage = COALESCE($6, storage),
                status = COALESCE($7, status),
                connected = COALESCE($8, connected),
                gpu = COALESCE($9, gpu),
                peripherals = COALESCE($10, peripherals),
                brand = COALESCE($11, brand),
                serial_number = COALESCE($12, serial_number),
                updated_at = NOW()
            WHERE id = $13
            RETURNING *
            "#,
        )
        .bind(data.lab_id)
        .bind(&data.device_name)
        .bind(&data.product_id)
        .bind(&data.processor)
        .bind(&data.ram)
        .bind(&data.storage)
        .bind(data.status.map(|s| s.as_str()))
        .bind(data.connected)
        .bind(data.gpu)
        .bind(data.peripherals)
        .bind(&data.brand)
        .bind(&data.serial_number)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("PC {} not found", id)))
    }

    /// Delete a PC
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM pcs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("PC {} not found", id)));
        }
        Ok(())
    }
}

/// Shared with the import transaction
pub(crate) const INSERT_PC: &str = r#"
    INSERT INTO pcs (
        lab_id, device_name, product_id, processor, ram, storage,
        status, connected, gpu, peripherals, brand, serial_number
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
    RETURNING *
"#;
