//! Maintenance log repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::MaintenanceStatus,
        maintenance::{
            CreateMaintenanceLog, FixMaintenanceLog, MaintenanceLog, MaintenanceQuery,
            UpdateMaintenanceLog,
        },
    },
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List logs, newest first
    pub async fn list(&self, query: &MaintenanceQuery) -> AppResult<Vec<MaintenanceLog>> {
        let rows = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            SELECT * FROM maintenance_logs
            WHERE ($1::int IS NULL OR lab_id = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY reported_on DESC
            "#,
        )
        .bind(query.lab_id)
        .bind(query.status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceLog> {
        sqlx::query_as::<_, MaintenanceLog>("SELECT * FROM maintenance_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance log {} not found", id)))
    }

    /// Open a pending log; `lab_id` is the lab of the target
    pub async fn create(&self, data: &CreateMaintenanceLog, lab_id: i32) -> AppResult<MaintenanceLog> {
        let row = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs (
                pc_id, lab_equipment_id, peripheral_id, lab_id,
                reported_by, issue_description, status_before, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(data.pc_id)
        .bind(data.lab_equipment_id)
        .bind(data.peripheral_id)
        .bind(lab_id)
        .bind(&data.reported_by)
        .bind(&data.issue_description)
        .bind(&data.status_before)
        .bind(MaintenanceStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Close a pending log. Only pending logs are touched.
    pub async fn fix(&self, id: i32, data: &FixMaintenanceLog) -> AppResult<Option<MaintenanceLog>> {
        let row = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            UPDATE maintenance_logs
            SET status = $2, fixed_on = $3, fixed_by = $4, status_after = $5,
                remarks = COALESCE($6, remarks)
            WHERE id = $1 AND status = $7
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(MaintenanceStatus::Fixed.as_str())
        .bind(Utc::now())
        .bind(&data.fixed_by)
        .bind(&data.status_after)
        .bind(&data.remarks)
        .bind(MaintenanceStatus::Pending.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Edit a log. Reaching FIXED stamps `fixed_on` once.
    pub async fn update(&self, id: i32, data: &UpdateMaintenanceLog) -> AppResult<MaintenanceLog> {
        sqlx::query_as::<_, MaintenanceLog>(
            r#"
            UPDATE maintenance_logs SET
                reported_by = COALESCE($1, reported_by),
                fixed_by = COALESCE($2, fixed_by),
                issue_description = COALESCE($3, issue_description),
                status_before = COALESCE($4, status_before),
                status_after = COALESCE($5, status_after),
                remarks = COALESCE($6, remarks),
                fixed_on = CASE
                    WHEN $7 = $8 AND fixed_on IS NULL THEN $9
                    ELSE fixed_on
                END,
                status = COALESCE($7, status)
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&data.reported_by)
        .bind(&data.fixed_by)
        .bind(&data.issue_description)
        .bind(&data.status_before)
        .bind(&data.status_after)
        .bind(&data.remarks)
        .bind(data.status.map(|s| s.as_str()))
        .bind(MaintenanceStatus::Fixed.as_str())
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance log {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance log {} not found", id)));
        }
        Ok(())
    }
}
