//! Per-PC CPU repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::cpu::{CreateCpu, Cpu, UpdateCpu},
};

#[derive(Clone)]
pub struct CpusRepository {
    pool: Pool<Postgres>,
}

impl CpusRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self, pc_id: Option<i32>) -> AppResult<Vec<Cpu>> {
        let rows = sqlx::query_as::<_, Cpu>(
            "SELECT * FROM pc_cpus WHERE ($1::int IS NULL OR pc_id = $1) ORDER BY pc_id",
        )
        .bind(pc_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Cpu> {
        sqlx::query_as::<_, Cpu>("SELECT * FROM pc_cpus WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("CPU {} not found", id)))
    }

    /// A PC holds one CPU record; a second one is a conflict
    pub async fn create(&self, data: &CreateCpu) -> AppResult<Cpu> {
        let row = sqlx::query_as::<_, Cpu>(
            r#"
            INSERT INTO pc_cpus (pc_id, model, clock_speed, core_count, integrated_graphics)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.pc_id)
        .bind(data.model.trim())
        .bind(&data.clock_speed)
        .bind(data.core_count)
        .bind(data.integrated_graphics)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateCpu) -> AppResult<Cpu> {
        sqlx::query_as::<_, Cpu>(
            r#"
            UPDATE pc_cpus SET
                model = COALESCE($1, model),
                clock_speed = COALESCE($2, clock_speed),
                core_count = COALESCE($3, core_count),
                integrated_graphics = COALESCE($4, integrated_graphics),
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(data.model.as_deref().map(str::trim))
        .bind(&data.clock_speed)
        .bind(data.core_count)
        .bind(data.integrated_graphics)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CPU {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM pc_cpus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("CPU {} not found", id)));
        }
        Ok(())
    }
}
