//! Lab equipment repository, including detail sub-records and inventory totals

use sqlx::{Pool, Postgres};

use super::details;
use crate::{
    error::{AppError, AppResult},
    models::{
        inventory::InventoryEntry,
        lab_equipment::{
            CreateLabEquipment, EquipmentDetail, LabEquipment, LabEquipmentQuery, UpdateLabEquipment,
        },
    },
};

#[derive(Clone)]
pub struct LabEquipmentRepository {
    pool: Pool<Postgres>,
}

impl LabEquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment with optional filters
    pub async fn list(&self, query: &LabEquipmentQuery) -> AppResult<Vec<LabEquipment>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.lab_id.is_some() {
            conditions.push(format!("lab_id = ${}", idx));
            idx += 1;
        }
        if query.equipment_type.is_some() {
            conditions.push(format!("equipment_type = ${}", idx));
            idx += 1;
        }
        if query.status.is_some() {
            conditions.push(format!("status = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!(
            "SELECT * FROM lab_equipment {} ORDER BY lab_id, equipment_code",
            where_clause
        );
        let mut builder = sqlx::query_as::<_, LabEquipment>(&select_q);
        if let Some(lab_id) = query.lab_id {
            builder = builder.bind(lab_id);
        }
        if let Some(ty) = query.equipment_type {
            builder = builder.bind(ty.as_str());
        }
        if let Some(status) = query.status {
            builder = builder.bind(status.as_str());
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<LabEquipment> {
        sqlx::query_as::<_, LabEquipment>("SELECT * FROM lab_equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lab equipment {} not found", id)))
    }

    /// Create equipment
    pub async fn create(&self, data: &CreateLabEquipment) -> AppResult<LabEquipment> {
        let row = sqlx::query_as::<_, LabEquipment>(INSERT_EQUIPMENT)
            .bind(data.lab_id)
            .bind(&data.equipment_code)
            .bind(&data.name)
            .bind(data.category.as_str())
            .bind(data.equipment_type.as_str())
            .bind(&data.brand)
            .bind(&data.model_name)
            .bind(data.quantity)
            .bind(data.status.as_str())
            .bind(data.is_networked)
            .bind(data.installation_date)
            .bind(&data.location_in_lab)
            .bind(&data.remarks)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Update the given fields; a type change cascades to the detail rows.
    pub async fn update(&self, id: i32, data: &UpdateLabEquipment) -> AppResult<LabEquipment> {
        sqlx::query_as::<_, LabEquipment>(
            r#"
            UPDATE lab_equipment SET
                lab_id = COALESCE($1, lab_id),
                equipment_code = COALESCE($2, equipment_code),
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                equipment_type = COALESCE($5, equipment_type),
                brand = COALESCE($6, brand),
                model_name = COALESCE($7, model_name),
                quantity = COALESCE($8, quantity),
                status = COALESCE($9, status),
                is_networked = COALESCE($10, is_networked),
                installation_date = COALESCE($11, installation_date),
                location_in_lab = COALESCE($12, location_in_lab),
                remarks = COALESCE($13, remarks),
                updated_at = NOW()
            WHERE id = $14
            RETURNING *
            "#,
        )
        .bind(data.lab_id)
        .bind(&data.equipment_code)
        .bind(&data.name)
        .bind(data.category.map(|c| c.as_str()))
        .bind(data.equipment_type.map(|t| t.as_str()))
        .bind(&data.brand)
        .bind(&data.model_name)
        .bind(data.quantity)
        .bind(data.status.map(|s| s.as_str()))
        .bind(data.is_networked)
        .bind(data.installation_date)
        .bind(&data.location_in_lab)
        .bind(&data.remarks)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Lab equipment {} not found", id)))
    }

    /// Delete equipment and its details
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM lab_equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Lab equipment {} not found", id)));
        }
        Ok(())
    }

    pub async fn details(&self, equipment_id: i32) -> AppResult<Vec<EquipmentDetail>> {
        Ok(details::fetch_all(&self.pool, equipment_id).await?)
    }

    /// Attach `detail`, replacing any existing one of the same kind
    pub async fn put_detail(&self, equipment: &LabEquipment, detail: &EquipmentDetail) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        details::replace(&mut tx, equipment, detail).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Quantities per lab and equipment type, split by status
    pub async fn inventory(&self, lab_id: Option<i32>) -> AppResult<Vec<InventoryEntry>> {
        let rows = sqlx::query_as::<_, InventoryEntry>(
            r#"
            SELECT
                e.lab_id || '_' || e.equipment_type AS id,
                e.lab_id,
                l.name AS lab_name,
                e.equipment_type,
                COALESCE(SUM(e.quantity), 0)::bigint AS total_quantity,
                COALESCE(SUM(e.quantity) FILTER (WHERE e.status = 'working'), 0)::bigint AS working_quantity,
                COALESCE(SUM(e.quantity) FILTER (WHERE e.status = 'not_working'), 0)::bigint AS not_working_quantity,
                COALESCE(SUM(e.quantity) FILTER (WHERE e.status = 'under_repair'), 0)::bigint AS under_repair_quantity
            FROM lab_equipment e
            JOIN labs l ON l.id = e.lab_id
            WHERE ($1::int IS NULL OR e.lab_id = $1)
            GROUP BY e.lab_id, l.name, e.equipment_type
            ORDER BY l.name, e.equipment_type
            "#,
        )
        .bind(lab_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Shared with the import transaction
pub(crate) const INSERT_EQUIPMENT: &str = r#"
    INSERT INTO lab_equipment (
        lab_id, equipment_code, name, category, equipment_type, brand, model_name,
        quantity, status, is_networked, installation_date, location_in_lab, remarks
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
    RETURNING *
"#;
