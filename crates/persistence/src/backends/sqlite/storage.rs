//! DoctorStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use crate::core::DoctorStorage;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{Doctor, DoctorDraft, Page, PageRequest};
use crate::validation::validate_doctor;

use super::backend::BACKEND_NAME;
use super::SqliteBackend;

const SELECT_COLUMNS: &str = "SELECT id, first_name, last_name, address, city, pincode FROM doctor";

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: BACKEND_NAME.to_string(),
        message,
        source: None,
    })
}

fn row_to_doctor(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        address: row.get(3)?,
        city: row.get(4)?,
        pincode: row.get(5)?,
    })
}

/// Clamps a page window into the i64 range SQLite binds.
fn window(request: PageRequest) -> (i64, i64) {
    let limit = i64::from(request.size);
    let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

fn count_where(conn: &Connection, pincode: Option<&str>) -> StorageResult<u64> {
    let count: i64 = match pincode {
        Some(pincode) => conn.query_row(
            "SELECT COUNT(*) FROM doctor WHERE pincode = ?1",
            params![pincode],
            |row| row.get(0),
        ),
        None => conn.query_row("SELECT COUNT(*) FROM doctor", [], |row| row.get(0)),
    }
    .map_err(|e| internal_error(format!("Failed to count doctors: {}", e)))?;

    Ok(count.max(0) as u64)
}

fn query_doctors(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> StorageResult<Vec<Doctor>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| internal_error(format!("Failed to prepare query: {}", e)))?;

    let rows = stmt
        .query_map(params, row_to_doctor)
        .map_err(|e| internal_error(format!("Failed to list doctors: {}", e)))?;

    let mut doctors = Vec::new();
    for row in rows {
        doctors.push(row.map_err(|e| internal_error(format!("Failed to read row: {}", e)))?);
    }
    Ok(doctors)
}

fn fetch_page(
    conn: &Connection,
    pincode: Option<&str>,
    request: PageRequest,
) -> StorageResult<Page<Doctor>> {
    let total = count_where(conn, pincode)?;
    if total == 0 || request.offset() >= total {
        return Ok(Page::new(Vec::new(), request, total));
    }

    let (limit, offset) = window(request);
    let items = match pincode {
        Some(pincode) => query_doctors(
            conn,
            &format!(
                "{} WHERE pincode = ?1 ORDER BY id LIMIT ?2 OFFSET ?3",
                SELECT_COLUMNS
            ),
            params![pincode, limit, offset],
        )?,
        None => query_doctors(
            conn,
            &format!("{} ORDER BY id LIMIT ?1 OFFSET ?2", SELECT_COLUMNS),
            params![limit, offset],
        )?,
    };

    Ok(Page::new(items, request, total))
}

#[async_trait]
impl DoctorStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn create(&self, draft: DoctorDraft) -> StorageResult<Doctor> {
        validate_doctor(&draft)?;

        let conn = self.get_connection()?;
        conn.execute(
            "INSERT INTO doctor (first_name, last_name, address, city, pincode)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                draft.first_name,
                draft.last_name,
                draft.address,
                draft.city,
                draft.pincode
            ],
        )
        .map_err(|e| internal_error(format!("Failed to insert doctor: {}", e)))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, "Inserted doctor");

        Ok(Doctor::from_draft(id, draft))
    }

    async fn read(&self, id: i64) -> StorageResult<Option<Doctor>> {
        let conn = self.get_connection()?;
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);

        conn.query_row(&sql, params![id], row_to_doctor)
            .optional()
            .map_err(|e| internal_error(format!("Failed to read doctor: {}", e)))
    }

    async fn list_all(&self, request: PageRequest) -> StorageResult<Page<Doctor>> {
        let conn = self.get_connection()?;
        fetch_page(&conn, None, request)
    }

    async fn list_by_pincode(
        &self,
        pincode: &str,
        request: PageRequest,
    ) -> StorageResult<Page<Doctor>> {
        let conn = self.get_connection()?;
        fetch_page(&conn, Some(pincode), request)
    }

    async fn update(&self, id: i64, draft: DoctorDraft) -> StorageResult<Doctor> {
        let conn = self.get_connection()?;

        let exists = conn
            .query_row("SELECT 1 FROM doctor WHERE id = ?1", params![id], |_| Ok(()))
            .optional()
            .map_err(|e| internal_error(format!("Failed to check doctor existence: {}", e)))?
            .is_some();
        if !exists {
            return Err(StorageError::Resource(ResourceError::NotFound { id }));
        }

        validate_doctor(&draft)?;

        conn.execute(
            "UPDATE doctor
             SET first_name = ?1, last_name = ?2, address = ?3, city = ?4, pincode = ?5
             WHERE id = ?6",
            params![
                draft.first_name,
                draft.last_name,
                draft.address,
                draft.city,
                draft.pincode,
                id
            ],
        )
        .map_err(|e| internal_error(format!("Failed to update doctor: {}", e)))?;

        tracing::debug!(id, "Updated doctor");

        Ok(Doctor::from_draft(id, draft))
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        let affected = conn
            .execute("DELETE FROM doctor WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete doctor: {}", e)))?;

        if affected == 0 {
            return Err(StorageError::Resource(ResourceError::NotFound { id }));
        }

        tracing::debug!(id, "Deleted doctor");
        Ok(())
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;

        let affected = conn
            .execute("DELETE FROM doctor", [])
            .map_err(|e| internal_error(format!("Failed to delete doctors: {}", e)))?;

        tracing::debug!(deleted = affected, "Deleted all doctors");
        Ok(affected as u64)
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        count_where(&conn, None)
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|e| {
                StorageError::Backend(BackendError::Unavailable {
                    backend_name: BACKEND_NAME.to_string(),
                    message: e.to_string(),
                })
            })?;
        Ok(())
    }
}
