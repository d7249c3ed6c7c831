//! Append-only audit log on SQLite.
//!
//! One row per evaluator call; rows are inserted and read, never updated
//! or deleted. Later calls supersede earlier ones by timestamp only.

use std::path::Path;
use std::sync::Mutex;

use canon_core::errors::{CanonError, CanonResult, EvaluateError};
use canon_core::models::{Assessment, AuditRecord};
use chrono::{DateTime, Utc};
use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS audit_log (
    audit_id            TEXT PRIMARY KEY,
    created_at          TEXT NOT NULL,
    action              TEXT NOT NULL,
    s_series_triggered  INTEGER NOT NULL,
    principle_ids       TEXT NOT NULL,
    assessment          TEXT NOT NULL,
    modifications       TEXT,
    escalation_reason   TEXT
);
";

fn store_err(e: impl std::fmt::Display) -> CanonError {
    EvaluateError::AuditStore {
        message: e.to_string(),
    }
    .into()
}

/// The append-only audit log.
pub struct AuditLog {
    conn: Mutex<Connection>,
}

impl AuditLog {
    /// Open (or create) a file-backed audit log.
    pub fn open(path: &Path) -> CanonResult<Self> {
        let conn = Connection::open(path).map_err(store_err)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory audit log (for testing).
    pub fn open_in_memory() -> CanonResult<Self> {
        let conn = Connection::open_in_memory().map_err(store_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> CanonResult<Self> {
        conn.execute_batch(SCHEMA).map_err(store_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Append one record. Insert-only; a duplicate audit id is an error.
    pub fn append(&self, record: &AuditRecord) -> CanonResult<()> {
        let conn = self.conn.lock().expect("audit lock poisoned");
        conn.execute(
            "INSERT INTO audit_log
             (audit_id, created_at, action, s_series_triggered, principle_ids,
              assessment, modifications, escalation_reason)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                record.audit_id,
                record.created_at.to_rfc3339(),
                record.action,
                record.s_series_triggered as i64,
                serde_json::to_string(&record.principle_ids)?,
                serde_json::to_string(&record.assessment)?,
                record.modifications,
                record.escalation_reason,
            ],
        )
        .map_err(store_err)?;
        Ok(())
    }

    /// Fetch one record by audit id.
    pub fn get(&self, audit_id: &str) -> CanonResult<Option<AuditRecord>> {
        let conn = self.conn.lock().expect("audit lock poisoned");
        let mut stmt = conn
            .prepare(
                "SELECT audit_id, created_at, action, s_series_triggered, principle_ids,
                        assessment, modifications, escalation_reason
                 FROM audit_log WHERE audit_id = ?1",
            )
            .map_err(store_err)?;

        let mut rows = stmt.query([audit_id]).map_err(store_err)?;
        let Some(row) = rows.next().map_err(store_err)? else {
            return Ok(None);
        };

        let created_at: String = row.get(1).map_err(store_err)?;
        let principle_ids: String = row.get(4).map_err(store_err)?;
        let assessment: String = row.get(5).map_err(store_err)?;

        Ok(Some(AuditRecord {
            audit_id: row.get(0).map_err(store_err)?,
            created_at: created_at
                .parse::<DateTime<Utc>>()
                .map_err(store_err)?,
            action: row.get(2).map_err(store_err)?,
            s_series_triggered: row.get::<_, i64>(3).map_err(store_err)? != 0,
            principle_ids: serde_json::from_str(&principle_ids)?,
            assessment: serde_json::from_str::<Assessment>(&assessment)?,
            modifications: row.get(6).map_err(store_err)?,
            escalation_reason: row.get(7).map_err(store_err)?,
        }))
    }

    /// Total number of audit entries.
    pub fn count(&self) -> CanonResult<usize> {
        let conn = self.conn.lock().expect("audit lock poisoned");
        conn.query_row("SELECT COUNT(*) FROM audit_log", [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|n| n as usize)
        .map_err(store_err)
    }
}
