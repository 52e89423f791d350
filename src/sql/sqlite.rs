// CLASSIFICATION: COMMUNITY
// Filename: sqlite.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-11

//! SQLite-backed [`QueryEngine`].

use log::debug;
use rusqlite::types::ValueRef;
use rusqlite::{Batch, Connection};

use super::{QueryEngine, ResultSet, SqlError, SqlValue};

impl From<rusqlite::Error> for SqlError {
    fn from(err: rusqlite::Error) -> Self {
        SqlError::Query(err.to_string())
    }
}

fn to_value(v: ValueRef<'_>) -> SqlValue {
    match v {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(n) => SqlValue::Integer(n),
        ValueRef::Real(n) => SqlValue::Real(n),
        ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => SqlValue::Blob(b.to_vec()),
    }
}

pub struct SqliteEngine {
    conn: Connection,
}

impl SqliteEngine {
    pub fn open_in_memory() -> Result<Self, SqlError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}

impl QueryEngine for SqliteEngine {
    fn execute(&mut self, sql: &str) -> Result<Vec<ResultSet>, SqlError> {
        let mut sets = Vec::new();
        let mut batch = Batch::new(&self.conn, sql);
        while let Some(mut stmt) = batch.next()? {
            let width = stmt.column_count();
            if width == 0 {
                stmt.execute([])?;
                continue;
            }
            let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
            let mut rows = Vec::new();
            let mut cursor = stmt.query([])?;
            while let Some(row) = cursor.next()? {
                let mut values = Vec::with_capacity(width);
                for i in 0..width {
                    values.push(to_value(row.get_ref(i)?));
                }
                rows.push(values);
            }
            if !rows.is_empty() {
                sets.push(ResultSet { columns, rows });
            }
        }
        debug!("sql produced {} result set(s)", sets.len());
        Ok(sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::SAMPLE_SCHEMA;

    #[test]
    fn seeded_tables_answer_queries() {
        let mut engine = SqliteEngine::open_in_memory().unwrap();
        engine.execute(SAMPLE_SCHEMA).unwrap();
        let sets = engine
            .execute("SELECT product, amount FROM orders WHERE user_id = 1 ORDER BY order_id")
            .unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].columns, ["product", "amount"]);
        assert_eq!(
            sets[0].rows[1],
            [SqlValue::Text("Mouse".into()), SqlValue::Real(29.99)]
        );
    }

    #[test]
    fn empty_selects_yield_no_sets() {
        let mut engine = SqliteEngine::open_in_memory().unwrap();
        engine.execute(SAMPLE_SCHEMA).unwrap();
        assert!(engine.execute("SELECT * FROM users WHERE id = 99").unwrap().is_empty());
    }
}
