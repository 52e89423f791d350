// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-10-11

//! Query seam for the SQL simulator modal.
//!
//! The interpreter never validates SQL itself. Query text goes straight to a
//! [`QueryEngine`]; the engine answers with result sets or an error message.
//! The bundled SQLite engine lives behind the `sqlite` feature.

#[cfg(feature = "sqlite")]
pub mod sqlite;

use std::fmt;

use thiserror::Error;

/// Schema and rows the simulator database starts with.
pub const SAMPLE_SCHEMA: &str = "
CREATE TABLE users (
  id INTEGER PRIMARY KEY,
  name TEXT,
  email TEXT
);
INSERT INTO users VALUES (1, 'Alice', 'alice@example.com');
INSERT INTO users VALUES (2, 'Bob', 'bob@example.com');
INSERT INTO users VALUES (3, 'Charlie', 'charlie@example.com');

CREATE TABLE orders (
  order_id INTEGER PRIMARY KEY,
  user_id INTEGER,
  product TEXT,
  amount REAL,
  FOREIGN KEY (user_id) REFERENCES users(id)
);
INSERT INTO orders VALUES (1, 1, 'Laptop', 999.99);
INSERT INTO orders VALUES (2, 1, 'Mouse', 29.99);
INSERT INTO orders VALUES (3, 2, 'Keyboard', 59.99);
";

#[derive(Debug, Error)]
pub enum SqlError {
    /// Message reported by the engine for a bad query.
    #[error("{0}")]
    Query(String),
    #[error("no SQL engine compiled in")]
    Unavailable,
}

/// One cell of a result set.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(n) => write!(f, "{}", n),
            SqlValue::Real(n) => write!(f, "{}", n),
            SqlValue::Text(s) => f.write_str(s),
            SqlValue::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// Column names plus row values for one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

/// Something that can run raw query text.
pub trait QueryEngine {
    /// Run every statement in `sql`. Only statements that produced rows
    /// contribute a result set.
    fn execute(&mut self, sql: &str) -> Result<Vec<ResultSet>, SqlError>;
}

/// Open an in-memory database seeded with [`SAMPLE_SCHEMA`].
pub fn open_sample_database() -> Result<Box<dyn QueryEngine>, SqlError> {
    #[cfg(feature = "sqlite")]
    {
        let engine = sqlite::SqliteEngine::open_in_memory()?;
        let mut engine: Box<dyn QueryEngine> = Box::new(engine);
        engine.execute(SAMPLE_SCHEMA)?;
        Ok(engine)
    }
    #[cfg(not(feature = "sqlite"))]
    {
        Err(SqlError::Unavailable)
    }
}
