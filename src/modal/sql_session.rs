// CLASSIFICATION: COMMUNITY
// Filename: sql_session.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-13

//! State of the SQL simulator modal.

use std::fmt;

use log::{info, warn};

use crate::sql::{self, QueryEngine, ResultSet};

pub const NOT_INITIALIZED: &str = "Database not initialized.";
pub const NO_RESULTS: &str = "No results to display.";

/// Outcome of the last query run.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Rows(Vec<ResultSet>),
    Error(String),
}

pub struct SqlSession {
    engine: Option<Box<dyn QueryEngine>>,
    init_error: Option<String>,
    pub query: String,
    outcome: Option<QueryOutcome>,
}

impl fmt::Debug for SqlSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlSession")
            .field("ready", &self.engine.is_some())
            .field("init_error", &self.init_error)
            .field("query", &self.query)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl SqlSession {
    /// Open a session over a freshly seeded sample database.
    pub fn open() -> Self {
        match sql::open_sample_database() {
            Ok(engine) => {
                info!("sql simulator database ready");
                Self::with_engine(engine)
            }
            Err(err) => {
                warn!("sql simulator database failed: {}", err);
                Self {
                    engine: None,
                    init_error: Some(format!("Failed to initialize database: {}", err)),
                    query: String::new(),
                    outcome: None,
                }
            }
        }
    }

    pub fn with_engine(engine: Box<dyn QueryEngine>) -> Self {
        Self {
            engine: Some(engine),
            init_error: None,
            query: String::new(),
            outcome: None,
        }
    }

    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    pub fn outcome(&self) -> Option<&QueryOutcome> {
        self.outcome.as_ref()
    }

    /// Run the pending query. Blank queries do nothing.
    pub fn run(&mut self) -> Option<&QueryOutcome> {
        if self.query.trim().is_empty() {
            return None;
        }
        let outcome = match self.engine.as_mut() {
            None => QueryOutcome::Error(NOT_INITIALIZED.to_string()),
            Some(engine) => match engine.execute(&self.query) {
                Ok(sets) => QueryOutcome::Rows(sets),
                Err(err) => QueryOutcome::Error(err.to_string()),
            },
        };
        self.outcome = Some(outcome);
        self.outcome.as_ref()
    }

    /// The first result set of the last query, if it produced any rows.
    pub fn first_result(&self) -> Option<&ResultSet> {
        match &self.outcome {
            Some(QueryOutcome::Rows(sets)) => sets.first(),
            _ => None,
        }
    }
}
