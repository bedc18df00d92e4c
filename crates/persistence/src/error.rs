// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleetflow_domain::DomainError;

/// Errors that can occur in the persistence layer.
#[derive(Debug)]
pub enum PersistenceError {
    /// The underlying database operation failed.
    Database(rusqlite::Error),
    /// A stored row could not be rehydrated into a domain entity.
    Corrupt {
        /// The table the row came from.
        table: &'static str,
        /// What failed to parse.
        message: String,
    },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(err) => write!(f, "Database error: {err}"),
            Self::Corrupt { table, message } => {
                write!(f, "Corrupt row in table '{table}': {message}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err)
    }
}

impl PersistenceError {
    /// Wraps a domain parse failure as a corrupt-row error.
    #[must_use]
    pub fn corrupt(table: &'static str, err: &DomainError) -> Self {
        Self::Corrupt {
            table,
            message: err.to_string(),
        }
    }
}
