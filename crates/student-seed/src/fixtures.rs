//! Literal student records used as seed data.

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::date;

use students::NewStudent;

use crate::db::SeedError;

/// One literal seed record.
///
/// Dates are written as `YYYY-MM-DD` when records come from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub email: String,
    pub dob: Date,
}

impl StudentRecord {
    pub fn new(name: &str, email: &str, dob: Date) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            dob,
        }
    }

    pub fn to_new_student(&self) -> NewStudent {
        NewStudent::new(self.name.clone(), self.email.clone(), self.dob)
    }
}

/// Mariam and Jonathan.
pub fn variant_a() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("Mariam", "mariam.jamal@gmail.com", date!(2000 - 01 - 15)),
        StudentRecord::new("Jonathan", "jon@gmail.com", date!(1994 - 03 - 23)),
    ]
}

/// Mariam and Alex.
///
/// Only the Mariam/Jonathan copy of the seed config survives. The Alex record
/// and both dates here are reconstructed from the student-demo config that copy
/// was derived from, not taken from a surviving source.
pub fn variant_b() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new("Mariam", "mariam.jamal@gmail.com", date!(2000 - 01 - 05)),
        StudentRecord::new("Alex", "alex@gmail.com", date!(2004 - 01 - 05)),
    ]
}

/// Reads a JSON array of records from `path`.
pub fn load_records(path: &Path) -> Result<Vec<StudentRecord>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| SeedError::FixtureFormat {
        path: path.to_path_buf(),
        source,
    })
}
