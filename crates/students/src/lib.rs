//! Student records and the repositories that persist them.
//!
//! [`StudentRepository`] is the boundary the rest of the registry talks to.
//! [`database::PgStudentRepository`] stores students in Postgres and
//! [`memory::InMemoryStudentRepository`] keeps them in process.

pub mod database;
pub mod errors;
pub mod memory;
pub mod models;
pub mod repository;

pub use errors::StoreError;
pub use models::{NewStudent, Student};
pub use repository::StudentRepository;
