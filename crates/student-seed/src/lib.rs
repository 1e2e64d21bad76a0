//! Startup seed data for the student registry.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use student_seed::prelude::*;
//!
//! let repository = PgStudentRepository::new(pool);
//!
//! Seeder::new(repository)
//!     .with_variant(SeedVariant::B)
//!     .seed()
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub use students::{NewStudent, Student, StudentRepository};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{SeedConfig, SeedSource, SeedVariant};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::fixtures::StudentRecord;
    pub use crate::{NewStudent, Student, StudentRepository};
    pub use students::database::PgStudentRepository;
    pub use students::memory::InMemoryStudentRepository;
}
