//! Seeding students into a repository.
//!
//! The [`Seeder`] turns literal records into students and hands them to a
//! [`students::StudentRepository`] in one bulk save.

mod seeder;

pub use seeder::{SeedError, Seeder};
