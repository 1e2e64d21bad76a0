//! The startup seed runner.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use students::{NewStudent, StoreError, StudentRepository};

use crate::config::SeedVariant;
use crate::fixtures::StudentRecord;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Fixture {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid seed file {}: {source}", .path.display())]
    FixtureFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Seeds literal student records into a repository.
pub struct Seeder<R> {
    repository: R,
    records: Vec<StudentRecord>,
}

impl<R: StudentRepository> Seeder<R> {
    /// Creates a seeder for the default record set.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            records: SeedVariant::default().records(),
        }
    }

    pub fn with_variant(mut self, variant: SeedVariant) -> Self {
        self.records = variant.records();
        self
    }

    pub fn with_records(mut self, records: Vec<StudentRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Hands every record to the repository in a single `save_all` call.
    ///
    /// The saved entities are not read back. Store failures are returned as-is.
    pub async fn seed(&self) -> Result<(), SeedError> {
        let students: Vec<NewStudent> = self
            .records
            .iter()
            .map(StudentRecord::to_new_student)
            .collect();

        info!("Seeding {} students...", students.len());

        let saved = self.repository.save_all(students).await?;

        info!("Seeded {} students", saved.len());
        Ok(())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use students::Student;
    use students::memory::InMemoryStudentRepository;
    use time::macros::date;

    use crate::fixtures;

    /// Records every call instead of storing anything.
    #[derive(Debug, Default, Clone)]
    struct RecordingRepository {
        save_calls: Arc<Mutex<Vec<Vec<NewStudent>>>>,
        find_calls: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl StudentRepository for RecordingRepository {
        async fn save_all(&self, students: Vec<NewStudent>) -> Result<Vec<Student>, StoreError> {
            self.save_calls.lock().unwrap().push(students.clone());
            Ok(students.into_iter().map(Student::from_new).collect())
        }

        async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
            *self.find_calls.lock().unwrap() += 1;
            Ok(Vec::new())
        }
    }

    fn expected(records: Vec<StudentRecord>) -> Vec<NewStudent> {
        records.iter().map(StudentRecord::to_new_student).collect()
    }

    #[tokio::test]
    async fn test_variant_a_single_save() {
        let repo = RecordingRepository::default();

        Seeder::new(repo.clone()).seed().await.unwrap();

        let calls = repo.save_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![
                NewStudent::new("Mariam", "mariam.jamal@gmail.com", date!(2000 - 01 - 15)),
                NewStudent::new("Jonathan", "jon@gmail.com", date!(1994 - 03 - 23)),
            ]
        );
        assert_eq!(*repo.find_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_variant_b_single_save() {
        let repo = RecordingRepository::default();

        Seeder::new(repo.clone())
            .with_variant(SeedVariant::B)
            .seed()
            .await
            .unwrap();

        let calls = repo.save_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], expected(fixtures::variant_b()));
        assert_eq!(*repo.find_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_custom_records() {
        let repo = RecordingRepository::default();
        let records = vec![StudentRecord::new("Ada", "ada@example.com", date!(1815 - 12 - 10))];

        Seeder::new(repo.clone())
            .with_records(records.clone())
            .seed()
            .await
            .unwrap();

        let calls = repo.save_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], expected(records));
    }

    #[tokio::test]
    async fn test_each_run_saves_once() {
        let repo = RecordingRepository::default();
        let seeder = Seeder::new(repo.clone());

        seeder.seed().await.unwrap();
        seeder.seed().await.unwrap();

        assert_eq!(seeder.records(), fixtures::variant_a().as_slice());
        assert_eq!(repo.save_calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let repo = InMemoryStudentRepository::new();
        repo.set_should_fail(true).await;

        let err = Seeder::new(repo).seed().await.unwrap_err();

        assert!(matches!(err, SeedError::Store(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_seed_into_memory_store() {
        let seeder = Seeder::new(Arc::new(InMemoryStudentRepository::new()));
        seeder.seed().await.unwrap();

        let stored = seeder.repository().find_all().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].email, "mariam.jamal@gmail.com");
        assert_eq!(stored[1].email, "jon@gmail.com");
    }
}
