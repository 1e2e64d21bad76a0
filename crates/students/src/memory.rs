//! In-process student store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::{NewStudent, Student};
use crate::repository::StudentRepository;

/// Student repository backed by a vector, for tests and local runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<Vec<Student>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with [`StoreError::Unavailable`].
    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    async fn check_should_fail(&self) -> Result<(), StoreError> {
        if *self.should_fail.read().await {
            return Err(StoreError::Unavailable(
                "in-memory store configured to fail".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn save_all(&self, students: Vec<NewStudent>) -> Result<Vec<Student>, StoreError> {
        self.check_should_fail().await?;

        let saved: Vec<Student> = students.into_iter().map(Student::from_new).collect();
        self.students.write().await.extend(saved.iter().cloned());

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        self.check_should_fail().await?;
        Ok(self.students.read().await.clone())
    }
}
