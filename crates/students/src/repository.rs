//! The persistence boundary for students.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{NewStudent, Student};

/// Storage for student records.
#[async_trait]
pub trait StudentRepository: Send + Sync + Debug {
    /// Persists `students` in order, assigning each a durable identity.
    ///
    /// Either every student is stored or none is. The returned entities are
    /// in the same order as the input.
    async fn save_all(&self, students: Vec<NewStudent>) -> Result<Vec<Student>, StoreError>;

    /// Lists every stored student.
    async fn find_all(&self) -> Result<Vec<Student>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.find_all().await?.len())
    }
}

#[async_trait]
impl<R: StudentRepository + ?Sized> StudentRepository for std::sync::Arc<R> {
    async fn save_all(&self, students: Vec<NewStudent>) -> Result<Vec<Student>, StoreError> {
        (**self).save_all(students).await
    }

    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        (**self).find_all().await
    }

    async fn count(&self) -> Result<usize, StoreError> {
        (**self).count().await
    }
}
