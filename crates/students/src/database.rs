use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{NewStudent, Student};
use crate::repository::StudentRepository;

/// Opens a connection pool to the student database.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn save_all(&self, students: Vec<NewStudent>) -> Result<Vec<Student>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut saved = Vec::with_capacity(students.len());

        for student in students {
            let student = Student::from_new(student);

            sqlx::query(
                r#"
                INSERT INTO students (id, name, email, dob, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                "#,
            )
            .bind(student.id)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.dob)
            .execute(&mut *tx)
            .await?;

            saved.push(student);
        }

        // Dropping `tx` on an early return rolls the whole batch back.
        tx.commit().await?;
        debug!("Inserted {} students", saved.len());

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Student>, StoreError> {
        let students: Vec<Student> = sqlx::query_as(
            r#"
            SELECT id, name, email, dob
            FROM students
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }
}
