use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// A student that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub dob: Date,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>, dob: Date) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            dob,
        }
    }

    /// Whole years between the date of birth and `today`.
    pub fn age_on(&self, today: Date) -> i32 {
        age_between(self.dob, today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub dob: Date,
}

impl Student {
    /// Assigns a fresh identity to an unsaved student.
    pub fn from_new(student: NewStudent) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: student.name,
            email: student.email,
            dob: student.dob,
        }
    }

    pub fn age_on(&self, today: Date) -> i32 {
        age_between(self.dob, today)
    }

    /// Age as of the current UTC date. Derived, never stored.
    pub fn age(&self) -> i32 {
        self.age_on(OffsetDateTime::now_utc().date())
    }
}

fn age_between(dob: Date, today: Date) -> i32 {
    let mut years = today.year() - dob.year();
    if (today.month() as u8, today.day()) < (dob.month() as u8, dob.day()) {
        years -= 1;
    }
    years
}
