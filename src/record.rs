use std::fmt;

use serde::{Deserialize, Serialize};

/// Key type used to order records in a [`SearchTable`](crate::SearchTable).
pub type Key = i32;

/// Headers used when records are rendered as a table.
pub const COLUMN_NAMES: [&str; 4] = ["Key", "Name", "Sex", "Age"];

/// Student record stored in the table. Identity is determined by `key` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: Key,
    pub name: String,
    pub sex: String,
    pub age: i32,
}

impl Record {
    pub fn new(key: Key, name: impl Into<String>, sex: impl Into<String>, age: i32) -> Self {
        Self {
            key,
            name: name.into(),
            sex: sex.into(),
            age,
        }
    }

    /// Returns the record's fields as display strings, in [`COLUMN_NAMES`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.key.to_string(),
            self.name.clone(),
            self.sex.clone(),
            self.age.to_string(),
        ]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.key, self.name, self.sex, self.age)
    }
}

impl From<(Key, &str, &str, i32)> for Record {
    fn from((key, name, sex, age): (Key, &str, &str, i32)) -> Self {
        Record::new(key, name, sex, age)
    }
}
