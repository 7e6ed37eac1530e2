//! Entry records and the forms that create or change them

use std::fmt;

use serde::Deserialize;
use sqlx::FromRow;

use super::ValidationError;

/// Entry record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub text: String,
}

/// Primary key of an entry, parsed from form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryId(i64);

impl EntryId {
    /// Parse an id submitted as a form field.
    ///
    /// # Example
    /// ```
    /// use microblog_server::models::EntryId;
    ///
    /// assert_eq!(EntryId::parse("7").unwrap().get(), 7);
    /// assert!(EntryId::parse("seven").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "id" });
        }

        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "id",
                reason: "expected an integer",
            })
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated content of an entry, ready to be written.
///
/// Values are stored exactly as submitted; only blank input is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub category: String,
    pub text: String,
}

impl NewEntry {
    pub fn new(
        title: Option<String>,
        category: Option<String>,
        text: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title)?,
            category: required("category", category)?,
            text: required("text", text)?,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// POST /add form body
#[derive(Debug, Default, Deserialize)]
pub struct EntryForm {
    pub title: Option<String>,
    pub category: Option<String>,
    pub text: Option<String>,
}

impl EntryForm {
    pub fn validate(self) -> Result<NewEntry, ValidationError> {
        NewEntry::new(self.title, self.category, self.text)
    }
}

/// POST /update form body
#[derive(Debug, Default, Deserialize)]
pub struct UpdateForm {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub text: Option<String>,
}

impl UpdateForm {
    pub fn validate(self) -> Result<(EntryId, NewEntry), ValidationError> {
        let id = parse_id(self.id.as_deref())?;
        let entry = NewEntry::new(self.title, self.category, self.text)?;
        Ok((id, entry))
    }
}

/// POST /delete form body
#[derive(Debug, Default, Deserialize)]
pub struct IdForm {
    pub id: Option<String>,
}

impl IdForm {
    pub fn validate(self) -> Result<EntryId, ValidationError> {
        parse_id(self.id.as_deref())
    }
}

fn parse_id(id: Option<&str>) -> Result<EntryId, ValidationError> {
    EntryId::parse(id.ok_or(ValidationError::Missing { field: "id" })?)
}
