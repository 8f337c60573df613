//! Record and row types shared by every stage of the view engine

use std::fmt;

/// A single user entry as delivered by the record source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub gender: String,
    pub email: String,
}

impl Record {
    pub fn new(name: impl Into<String>, gender: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: gender.into(),
            email: email.into(),
        }
    }
}

/// Stable row identity, assigned once at ingestion
///
/// Selection and manual moves are keyed by this id rather than by position,
/// so sorting or filtering never silently swaps which record is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record held by the view store together with its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    pub record: Record,
}

/// The three filterable/sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Gender,
    Email,
}

impl Field {
    /// All columns in display order
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Gender, Field::Email]
    }

    /// Column header text
    pub fn header(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Gender => "Gender",
            Field::Email => "Email",
        }
    }

    /// Parse a column name (case-insensitive), as accepted on the command line
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(Field::Name),
            "gender" => Some(Field::Gender),
            "email" => Some(Field::Email),
            _ => None,
        }
    }
}

/// Read access to a record's column text
///
/// Implemented for records, rows and references to either, so the filter and
/// sort stages work on whatever slice the caller already has.
pub trait FieldAccess {
    fn field(&self, field: Field) -> &str;
}

impl FieldAccess for Record {
    fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Email => &self.email,
        }
    }
}

impl FieldAccess for Row {
    fn field(&self, field: Field) -> &str {
        self.record.field(field)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, field: Field) -> &str {
        (**self).field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parse_is_case_insensitive() {
        assert_eq!(Field::parse("NAME"), Some(Field::Name));
        assert_eq!(Field::parse("Gender"), Some(Field::Gender));
        assert_eq!(Field::parse("email"), Some(Field::Email));
        assert_eq!(Field::parse("phone"), None);
    }

    #[test]
    fn field_access_through_references() {
        let row = Row {
            id: RowId(7),
            record: Record::new("Alice", "female", "a@x"),
        };
        let by_ref: &Row = &row;
        assert_eq!(by_ref.field(Field::Email), "a@x");
        assert_eq!((&by_ref).field(Field::Name), "Alice");
        assert_eq!(row.id.to_string(), "#7");
    }
}
