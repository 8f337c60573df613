//! Filter stage: per-column case-insensitive substring predicates

use super::record::{Field, FieldAccess};

/// Active search text for each column
///
/// An empty predicate matches every record. Predicates are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub name: String,
    pub gender: String,
    pub email: String,
}

impl FilterState {
    /// Predicate text for a column
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Email => &self.email,
        }
    }

    /// Replace the predicate text for a column
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Gender => &mut self.gender,
            Field::Email => &mut self.email,
        };
        *slot = text.into();
    }

    /// Whether a single record passes all three predicates
    pub fn matches<T: FieldAccess + ?Sized>(&self, record: &T) -> bool {
        Field::all()
            .iter()
            .all(|&field| contains_ignore_case(record.field(field), self.get(field)))
    }
}

/// Case-insensitive substring containment; an empty needle always matches
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keep the records that satisfy every predicate, preserving input order
pub fn filter<'a, T: FieldAccess>(records: &'a [T], predicates: &FilterState) -> Vec<&'a T> {
    records.iter().filter(|r| predicates.matches(*r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record::Record;
    use proptest::prelude::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("Alice", "female", "a@x"),
            Record::new("bob", "male", "b@x"),
            Record::new("Carl", "male", "c@x"),
        ]
    }

    #[test]
    fn empty_predicates_match_everything() {
        let records = sample();
        let out = filter(&records, &FilterState::default());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let records = sample();
        let mut predicates = FilterState::default();
        predicates.set(Field::Name, "A");

        let names: Vec<&str> = filter(&records, &predicates)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Carl"]);
    }

    #[test]
    fn predicates_are_anded() {
        let records = sample();
        let mut predicates = FilterState::default();
        predicates.set(Field::Name, "a");
        predicates.set(Field::Email, "c@");

        let out = filter(&records, &predicates);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Carl");
    }

    #[test]
    fn gender_substring_also_matches_female() {
        // "male" is a substring of "female"
        let records = sample();
        let mut predicates = FilterState::default();
        predicates.set(Field::Gender, "male");
        assert_eq!(filter(&records, &predicates).len(), 3);

        predicates.set(Field::Gender, "FEMALE");
        assert_eq!(filter(&records, &predicates).len(), 1);
    }

    #[test]
    fn no_match_yields_empty() {
        let records = sample();
        let mut predicates = FilterState::default();
        predicates.set(Field::Email, "nowhere");
        assert!(filter(&records, &predicates).is_empty());
    }

    fn record_strategy() -> impl Strategy<Value = Record> {
        ("[a-cA-C]{0,4}", "[a-cA-C]{0,4}", "[a-cA-C@]{0,4}")
            .prop_map(|(n, g, e)| Record::new(n, g, e))
    }

    proptest! {
        #[test]
        fn filter_is_sound_and_complete(
            records in prop::collection::vec(record_strategy(), 0..12),
            name in "[a-cA-C]{0,2}",
            gender in "[a-cA-C]{0,2}",
            email in "[a-cA-C@]{0,2}",
        ) {
            let predicates = FilterState { name, gender, email };
            let out = filter(&records, &predicates);

            let passes = |r: &Record| {
                Field::all().iter().all(|&f| {
                    r.field(f)
                        .to_lowercase()
                        .contains(&predicates.get(f).to_lowercase())
                })
            };

            for r in &out {
                prop_assert!(passes(*r));
            }
            let expected: Vec<&Record> = records.iter().filter(|r| passes(*r)).collect();
            prop_assert_eq!(expected, out);
        }
    }
}
