use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

/// One ordered segment of a cache key.
///
/// Params segments hold the canonical JSON text of a filter object, so two
/// structurally equal filters compare and hash equal no matter how the caller
/// assembled them. serde_json maps are sorted, which makes the text canonical.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySegment {
    Text(String),
    Id(Uuid),
    Day(NaiveDate),
    Params(String),
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySegment::Text(value) => write!(f, "{}", value),
            KeySegment::Id(value) => write!(f, "{}", value),
            KeySegment::Day(value) => write!(f, "{}", value),
            KeySegment::Params(value) => write!(f, "{}", value),
        }
    }
}

/// Ordered, hashable identifier for a cached query. The builder skips omitted
/// optional segments, so leaving a filter out and passing `None` explicitly
/// derive the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryKey {
    segments: Vec<KeySegment>,
}

impl QueryKey {
    /// Start a key under a scope tag, e.g. `"availability"`.
    pub fn scope(tag: &str) -> Self {
        Self {
            segments: vec![KeySegment::Text(tag.to_string())],
        }
    }

    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.segments.push(KeySegment::Text(value.into()));
        self
    }

    pub fn maybe_text(self, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.text(value),
            None => self,
        }
    }

    pub fn id(mut self, value: Uuid) -> Self {
        self.segments.push(KeySegment::Id(value));
        self
    }

    pub fn maybe_id(self, value: Option<Uuid>) -> Self {
        match value {
            Some(value) => self.id(value),
            None => self,
        }
    }

    pub fn day(mut self, value: NaiveDate) -> Self {
        self.segments.push(KeySegment::Day(value));
        self
    }

    /// Append a filter-object segment. Null and empty objects behave like an
    /// omitted filter so they never produce a distinct key.
    pub fn params(mut self, value: &Value) -> Self {
        match value {
            Value::Null => self,
            Value::Object(map) if map.is_empty() => self,
            other => {
                self.segments.push(KeySegment::Params(other.to_string()));
                self
            }
        }
    }

    pub fn maybe_params(self, value: Option<&Value>) -> Self {
        match value {
            Some(value) => self.params(value),
            None => self,
        }
    }

    pub fn segments(&self) -> &[KeySegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when `prefix` is a leading subsequence of this key. Scoped
    /// invalidation matches on this.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        prefix.segments.len() <= self.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Filters {
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
    }

    #[test]
    fn identical_inputs_derive_equal_keys() {
        let id = Uuid::new_v4();
        let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let a = QueryKey::scope("availability").id(id).day(day);
        let b = QueryKey::scope("availability").id(id).day(day);

        assert_eq!(a, b);
    }

    #[test]
    fn one_differing_filter_value_derives_unequal_keys() {
        let id = Uuid::new_v4();
        let a = QueryKey::scope("appointments")
            .id(id)
            .params(&json!({ "search": "anxiety", "page": 1 }));
        let b = QueryKey::scope("appointments")
            .id(id)
            .params(&json!({ "search": "anxiety", "page": 2 }));

        assert_ne!(a, b);
    }

    #[test]
    fn omitted_and_explicit_none_segments_are_identical() {
        let with_none = QueryKey::scope("appointments").maybe_id(None).text("list");
        let omitted = QueryKey::scope("appointments").text("list");

        assert_eq!(with_none, omitted);
    }

    #[test]
    fn skipped_optional_filter_fields_do_not_change_the_key() {
        let empty = serde_json::to_value(Filters { search: None, page: None }).unwrap();
        let absent = QueryKey::scope("forms").text("drafts");
        let with_empty = QueryKey::scope("forms").text("drafts").params(&empty);

        assert_eq!(absent, with_empty);
    }

    #[test]
    fn params_equality_is_structural() {
        let from_struct = serde_json::to_value(Filters {
            search: Some("cbt".to_string()),
            page: Some(3),
        })
        .unwrap();
        let from_literal = json!({ "page": 3, "search": "cbt" });

        let a = QueryKey::scope("forms").params(&from_struct);
        let b = QueryKey::scope("forms").params(&from_literal);

        assert_eq!(a, b);
    }

    #[test]
    fn prefix_matching_scopes_narrowly() {
        let practitioner = Uuid::new_v4();
        let other = Uuid::new_v4();
        let day = NaiveDate::from_ymd_opt(2024, 2, 12).unwrap();

        let scope = QueryKey::scope("availability").id(practitioner);
        let slots = QueryKey::scope("availability").id(practitioner).day(day);
        let unrelated = QueryKey::scope("availability").id(other).day(day);

        assert!(slots.starts_with(&scope));
        assert!(!unrelated.starts_with(&scope));
        assert!(!scope.starts_with(&slots));
    }
}
