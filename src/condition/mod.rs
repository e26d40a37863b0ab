#[allow(non_upper_case_globals)]
pub mod op;

use {
    crate::{display_json, PolicyError},
    serde::{ser::Serializer, Serialize},
    std::collections::{btree_map::Iter, BTreeMap},
};

/// The keys and values registered under one condition operator.
pub type ConditionEntry = BTreeMap<String, Vec<String>>;

/// The `Condition` block of a statement: condition operator to [ConditionEntry].
///
/// Values are always written as arrays, even when there is only one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<String, ConditionEntry>,
}

display_json!(Condition);

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, operator: &str) -> Option<&ConditionEntry> {
        self.map.get(operator)
    }

    /// Register `entry` under `operator`, replacing and returning any previous entry.
    #[inline]
    pub fn insert<S: Into<String>>(&mut self, operator: S, entry: ConditionEntry) -> Option<ConditionEntry> {
        self.map.insert(operator.into(), entry)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, ConditionEntry> {
        self.map.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl<'a> IntoIterator for &'a Condition {
    type Item = (&'a String, &'a ConditionEntry);
    type IntoIter = Iter<'a, String, ConditionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

/// An ordered list of values for a single condition key.
///
/// ```
/// use iam_policy_dsl::ConditionValues;
///
/// let values = ConditionValues::from("us-east-1").or("us-west-2");
/// assert_eq!(values.as_slice(), &["us-east-1", "us-west-2"]);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionValues(Vec<String>);

impl ConditionValues {
    /// Append another value.
    #[must_use]
    pub fn or<S: Into<String>>(mut self, value: S) -> Self {
        self.0.push(value.into());
        self
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for ConditionValues {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for ConditionValues {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl<S: Into<String>> From<Vec<S>> for ConditionValues {
    fn from(values: Vec<S>) -> Self {
        values.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ConditionValues {
    fn from(values: [S; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ConditionValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Collects the keys for one condition operator.
#[derive(Clone, Debug, Default)]
pub struct ConditionEntryBuilder {
    entry: ConditionEntry,
}

impl ConditionEntryBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `key` with one or more values. Setting the same key again replaces its values.
    pub fn set<K, V>(&mut self, key: K, values: V) -> Result<&mut Self, PolicyError>
    where
        K: Into<String>,
        V: Into<ConditionValues>,
    {
        let key = key.into();
        let values = values.into();
        if values.is_empty() {
            return Err(PolicyError::InvalidCondition(format!("no values for key {}", key)));
        }

        self.entry.insert(key, values.into_vec());
        Ok(self)
    }

    pub fn build(&self) -> ConditionEntry {
        self.entry.clone()
    }
}
