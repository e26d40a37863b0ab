use crate::{PolicyError, Principal};

/// A statement element that IAM spells two ways: `X` or `NotX`.
///
/// The value lives in a single slot and the flag records which spelling it is written under, so the two spellings
/// can never both be populated.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NegatableElement<T> {
    value: T,
    negated: bool,
}

pub type ActionElement = NegatableElement<Vec<String>>;
pub type ResourceElement = NegatableElement<Vec<String>>;
pub type PrincipalElement = NegatableElement<Principal>;

impl<T> NegatableElement<T> {
    #[inline]
    pub fn new(value: T, negated: bool) -> Self {
        Self {
            value,
            negated,
        }
    }

    #[inline]
    pub fn positive(value: T) -> Self {
        Self::new(value, false)
    }

    #[inline]
    pub fn negated(value: T) -> Self {
        Self::new(value, true)
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Pick the JSON field name for this element.
    #[inline]
    pub(crate) fn field_name(&self, name: &'static str, negated_name: &'static str) -> &'static str {
        if self.negated {
            negated_name
        } else {
            name
        }
    }
}

impl NegatableElement<Vec<String>> {
    /// Append `values` to a list slot under the given polarity.
    ///
    /// Fails with `conflict` if the slot already holds values of the other polarity. An empty `values` never creates
    /// the slot, so a populated slot is never empty.
    pub(crate) fn accumulate<I, S>(
        slot: &mut Option<Self>,
        negated: bool,
        values: I,
        conflict: PolicyError,
    ) -> Result<(), PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(existing) = slot {
            if existing.negated != negated && !existing.value.is_empty() {
                return Err(conflict);
            }
        }

        let values = values.into_iter().map(Into::into);
        match slot {
            Some(existing) => existing.value.extend(values),
            None => {
                let values: Vec<String> = values.collect();
                if !values.is_empty() {
                    *slot = Some(Self::new(values, negated));
                }
            }
        }

        Ok(())
    }
}
