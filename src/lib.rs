//! Declarative construction of AWS IAM policy documents.
//!
//! Policies are assembled through builders and validated when each builder is finished. The resulting values are
//! immutable and render to the JSON shape IAM expects: `Action`, `Resource` and principal identifiers collapse to a
//! bare string when they hold one value, and negated elements are written under their `Not` names.
#![warn(clippy::all)]
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod negatable;
pub(crate) mod policy;
pub(crate) mod principal;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub use {
    condition::{op as condop, Condition, ConditionEntry, ConditionEntryBuilder, ConditionValues},
    effect::Effect,
    error::PolicyError,
    negatable::{ActionElement, NegatableElement, PrincipalElement, ResourceElement},
    policy::{policy, policy_with_version, Policy, PolicyBuilder, DEFAULT_POLICY_VERSION},
    principal::{Principal, PrincipalBuilder, PrincipalType},
    statement::{Statement, StatementBuilder},
};
