use {
    derive_builder::UninitializedFieldError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Errors raised while constructing a policy document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PolicyError {
    /// A statement was built without an effect.
    MissingEffect,

    /// A statement was built without any actions.
    MissingAction,

    /// A principal was built without a type being set.
    MissingPrincipal,

    /// `Action` and `NotAction` were both given values.
    ConflictingAction,

    /// `Resource` and `NotResource` were both given values.
    ConflictingResource,

    /// `Principal` was set after `NotPrincipal`, or the other way around.
    ConflictingPrincipal,

    /// The effect of a statement was set more than once.
    DuplicateEffect,

    /// The principal of a statement was set more than once.
    DuplicatePrincipal,

    /// A principal was malformed, e.g. had more than one type.
    InvalidPrincipal(String),

    /// A condition key was given no values.
    InvalidCondition(String),

    /// A policy was built with no statements.
    EmptyStatementList,

    /// A builder field with no dedicated error was never set.
    UninitializedField(&'static str),
}

impl Display for PolicyError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::MissingEffect => f.write_str("Statement must specify an Effect"),
            Self::MissingAction => f.write_str("Statement must contain at least one Action or NotAction"),
            Self::MissingPrincipal => f.write_str("No principal specified"),
            Self::ConflictingAction => f.write_str("Statement can only specify one of Action or NotAction"),
            Self::ConflictingResource => f.write_str("Statement can only specify one of Resource or NotResource"),
            Self::ConflictingPrincipal => f.write_str("Statement can only specify one of Principal or NotPrincipal"),
            Self::DuplicateEffect => f.write_str("Statement can only specify one Effect"),
            Self::DuplicatePrincipal => f.write_str("Statement can only specify one Principal"),
            Self::InvalidPrincipal(reason) => write!(f, "Invalid principal: {}", reason),
            Self::InvalidCondition(reason) => write!(f, "Invalid condition: {}", reason),
            Self::EmptyStatementList => f.write_str("Policy must contain at least one Statement"),
            Self::UninitializedField(field) => write!(f, "Field not initialized: {}", field),
        }
    }
}

impl Error for PolicyError {}

impl From<UninitializedFieldError> for PolicyError {
    fn from(e: UninitializedFieldError) -> Self {
        match e.field_name() {
            "effect" => Self::MissingEffect,
            "action" => Self::MissingAction,
            "principal_type" | "values" => Self::MissingPrincipal,
            "statement" => Self::EmptyStatementList,
            other => Self::UninitializedField(other),
        }
    }
}
