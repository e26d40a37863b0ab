mod kind;

pub use kind::PrincipalType;

use {
    crate::{display_json, serutil::StringList, PolicyError},
    derive_builder::Builder,
    log::debug,
    serde::{
        ser::{SerializeMap, Serializer},
        Serialize,
    },
};

/// The identity a statement applies to: one principal type and one or more identifiers of that type.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(build_fn(validate = "Self::validate", error = "PolicyError"), derive(Debug))]
pub struct Principal {
    #[builder(setter(custom))]
    principal_type: PrincipalType,

    #[builder(setter(custom))]
    values: Vec<String>,
}

impl Principal {
    #[inline]
    pub fn builder() -> PrincipalBuilder {
        PrincipalBuilder::default()
    }

    #[inline]
    pub fn principal_type(&self) -> PrincipalType {
        self.principal_type
    }

    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Render the principal as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

display_json!(Principal);

impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(1))?;
        state.serialize_entry(self.principal_type.label(), &StringList(&self.values))?;
        state.end()
    }
}

impl PrincipalBuilder {
    /// Set AWS account, user or role identifiers.
    pub fn aws<I, S>(&mut self, values: I) -> Result<&mut Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(PrincipalType::Aws, values.into_iter().map(Into::into).collect())
    }

    /// Set a single S3 canonical user ID.
    pub fn canonical_user<S: Into<String>>(&mut self, value: S) -> Result<&mut Self, PolicyError> {
        self.set(PrincipalType::CanonicalUser, vec![value.into()])
    }

    /// Set a single federation provider.
    pub fn federated<S: Into<String>>(&mut self, value: S) -> Result<&mut Self, PolicyError> {
        self.set(PrincipalType::Federated, vec![value.into()])
    }

    /// Set AWS service principals.
    pub fn service<I, S>(&mut self, values: I) -> Result<&mut Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(PrincipalType::Service, values.into_iter().map(Into::into).collect())
    }

    fn set(&mut self, principal_type: PrincipalType, values: Vec<String>) -> Result<&mut Self, PolicyError> {
        if let Some(existing) = self.principal_type {
            debug!("Principal type {} already set; rejecting {}", existing, principal_type);
            return Err(PolicyError::InvalidPrincipal("multiple types specified".to_string()));
        }

        if values.is_empty() {
            return Err(PolicyError::InvalidPrincipal(format!("no {} identifiers specified", principal_type)));
        }

        self.principal_type = Some(principal_type);
        self.values = Some(values);
        Ok(self)
    }

    fn validate(&self) -> Result<(), PolicyError> {
        match self.principal_type {
            Some(_) => Ok(()),
            None => Err(PolicyError::MissingPrincipal),
        }
    }
}
