use {
    crate::{
        display_json, serutil::StringList, ActionElement, Condition, ConditionEntryBuilder, Effect, NegatableElement,
        PolicyError, PrincipalBuilder, PrincipalElement, ResourceElement,
    },
    derive_builder::Builder,
    log::debug,
    serde::{
        ser::{SerializeMap, Serializer},
        Serialize,
    },
};

/// A single rule within a policy.
///
/// Statements are created through [StatementBuilder], usually by way of
/// [PolicyBuilder::statement](crate::PolicyBuilder::statement), and are immutable once built.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(build_fn(validate = "Self::validate", error = "PolicyError"), derive(Debug))]
pub struct Statement {
    #[builder(setter(into, strip_option), default)]
    sid: Option<String>,

    #[builder(setter(custom))]
    effect: Effect,

    #[builder(setter(custom))]
    action: ActionElement,

    #[builder(setter(custom), default)]
    resource: Option<ResourceElement>,

    #[builder(setter(custom), default)]
    principal: Option<PrincipalElement>,

    #[builder(setter(custom), default)]
    condition: Condition,
}

impl Statement {
    #[inline]
    pub fn builder() -> StatementBuilder {
        StatementBuilder::default()
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// The `Action` or `NotAction` list. Never empty.
    #[inline]
    pub fn action(&self) -> &ActionElement {
        &self.action
    }

    #[inline]
    pub fn resource(&self) -> Option<&ResourceElement> {
        self.resource.as_ref()
    }

    #[inline]
    pub fn principal(&self) -> Option<&PrincipalElement> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn condition(&self) -> Option<&Condition> {
        if self.condition.is_empty() {
            None
        } else {
            Some(&self.condition)
        }
    }

    /// Render the statement as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

display_json!(Statement);

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        if let Some(sid) = &self.sid {
            state.serialize_entry("Sid", sid)?;
        }
        state.serialize_entry("Effect", &self.effect)?;
        if let Some(principal) = &self.principal {
            state.serialize_entry(principal.field_name("Principal", "NotPrincipal"), principal.value())?;
        }
        state.serialize_entry(self.action.field_name("Action", "NotAction"), &StringList(self.action.value()))?;
        if let Some(resource) = &self.resource {
            state.serialize_entry(resource.field_name("Resource", "NotResource"), &StringList(resource.value()))?;
        }
        if !self.condition.is_empty() {
            state.serialize_entry("Condition", &self.condition)?;
        }
        state.end()
    }
}

impl StatementBuilder {
    /// Set the effect. May only be called once.
    pub fn effect(&mut self, effect: Effect) -> Result<&mut Self, PolicyError> {
        if let Some(existing) = self.effect {
            debug!("Effect already set to {}; rejecting {}", existing, effect);
            return Err(PolicyError::DuplicateEffect);
        }

        self.effect = Some(effect);
        Ok(self)
    }

    /// Add actions to the `Action` list. Repeated calls append.
    pub fn action<I, S>(&mut self, actions: I) -> Result<&mut Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ActionElement::accumulate(&mut self.action, false, actions, PolicyError::ConflictingAction)?;
        Ok(self)
    }

    /// Add actions to the `NotAction` list. Repeated calls append.
    pub fn not_action<I, S>(&mut self, actions: I) -> Result<&mut Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ActionElement::accumulate(&mut self.action, true, actions, PolicyError::ConflictingAction)?;
        Ok(self)
    }

    /// Add resources to the `Resource` list. Repeated calls append.
    pub fn resource<I, S>(&mut self, resources: I) -> Result<&mut Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResourceElement::accumulate(
            self.resource.get_or_insert(None),
            false,
            resources,
            PolicyError::ConflictingResource,
        )?;
        Ok(self)
    }

    /// Add resources to the `NotResource` list. Repeated calls append.
    pub fn not_resource<I, S>(&mut self, resources: I) -> Result<&mut Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ResourceElement::accumulate(
            self.resource.get_or_insert(None),
            true,
            resources,
            PolicyError::ConflictingResource,
        )?;
        Ok(self)
    }

    /// Set the `Principal` from a principal builder block. Only one of `principal` or `not_principal` may be called,
    /// and only once.
    pub fn principal<F>(&mut self, f: F) -> Result<&mut Self, PolicyError>
    where
        F: FnOnce(&mut PrincipalBuilder) -> Result<&mut PrincipalBuilder, PolicyError>,
    {
        self.set_principal(false, f)
    }

    /// Set the `NotPrincipal` from a principal builder block.
    pub fn not_principal<F>(&mut self, f: F) -> Result<&mut Self, PolicyError>
    where
        F: FnOnce(&mut PrincipalBuilder) -> Result<&mut PrincipalBuilder, PolicyError>,
    {
        self.set_principal(true, f)
    }

    fn set_principal<F>(&mut self, negated: bool, f: F) -> Result<&mut Self, PolicyError>
    where
        F: FnOnce(&mut PrincipalBuilder) -> Result<&mut PrincipalBuilder, PolicyError>,
    {
        if let Some(Some(existing)) = &self.principal {
            debug!(
                "Principal already set (negated = {}); rejecting another (negated = {})",
                existing.is_negated(),
                negated
            );
            return Err(if existing.is_negated() == negated {
                PolicyError::DuplicatePrincipal
            } else {
                PolicyError::ConflictingPrincipal
            });
        }

        let mut builder = PrincipalBuilder::default();
        f(&mut builder)?;
        let principal = builder.build()?;
        self.principal = Some(Some(NegatableElement::new(principal, negated)));
        Ok(self)
    }

    /// Register a condition block under `operator`. A later block for the same operator replaces the earlier one.
    pub fn condition<O, F>(&mut self, operator: O, f: F) -> Result<&mut Self, PolicyError>
    where
        O: Into<String>,
        F: FnOnce(&mut ConditionEntryBuilder) -> Result<&mut ConditionEntryBuilder, PolicyError>,
    {
        let mut builder = ConditionEntryBuilder::new();
        f(&mut builder)?;
        self.condition.get_or_insert_with(Condition::new).insert(operator, builder.build());
        Ok(self)
    }

    fn validate(&self) -> Result<(), PolicyError> {
        if self.action.is_none() {
            debug!("Statement {:?} has no Action or NotAction", self.sid);
            return Err(PolicyError::MissingAction);
        }

        if self.effect.is_none() {
            debug!("Statement {:?} has no Effect", self.sid);
            return Err(PolicyError::MissingEffect);
        }

        Ok(())
    }
}
