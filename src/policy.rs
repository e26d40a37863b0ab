use {
    crate::{display_json, PolicyError, Statement, StatementBuilder},
    derive_builder::Builder,
    log::{debug, trace},
    serde::{
        ser::{SerializeMap, Serializer},
        Serialize,
    },
};

/// The IAM policy language version written when none is given.
pub const DEFAULT_POLICY_VERSION: &str = "2012-10-17";

/// The top-level structure for holding an IAM policy document.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(build_fn(validate = "Self::validate", error = "PolicyError"), derive(Debug))]
pub struct Policy {
    /// The policy language version. Defaults to [DEFAULT_POLICY_VERSION].
    #[builder(setter(into), default = "DEFAULT_POLICY_VERSION.to_string()")]
    version: String,

    /// An optional identifier for the policy. Some services may require this element and have uniqueness requirements.
    #[builder(setter(into, strip_option), default)]
    id: Option<String>,

    /// One or more statements, in the order they were added. Always written as a JSON array.
    #[builder(setter(custom))]
    statement: Vec<Statement>,
}

impl Policy {
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    #[inline]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn statement(&self) -> &[Statement] {
        &self.statement
    }

    /// Render the policy as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

display_json!(Policy);

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        state.serialize_entry("Version", &self.version)?;
        if let Some(id) = &self.id {
            state.serialize_entry("Id", id)?;
        }
        state.serialize_entry("Statement", &self.statement)?;
        state.end()
    }
}

impl PolicyBuilder {
    /// Build a statement with the given `sid` from a statement builder block and append it.
    ///
    /// Sids are not checked for uniqueness.
    pub fn statement<S, F>(&mut self, sid: S, f: F) -> Result<&mut Self, PolicyError>
    where
        S: Into<String>,
        F: FnOnce(&mut StatementBuilder) -> Result<&mut StatementBuilder, PolicyError>,
    {
        let mut builder = Statement::builder();
        builder.sid(sid);
        f(&mut builder)?;
        let statement = builder.build()?;
        Ok(self.add_statement(statement))
    }

    /// Append an already-built statement.
    pub fn add_statement(&mut self, statement: Statement) -> &mut Self {
        self.statement.get_or_insert_with(Vec::new).push(statement);
        self
    }

    fn validate(&self) -> Result<(), PolicyError> {
        match &self.statement {
            Some(statements) if !statements.is_empty() => Ok(()),
            _ => {
                debug!("Policy has no statements");
                Err(PolicyError::EmptyStatementList)
            }
        }
    }
}

/// Build a policy with the default version from a policy builder block.
///
/// ```
/// use iam_policy_dsl::{condop, policy, Effect};
///
/// let policy = policy(|p| {
///     p.statement("EC2FullAccess", |s| s.effect(Effect::Allow)?.action(["ec2:*"])?.resource(["*"]))?
///         .statement("S3ProdAccess", |s| {
///             s.effect(Effect::Allow)?
///                 .action(["s3:ListObjects"])?
///                 .action(["s3:GetObject"])?
///                 .resource(["arn:aws:s3:::prod-bucket"])?
///                 .condition(condop::Bool, |c| c.set("aws:SecureTransport", "true"))
///         })
/// })
/// .unwrap();
///
/// assert_eq!(policy.version(), "2012-10-17");
/// assert_eq!(policy.statement().len(), 2);
/// ```
pub fn policy<F>(f: F) -> Result<Policy, PolicyError>
where
    F: FnOnce(&mut PolicyBuilder) -> Result<&mut PolicyBuilder, PolicyError>,
{
    policy_with_version(DEFAULT_POLICY_VERSION, f)
}

/// Build a policy with an explicit version from a policy builder block.
pub fn policy_with_version<V, F>(version: V, f: F) -> Result<Policy, PolicyError>
where
    V: Into<String>,
    F: FnOnce(&mut PolicyBuilder) -> Result<&mut PolicyBuilder, PolicyError>,
{
    let mut builder = Policy::builder();
    builder.version(version);
    f(&mut builder)?;
    let policy = builder.build()?;
    trace!("Built policy version {} with {} statement(s)", policy.version, policy.statement.len());
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use {
        crate::{condition::op, policy, policy_with_version, Effect, Policy, PolicyError, Statement},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_default_version() {
        let p = policy(|p| p.statement("sid", |s| s.effect(Effect::Allow)?.action(["action"]))).unwrap();
        assert_eq!(p.version(), "2012-10-17");
        assert_eq!(p.id(), None);
        assert_eq!(
            p.to_json().unwrap(),
            r#"{"Version":"2012-10-17","Statement":[{"Sid":"sid","Effect":"Allow","Action":"action"}]}"#
        );
    }

    #[test_log::test]
    fn test_explicit_version() {
        let p = policy_with_version("2008-10-17", |p| p.statement("sid", |s| s.effect(Effect::Deny)?.action(["*"])))
            .unwrap();
        assert_eq!(p.version(), "2008-10-17");
        assert_eq!(
            p.to_json().unwrap(),
            r#"{"Version":"2008-10-17","Statement":[{"Sid":"sid","Effect":"Deny","Action":"*"}]}"#
        );
    }

    #[test_log::test]
    fn test_no_statements() {
        assert_eq!(policy(|p| Ok(p)).unwrap_err(), PolicyError::EmptyStatementList);
        assert_eq!(Policy::builder().build().unwrap_err(), PolicyError::EmptyStatementList);
    }

    #[test_log::test]
    fn test_statement_error_propagates() {
        let err = policy(|p| p.statement("sid", |s| s.effect(Effect::Allow))).unwrap_err();
        assert_eq!(err, PolicyError::MissingAction);

        let err = policy(|p| {
            p.statement("ok", |s| s.effect(Effect::Allow)?.action(["a"]))?
                .statement("bad", |s| s.action(["a"])?.not_action(["b"]))
        })
        .unwrap_err();
        assert_eq!(err, PolicyError::ConflictingAction);
    }

    #[test_log::test]
    fn test_duplicate_sids_kept_in_order() {
        let p = policy(|p| {
            p.statement("same", |s| s.effect(Effect::Allow)?.action(["first"]))?
                .statement("same", |s| s.effect(Effect::Deny)?.action(["second"]))
        })
        .unwrap();

        let statements = p.statement();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].sid(), Some("same"));
        assert_eq!(statements[0].action().value(), &["first"]);
        assert_eq!(statements[1].effect(), Effect::Deny);
    }

    #[test_log::test]
    fn test_builder_with_id_and_added_statement() {
        let anonymous =
            Statement::builder().effect(Effect::Deny).unwrap().not_action(["iam:*"]).unwrap().build().unwrap();
        let p = Policy::builder()
            .id("PolicyId")
            .statement("sid", |s| s.effect(Effect::Allow)?.action(["s3:GetObject"])?.resource(["*"]))
            .unwrap()
            .add_statement(anonymous)
            .build()
            .unwrap();

        assert_eq!(p.id(), Some("PolicyId"));
        assert_eq!(
            p.to_json().unwrap(),
            concat!(
                r#"{"Version":"2012-10-17","Id":"PolicyId","Statement":["#,
                r#"{"Sid":"sid","Effect":"Allow","Action":"s3:GetObject","Resource":"*"},"#,
                r#"{"Effect":"Deny","NotAction":"iam:*"}]}"#
            )
        );
    }

    #[test_log::test]
    fn test_display() {
        let p = policy(|p| {
            p.statement("1", |s| {
                s.effect(Effect::Allow)?
                    .action(["ec2:Get*", "ecs:*"])?
                    .resource(["*"])?
                    .principal(|p| p.aws(["123456789012"]))?
                    .condition(op::StringEquals, |c| c.set("ec2:Region", ["us-west-2", "us-east-1"]))
            })?
            .statement("2", |s| {
                s.effect(Effect::Deny)?
                    .action(["*"])?
                    .not_resource(["arn:aws:s3:::my-bucket", "arn:aws:s3:::my-bucket/*"])?
                    .not_principal(|p| p.service(["s3.amazonaws.com"]))
            })
        })
        .unwrap();

        let expected = indoc! { r#"
        {
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Sid": "1",
                    "Effect": "Allow",
                    "Principal": {
                        "AWS": "123456789012"
                    },
                    "Action": [
                        "ec2:Get*",
                        "ecs:*"
                    ],
                    "Resource": "*",
                    "Condition": {
                        "StringEquals": {
                            "ec2:Region": [
                                "us-west-2",
                                "us-east-1"
                            ]
                        }
                    }
                },
                {
                    "Sid": "2",
                    "Effect": "Deny",
                    "NotPrincipal": {
                        "Service": "s3.amazonaws.com"
                    },
                    "Action": "*",
                    "NotResource": [
                        "arn:aws:s3:::my-bucket",
                        "arn:aws:s3:::my-bucket/*"
                    ]
                }
            ]
        }"# };
        assert_eq!(p.to_string(), expected);
        assert_eq!(p.to_string(), p.clone().to_string());
    }

    #[test_log::test]
    fn test_built_policy_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Policy>();
        assert_send_sync::<Statement>();
    }
}
