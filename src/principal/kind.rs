use std::fmt::{Display, Formatter, Result as FmtResult};

/// The kind of identity a principal names. Each kind is written under its own key in the principal object.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PrincipalType {
    /// AWS accounts, IAM users and roles, and assumed-role sessions.
    Aws,

    /// Amazon S3 canonical user IDs.
    CanonicalUser,

    /// Web identity and SAML federation providers.
    Federated,

    /// AWS service principals, e.g. `lambda.amazonaws.com`.
    Service,
}

impl PrincipalType {
    pub const ALL: [PrincipalType; 4] = [Self::Aws, Self::CanonicalUser, Self::Federated, Self::Service];

    /// The key this type is written under.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::CanonicalUser => "CanonicalUser",
            Self::Federated => "Federated",
            Self::Service => "Service",
        }
    }
}

impl Display for PrincipalType {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use {crate::PrincipalType, pretty_assertions::assert_eq};

    #[test_log::test]
    fn test_labels() {
        let labels: Vec<String> = PrincipalType::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["AWS", "CanonicalUser", "Federated", "Service"]);
    }
}
