use {
    serde::Serialize,
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Whether a statement grants or refuses the actions it names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    /// The literal written to the `Effect` element.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use {crate::Effect, pretty_assertions::assert_eq};

    #[test_log::test]
    fn test_display() {
        assert_eq!(format!("{}", Effect::Allow), "Allow");
        assert_eq!(format!("{}", Effect::Deny), "Deny");
    }

    #[test_log::test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Effect::Allow).unwrap(), r#""Allow""#);
        assert_eq!(serde_json::to_string(&Effect::Deny).unwrap(), r#""Deny""#);
    }
}
