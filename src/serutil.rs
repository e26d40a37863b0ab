use serde::{ser::Serializer, Serialize};

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let buf = Vec::new();
                let serde_formatter = ::serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = ::serde_json::Serializer::with_formatter(buf, serde_formatter);
                if let Err(e) = ::serde::Serialize::serialize(self, &mut ser) {
                    ::log::error!("Failed to serialize {}: {}", stringify!($cls), e);
                    return Err(::std::fmt::Error {});
                }
                match std::str::from_utf8(&ser.into_inner()) {
                    Ok(s) => f.write_str(s),
                    Err(e) => {
                        ::log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
                        Err(::std::fmt::Error {})
                    }
                }
            }
        }
    };
}

/// StringList writes a list of strings the way IAM expects for `Action`, `Resource` and principal identifiers: a
/// single element becomes a bare JSON string, anything else a JSON array.
pub(crate) struct StringList<'a>(pub(crate) &'a [String]);

impl Serialize for StringList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            [single] => serializer.serialize_str(single),
            values => values.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::StringList,
        pretty_assertions::assert_eq,
        serde::{Serialize, Serializer},
        std::panic::catch_unwind,
    };

    fn render(values: &[&str]) -> String {
        let values: Vec<String> = values.iter().map(|s| s.to_string()).collect();
        serde_json::to_string(&StringList(&values)).unwrap()
    }

    #[test_log::test]
    fn test_collapse() {
        assert_eq!(render(&["ec2:*"]), r#""ec2:*""#);
        assert_eq!(render(&["s3:GetObject", "s3:PutObject"]), r#"["s3:GetObject","s3:PutObject"]"#);
        assert_eq!(render(&["b", "a", "c"]), r#"["b","a","c"]"#);
    }

    #[test_log::test]
    fn test_empty_is_array() {
        assert_eq!(render(&[]), "[]");
    }

    #[derive(Clone, Debug)]
    struct SerFail {}
    display_json!(SerFail);

    impl Serialize for SerFail {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("Serialization failed"))
        }
    }

    #[test_log::test]
    fn test_display_ser_fail() {
        let e = catch_unwind(|| SerFail {}.to_string()).unwrap_err();
        let e2 = e.downcast::<String>().unwrap();
        assert!((*e2).contains("a Display implementation returned an error"));
    }
}
