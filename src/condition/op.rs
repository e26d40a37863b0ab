//! Names of the IAM condition operators, for use as the first argument of
//! [StatementBuilder::condition](crate::StatementBuilder::condition).

macro_rules! condition_ops {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("The `", stringify!($name), "` operator.")]
            pub const $name: &str = stringify!($name);
        )*
    };
}

condition_ops! {
    ArnEquals,
    ArnEqualsIfExists,
    ArnNotEquals,
    ArnNotEqualsIfExists,
    ArnLike,
    ArnLikeIfExists,
    ArnNotLike,
    ArnNotLikeIfExists,
    BinaryEquals,
    BinaryEqualsIfExists,
    Bool,
    BoolIfExists,
    DateEquals,
    DateEqualsIfExists,
    DateNotEquals,
    DateNotEqualsIfExists,
    DateLessThan,
    DateLessThanIfExists,
    DateLessThanEquals,
    DateLessThanEqualsIfExists,
    DateGreaterThan,
    DateGreaterThanIfExists,
    DateGreaterThanEquals,
    DateGreaterThanEqualsIfExists,
    IpAddress,
    IpAddressIfExists,
    NotIpAddress,
    NotIpAddressIfExists,
    Null,
    NumericEquals,
    NumericEqualsIfExists,
    NumericNotEquals,
    NumericNotEqualsIfExists,
    NumericLessThan,
    NumericLessThanIfExists,
    NumericLessThanEquals,
    NumericLessThanEqualsIfExists,
    NumericGreaterThan,
    NumericGreaterThanIfExists,
    NumericGreaterThanEquals,
    NumericGreaterThanEqualsIfExists,
    StringEquals,
    StringEqualsIfExists,
    StringNotEquals,
    StringNotEqualsIfExists,
    StringEqualsIgnoreCase,
    StringEqualsIgnoreCaseIfExists,
    StringNotEqualsIgnoreCase,
    StringNotEqualsIgnoreCaseIfExists,
    StringLike,
    StringLikeIfExists,
    StringNotLike,
    StringNotLikeIfExists,
}
