//! Domain definitions.

/// Defines a non-empty trimmed text newtype of at most `$max` bytes.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        $name:ident($max:literal)
    ) => {
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`] if the given `value` is valid.")]
            #[must_use]
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let value = value.into();
                Self::check(&value).then_some(Self(value))
            }

            #[doc = concat!("Returns this [`", stringify!($name), "`] as a string slice.")]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[doc = concat!("Checks whether the given `value` is a valid [`", stringify!($name), "`].")]
            fn check(value: impl AsRef<str>) -> bool {
                let value = value.as_ref();
                value.trim() == value && !value.is_empty() && value.len() <= $max
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

/// Defines an opaque string identifier newtype.
macro_rules! define_id {
    (
        #[doc = $doc:literal]
        $name:ident
    ) => {
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            ::derive_more::Into,
            PartialEq,
        )]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Returns this [`", stringify!($name), "`] as a string slice.")]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

pub mod chat;
pub mod listing;
pub mod notification;
pub mod property;
pub mod unit;
pub mod user;

pub use self::{
    chat::{Chat, Message},
    notification::Notification,
    property::Property,
    unit::Unit,
    user::User,
};
