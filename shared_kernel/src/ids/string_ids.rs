#[macro_export]
macro_rules! string_key {
    ($TypeName: ident) => {
        #[derive(
            Clone,
            Debug,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $TypeName(String);

        impl $TypeName {
            pub fn new(value: String) -> Self {
                $TypeName(value)
            }

            pub fn inner(&self) -> String {
                self.0.clone()
            }
        }

        impl std::fmt::Display for $TypeName {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<String> for $TypeName {
            fn from(value: String) -> Self {
                $TypeName(value)
            }
        }

        impl From<&str> for $TypeName {
            fn from(value: &str) -> Self {
                $TypeName(value.to_owned())
            }
        }

        impl From<$TypeName> for String {
            fn from(value: $TypeName) -> Self {
                value.inner()
            }
        }

        impl AsRef<str> for $TypeName {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Lets map lookups keyed by the id type accept a plain `&str`.
        impl std::borrow::Borrow<str> for $TypeName {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}
