//! Macros to implement the traits shared by the URI reference types.

/// Implements string conversions for a type with an inherent
/// `parse(&str) -> Result<Self, crate::error::Error>`.
///
/// Implemented traits:
///
/// * `core::str::FromStr`
/// * `TryFrom<&str>`
/// * serde
///     + `serde::Serialize` (as the formatted string)
///     + `serde::Deserialize` (by parsing a string)
macro_rules! impl_string_conversions {
    ($ty:ty, $expecting:expr $(, $param:ident : $bound:path)?) => {
        impl$(<$param: $bound>)? core::str::FromStr for $ty {
            type Err = crate::error::Error;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl$(<$param: $bound>)? TryFrom<&str> for $ty {
            type Error = crate::error::Error;

            #[inline]
            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        #[cfg(feature = "serde")]
        impl$(<$param: $bound>)? serde::Serialize for $ty {
            #[inline]
            fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
            where
                Ser: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de $(, $param: $bound)?> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                /// Visitor parsing the string.
                struct ParseVisitor<T>(core::marker::PhantomData<fn() -> T>);

                impl<'de $(, $param: $bound)?> serde::de::Visitor<'de> for ParseVisitor<$ty> {
                    type Value = $ty;

                    #[inline]
                    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        f.write_str($expecting)
                    }

                    #[inline]
                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        <$ty>::parse(v).map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(ParseVisitor::<$ty>(core::marker::PhantomData))
            }
        }
    };
}

/// Implements equality, ordering, and hashing through [`crate::compare`] for an
/// [`AbsoluteUri`][crate::types::AbsoluteUri] type.
macro_rules! impl_uri_ordering {
    ($ty:ty $(, $param:ident : $bound:path)?) => {
        impl$(<$param: $bound>)? PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                crate::compare::compare(self, other) == core::cmp::Ordering::Equal
            }
        }

        impl$(<$param: $bound>)? Eq for $ty {}

        impl$(<$param: $bound>)? PartialOrd for $ty {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl$(<$param: $bound>)? Ord for $ty {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                crate::compare::compare(self, other)
            }
        }

        impl$(<$param: $bound>)? core::hash::Hash for $ty {
            #[inline]
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                crate::compare::hash_uri(self, state);
            }
        }
    };
}
