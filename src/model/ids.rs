//! Type-safe identifiers for the three catalog resources.
//!
//! Each identifier wraps the integer key assigned by the store. A value is only
//! *well-formed* when it is strictly positive; anything else is rejected before a lookup.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($($entity:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Type-safe identifier for " $entity " records."]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
                #[serde(transparent)]
                pub struct [<$entity Id>](pub i64);

                impl From<u32> for [<$entity Id>] {
                    fn from(id: u32) -> Self {
                        Self(i64::from(id))
                    }
                }

                impl Display for [<$entity Id>] {
                    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        write!(f, "{}", self.0)
                    }
                }

                impl [<$entity Id>] {
                    /// Store identities start at 1.
                    pub fn is_well_formed(&self) -> bool {
                        self.0 > 0
                    }

                    /// Parses a raw path segment.
                    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
                        raw.trim()
                            .parse::<i64>()
                            .map(Self)
                            .map_err(|_| CatalogError::InvalidArgument(format!(
                                "{} id '{}' is not an integer",
                                stringify!($entity),
                                raw
                            )))
                    }
                }
            )*
        }
    };
}

entity_id!(Category, Supplier, Product);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_integers_only() {
        assert_eq!(CategoryId::parse("12").unwrap(), CategoryId(12));
        assert_eq!(SupplierId::parse(" 3 ").unwrap(), SupplierId(3));
        assert!(matches!(
            ProductId::parse("abc"),
            Err(CatalogError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_well_formed_requires_positive() {
        assert!(CategoryId(1).is_well_formed());
        assert!(!CategoryId(0).is_well_formed());
        assert!(!ProductId(-4).is_well_formed());
    }

    #[test]
    fn test_ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ProductId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
