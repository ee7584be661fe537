//! Closed value sets used by request and response schemas.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares an enum whose variants map one-to-one to wire literals.
///
/// Parsing (`FromStr`, `TryFrom<&str>`, serde) accepts only the declared
/// literals; anything else is a schema validation error.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every declared value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire literal for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err(Error::schema(
                        stringify!($name),
                        format!(
                            "`{}` is not one of: {}",
                            s,
                            [$($wire),+].join(", ")
                        ),
                    )),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = Error;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

wire_enum! {
    /// Amazon marketplace a query runs against.
    #[derive(Default)]
    pub enum Marketplace {
        NotSet => "NotSet",
        #[default]
        Us => "US",
        Uk => "UK",
        It => "IT",
        De => "DE",
        Ca => "CA",
        Mx => "MX",
        Fr => "FR",
        Es => "ES",
        In => "IN",
        Au => "AU",
        Jp => "JP",
    }
}

impl Marketplace {
    /// Returns the Amazon domain for this marketplace.
    pub fn domain(&self) -> Option<&'static str> {
        match self {
            Marketplace::NotSet => None,
            Marketplace::Us => Some("amazon.com"),
            Marketplace::Uk => Some("amazon.co.uk"),
            Marketplace::It => Some("amazon.it"),
            Marketplace::De => Some("amazon.de"),
            Marketplace::Ca => Some("amazon.ca"),
            Marketplace::Mx => Some("amazon.com.mx"),
            Marketplace::Fr => Some("amazon.fr"),
            Marketplace::Es => Some("amazon.es"),
            Marketplace::In => Some("amazon.in"),
            Marketplace::Au => Some("amazon.com.au"),
            Marketplace::Jp => Some("amazon.co.jp"),
        }
    }

    /// Returns the currency code prices are reported in.
    pub fn currency(&self) -> Option<&'static str> {
        match self {
            Marketplace::NotSet => None,
            Marketplace::Us => Some("USD"),
            Marketplace::Uk => Some("GBP"),
            Marketplace::It | Marketplace::De | Marketplace::Fr | Marketplace::Es => Some("EUR"),
            Marketplace::Ca => Some("CAD"),
            Marketplace::Mx => Some("MXN"),
            Marketplace::In => Some("INR"),
            Marketplace::Au => Some("AUD"),
            Marketplace::Jp => Some("JPY"),
        }
    }
}

wire_enum! {
    /// Sort direction.
    pub enum SortOrder {
        Ascending => "asc",
        Descending => "desc",
    }
}

wire_enum! {
    /// How a text filter matches its pattern.
    pub enum TextFilterType {
        Contains => "contains",
        Exact => "exact",
        StartsWith => "startsWith",
        EndsWith => "endsWith",
    }
}

wire_enum! {
    pub enum ProductCondition {
        New => "New",
        Used => "Used",
        Refurbished => "Refurbished",
    }
}

wire_enum! {
    pub enum FulfillmentChannel {
        Fba => "FBA",
        Fbm => "FBM",
    }
}

wire_enum! {
    /// Who currently holds the Buy Box.
    pub enum BuyBoxOwner {
        Amazon => "Amazon",
        Fba => "FBA",
        Fbm => "FBM",
    }
}

wire_enum! {
    pub enum SellerType {
        FirstParty => "1P",
        ThirdParty => "3P",
    }
}

wire_enum! {
    /// Shopper intent behind a search term.
    pub enum Intent {
        Informational => "Informational",
        Navigational => "Navigational",
        Transactional => "Transactional",
    }
}

wire_enum! {
    /// Ranking metric for a brand's top products.
    pub enum TopProductSortBy {
        Revenue => "Revenue",
        UnitsSold => "UnitsSold",
        SalesRank => "SalesRank",
    }
}
