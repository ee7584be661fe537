//! Wire schema plumbing: field alias tables and the declaration macros that
//! generate request and response structs from them.
//!
//! Every schema is declared once as a list of `field: Type => "wireName"`
//! entries. The same list produces the serde renames and the static
//! [`WireSchema::FIELDS`] table, so the table is the single source of truth
//! for the internal ↔ wire mapping.

use crate::error::{Error, Result};
use crate::models::filters::PageOptions;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// One internal ↔ wire field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldAlias {
    /// Rust field name.
    pub name: &'static str,
    /// JSON key on the wire.
    pub wire: &'static str,
    pub required: bool,
}

impl FieldAlias {
    pub const fn required(name: &'static str, wire: &'static str) -> Self {
        Self { name, wire, required: true }
    }

    pub const fn optional(name: &'static str, wire: &'static str) -> Self {
        Self { name, wire, required: false }
    }
}

/// A type with a fixed wire representation and alias table.
pub trait WireSchema {
    /// Schema name used in validation errors.
    const NAME: &'static str;

    /// Field alias table, required fields first.
    const FIELDS: &'static [FieldAlias];

    /// Wire key for an internal field name.
    fn wire_name(field: &str) -> Option<&'static str> {
        Self::FIELDS.iter().find(|f| f.name == field).map(|f| f.wire)
    }

    /// Internal field name for a wire key.
    fn field_name(wire: &str) -> Option<&'static str> {
        Self::FIELDS.iter().find(|f| f.wire == wire).map(|f| f.name)
    }

    /// Wire keys that must be present when decoding.
    fn required_wire_names() -> Vec<&'static str> {
        Self::FIELDS.iter().filter(|f| f.required).map(|f| f.wire).collect()
    }
}

/// Request schemas that accept a page cursor.
pub trait PagedRequest: WireSchema + Serialize {
    fn page_mut(&mut self) -> &mut Option<PageOptions>;

    /// Points the request at the page identified by `id`, keeping any page
    /// size already set.
    fn set_page_id(&mut self, id: impl Into<String>) {
        let page = self.page_mut().get_or_insert_with(PageOptions::default);
        page.id = Some(id.into());
    }
}

/// Serializes a schema value to its wire JSON.
///
/// Unset fields are skipped, so a `null` in the output can only come from a
/// float JSON cannot represent (NaN or an infinity); that is rejected.
pub fn encode<T>(value: &T) -> Result<Value>
where
    T: Serialize + WireSchema,
{
    let wire = serde_json::to_value(value).map_err(|e| Error::schema(T::NAME, e.to_string()))?;

    let mut path = Vec::new();
    if find_null(&wire, &mut path) {
        return Err(Error::schema(
            T::NAME,
            format!("{}: number must be finite", render_path(&path)),
        ));
    }

    Ok(wire)
}

fn find_null(value: &Value, path: &mut Vec<String>) -> bool {
    match value {
        Value::Null => true,
        Value::Object(fields) => fields.iter().any(|(key, child)| descend(key.clone(), child, path)),
        Value::Array(items) => {
            items.iter().enumerate().any(|(i, child)| descend(format!("[{i}]"), child, path))
        }
        _ => false,
    }
}

fn descend(segment: String, child: &Value, path: &mut Vec<String>) -> bool {
    path.push(segment);
    let found = find_null(child, path);
    if !found {
        path.pop();
    }
    found
}

fn render_path(path: &[String]) -> String {
    let mut out = String::new();
    for segment in path {
        if !out.is_empty() && !segment.starts_with('[') {
            out.push('.');
        }
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Decodes a schema value from wire JSON.
pub fn decode<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned + WireSchema,
{
    decode_as(T::NAME, value)
}

/// Decodes `value`, reporting failures against `schema` with the wire path
/// of the offending field (e.g. `data[0].condition: unknown variant ...`).
pub(crate) fn decode_as<T>(schema: &str, value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        let inner = e.into_inner();
        if path == "." {
            Error::schema(schema, inner.to_string())
        } else {
            Error::schema(schema, format!("{path}: {inner}"))
        }
    })
}

/// Declares a struct whose fields carry explicit wire names and implements
/// [`WireSchema`] for it. Optional fields are wrapped in `Option`, default to
/// `None` when absent and are skipped when unset.
macro_rules! wire_schema {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty => $rwire:literal, )*
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty => $owire:literal, )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$rmeta])*
                #[serde(rename = $rwire)]
                pub $rfield: $rty,
            )*
            $(
                $(#[$ometa])*
                #[serde(rename = $owire, default, skip_serializing_if = "Option::is_none")]
                pub $ofield: Option<$oty>,
            )*
        }

        impl $crate::models::schema::WireSchema for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::models::schema::FieldAlias] = &[
                $( $crate::models::schema::FieldAlias::required(stringify!($rfield), $rwire), )*
                $( $crate::models::schema::FieldAlias::optional(stringify!($ofield), $owire), )*
            ];
        }
    };
}

pub(crate) use wire_schema;

/// Declares a request schema on top of one of the two request bases.
///
/// `search` adds `marketplace` plus optional `sort` and `page`; `history`
/// additionally requires a `date_range`. The generated type gets a `new`
/// constructor taking the required fields and one chained setter per
/// optional field.
macro_rules! request_schema {
    (
        @emit
        $(#[$meta:meta])*
        $name:ident
        required { $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty => $rwire:literal, )* }
        optional { $( $(#[$ometa:meta])* $ofield:ident : $oty:ty => $owire:literal, )* }
    ) => {
        $crate::models::schema::wire_schema! {
            $(#[$meta])*
            pub struct $name {
                required { $( $(#[$rmeta])* $rfield : $rty => $rwire, )* }
                optional { $( $(#[$ometa])* $ofield : $oty => $owire, )* }
            }
        }

        impl $name {
            pub fn new($( $rfield: $rty ),*) -> Self {
                Self {
                    $( $rfield, )*
                    $( $ofield: None, )*
                }
            }

            $(
                pub fn $ofield(mut self, value: impl Into<$oty>) -> Self {
                    self.$ofield = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::models::schema::PagedRequest for $name {
            fn page_mut(&mut self) -> &mut Option<$crate::models::filters::PageOptions> {
                &mut self.page
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident : search {
            required { $($rtt:tt)* }
            optional { $($ott:tt)* }
        }
    ) => {
        $crate::models::schema::request_schema! {
            @emit
            $(#[$meta])*
            $name
            required {
                marketplace: $crate::models::enums::Marketplace => "marketplace",
                $($rtt)*
            }
            optional {
                sort: $crate::models::filters::SortOptions => "sort",
                page: $crate::models::filters::PageOptions => "page",
                $($ott)*
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident : history {
            required { $($rtt:tt)* }
            optional { $($ott:tt)* }
        }
    ) => {
        $crate::models::schema::request_schema! {
            @emit
            $(#[$meta])*
            $name
            required {
                marketplace: $crate::models::enums::Marketplace => "marketplace",
                date_range: $crate::models::filters::DateRange => "dateRange",
                $($rtt)*
            }
            optional {
                sort: $crate::models::filters::SortOptions => "sort",
                page: $crate::models::filters::PageOptions => "page",
                $($ott)*
            }
        }
    };
}

pub(crate) use request_schema;
