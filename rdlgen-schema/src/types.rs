//! Schema type definitions.
//!
//! This module contains the data structures representing RDL schema elements:
//! the built-in base types and the user-defined type variants (aliases,
//! strings, numbers, bytes, structs, arrays, maps, enums and unions).
//!
//! The serde representation follows the RDL JSON layout, where each type is
//! an externally tagged object such as `{"StructTypeDef": {...}}` and the
//! `"type"` key names the supertype.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Extended annotations attached to a type (`x_*` keys in RDL).
pub type Annotations = HashMap<String, String>;

/// Complete RDL schema handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Namespace (dotted, e.g. `com.example`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Schema name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Schema version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Schema description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Top-level type definitions, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the schema name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the schema version.
    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Adds a type definition to the schema.
    pub fn add_type(&mut self, type_def: impl Into<TypeDef>) {
        self.types.push(type_def.into());
    }

    /// Adds a type definition, returning the schema.
    #[must_use]
    pub fn with_type(mut self, type_def: impl Into<TypeDef>) -> Self {
        self.add_type(type_def);
        self
    }
}

/// Built-in RDL base types.
///
/// Every user-defined type reduces to exactly one of these by following its
/// supertype chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    /// Untyped value.
    Any,
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Opaque byte sequence.
    Bytes,
    /// UTF-8 string.
    String,
    /// Timestamp.
    Timestamp,
    /// Symbolic identifier.
    Symbol,
    /// UUID.
    #[serde(rename = "UUID")]
    Uuid,
    /// Homogeneous list.
    Array,
    /// Keyed map.
    Map,
    /// Record with named fields.
    Struct,
    /// Enumeration of symbols.
    Enum,
    /// Tagged union.
    Union,
}

impl BaseType {
    /// All base types, in registration order.
    pub const ALL: [Self; 18] = [
        Self::Any,
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Bytes,
        Self::String,
        Self::Timestamp,
        Self::Symbol,
        Self::Uuid,
        Self::Array,
        Self::Map,
        Self::Struct,
        Self::Enum,
        Self::Union,
    ];

    /// Returns the schema name of the base type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Bytes => "Bytes",
            Self::String => "String",
            Self::Timestamp => "Timestamp",
            Self::Symbol => "Symbol",
            Self::Uuid => "UUID",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Struct => "Struct",
            Self::Enum => "Enum",
            Self::Union => "Union",
        }
    }

    /// Parses a base type from its schema name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bt| bt.name() == name)
    }

}

/// Type definition variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDef {
    /// Built-in base type.
    #[serde(rename = "BaseType")]
    Base(BaseType),
    /// Plain alias of another type.
    #[serde(rename = "AliasTypeDef")]
    Alias(AliasTypeDef),
    /// Constrained string type.
    #[serde(rename = "StringTypeDef")]
    String(StringTypeDef),
    /// Constrained numeric type.
    #[serde(rename = "NumberTypeDef")]
    Number(NumberTypeDef),
    /// Constrained bytes type.
    #[serde(rename = "BytesTypeDef")]
    Bytes(BytesTypeDef),
    /// Struct type.
    #[serde(rename = "StructTypeDef")]
    Struct(StructTypeDef),
    /// Array type.
    #[serde(rename = "ArrayTypeDef")]
    Array(ArrayTypeDef),
    /// Map type.
    #[serde(rename = "MapTypeDef")]
    Map(MapTypeDef),
    /// Enum type.
    #[serde(rename = "EnumTypeDef")]
    Enum(EnumTypeDef),
    /// Union type.
    #[serde(rename = "UnionTypeDef")]
    Union(UnionTypeDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Base(b) => b.name(),
            Self::Alias(a) => &a.name,
            Self::String(s) => &s.name,
            Self::Number(n) => &n.name,
            Self::Bytes(b) => &b.name,
            Self::Struct(s) => &s.name,
            Self::Array(a) => &a.name,
            Self::Map(m) => &m.name,
            Self::Enum(e) => &e.name,
            Self::Union(u) => &u.name,
        }
    }

    /// Returns the name of the type this one derives from.
    ///
    /// Built-in base types have no supertype.
    #[must_use]
    pub fn supertype(&self) -> Option<&str> {
        match self {
            Self::Base(_) => None,
            Self::Alias(a) => Some(&a.supertype),
            Self::String(s) => Some(&s.supertype),
            Self::Number(n) => Some(&n.supertype),
            Self::Bytes(b) => Some(&b.supertype),
            Self::Struct(s) => Some(&s.supertype),
            Self::Array(a) => Some(&a.supertype),
            Self::Map(m) => Some(&m.supertype),
            Self::Enum(e) => Some(&e.supertype),
            Self::Union(u) => Some(&u.supertype),
        }
    }

    /// Returns the extended annotations of the type, if it can carry any.
    #[must_use]
    pub fn annotations(&self) -> Option<&Annotations> {
        match self {
            Self::Base(_) => None,
            Self::Alias(a) => Some(&a.annotations),
            Self::String(s) => Some(&s.annotations),
            Self::Number(n) => Some(&n.annotations),
            Self::Bytes(b) => Some(&b.annotations),
            Self::Struct(s) => Some(&s.annotations),
            Self::Array(a) => Some(&a.annotations),
            Self::Map(m) => Some(&m.annotations),
            Self::Enum(e) => Some(&e.annotations),
            Self::Union(u) => Some(&u.annotations),
        }
    }

}

macro_rules! impl_from_def {
    ($($def:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$def> for TypeDef {
                fn from(def: $def) -> Self {
                    Self::$variant(def)
                }
            }
        )*
    };
}

impl_from_def! {
    AliasTypeDef => Alias,
    StringTypeDef => String,
    NumberTypeDef => Number,
    BytesTypeDef => Bytes,
    StructTypeDef => Struct,
    ArrayTypeDef => Array,
    MapTypeDef => Map,
    EnumTypeDef => Enum,
    UnionTypeDef => Union,
}

impl From<BaseType> for TypeDef {
    fn from(base: BaseType) -> Self {
        Self::Base(base)
    }
}

/// Alias type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasTypeDef {
    /// Type name.
    pub name: String,
    /// Aliased type.
    #[serde(rename = "type")]
    pub supertype: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl AliasTypeDef {
    /// Creates a new alias of `supertype`.
    #[must_use]
    pub fn new(name: impl Into<String>, supertype: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: supertype.into(),
            comment: None,
            annotations: Annotations::new(),
        }
    }
}

/// String type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringTypeDef {
    /// Type name.
    pub name: String,
    /// Supertype (usually `String`).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Allowed values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Minimum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    /// Maximum length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl StringTypeDef {
    /// Creates a new string type deriving from `String`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: BaseType::String.name().to_string(),
            pattern: None,
            values: Vec::new(),
            min_size: None,
            max_size: None,
            comment: None,
            annotations: Annotations::new(),
        }
    }

    /// Adds an extended annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

/// Numeric type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberTypeDef {
    /// Type name.
    pub name: String,
    /// Numeric supertype (e.g. `Int32`).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Minimum value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl NumberTypeDef {
    /// Creates a new numeric type deriving from `supertype`.
    #[must_use]
    pub fn new(name: impl Into<String>, supertype: BaseType) -> Self {
        Self {
            name: name.into(),
            supertype: supertype.name().to_string(),
            min: None,
            max: None,
            comment: None,
            annotations: Annotations::new(),
        }
    }

    /// Adds an extended annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

/// Bytes type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BytesTypeDef {
    /// Type name.
    pub name: String,
    /// Supertype (usually `Bytes`).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Fixed size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Minimum size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    /// Maximum size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl BytesTypeDef {
    /// Creates a new bytes type deriving from `Bytes`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: BaseType::Bytes.name().to_string(),
            size: None,
            min_size: None,
            max_size: None,
            comment: None,
            annotations: Annotations::new(),
        }
    }
}

/// Struct type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructTypeDef {
    /// Type name.
    pub name: String,
    /// Supertype (`Struct` or another struct).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<StructFieldDef>,
    /// Whether unknown fields are rejected.
    #[serde(default)]
    pub closed: bool,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl StructTypeDef {
    /// Creates a new struct type deriving from `Struct`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: BaseType::Struct.name().to_string(),
            fields: Vec::new(),
            closed: false,
            comment: None,
            annotations: Annotations::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: StructFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds an extended annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

}

/// Struct field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructFieldDef {
    /// Field name.
    pub name: String,
    /// Field type reference.
    #[serde(rename = "type")]
    pub type_ref: String,
    /// Whether the field may be absent.
    #[serde(default)]
    pub optional: bool,
    /// Element type for `Array`/`Map` fields declared inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    /// Key type for `Map` fields declared inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<String>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl StructFieldDef {
    /// Creates a new required field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            optional: false,
            items: None,
            keys: None,
            default: None,
            comment: None,
            annotations: Annotations::new(),
        }
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the inline element type.
    #[must_use]
    pub fn with_items(mut self, items: impl Into<String>) -> Self {
        self.items = Some(items.into());
        self
    }

    /// Sets the inline key type.
    #[must_use]
    pub fn with_keys(mut self, keys: impl Into<String>) -> Self {
        self.keys = Some(keys.into());
        self
    }
}

/// Array type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTypeDef {
    /// Type name.
    pub name: String,
    /// Supertype (usually `Array`).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Element type reference.
    #[serde(default = "any_type_ref")]
    pub items: String,
    /// Fixed size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Minimum size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    /// Maximum size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl ArrayTypeDef {
    /// Creates a new array type of `items`.
    #[must_use]
    pub fn new(name: impl Into<String>, items: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertype: BaseType::Array.name().to_string(),
            items: items.into(),
            size: None,
            min_size: None,
            max_size: None,
            comment: None,
            annotations: Annotations::new(),
        }
    }

    /// Adds an extended annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

/// Map type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTypeDef {
    /// Type name.
    pub name: String,
    /// Supertype (usually `Map`).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Key type reference.
    #[serde(default = "any_type_ref")]
    pub keys: String,
    /// Value type reference.
    #[serde(default = "any_type_ref")]
    pub items: String,
    /// Fixed size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Minimum size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    /// Maximum size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl MapTypeDef {
    /// Creates a new map type from `keys` to `items`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        keys: impl Into<String>,
        items: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            supertype: BaseType::Map.name().to_string(),
            keys: keys.into(),
            items: items.into(),
            size: None,
            min_size: None,
            max_size: None,
            comment: None,
            annotations: Annotations::new(),
        }
    }

    /// Adds an extended annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumTypeDef {
    /// Type name.
    pub name: String,
    /// Supertype (usually `Enum`).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Enum elements in declaration order.
    #[serde(default)]
    pub elements: Vec<EnumElementDef>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl EnumTypeDef {
    /// Creates a new enum type with the given symbols.
    #[must_use]
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        symbols: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            supertype: BaseType::Enum.name().to_string(),
            elements: symbols
                .into_iter()
                .map(|symbol| EnumElementDef {
                    symbol: symbol.into(),
                    comment: None,
                })
                .collect(),
            comment: None,
            annotations: Annotations::new(),
        }
    }
}

/// Enum element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumElementDef {
    /// Element symbol.
    pub symbol: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Union type definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionTypeDef {
    /// Type name.
    pub name: String,
    /// Supertype (usually `Union`).
    #[serde(rename = "type")]
    pub supertype: String,
    /// Variant type references.
    #[serde(default)]
    pub variants: Vec<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Extended annotations.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: Annotations,
}

impl UnionTypeDef {
    /// Creates a new union over the given variant types.
    #[must_use]
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        variants: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            supertype: BaseType::Union.name().to_string(),
            variants: variants.into_iter().map(Into::into).collect(),
            comment: None,
            annotations: Annotations::new(),
        }
    }

    /// Adds an extended annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}

fn any_type_ref() -> String {
    BaseType::Any.name().to_string()
}
