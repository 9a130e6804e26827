//! # rdlgen Schema
//!
//! RDL schema model and type registry.
//!
//! This crate provides:
//! - Type definitions for schema elements
//! - JSON schema loading
//! - The `TypeRegistry` lookup capability and an in-memory implementation

pub mod error;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::SchemaError;
pub use parser::{parse_schema, parse_schema_file};
pub use registry::{SchemaRegistry, TypeRegistry};
pub use types::{
    AliasTypeDef, Annotations, ArrayTypeDef, BaseType, BytesTypeDef, EnumElementDef, EnumTypeDef,
    MapTypeDef, NumberTypeDef, Schema, StringTypeDef, StructFieldDef, StructTypeDef, TypeDef,
    UnionTypeDef,
};
