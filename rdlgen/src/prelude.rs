//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use rdlgen::prelude::*;
//! ```

// Schema types
pub use rdlgen_schema::{
    Annotations, BaseType, Schema, SchemaError, SchemaRegistry, StructFieldDef, TypeDef,
    TypeRegistry, parse_schema, parse_schema_file,
};

// Codegen types
pub use rdlgen_codegen::generator::{SupportGenerator, WriteStatus, WrittenArtifact};
pub use rdlgen_codegen::java::artifacts::{Artifact, EmitContext, emit, render};
pub use rdlgen_codegen::java::namespace::{
    Placement, generated_namespace, original_namespace, root_path,
};
pub use rdlgen_codegen::java::types::{JavaTypeResolver, java_type};
pub use rdlgen_codegen::{CodegenError, annotations_of};
