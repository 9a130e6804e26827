//! # rdlgen
//!
//! Java type mapping and support-class generation for RDL schemas.
//!
//! ## Features
//!
//! - **Type resolution** - Map schema type references to Java type expressions
//! - **Annotation lookup** - Read extended `x_*` annotations of user types
//! - **Support classes** - Emit the error and exception classes generated
//!   clients and servers depend on
//!
//! ## Quick Start
//!
//! ```ignore
//! use rdlgen::prelude::*;
//!
//! let schema = parse_schema(&std::fs::read_to_string("pets.json")?)?;
//! let registry = SchemaRegistry::new(&schema);
//!
//! // Resolve a field type
//! let java = java_type(&registry, "PetList", false, None, None)?;
//!
//! // Write the support classes
//! SupportGenerator::new().generated_dir("target/generated-sources/java").write_all(&schema)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, JSON loading and the type registry
//! - [`codegen`] - Type resolution and Java support-class emission

pub mod prelude;

/// Schema model, loading and type registry.
pub mod schema {
    pub use rdlgen_schema::*;
}

/// Java code generation.
pub mod codegen {
    pub use rdlgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use rdlgen_codegen::{
    Artifact, CodegenError, EmitContext, JavaTypeResolver, Placement, SupportGenerator,
    annotations_of, java_type,
};
pub use rdlgen_schema::{Schema, SchemaError, SchemaRegistry, TypeDef, TypeRegistry, parse_schema};
