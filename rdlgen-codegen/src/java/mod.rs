//! Java code generation modules.

pub mod artifacts;
pub mod exception;
pub mod namespace;
pub mod types;

pub use artifacts::{Artifact, EmitContext, emit, render};
pub use exception::{STATUS_CODES, status_name};
pub use namespace::{Placement, generated_namespace, original_namespace, root_path};
pub use types::{JavaTypeResolver, java_type};
