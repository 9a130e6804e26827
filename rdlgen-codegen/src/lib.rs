//! # rdlgen Codegen
//!
//! Java code generation from RDL schemas.
//!
//! This crate provides:
//! - Resolution of schema type references to Java type expressions
//! - Extended annotation lookup
//! - Package and root path derivation
//! - Emission of the Java error and exception support classes

pub mod annotations;
pub mod error;
pub mod generator;
pub mod java;
pub mod layout;

pub use annotations::annotations_of;
pub use error::CodegenError;
pub use generator::{SupportGenerator, WriteStatus, WrittenArtifact};
pub use java::{Artifact, EmitContext, JavaTypeResolver, Placement, java_type};

/// Writes the Java support classes for an RDL JSON schema file.
///
/// # Arguments
/// * `path` - Path to the RDL JSON schema file
/// * `generator` - Output settings
///
/// # Returns
/// The files written or skipped.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or writing fails.
pub fn generate_support_from_file(
    path: &std::path::Path,
    generator: &SupportGenerator,
) -> Result<Vec<WrittenArtifact>, CodegenError> {
    let schema = rdlgen_schema::parse_schema_file(path)?;
    generator.write_all(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_support_from_file() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let schema_path = tmp.path().join("pets.json");
        std::fs::write(
            &schema_path,
            r#"{"name": "Pets", "namespace": "com.example", "types": []}"#,
        )
        .expect("write schema");

        let generator = SupportGenerator::new().generated_dir(tmp.path().join("out"));
        let written = generate_support_from_file(&schema_path, &generator).expect("generates");
        assert_eq!(written.len(), Artifact::ALL.len());
        assert!(
            tmp.path()
                .join("out/com/example/parsec_generated/ResourceException.java")
                .is_file()
        );
    }

    #[test]
    fn test_generate_support_from_bad_file() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let schema_path = tmp.path().join("broken.json");
        std::fs::write(&schema_path, "not json").expect("write schema");

        let result = generate_support_from_file(&schema_path, &SupportGenerator::new());
        assert!(matches!(result, Err(CodegenError::Schema(_))));
    }
}
