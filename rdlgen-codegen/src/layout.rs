//! Output directory layout.
//!
//! Java sources live under a root directory in a subdirectory per package
//! segment. Directories are created on demand.

use crate::error::CodegenError;
use std::path::{Path, PathBuf};

/// Default root for regenerated sources.
pub const GENERATED_SOURCES_ROOT: &str = "./target/generated-sources/java";

/// Default root for hand-maintained sources.
pub const ORIGINAL_SOURCES_ROOT: &str = "./src/main/java";

/// Returns `root` extended with one directory per package segment.
///
/// # Errors
/// Returns `CodegenError::Generation` if the package has an empty segment or
/// a segment containing a path separator.
pub fn package_dir(root: &Path, package: &str) -> Result<PathBuf, CodegenError> {
    let mut dir = root.to_path_buf();
    if package.is_empty() {
        return Ok(dir);
    }
    for segment in package.split('.') {
        if segment.is_empty() || segment.contains(['/', '\\']) {
            return Err(CodegenError::generation(format!(
                "invalid package name '{}'",
                package
            )));
        }
        dir.push(segment);
    }
    Ok(dir)
}

/// Returns, creating it if needed, the directory for regenerated sources of
/// `package`. `out_dir` replaces [`GENERATED_SOURCES_ROOT`] when given.
///
/// # Errors
/// Returns `CodegenError` if the package is invalid or the directory cannot
/// be created.
pub fn generated_sources_dir(
    out_dir: Option<&Path>,
    package: &str,
) -> Result<PathBuf, CodegenError> {
    let root = out_dir.unwrap_or_else(|| Path::new(GENERATED_SOURCES_ROOT));
    ensure_dir(package_dir(root, package)?)
}

/// Returns, creating it if needed, the directory for hand-maintained sources
/// of `package`. `out_dir` replaces [`ORIGINAL_SOURCES_ROOT`] when given.
///
/// # Errors
/// Returns `CodegenError` if the package is invalid or the directory cannot
/// be created.
pub fn original_sources_dir(
    out_dir: Option<&Path>,
    package: &str,
) -> Result<PathBuf, CodegenError> {
    let root = out_dir.unwrap_or_else(|| Path::new(ORIGINAL_SOURCES_ROOT));
    ensure_dir(package_dir(root, package)?)
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, CodegenError> {
    if !dir.is_dir() {
        tracing::debug!("creating directory {}", dir.display());
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_dir() {
        let dir = package_dir(Path::new("/out"), "com.example.pets").expect("valid package");
        assert_eq!(dir, PathBuf::from("/out/com/example/pets"));
    }

    #[test]
    fn test_package_dir_default_package() {
        let dir = package_dir(Path::new("/out"), "").expect("valid package");
        assert_eq!(dir, PathBuf::from("/out"));
    }

    #[test]
    fn test_package_dir_rejects_empty_segment() {
        let result = package_dir(Path::new("/out"), "com..pets");
        assert!(matches!(result, Err(CodegenError::Generation { .. })));
    }

    #[test]
    fn test_package_dir_rejects_path_separators() {
        for package in ["a/b", "com.a\\b", "com./etc", "com../x"] {
            let result = package_dir(Path::new("/out"), package);
            assert!(
                matches!(result, Err(CodegenError::Generation { .. })),
                "accepted {}",
                package
            );
        }
    }

    #[test]
    fn test_generated_sources_dir_creates_directories() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let dir = generated_sources_dir(Some(tmp.path()), "com.example.parsec_generated")
            .expect("directory created");
        assert!(dir.is_dir());
        assert!(dir.ends_with("com/example/parsec_generated"));

        // Second call finds the existing directory.
        let again = generated_sources_dir(Some(tmp.path()), "com.example.parsec_generated")
            .expect("directory exists");
        assert_eq!(dir, again);
    }

    #[test]
    fn test_original_sources_dir_creates_directories() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let dir = original_sources_dir(Some(tmp.path()), "com.example").expect("directory created");
        assert!(dir.is_dir());
        assert!(dir.starts_with(tmp.path()));
    }

    #[test]
    fn test_dir_creation_fails_under_file() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let file = tmp.path().join("occupied");
        std::fs::write(&file, b"x").expect("write file");
        let result = generated_sources_dir(Some(&file), "com.example");
        assert!(matches!(result, Err(CodegenError::Io(_))));
    }
}
