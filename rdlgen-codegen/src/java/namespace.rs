//! Package, root path and file header derivation.

use rdlgen_schema::Schema;

/// Package segment appended to the schema namespace for generated code.
pub const GENERATED_SUFFIX: &str = "parsec_generated";

/// Where an artifact lives and how it may be overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Regenerated on every build, under the generated package.
    #[default]
    Generated,
    /// Written once under the schema package and hand-edited afterwards.
    Original,
}

impl Placement {
    /// Returns the package for this placement.
    #[must_use]
    pub fn package(&self, schema: &Schema, namespace: Option<&str>) -> String {
        match self {
            Self::Generated => generated_namespace(schema, namespace),
            Self::Original => original_namespace(schema, namespace).to_string(),
        }
    }

    /// Returns the comment header placed at the top of the file.
    #[must_use]
    pub fn header(&self, banner: &str) -> String {
        match self {
            Self::Generated => generation_header(banner),
            Self::Original => generation_orig_header(banner),
        }
    }
}

/// Returns the namespace override if given, else the schema namespace.
#[must_use]
pub fn original_namespace<'a>(schema: &'a Schema, namespace: Option<&'a str>) -> &'a str {
    match namespace.filter(|ns| !ns.is_empty()) {
        Some(ns) => ns,
        None => schema.namespace.as_deref().unwrap_or(""),
    }
}

/// Returns the package for regenerated code: the original namespace plus
/// [`GENERATED_SUFFIX`].
#[must_use]
pub fn generated_namespace(schema: &Schema, namespace: Option<&str>) -> String {
    let base = original_namespace(schema, namespace);
    if base.is_empty() {
        GENERATED_SUFFIX.to_string()
    } else {
        format!("{}.{}", base, GENERATED_SUFFIX)
    }
}

/// Returns the resource root path for the schema.
///
/// An explicit base path gets a `/v<version>` suffix when the schema is
/// versioned; otherwise the path is derived from the schema name.
#[must_use]
pub fn root_path(schema: &Schema, base_path: Option<&str>) -> String {
    if let Some(base) = base_path.filter(|b| !b.is_empty()) {
        return match schema.version {
            Some(version) if base == "/" => format!("/v{}", version),
            Some(version) => format!("{}/v{}", base, version),
            None => base.to_string(),
        };
    }
    match (schema.name.as_deref(), schema.version) {
        (Some(name), Some(version)) if !name.is_empty() => format!("/{}/v{}", name, version),
        (Some(name), None) if !name.is_empty() => format!("/{}", name),
        _ => "/".to_string(),
    }
}

/// Returns the header for files that are overwritten on every run.
#[must_use]
pub fn generation_header(banner: &str) -> String {
    format!(
        "{}// Please DO NOT edit directly; changes could be overwritten.\n//\n",
        generation_banner(banner)
    )
}

/// Returns the header for files that are only written when absent.
#[must_use]
pub fn generation_orig_header(banner: &str) -> String {
    format!(
        "{}// WILL NOT be auto-generated if file has already existed.\n//\n",
        generation_banner(banner)
    )
}

fn generation_banner(banner: &str) -> String {
    format!("//\n// This file is generated by {}\n", banner)
}

/// Returns the `package` declaration for `package`, or nothing for the
/// default package.
#[must_use]
pub fn package_line(package: &str) -> String {
    if package.is_empty() {
        String::new()
    } else {
        format!("package {};\n", package)
    }
}
