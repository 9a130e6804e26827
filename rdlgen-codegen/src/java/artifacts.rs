//! Fixed Java support classes.
//!
//! Every schema's generated client and server code depends on a small family
//! of error classes. Their bodies are fixed; only the file header and the
//! `package` line vary with the schema and [`EmitContext`].

use crate::error::CodegenError;
use crate::java::exception::generate_resource_exception;
use crate::java::namespace::{Placement, package_line};
use rdlgen_schema::Schema;
use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Write;

/// Banner used when the caller does not set one.
pub const DEFAULT_BANNER: &str = concat!("rdlgen ", env!("CARGO_PKG_VERSION"));

/// Java support class emitted once per schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// Plain error value with public `code` and `message`.
    ResourceError,
    /// Envelope wrapping a [`Artifact::ParsecErrorBody`].
    ParsecResourceError,
    /// Error body with code, message and details.
    ParsecErrorBody,
    /// Single validation failure.
    ParsecErrorDetail,
    /// Runtime exception carrying a status code and payload.
    ResourceException,
}

impl Artifact {
    /// All artifacts, in emission order.
    pub const ALL: [Self; 5] = [
        Self::ResourceError,
        Self::ParsecResourceError,
        Self::ParsecErrorBody,
        Self::ParsecErrorDetail,
        Self::ResourceException,
    ];

    /// Returns the Java class name.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::ResourceError => "ResourceError",
            Self::ParsecResourceError => "ParsecResourceError",
            Self::ParsecErrorBody => "ParsecErrorBody",
            Self::ParsecErrorDetail => "ParsecErrorDetail",
            Self::ResourceException => "ResourceException",
        }
    }

    /// Returns the source file name.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name())
    }

    /// Returns the other artifacts this class refers to by name.
    #[must_use]
    pub const fn references(&self) -> &'static [Artifact] {
        match self {
            Self::ParsecResourceError => &[Self::ParsecErrorBody],
            Self::ParsecErrorBody => &[Self::ParsecErrorDetail],
            Self::ResourceException => &[Self::ResourceError],
            Self::ResourceError | Self::ParsecErrorDetail => &[],
        }
    }

    /// Returns the class body, without header or package line.
    #[must_use]
    pub fn body(&self) -> Cow<'static, str> {
        match self {
            Self::ResourceError => Cow::Borrowed(RESOURCE_ERROR_TEMPLATE),
            Self::ParsecResourceError => Cow::Borrowed(PARSEC_RESOURCE_ERROR_TEMPLATE),
            Self::ParsecErrorBody => Cow::Borrowed(PARSEC_ERROR_BODY_TEMPLATE),
            Self::ParsecErrorDetail => Cow::Borrowed(PARSEC_ERROR_DETAIL_TEMPLATE),
            Self::ResourceException => Cow::Owned(generate_resource_exception()),
        }
    }
}

/// Per-emission settings: header banner, namespace override, placement of
/// the emitted artifact and placement of the artifacts it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitContext {
    banner: String,
    namespace: Option<String>,
    placement: Placement,
    peers: HashMap<Artifact, Placement>,
}

impl EmitContext {
    /// Creates a context with the default banner, no namespace override and
    /// generated placement.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            namespace: None,
            placement: Placement::Generated,
            peers: HashMap::new(),
        }
    }

    /// Sets the generator banner shown in the file header.
    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Overrides the schema namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets where another artifact is placed. Artifacts without an entry are
    /// assumed to be generated.
    #[must_use]
    pub fn with_peer_placement(mut self, artifact: Artifact, placement: Placement) -> Self {
        self.peers.insert(artifact, placement);
        self
    }

    /// Returns the banner.
    #[must_use]
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Returns the namespace override, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the placement.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns the placement of another artifact.
    #[must_use]
    pub fn peer_placement(&self, artifact: Artifact) -> Placement {
        self.peers.get(&artifact).copied().unwrap_or_default()
    }

    /// Returns the package the artifact is declared in.
    #[must_use]
    pub fn package(&self, schema: &Schema) -> String {
        self.placement.package(schema, self.namespace())
    }

    /// Returns the import declarations `artifact` needs for the classes it
    /// refers to that live in another package.
    ///
    /// Classes in the default package cannot be imported and are skipped.
    #[must_use]
    pub fn imports(&self, artifact: Artifact, schema: &Schema) -> Vec<String> {
        let own = self.package(schema);
        artifact
            .references()
            .iter()
            .filter_map(|&peer| {
                let package = self.peer_placement(peer).package(schema, self.namespace());
                (!package.is_empty() && package != own)
                    .then(|| format!("import {}.{};\n", package, peer.class_name()))
            })
            .collect()
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the full source of `artifact` for `schema`.
#[must_use]
pub fn render(artifact: Artifact, schema: &Schema, ctx: &EmitContext) -> String {
    let header = ctx.placement.header(&ctx.banner);
    let package = package_line(&ctx.package(schema));
    let imports = ctx.imports(artifact, schema);
    let body = artifact.body();

    let mut output = String::with_capacity(header.len() + package.len() + body.len() + 64);
    output.push_str(&header);
    output.push_str(&package);
    output.push('\n');
    if !imports.is_empty() {
        for import in &imports {
            output.push_str(import);
        }
        output.push('\n');
    }
    output.push_str(&body);
    output
}

/// Writes the full source of `artifact` for `schema` to `sink`.
///
/// The source is rendered in memory and handed to the sink in one write.
///
/// # Errors
/// Returns `CodegenError::Io` if the sink rejects the write.
pub fn emit<W: Write + ?Sized>(
    artifact: Artifact,
    schema: &Schema,
    ctx: &EmitContext,
    sink: &mut W,
) -> Result<(), CodegenError> {
    let source = render(artifact, schema, ctx);
    sink.write_all(source.as_bytes())?;
    tracing::debug!(
        "emitted {} ({} bytes) in package '{}'",
        artifact.class_name(),
        source.len(),
        ctx.package(schema)
    );
    Ok(())
}

const RESOURCE_ERROR_TEMPLATE: &str = r#"public class ResourceError {

    public int code;
    public String message;

    public ResourceError code(int code) {
        this.code = code;
        return this;
    }

    public ResourceError message(String message) {
        this.message = message;
        return this;
    }

    public String toString() {
        return "{code: " + code + ", message: \"" + message + "\"}";
    }

}
"#;

const PARSEC_RESOURCE_ERROR_TEMPLATE: &str = r#"public final class ParsecResourceError implements java.io.Serializable {

    private ParsecErrorBody error;

    public ParsecResourceError() { }

    public ParsecErrorBody getError() { return error; }

    public ParsecResourceError setError(ParsecErrorBody error) { this.error = error; return this; }
}
"#;

const PARSEC_ERROR_BODY_TEMPLATE: &str = r#"import java.util.List;

public final class ParsecErrorBody implements java.io.Serializable {

    private Integer code;
    private String message;

    private List<ParsecErrorDetail> detail;

    public ParsecErrorBody() { }

    public Integer getCode() { return code; }

    public String getMessage() { return message; }

    public List<ParsecErrorDetail> getDetail() { return detail; }

    public ParsecErrorBody setCode(Integer code) { this.code = code; return this; }

    public ParsecErrorBody setMessage(String message) { this.message = message; return this; }

    public ParsecErrorBody setDetail(List<ParsecErrorDetail> detail) { this.detail = detail; return this; }
}
"#;

const PARSEC_ERROR_DETAIL_TEMPLATE: &str = r#"public final class ParsecErrorDetail implements java.io.Serializable {

    private String message;

    private String invalidValue;

    public ParsecErrorDetail() { }

    public String getMessage() { return message; }

    public String getInvalidValue() { return invalidValue; }

    public ParsecErrorDetail setMessage(String message) { this.message = message; return this; }

    public ParsecErrorDetail setInvalidValue(String invalidValue) { this.invalidValue = invalidValue; return this; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn pets_schema() -> Schema {
        Schema::new()
            .with_namespace("com.example.pets")
            .with_name("Pets")
            .with_version(1)
    }

    #[test]
    fn test_class_and_file_names() {
        assert_eq!(Artifact::ParsecErrorBody.class_name(), "ParsecErrorBody");
        assert_eq!(
            Artifact::ResourceException.file_name(),
            "ResourceException.java"
        );
    }

    #[test]
    fn test_bodies_declare_their_class() {
        for artifact in Artifact::ALL {
            let body = artifact.body();
            assert!(
                body.contains(&format!("class {} ", artifact.class_name())),
                "{} body does not declare its class",
                artifact.class_name()
            );
        }
    }

    #[test]
    fn test_render_generated_placement() {
        let source = render(
            Artifact::ResourceError,
            &pets_schema(),
            &EmitContext::new().with_banner("rdlgen test"),
        );
        assert!(source.starts_with("//\n// This file is generated by rdlgen test\n"));
        assert!(source.contains("DO NOT edit directly"));
        assert!(source.contains("package com.example.pets.parsec_generated;\n\npublic class ResourceError {"));
    }

    #[test]
    fn test_render_original_placement_with_override() {
        let ctx = EmitContext::new()
            .with_namespace("org.acme")
            .with_placement(Placement::Original);
        let source = render(Artifact::ParsecErrorDetail, &pets_schema(), &ctx);
        assert!(source.contains("WILL NOT be auto-generated"));
        assert!(source.contains("package org.acme;\n"));
        assert!(!source.contains("com.example.pets"));
    }

    #[test]
    fn test_references_are_declared_by_name() {
        for artifact in Artifact::ALL {
            let body = artifact.body();
            for peer in artifact.references() {
                assert!(body.contains(peer.class_name()));
            }
        }
    }

    #[test]
    fn test_render_imports_peer_in_other_package() {
        let ctx = EmitContext::new().with_placement(Placement::Original);
        let source = render(Artifact::ResourceException, &pets_schema(), &ctx);
        assert!(source.contains(
            "package com.example.pets;\n\nimport com.example.pets.parsec_generated.ResourceError;\n\npublic class ResourceException"
        ));
    }

    #[test]
    fn test_render_imports_original_peer_from_generated_class() {
        let ctx = EmitContext::new()
            .with_peer_placement(Artifact::ParsecErrorBody, Placement::Original);
        let source = render(Artifact::ParsecResourceError, &pets_schema(), &ctx);
        assert!(source.contains("package com.example.pets.parsec_generated;\n"));
        assert!(source.contains("import com.example.pets.ParsecErrorBody;\n"));
    }

    #[test]
    fn test_render_same_package_has_no_imports() {
        let ctx = EmitContext::new()
            .with_placement(Placement::Original)
            .with_peer_placement(Artifact::ResourceError, Placement::Original);
        let source = render(Artifact::ResourceException, &pets_schema(), &ctx);
        assert!(!source.contains("import "));

        let source = render(Artifact::ParsecErrorBody, &pets_schema(), &EmitContext::new());
        assert!(!source.contains("import com."));
        assert!(source.contains("import java.util.List;"));
    }

    #[test]
    fn test_render_without_namespace_omits_package_for_original() {
        let ctx = EmitContext::new().with_placement(Placement::Original);
        let source = render(Artifact::ResourceError, &Schema::new(), &ctx);
        assert!(!source.contains("package "));
        assert!(source.contains("//\n\npublic class ResourceError {"));
    }

    #[test]
    fn test_error_value_shape() {
        let body = Artifact::ResourceError.body();
        assert!(body.contains("public int code;"));
        assert!(body.contains("public String message;"));
        assert!(body.contains("public ResourceError code(int code)"));
        assert!(body.contains("public ResourceError message(String message)"));
        assert!(body.contains("public String toString()"));
    }

    #[test]
    fn test_error_body_shape() {
        let body = Artifact::ParsecErrorBody.body();
        assert!(body.contains("private Integer code;"));
        assert!(body.contains("private List<ParsecErrorDetail> detail;"));
        assert!(body.contains("public ParsecErrorBody setDetail(List<ParsecErrorDetail> detail)"));
        assert!(Artifact::ParsecResourceError.body().contains("private ParsecErrorBody error;"));
    }

    #[test]
    fn test_emit_writes_rendered_source() {
        let schema = pets_schema();
        let ctx = EmitContext::new();
        let mut sink = Vec::new();
        emit(Artifact::ResourceException, &schema, &ctx, &mut sink).expect("emit succeeds");

        let written = String::from_utf8(sink).expect("valid UTF-8");
        assert_eq!(written, render(Artifact::ResourceException, &schema, &ctx));
        assert!(written.contains("case NOT_FOUND: return \"Not Found\";"));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let schema = pets_schema();
        let ctx = EmitContext::new();
        let mut first = Vec::new();
        let mut second = Vec::new();
        emit(Artifact::ParsecErrorBody, &schema, &ctx, &mut first).expect("emit succeeds");
        emit(Artifact::ParsecErrorBody, &schema, &ctx, &mut second).expect("emit succeeds");
        assert_eq!(first, second);
    }

    struct RejectingSink;

    impl Write for RejectingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_propagates_sink_error() {
        let result = emit(
            Artifact::ResourceError,
            &pets_schema(),
            &EmitContext::new(),
            &mut RejectingSink,
        );
        match result {
            Err(CodegenError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_parallel_emission() {
        let schema = pets_schema();
        let ctx = EmitContext::new();
        let outputs: Vec<Vec<u8>> = std::thread::scope(|scope| {
            let handles: Vec<_> = Artifact::ALL
                .iter()
                .map(|&artifact| {
                    let (schema, ctx) = (&schema, &ctx);
                    scope.spawn(move || {
                        let mut sink = Vec::new();
                        emit(artifact, schema, ctx, &mut sink).map(|()| sink)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread panicked").expect("emit succeeds"))
                .collect()
        });

        for (artifact, output) in Artifact::ALL.iter().zip(outputs) {
            assert_eq!(output, render(*artifact, &schema, &ctx).into_bytes());
        }
    }
}
