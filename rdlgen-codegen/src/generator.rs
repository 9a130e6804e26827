//! Support class generator.
//!
//! Writes the Java support classes for a schema to disk. Generated classes
//! are overwritten on every run; classes placed as
//! [`Placement::Original`] are only written when their file does not exist
//! yet.

use crate::error::CodegenError;
use crate::java::artifacts::{Artifact, DEFAULT_BANNER, EmitContext, emit};
use crate::java::namespace::Placement;
use crate::layout::{generated_sources_dir, original_sources_dir};
use rdlgen_schema::Schema;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of writing one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// The file was (re)written.
    Written,
    /// The file already existed and was left untouched.
    Skipped,
}

/// Artifact file handled by [`SupportGenerator::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    /// Which artifact.
    pub artifact: Artifact,
    /// Destination path.
    pub path: PathBuf,
    /// Whether the file was written.
    pub status: WriteStatus,
}

/// Builder-style generator for the Java support classes.
#[derive(Debug, Clone)]
pub struct SupportGenerator {
    banner: String,
    namespace: Option<String>,
    generated_dir: Option<PathBuf>,
    source_dir: Option<PathBuf>,
    placements: HashMap<Artifact, Placement>,
    artifacts: Vec<Artifact>,
}

impl SupportGenerator {
    /// Creates a generator for all artifacts with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            namespace: None,
            generated_dir: None,
            source_dir: None,
            placements: HashMap::new(),
            artifacts: Artifact::ALL.to_vec(),
        }
    }

    /// Sets the generator banner shown in file headers.
    #[must_use]
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Overrides the schema namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets the root directory for generated classes.
    #[must_use]
    pub fn generated_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.generated_dir = Some(dir.into());
        self
    }

    /// Sets the root directory for hand-maintained classes.
    #[must_use]
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Sets the placement of one artifact.
    #[must_use]
    pub fn placement(mut self, artifact: Artifact, placement: Placement) -> Self {
        self.placements.insert(artifact, placement);
        self
    }

    /// Restricts generation to the given artifacts.
    #[must_use]
    pub fn only(mut self, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        self.artifacts = artifacts.into_iter().collect();
        self
    }

    /// Returns the placement of `artifact`.
    #[must_use]
    pub fn placement_of(&self, artifact: Artifact) -> Placement {
        self.placements
            .get(&artifact)
            .copied()
            .unwrap_or_default()
    }

    /// Returns the emission context for `artifact`, including the placement
    /// of every other artifact it may refer to.
    #[must_use]
    pub fn context(&self, artifact: Artifact) -> EmitContext {
        let ctx = Artifact::ALL.into_iter().fold(
            EmitContext::new()
                .with_banner(self.banner.clone())
                .with_placement(self.placement_of(artifact)),
            |ctx, peer| ctx.with_peer_placement(peer, self.placement_of(peer)),
        );
        match &self.namespace {
            Some(ns) => ctx.with_namespace(ns.clone()),
            None => ctx,
        }
    }

    /// Writes every selected artifact for `schema`.
    ///
    /// Stops at the first failure.
    ///
    /// # Errors
    /// Returns `CodegenError` if a directory or file cannot be written.
    pub fn write_all(&self, schema: &Schema) -> Result<Vec<WrittenArtifact>, CodegenError> {
        let written = self
            .artifacts
            .iter()
            .map(|&artifact| self.write(artifact, schema))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(
            "support classes for {:?}: {} written, {} skipped",
            schema.name,
            written
                .iter()
                .filter(|w| w.status == WriteStatus::Written)
                .count(),
            written
                .iter()
                .filter(|w| w.status == WriteStatus::Skipped)
                .count()
        );
        Ok(written)
    }

    /// Writes one artifact for `schema`.
    ///
    /// # Errors
    /// Returns `CodegenError` if the directory or file cannot be written.
    pub fn write(&self, artifact: Artifact, schema: &Schema) -> Result<WrittenArtifact, CodegenError> {
        let ctx = self.context(artifact);
        let package = ctx.package(schema);
        let dir = match ctx.placement() {
            Placement::Generated => generated_sources_dir(self.generated_dir.as_deref(), &package)?,
            Placement::Original => original_sources_dir(self.source_dir.as_deref(), &package)?,
        };
        let path = dir.join(artifact.file_name());

        if ctx.placement() == Placement::Original && path.exists() {
            tracing::info!("keeping existing {}", path.display());
            return Ok(WrittenArtifact {
                artifact,
                path,
                status: WriteStatus::Skipped,
            });
        }

        write_file(&path, artifact, schema, &ctx)?;
        tracing::debug!("wrote {}", path.display());
        Ok(WrittenArtifact {
            artifact,
            path,
            status: WriteStatus::Written,
        })
    }
}

impl Default for SupportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(
    path: &Path,
    artifact: Artifact,
    schema: &Schema,
    ctx: &EmitContext,
) -> Result<(), CodegenError> {
    let mut writer = BufWriter::new(File::create(path)?);
    emit(artifact, schema, ctx, &mut writer)?;
    writer.flush()?;
    Ok(())
}
