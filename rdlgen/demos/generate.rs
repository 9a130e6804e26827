//! Resolves the Java field types of an RDL schema and writes its support
//! classes.
//!
//! Run with: `cargo run --example generate -- [schema.json] [out-dir]`
//!
//! Without arguments a small built-in schema is used and output goes to
//! `./target/rdlgen-demo`.

use rdlgen::prelude::*;
use std::path::{Path, PathBuf};

const DEMO_SCHEMA: &str = r#"{
    "name": "Pets",
    "version": 1,
    "namespace": "com.example.pets",
    "types": [
        {"StringTypeDef": {"type": "String", "name": "PetName", "maxSize": 64}},
        {"NumberTypeDef": {"type": "Int32", "name": "Age", "min": 0,
                           "annotations": {"x_unit": "years"}}},
        {"StructTypeDef": {"type": "Struct", "name": "Pet", "fields": [
            {"name": "name", "type": "PetName"},
            {"name": "age", "type": "Age", "optional": true},
            {"name": "tags", "type": "Array", "items": "String"},
            {"name": "scores", "type": "Map", "keys": "String", "items": "Float64"},
            {"name": "extra", "type": "Struct", "optional": true}
        ]}},
        {"ArrayTypeDef": {"type": "Array", "name": "PetList", "items": "Pet"}}
    ]
}"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let schema = match args.next() {
        Some(path) => parse_schema_file(Path::new(&path))?,
        None => parse_schema(DEMO_SCHEMA)?,
    };
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./target/rdlgen-demo"));

    let registry = SchemaRegistry::new(&schema);
    let resolver = JavaTypeResolver::new(&registry);

    println!("package {}", original_namespace(&schema, None));
    println!("root path {}", root_path(&schema, None));

    for type_def in &schema.types {
        let annotations = annotations_of(type_def.name(), &schema.types);
        if !annotations.is_empty() {
            println!("{} annotations: {:?}", type_def.name(), annotations);
        }
        let TypeDef::Struct(struct_def) = type_def else {
            let java = java_type(&registry, type_def.name(), false, None, None)?;
            println!("{} -> {}", type_def.name(), java);
            continue;
        };
        println!("class {} {{", struct_def.name);
        for field in &struct_def.fields {
            println!("    {} {};", resolver.resolve_field(field)?, field.name);
        }
        println!("}}");
    }

    let generator = SupportGenerator::new()
        .generated_dir(out_dir.join("generated-sources"))
        .source_dir(out_dir.join("src"))
        .placement(Artifact::ResourceException, Placement::Original);

    for written in generator.write_all(&schema)? {
        tracing::info!(
            "{:?} {} -> {}",
            written.status,
            written.artifact.class_name(),
            written.path.display()
        );
    }

    Ok(())
}
