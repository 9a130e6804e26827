//! Java type resolution.
//!
//! Maps schema type references to Java type expressions. Scalars become
//! primitive tokens, or their boxed classes when the value is optional;
//! arrays become `List<..>` and maps `Map<..,..>`, resolved recursively.

use crate::error::CodegenError;
use rdlgen_schema::{BaseType, StructFieldDef, TypeDef, TypeRegistry};

/// Java token for untyped values.
pub const OBJECT: &str = "Object";

/// Java token for string-like values.
pub const STRING: &str = "String";

/// Name of the built-in untyped record.
pub const GENERIC_STRUCT: &str = "Struct";

/// Maximum collection nesting followed before giving up on a type.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Resolves schema type references to Java type expressions.
pub struct JavaTypeResolver<'a, R: ?Sized> {
    registry: &'a R,
}

impl<'a, R: TypeRegistry + ?Sized> JavaTypeResolver<'a, R> {
    /// Creates a new resolver over the given registry.
    #[must_use]
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Resolves a type reference to a Java type expression.
    ///
    /// # Arguments
    /// * `type_ref` - Name of the type to resolve
    /// * `optional` - Use the boxed class for boolean and numeric types
    /// * `items` - Element type when `type_ref` is not itself an array or map definition
    /// * `keys` - Key type when `type_ref` is not itself a map definition
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if any type on the way is missing
    /// from the registry, `CodegenError::NoBaseType` if one cannot be
    /// classified, and `CodegenError::RecursiveType` if collections nest
    /// deeper than [`MAX_NESTING_DEPTH`].
    pub fn resolve(
        &self,
        type_ref: &str,
        optional: bool,
        items: Option<&str>,
        keys: Option<&str>,
    ) -> Result<String, CodegenError> {
        self.resolve_nested(type_ref, optional, items, keys, 0)
    }

    /// Resolves the Java type of a struct field, honoring its optionality and
    /// inline element and key types.
    ///
    /// # Errors
    /// See [`JavaTypeResolver::resolve`].
    pub fn resolve_field(&self, field: &StructFieldDef) -> Result<String, CodegenError> {
        self.resolve(
            &field.type_ref,
            field.optional,
            field.items.as_deref(),
            field.keys.as_deref(),
        )
    }

    fn resolve_nested(
        &self,
        type_ref: &str,
        optional: bool,
        items: Option<&str>,
        keys: Option<&str>,
        depth: usize,
    ) -> Result<String, CodegenError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(CodegenError::RecursiveType {
                type_name: type_ref.to_string(),
                max_depth: MAX_NESTING_DEPTH,
            });
        }

        let type_def = self
            .registry
            .find_type(type_ref)
            .ok_or_else(|| CodegenError::unknown_type(type_ref))?;
        let base = self
            .registry
            .base_type(type_def)
            .ok_or_else(|| CodegenError::NoBaseType {
                type_name: type_ref.to_string(),
            })?;

        let resolved = match base {
            BaseType::Any => OBJECT.to_string(),
            BaseType::String | BaseType::Symbol | BaseType::Timestamp | BaseType::Uuid => {
                STRING.to_string()
            }
            BaseType::Bool => primitive(optional, "boolean", "Boolean"),
            BaseType::Int8 => primitive(optional, "byte", "Byte"),
            BaseType::Int16 => primitive(optional, "short", "Short"),
            BaseType::Int32 => primitive(optional, "int", "Integer"),
            BaseType::Int64 => primitive(optional, "long", "Long"),
            BaseType::Float32 => primitive(optional, "float", "Float"),
            BaseType::Float64 => primitive(optional, "double", "Double"),
            BaseType::Array => {
                let element = match type_def {
                    TypeDef::Array(array) => array.items.as_str(),
                    _ => override_or_any(items),
                };
                // List elements are always boxed.
                let element = self.resolve_nested(element, true, None, None, depth + 1)?;
                format!("List<{}>", element)
            }
            BaseType::Map => {
                let (key, value) = match type_def {
                    TypeDef::Map(map) => (map.keys.as_str(), map.items.as_str()),
                    _ => (override_or_any(keys), override_or_any(items)),
                };
                // Unlike list elements, map keys and values are resolved unboxed.
                let key = self.resolve_nested(key, false, None, None, depth + 1)?;
                let value = self.resolve_nested(value, false, None, None, depth + 1)?;
                format!("Map<{},{}>", key, value)
            }
            BaseType::Struct => {
                if type_def.name() == GENERIC_STRUCT {
                    OBJECT.to_string()
                } else {
                    type_ref.to_string()
                }
            }
            BaseType::Bytes | BaseType::Enum | BaseType::Union => type_ref.to_string(),
        };

        tracing::trace!(
            "resolved '{}' (optional={}) as {:?} -> {}",
            type_ref,
            optional,
            base,
            resolved
        );
        Ok(resolved)
    }
}

/// Resolves a type reference to a Java type expression.
///
/// Shorthand for [`JavaTypeResolver::resolve`].
///
/// # Errors
/// Returns `CodegenError` if the reference cannot be resolved.
pub fn java_type<R: TypeRegistry + ?Sized>(
    registry: &R,
    type_ref: &str,
    optional: bool,
    items: Option<&str>,
    keys: Option<&str>,
) -> Result<String, CodegenError> {
    JavaTypeResolver::new(registry).resolve(type_ref, optional, items, keys)
}

fn primitive(optional: bool, unboxed: &str, boxed: &str) -> String {
    let token = if optional { boxed } else { unboxed };
    token.to_string()
}

fn override_or_any(type_ref: Option<&str>) -> &str {
    type_ref
        .filter(|t| !t.is_empty())
        .unwrap_or(BaseType::Any.name())
}
