//! Type registry.
//!
//! The [`TypeRegistry`] trait is the lookup capability code generators depend
//! on. [`SchemaRegistry`] is the in-memory implementation built from a parsed
//! [`Schema`].

use crate::types::{BaseType, Schema, TypeDef};
use std::collections::HashMap;

/// Name lookup and base-type classification for schema types.
pub trait TypeRegistry {
    /// Looks up a type definition by name.
    fn find_type(&self, name: &str) -> Option<&TypeDef>;

    /// Derives the base type a definition reduces to.
    ///
    /// Returns `None` when the definition's supertype chain is broken.
    fn base_type(&self, type_def: &TypeDef) -> Option<BaseType>;
}

impl<R: TypeRegistry + ?Sized> TypeRegistry for &R {
    fn find_type(&self, name: &str) -> Option<&TypeDef> {
        (**self).find_type(name)
    }

    fn base_type(&self, type_def: &TypeDef) -> Option<BaseType> {
        (**self).base_type(type_def)
    }
}

/// In-memory registry holding the built-in base types and a schema's types.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    types: Vec<TypeDef>,
    type_map: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Creates a registry containing only the built-in base types.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self {
            types: Vec::with_capacity(BaseType::ALL.len()),
            type_map: HashMap::with_capacity(BaseType::ALL.len()),
        };
        for bt in BaseType::ALL {
            registry.add_type(TypeDef::Base(bt));
        }
        registry
    }

    /// Creates a registry for the given schema.
    ///
    /// Schema types are registered in declaration order after the built-ins.
    #[must_use]
    pub fn new(schema: &Schema) -> Self {
        let mut registry = Self::builtin();
        for type_def in &schema.types {
            registry.add_type(type_def.clone());
        }
        registry
    }

    /// Registers a type definition.
    ///
    /// Returns false, leaving the registry untouched, if the name is already
    /// taken.
    pub fn add_type(&mut self, type_def: TypeDef) -> bool {
        let name = type_def.name();
        if self.has_type(name) {
            tracing::debug!("ignoring duplicate definition of type '{}'", name);
            return false;
        }
        self.type_map.insert(name.to_string(), self.types.len());
        self.types.push(type_def);
        true
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Returns the number of registered types, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeRegistry for SchemaRegistry {
    fn find_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    fn base_type(&self, type_def: &TypeDef) -> Option<BaseType> {
        let mut current = type_def;
        // A chain longer than the registry must revisit a type.
        for _ in 0..=self.types.len() {
            match current {
                TypeDef::Base(bt) => return Some(*bt),
                other => {
                    let supertype = other.supertype()?;
                    current = self.find_type(supertype)?;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AliasTypeDef, ArrayTypeDef, NumberTypeDef, StringTypeDef, StructTypeDef};

    fn create_test_schema() -> Schema {
        Schema::new()
            .with_name("Test")
            .with_type(StringTypeDef::new("Name"))
            .with_type(NumberTypeDef::new("Count", BaseType::Int32))
            .with_type(StructTypeDef::new("Pet"))
            .with_type(StructTypeDef::new("Dog").with_annotation("x_parent", "Pet"))
            .with_type(ArrayTypeDef::new("PetList", "Pet"))
            .with_type(AliasTypeDef::new("Label", "Name"))
    }

    #[test]
    fn test_builtin_registry() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(registry.len(), BaseType::ALL.len());
        for bt in BaseType::ALL {
            let def = registry.find_type(bt.name()).expect("builtin registered");
            assert_eq!(registry.base_type(def), Some(bt));
        }
    }

    #[test]
    fn test_find_schema_types() {
        let registry = SchemaRegistry::new(&create_test_schema());
        assert!(registry.has_type("Pet"));
        assert!(registry.find_type("PetList").is_some_and(|def| matches!(def, TypeDef::Array(_))));
        assert!(registry.find_type("Cat").is_none());
    }

    #[test]
    fn test_base_type_follows_supertype_chain() {
        let registry = SchemaRegistry::new(&create_test_schema());
        let base_of = |name: &str| {
            let def = registry.find_type(name).expect("type exists");
            registry.base_type(def)
        };

        assert_eq!(base_of("Name"), Some(BaseType::String));
        assert_eq!(base_of("Label"), Some(BaseType::String));
        assert_eq!(base_of("Count"), Some(BaseType::Int32));
        assert_eq!(base_of("PetList"), Some(BaseType::Array));
        assert_eq!(base_of("Pet"), Some(BaseType::Struct));
    }

    #[test]
    fn test_base_type_broken_chain() {
        let schema = Schema::new().with_type(AliasTypeDef::new("Dangling", "Nowhere"));
        let registry = SchemaRegistry::new(&schema);
        let def = registry.find_type("Dangling").expect("type exists");
        assert_eq!(registry.base_type(def), None);
    }

    #[test]
    fn test_base_type_cycle() {
        let schema = Schema::new()
            .with_type(AliasTypeDef::new("A", "B"))
            .with_type(AliasTypeDef::new("B", "A"));
        let registry = SchemaRegistry::new(&schema);
        let def = registry.find_type("A").expect("type exists");
        assert_eq!(registry.base_type(def), None);
    }

    #[test]
    fn test_first_definition_wins() {
        let schema = Schema::new()
            .with_type(StringTypeDef::new("Id"))
            .with_type(NumberTypeDef::new("Id", BaseType::Int64));
        let registry = SchemaRegistry::new(&schema);
        let def = registry.find_type("Id").expect("type exists");
        assert_eq!(registry.base_type(def), Some(BaseType::String));
    }

    #[test]
    fn test_schema_cannot_shadow_builtin() {
        let schema = Schema::new().with_type(StructTypeDef::new("String"));
        let registry = SchemaRegistry::new(&schema);
        let def = registry.find_type("String").expect("type exists");
        assert!(matches!(def, TypeDef::Base(BaseType::String)));
    }

    #[test]
    fn test_registry_through_reference() {
        fn lookup<R: TypeRegistry>(registry: R) -> bool {
            registry.find_type("Pet").is_some()
        }
        let registry = SchemaRegistry::new(&create_test_schema());
        assert!(lookup(&registry));
    }
}
