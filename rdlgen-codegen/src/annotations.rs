//! Extended annotation lookup for user-defined types.

use rdlgen_schema::{Annotations, TypeDef};

/// Returns the extended annotations declared on the user type named
/// `type_ref`.
///
/// Struct, string, map, array, bytes, number and union definitions are
/// searched in list order and the first match wins. Returns an empty map when
/// nothing matches.
#[must_use]
pub fn annotations_of(type_ref: &str, schema_types: &[TypeDef]) -> Annotations {
    schema_types
        .iter()
        .filter(|type_def| {
            !matches!(
                type_def,
                TypeDef::Base(_) | TypeDef::Alias(_) | TypeDef::Enum(_)
            )
        })
        .find(|type_def| type_def.name() == type_ref)
        .and_then(TypeDef::annotations)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdlgen_schema::{
        AliasTypeDef, ArrayTypeDef, BaseType, MapTypeDef, NumberTypeDef, StringTypeDef,
        StructTypeDef, UnionTypeDef,
    };

    fn create_test_types() -> Vec<TypeDef> {
        vec![
            StructTypeDef::new("Pet")
                .with_annotation("x_table", "pets")
                .with_annotation("x_cache", "true")
                .into(),
            StringTypeDef::new("PetName")
                .with_annotation("x_format", "name")
                .into(),
            NumberTypeDef::new("Age", BaseType::Int32)
                .with_annotation("x_unit", "years")
                .into(),
            ArrayTypeDef::new("PetList", "Pet")
                .with_annotation("x_max", "100")
                .into(),
            MapTypeDef::new("PetIndex", "String", "Pet")
                .with_annotation("x_sorted", "false")
                .into(),
            UnionTypeDef::new("Either", ["Pet", "PetName"])
                .with_annotation("x_tag", "kind")
                .into(),
            StructTypeDef::new("Pet")
                .with_annotation("x_table", "duplicate")
                .into(),
        ]
    }

    #[test]
    fn test_struct_annotations() {
        let types = create_test_types();
        let annotations = annotations_of("Pet", &types);
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations.get("x_table").map(String::as_str), Some("pets"));
        assert_eq!(annotations.get("x_cache").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_first_match_wins() {
        let types = create_test_types();
        let annotations = annotations_of("Pet", &types);
        assert_ne!(
            annotations.get("x_table").map(String::as_str),
            Some("duplicate")
        );
    }

    #[test]
    fn test_each_variant_is_searched() {
        let types = create_test_types();
        let cases = [
            ("PetName", "x_format"),
            ("Age", "x_unit"),
            ("PetList", "x_max"),
            ("PetIndex", "x_sorted"),
            ("Either", "x_tag"),
        ];
        for (name, key) in cases {
            assert!(
                annotations_of(name, &types).contains_key(key),
                "missing {} on {}",
                key,
                name
            );
        }
    }

    #[test]
    fn test_missing_type_is_empty() {
        let types = create_test_types();
        assert!(annotations_of("Cat", &types).is_empty());
        assert!(annotations_of("Pet", &[]).is_empty());
    }

    #[test]
    fn test_alias_is_not_searched() {
        let mut alias = AliasTypeDef::new("Label", "String");
        alias
            .annotations
            .insert("x_hidden".to_string(), "yes".to_string());
        let types = vec![TypeDef::from(alias)];
        assert!(annotations_of("Label", &types).is_empty());
    }

    #[test]
    fn test_skipped_definition_does_not_hide_later_match() {
        let mut alias = AliasTypeDef::new("Pet", "Struct");
        alias
            .annotations
            .insert("x_table".to_string(), "alias".to_string());
        let types = vec![
            TypeDef::from(alias),
            StructTypeDef::new("Pet")
                .with_annotation("x_table", "pets")
                .into(),
        ];
        let annotations = annotations_of("Pet", &types);
        assert_eq!(annotations.get("x_table").map(String::as_str), Some("pets"));
    }
}
