//! Output properties of the dual serializer on hand-built IR.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use typegen_core::{Render, RenderError, Serializer, TypeRenderer, ValidatorRenderer};
use typegen_core::ir::{Expression, Property, Statement, Template, UnionExpression};

fn id(name: &str) -> Expression {
    Expression::identifier(name)
}

fn single_property(key: &str, value: Expression, description: Option<&str>) -> Statement {
    let mut property = Property::new(key, value);
    property.description = description.map(str::to_string);
    Statement::export_interface("Row", vec![property])
}

#[test]
fn test_user_round_trip_orders_keys_per_target() {
    let user = Statement::export_interface(
        "User",
        vec![
            Property::new("id", id("number")),
            Property::new("name", id("string")),
        ],
    );
    let output = Serializer::default().serialize(&[user]).unwrap();

    assert!(output.contains("export interface User {\n  id: number;\n  name: string;\n}"));
    assert!(output.contains(
        "const User = z.object({\n  id: z.coerce.number(),\n  name: z.string(),\n});"
    ));
}

#[test]
fn test_static_keys_are_sorted_validator_keys_are_not() {
    let row = Statement::export_interface(
        "Row",
        vec![
            Property::new("zeta", id("string")),
            Property::new("alpha", id("string")),
        ],
    );
    let blocks = Serializer::default().serialize_blocks(&[row]).unwrap();

    assert_eq!(
        blocks.types,
        "export interface Row {\n  alpha: string;\n  zeta: string;\n}\n"
    );
    assert_eq!(
        blocks.validators,
        "export const Row = z.object({\n  zeta: z.string(),\n  alpha: z.string(),\n});\n"
    );
}

#[test]
fn test_generic_alias_has_no_validator() {
    let alias = Statement::export_alias(
        "Box",
        Template::new(
            vec!["T".to_string()],
            Expression::generic("Box", vec![id("T")]).unwrap(),
        )
        .unwrap(),
    );

    let blocks = Serializer::default().serialize_blocks(&[alias.clone()]).unwrap();
    assert_eq!(blocks.types, "export type Box<T> = Box<T>;\n");
    assert_eq!(blocks.validators, "\n");

    let output = Serializer::default().serialize(&[alias]).unwrap();
    assert_eq!(output, "export type Box<T> = Box<T>;\n");
}

#[test]
fn test_union_canonical_order() {
    let union = Expression::union(vec![id("B"), id("undefined"), id("A"), id("null")]).unwrap();
    assert_eq!(
        TypeRenderer::default().render_expression(&union, 0).unwrap(),
        "A | B | null | undefined"
    );
}

#[test]
fn test_static_output_ignores_construction_order() {
    let first = Statement::export_interface(
        "Row",
        vec![
            Property::new("b", Expression::union(vec![id("string"), id("null")]).unwrap()),
            Property::new("a", id("number")),
        ],
    );
    let second = Statement::export_interface(
        "Row",
        vec![
            Property::new("a", id("number")),
            Property::new("b", Expression::union(vec![id("null"), id("string")]).unwrap()),
        ],
    );

    let renderer = TypeRenderer::default();
    assert_eq!(
        renderer.render(&[first]).unwrap(),
        renderer.render(&[second]).unwrap()
    );
}

#[test]
fn test_nullable_union_collapses_in_validator() {
    let nullable = Expression::union(vec![id("string"), id("null")]).unwrap();
    assert_eq!(
        ValidatorRenderer.render_expression(&nullable, 0).unwrap(),
        "z.string().nullish()"
    );
}

#[test]
fn test_array_parenthesization() {
    let renderer = TypeRenderer::default();
    let union_array = Expression::array(Expression::union(vec![id("B"), id("A")]).unwrap());
    assert_eq!(renderer.render_expression(&union_array, 0).unwrap(), "(A | B)[]");

    let plain_array = Expression::array(id("A"));
    assert_eq!(renderer.render_expression(&plain_array, 0).unwrap(), "A[]");
}

#[test]
fn test_object_key_quoting() {
    let blocks = Serializer::default()
        .serialize_blocks(&[Statement::export_interface(
            "Row",
            vec![
                Property::new("foo-bar", id("string")),
                Property::new("fooBar", id("string")),
            ],
        )])
        .unwrap();

    assert!(blocks.types.contains("  \"foo-bar\": string;\n"));
    assert!(blocks.types.contains("  fooBar: string;\n"));
    assert!(blocks.validators.contains("  \"foo-bar\": z.string(),\n"));
    assert!(blocks.validators.contains("  fooBar: z.string(),\n"));
}

#[test]
fn test_description_propagation() {
    let described = single_property("id", id("number"), Some("Primary key"));
    let blocks = Serializer::default().serialize_blocks(&[described]).unwrap();
    assert!(blocks.types.contains("  /** Primary key */\n  id: number;\n"));
    assert!(blocks
        .validators
        .contains("  id: z.coerce.number().describe(\"Primary key\"),\n"));

    for description in [None, Some(""), Some("  ")] {
        let blocks = Serializer::default()
            .serialize_blocks(&[single_property("id", id("number"), description)])
            .unwrap();
        assert!(!blocks.types.contains("/**"));
        assert!(!blocks.validators.contains(".describe("));
    }
}

#[test]
fn test_blank_line_separation() {
    let nodes: Vec<Statement> = serde_json::from_str(
        r#"[
            { "type": "ImportStatement", "moduleName": "kysely", "imports": [{ "name": "ColumnType" }] },
            { "type": "ImportStatement", "moduleName": "zod", "imports": [{ "name": "z" }] },
            {
                "type": "ExportStatement",
                "argument": {
                    "type": "AliasDeclaration",
                    "name": "Id",
                    "body": { "type": "Identifier", "name": "number" }
                }
            },
            {
                "type": "ExportStatement",
                "argument": {
                    "type": "InterfaceDeclaration",
                    "name": "Row",
                    "body": {
                        "properties": [{ "key": "id", "value": { "type": "Identifier", "name": "Id" } }]
                    }
                }
            }
        ]"#,
    )
    .unwrap();

    let output = Serializer::default().serialize(&nodes).unwrap();
    assert_eq!(
        output,
        "import { ColumnType } from \"kysely\";\n\
         import { z } from \"zod\";\n\
         \n\
         export type Id = number;\n\
         \n\
         export const Row = z.object({\n  id: Id,\n});\n\
         export interface Row {\n  id: Id;\n}\n"
    );
}

#[test]
fn test_malformed_node_names_the_declaration() {
    let broken = Statement::export_interface(
        "Broken",
        vec![Property::new(
            "tags",
            Expression::Union(UnionExpression { variants: vec![] }),
        )],
    );
    let err = Serializer::default().serialize(&[broken]).unwrap_err();
    assert!(matches!(err, RenderError::Declaration { .. }));
    assert_eq!(
        err.to_string(),
        "failed to render `Broken`: property `tags`: union has no variants"
    );
}
