//! End to end: table metadata to a generated module.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use typegen_core::ir::Dialect;
use typegen_core::{
    ColumnMetadata, DatabaseMetadata, GenerateError, RenderOptions, TableMetadata, generate,
    generate_from_json,
};

fn events_table() -> DatabaseMetadata {
    let mut created_at = ColumnMetadata::new("created_at", "TIMESTAMP");
    created_at.has_default = true;
    let mut name = ColumnMetadata::new("name", "STRING");
    name.is_nullable = true;

    DatabaseMetadata {
        tables: vec![TableMetadata {
            schema: None,
            name: "events".to_string(),
            columns: vec![ColumnMetadata::new("id", "INT64"), created_at, name],
        }],
    }
}

#[test]
fn test_bigquery_module() {
    let output = generate(&events_table(), Dialect::BigQuery, &RenderOptions::default()).unwrap();

    let expected = r#"import { ColumnType } from "kysely";
import { z } from "zod";

export type Generated<T> = T extends ColumnType<infer S, infer I, infer U>
  ? ColumnType<S, I | undefined, U>
  : ColumnType<T, T | undefined, T>;

export const Events = z.object({
  id: z.coerce.number(),
  created_at: z.coerce.date(),
  name: z.string().nullish(),
});
export interface Events {
  created_at: Generated<Date>;
  id: number;
  name: string | null;
}

export const DB = z.object({
  events: Events,
});
export interface DB {
  events: Events;
}
"#;
    assert_eq!(output, expected);
}

#[test]
fn test_output_is_deterministic() {
    let metadata = events_table();
    let mut reversed = metadata.clone();
    reversed.tables[0].columns.reverse();

    let options = RenderOptions::default();
    let first = generate(&metadata, Dialect::BigQuery, &options).unwrap();
    let second = generate(&metadata, Dialect::BigQuery, &options).unwrap();
    assert_eq!(first, second);

    // Static types do not depend on column order; validators do.
    let shuffled = generate(&reversed, Dialect::BigQuery, &options).unwrap();
    let static_part = |text: &str| text[text.find("export interface Events").unwrap()..].to_string();
    assert_eq!(static_part(&first), static_part(&shuffled));
    assert_ne!(first, shuffled);
}

#[test]
fn test_clickhouse_json_and_schema_prefix() {
    let json = r#"{
        "tables": [
            {
                "schema": "analytics",
                "name": "page_views",
                "columns": [
                    { "name": "payload", "dataType": "JSON", "comment": "raw event" },
                    { "name": "amount", "dataType": "Nullable(Decimal(18, 4))" },
                    { "name": "tags", "dataType": "Array(LowCardinality(String))" }
                ]
            }
        ]
    }"#;
    let output = generate_from_json(json, Dialect::ClickHouse, &RenderOptions::default()).unwrap();

    assert!(output.starts_with("import { ColumnType } from \"kysely\";\nimport { z } from \"zod\";\n\n"));
    assert!(output.contains("export type Decimal = ColumnType<string, number | string, number | string>;\n"));
    assert!(output.contains("export type Json = ColumnType<JsonValue, string, string>;\n"));
    assert!(output.contains("export type JsonArray = JsonValue[];\n"));
    assert!(output.contains("export type JsonObject = {\n  [K in string]?: JsonValue;\n};\n"));
    assert!(output.contains("export type JsonPrimitive = boolean | number | string | null;\n"));
    assert!(output.contains("export type JsonValue = JsonArray | JsonObject | JsonPrimitive;\n"));

    assert!(output.contains(
        "export const AnalyticsPageViews = z.object({\n  \
         /** raw event */\n  \
         payload: z.unknown().describe(\"raw event\"),\n  \
         amount: z.coerce.number().nullish(),\n  \
         tags: z.array(z.string()),\n\
         });\n"
    ));
    assert!(output.contains(
        "export interface AnalyticsPageViews {\n  \
         amount: Decimal | null;\n  \
         /** raw event */\n  \
         payload: Json;\n  \
         tags: string[];\n\
         }\n"
    ));
    assert!(output.contains("export interface DB {\n  \"analytics.page_views\": AnalyticsPageViews;\n}\n"));
    assert!(output.ends_with("}\n"));
}

#[test]
fn test_type_only_imports() {
    let options = RenderOptions {
        type_only_imports: true,
    };
    let output = generate(&events_table(), Dialect::BigQuery, &options).unwrap();
    assert!(output.starts_with(
        "import type { ColumnType } from \"kysely\";\nimport type { z } from \"zod\";\n\n"
    ));
}

#[test]
fn test_invalid_metadata_is_reported() {
    let err = generate_from_json(
        r#"{ "tables": [{ "columns": [] }] }"#,
        Dialect::ClickHouse,
        &RenderOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GenerateError::Metadata(_)));
}

#[test]
fn test_table_named_like_a_definition() {
    let lone = r#"{ "tables": [{ "name": "point", "columns": [{ "name": "id", "dataType": "Int64" }] }] }"#;
    let output = generate_from_json(lone, Dialect::ClickHouse, &RenderOptions::default()).unwrap();
    assert!(!output.contains("export type Point"));
    assert!(output.contains("export interface Point {\n  id: number;\n}\n"));

    let clashing = r#"{
        "tables": [
            { "name": "point", "columns": [{ "name": "id", "dataType": "Int64" }] },
            { "name": "places", "columns": [{ "name": "shape", "dataType": "Geography" }] }
        ]
    }"#;
    let err =
        generate_from_json(clashing, Dialect::ClickHouse, &RenderOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to build declarations: `Point` is declared both as a table interface and as a shared definition or import"
    );
}
