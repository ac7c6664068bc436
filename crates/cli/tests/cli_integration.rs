//! Integration tests for `typegen generate`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use typegen_cli::run_cli;

const METADATA: &str = r#"{
    "tables": [
        {
            "name": "users",
            "columns": [
                { "name": "id", "dataType": "UInt64", "isAutoIncrementing": true },
                { "name": "email", "dataType": "Nullable(String)", "comment": "login address" }
            ]
        }
    ]
}"#;

fn write_metadata(dir: &Path) -> PathBuf {
    let path = dir.join("metadata.json");
    fs::write(&path, METADATA).expect("Failed to write metadata");
    path
}

fn cli(args: &[&str]) -> i32 {
    let mut argv = vec!["typegen".to_string()];
    argv.extend(args.iter().map(|arg| (*arg).to_string()));
    run_cli(argv)
}

#[test]
fn test_generate_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_metadata(temp_dir.path());
    let out = temp_dir.path().join("src").join("db.ts");

    let code = cli(&[
        "generate",
        "--input",
        input.to_str().unwrap(),
        "--dialect",
        "clickhouse",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let output = fs::read_to_string(&out).unwrap();
    assert!(output.starts_with("import { ColumnType } from \"kysely\";\nimport { z } from \"zod\";\n"));
    assert!(output.contains("export type Generated<T> = "));
    assert!(output.contains(
        "export const Users = z.object({\n  \
         id: z.coerce.number(),\n  \
         /** login address */\n  \
         email: z.string().nullish().describe(\"login address\"),\n\
         });\n"
    ));
    assert!(output.contains(
        "export interface Users {\n  \
         /** login address */\n  \
         email: string | null;\n  \
         id: Generated<number>;\n\
         }\n"
    ));
    assert!(output.ends_with("export interface DB {\n  users: Users;\n}\n"));
}

#[test]
fn test_config_file_supplies_settings() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_metadata(temp_dir.path());
    let out = temp_dir.path().join("generated.ts");
    let config = temp_dir.path().join("typegen.toml");
    fs::write(
        &config,
        format!(
            "dialect = \"bigquery\"\ntype_only_imports = true\nout_file = {:?}\n",
            out.to_str().unwrap()
        ),
    )
    .unwrap();

    let code = cli(&[
        "generate",
        "--input",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let output = fs::read_to_string(&out).unwrap();
    assert!(output.starts_with("import type { ColumnType } from \"kysely\";\n"));
}

#[test]
fn test_flags_override_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_metadata(temp_dir.path());
    let config = temp_dir.path().join("typegen.toml");
    let from_config = temp_dir.path().join("from_config.ts");
    let from_flag = temp_dir.path().join("from_flag.ts");
    fs::write(
        &config,
        format!("dialect = \"bigquery\"\nout_file = {:?}\n", from_config.to_str().unwrap()),
    )
    .unwrap();

    let code = cli(&[
        "generate",
        "--input",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--out",
        from_flag.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(from_flag.exists());
    assert!(!from_config.exists());
}

#[test]
fn test_missing_dialect_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_metadata(temp_dir.path());
    let config = temp_dir.path().join("typegen.toml");
    fs::write(&config, "").unwrap();

    let code = cli(&[
        "generate",
        "--input",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert_eq!(code, 1);
}

#[test]
fn test_invalid_inputs_fail() {
    let temp_dir = TempDir::new().unwrap();
    let bad_json = temp_dir.path().join("bad.json");
    fs::write(&bad_json, "{ \"tables\": [").unwrap();

    let code = cli(&[
        "generate",
        "--input",
        bad_json.to_str().unwrap(),
        "--dialect",
        "clickhouse",
    ]);
    assert_eq!(code, 1);

    let missing = temp_dir.path().join("missing.json");
    let code = cli(&[
        "generate",
        "--input",
        missing.to_str().unwrap(),
        "--dialect",
        "clickhouse",
    ]);
    assert_eq!(code, 1);
}

#[test]
fn test_unknown_dialect_is_a_usage_error() {
    let code = cli(&["generate", "--input", "metadata.json", "--dialect", "postgres"]);
    assert_eq!(code, 2);
}
