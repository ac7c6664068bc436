//! Pipeline entry points: metadata in, generated module text out.

use tracing::{debug, info};
use typegen_ir::Dialect;

use crate::assemble::{Assembler, DatabaseMetadata};
use crate::error::GenerateError;
use crate::options::RenderOptions;
use crate::serializer::Serializer;

/// Generate the interleaved validator and type module for `metadata`.
pub fn generate(
    metadata: &DatabaseMetadata,
    dialect: Dialect,
    options: &RenderOptions,
) -> Result<String, GenerateError> {
    let catalog = dialect.catalog()?;
    let statements = Assembler::new(&catalog).assemble(metadata)?;
    debug!(
        dialect = %dialect,
        statements = statements.len(),
        "assembled statement list"
    );

    let output = Serializer::new(*options).serialize(&statements)?;
    info!(
        dialect = %dialect,
        tables = metadata.tables.len(),
        bytes = output.len(),
        "generated module"
    );
    Ok(output)
}

/// Same as [`generate`], reading the metadata from a JSON document.
pub fn generate_from_json(
    json: &str,
    dialect: Dialect,
    options: &RenderOptions,
) -> Result<String, GenerateError> {
    let metadata: DatabaseMetadata = serde_json::from_str(json)?;
    generate(&metadata, dialect, options)
}
