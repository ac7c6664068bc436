//! Dual serializer for the type IR.
//!
//! Every exported declaration is rendered both as a static TypeScript type
//! and as a `zod` runtime validator:
//!
//! - [`TypeRenderer`] sorts object keys and union variants canonically
//! - [`ValidatorRenderer`] keeps insertion order
//! - [`Serializer`] interleaves the two into one module
//! - [`Assembler`] turns introspected table metadata into declarations
//!
//! [`generate`] runs the whole pipeline for one dialect.

mod assemble;
mod error;
mod generate;
mod options;
mod render;
mod serializer;
mod typescript;
mod utils;
mod zod;

pub use assemble::{Assembler, ColumnMetadata, DatabaseMetadata, TableMetadata};
pub use error::{GenerateError, RenderError};
pub use generate::{generate, generate_from_json};
pub use options::RenderOptions;
pub use render::Render;
pub use serializer::{RenderedBlocks, Serializer};
pub use typescript::TypeRenderer;
pub use zod::ValidatorRenderer;

pub use typegen_ir as ir;
