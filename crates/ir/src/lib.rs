//! Dialect-independent type IR.
//!
//! This crate holds the data side of the generator:
//! - `types`: the node model (expressions, declarations, statements)
//! - `kind`: primitive kind tags attached to identifiers
//! - `column`: select/insert/update column types
//! - `catalog`: per-dialect scalar tables and shared definitions
//! - `dialects`: the built-in catalogs
//!
//! Nothing here renders text; see `typegen-core` for the serializer.

mod catalog;
mod column;
pub mod definitions;
mod dialects;
mod error;
mod kind;
mod types;

pub use catalog::{ResolvedScalar, ScalarName, TypeCatalog};
pub use column::ColumnType;
pub use dialects::Dialect;
pub use error::IrError;
pub use kind::PrimitiveKind;
pub use types::{
    AliasBody, AliasDeclaration, ArrayExpression, Declaration, ExportStatement, Expression,
    ExtendsClause, GenericExpression, Identifier, ImportClause, ImportStatement, InferClause,
    InterfaceDeclaration, Literal, LiteralValue, MappedType, ModuleReference, ObjectExpression,
    Property, Statement, Template, UnionExpression,
};
