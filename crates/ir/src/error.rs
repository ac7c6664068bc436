//! Errors raised while building IR nodes.

use thiserror::Error;

/// A structural invariant of the IR was violated while building nodes or
/// assembling declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    /// [`crate::Expression::union`] without variants
    #[error("union must have at least one variant")]
    EmptyUnion,
    /// [`crate::Expression::generic`] without arguments
    #[error("generic `{0}` must have at least one type argument")]
    EmptyGenericArgs(String),
    /// [`crate::Template::new`] without parameters
    #[error("template must declare at least one type parameter")]
    EmptyTemplateParams,
    /// [`crate::ImportStatement::new`] without names
    #[error("import from \"{0}\" must name at least one binding")]
    EmptyImport(String),
    /// A table interface shares its name with a definition or an import
    #[error("`{0}` is declared both as a table interface and as a shared definition or import")]
    DeclarationClash(String),
}
