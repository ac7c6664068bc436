//! Error types for rendering and the generation pipeline.

use thiserror::Error;
use typegen_ir::IrError;

/// Malformed IR reached a renderer.
///
/// These indicate a bug in whatever assembled the declarations; rendering
/// stops at the first one instead of emitting partial text.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Union built with no variants
    #[error("union has no variants")]
    EmptyUnion,
    /// Generic applied to no arguments
    #[error("generic `{0}` has no type arguments")]
    EmptyGeneric(String),
    /// Template with no type parameters
    #[error("template declares no type parameters")]
    EmptyTemplate,
    /// Import statement with no bindings
    #[error("import from \"{0}\" names no bindings")]
    EmptyImport(String),
    /// Module reference in expression position
    #[error("module reference to \"{0}\" cannot be rendered in type position")]
    ModuleReference(String),
    /// Failure inside an object property
    #[error("property `{key}`: {source}")]
    Property {
        /// Property key
        key: String,
        /// Underlying failure
        #[source]
        source: Box<RenderError>,
    },
    /// Failure inside a top-level declaration
    #[error("failed to render `{name}`: {source}")]
    Declaration {
        /// Declaration name
        name: String,
        /// Underlying failure
        #[source]
        source: Box<RenderError>,
    },
}

impl RenderError {
    pub(crate) fn in_property(key: &str) -> impl FnOnce(RenderError) -> RenderError + '_ {
        move |source| RenderError::Property {
            key: key.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn in_declaration(name: &str) -> impl FnOnce(RenderError) -> RenderError + '_ {
        move |source| RenderError::Declaration {
            name: name.to_string(),
            source: Box::new(source),
        }
    }
}

/// Failure anywhere in the metadata -> text pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input JSON did not match [`crate::DatabaseMetadata`]
    #[error("failed to parse database metadata: {0}")]
    Metadata(#[from] serde_json::Error),
    /// Catalog construction or declaration assembly failed
    #[error("failed to build declarations: {0}")]
    Catalog(#[from] IrError),
    /// Rendering failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_context_in_message() {
        let err = RenderError::in_declaration("Users")(RenderError::in_property("tags")(
            RenderError::EmptyUnion,
        ));
        assert_eq!(
            err.to_string(),
            "failed to render `Users`: property `tags`: union has no variants"
        );
    }
}
