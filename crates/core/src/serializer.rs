//! Output assembly.
//!
//! Every exported declaration is rendered twice: first as a runtime
//! validator, then as a static type. Imports only have a static form.

use tracing::{debug, trace};
use typegen_ir::Statement;

use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::render::Render;
use crate::typescript::TypeRenderer;
use crate::utils::join_statements;
use crate::zod::ValidatorRenderer;

/// The two output blocks rendered independently of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlocks {
    /// Static type declarations
    pub types: String,
    /// `zod` validators
    pub validators: String,
}

/// Drives both renderers over a declaration sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    types: TypeRenderer,
    validators: ValidatorRenderer,
}

impl Serializer {
    /// Serializer with both renderers configured by `options`.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            types: TypeRenderer::new(options),
            validators: ValidatorRenderer,
        }
    }

    /// Render the interleaved stream: for each export the validator, a
    /// newline, then the static type; imports as static text only.
    pub fn serialize(&self, nodes: &[Statement]) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(nodes.len());

        for node in nodes {
            let text = self.serialize_statement(node)?;
            trace!(
                is_import = node.is_import(),
                len = text.len(),
                "rendered statement"
            );
            parts.push((node.is_import(), text));
        }

        let output = join_statements(parts);
        debug!(
            statements = nodes.len(),
            bytes = output.len(),
            "serialized declarations"
        );
        Ok(output)
    }

    fn serialize_statement(&self, node: &Statement) -> Result<String, RenderError> {
        let static_form = self.types.render_statement(node)?;
        if node.is_import() {
            return Ok(static_form);
        }

        let validator = self.validators.render_statement(node)?;
        if validator.is_empty() {
            Ok(static_form)
        } else {
            Ok(format!("{validator}\n{static_form}"))
        }
    }

    /// Render the static types and the validators as two separate blocks.
    ///
    /// The renderers share nothing mutable, so both run in parallel.
    pub fn serialize_blocks(&self, nodes: &[Statement]) -> Result<RenderedBlocks, RenderError> {
        let (types, validators) = rayon::join(
            || self.types.render(nodes),
            || self.validators.render(nodes),
        );
        let blocks = RenderedBlocks {
            types: types?,
            validators: validators?,
        };
        debug!(
            statements = nodes.len(),
            types_bytes = blocks.types.len(),
            validators_bytes = blocks.validators.len(),
            "serialized separate blocks"
        );
        Ok(blocks)
    }
}
