//! Common dispatch interface of the two renderers.

use typegen_ir::{Expression, Statement};

use crate::error::RenderError;
use crate::utils::join_statements;

/// A rendering target for the type IR.
///
/// Both targets walk the same nodes but disagree on ordering and on how
/// identifiers map to output, so each implements its own visitor.
pub trait Render {
    /// Render a type expression nested `depth` levels deep.
    fn render_expression(&self, node: &Expression, depth: usize) -> Result<String, RenderError>;

    /// Render a top-level statement. An empty string means the statement
    /// has no form in this target.
    fn render_statement(&self, node: &Statement) -> Result<String, RenderError>;

    /// Render a statement sequence into a single block.
    fn render(&self, nodes: &[Statement]) -> Result<String, RenderError> {
        let mut parts = Vec::with_capacity(nodes.len());
        for node in nodes {
            let text = self.render_statement(node)?;
            if !text.is_empty() {
                parts.push((node.is_import(), text));
            }
        }
        Ok(join_statements(parts))
    }
}
