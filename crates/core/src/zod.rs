//! Runtime validator declarations.
//!
//! Renders the IR as `zod` schema constructors. Unlike the static renderer
//! this target keeps insertion order for object properties and union
//! variants, and maps identifiers through their primitive kind.

use typegen_ir::{
    ArrayExpression, Declaration, ExportStatement, Expression, ExtendsClause, GenericExpression,
    Identifier, InterfaceDeclaration, ObjectExpression, PrimitiveKind, Property, Statement,
    UnionExpression,
};

use crate::error::RenderError;
use crate::render::Render;
use crate::utils::{doc_comment, indent, json_string, quote_if_needed, render_literal};

/// Renders `export const Name = z.object({ ... });` for exported interfaces.
///
/// Aliases and imports have no validator form and render as empty strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorRenderer;

impl ValidatorRenderer {
    fn render_export(&self, node: &ExportStatement) -> Result<String, RenderError> {
        match &node.argument {
            Declaration::Alias(_) => Ok(String::new()),
            Declaration::Interface(interface) => self
                .render_interface(interface)
                .map_err(RenderError::in_declaration(&interface.name)),
        }
    }

    fn render_interface(&self, node: &InterfaceDeclaration) -> Result<String, RenderError> {
        Ok(format!(
            "export const {} = {};",
            node.name,
            self.render_object(&node.body, 0)?
        ))
    }

    fn render_identifier(&self, node: &Identifier) -> String {
        match node.kind {
            PrimitiveKind::Unknown => "z.unknown()".to_string(),
            PrimitiveKind::Boolean => "z.boolean()".to_string(),
            PrimitiveKind::Date => "z.coerce.date()".to_string(),
            PrimitiveKind::Null => "z.null()".to_string(),
            PrimitiveKind::Number => "z.coerce.number()".to_string(),
            PrimitiveKind::String => "z.string()".to_string(),
            PrimitiveKind::Undefined => ".optional()".to_string(),
            PrimitiveKind::Reference => node.name.clone(),
        }
    }

    fn render_array(&self, node: &ArrayExpression, depth: usize) -> Result<String, RenderError> {
        let element = self.render_expression(&node.element, depth)?;
        if node.element.is_multi_variant_union() {
            Ok(format!("z.array(z.union({element}))"))
        } else {
            Ok(format!("z.array({element})"))
        }
    }

    fn render_union(&self, node: &UnionExpression, depth: usize) -> Result<String, RenderError> {
        if node.variants.is_empty() {
            return Err(RenderError::EmptyUnion);
        }

        // T | null collapses into T.nullish(); anything else is enumerated in full
        if let Some(inner) = node.nullable_inner() {
            return Ok(format!("{}.nullish()", self.render_expression(inner, depth)?));
        }

        let variants = node
            .variants
            .iter()
            .map(|variant| self.render_expression(variant, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("z.enum([{}])", variants.join(", ")))
    }

    fn render_object(&self, node: &ObjectExpression, depth: usize) -> Result<String, RenderError> {
        if node.properties.is_empty() {
            return Ok("z.object({})".to_string());
        }

        let mut output = String::from("z.object({\n");
        for property in &node.properties {
            output.push_str(
                &self
                    .render_property(property, depth + 1)
                    .map_err(RenderError::in_property(&property.key))?,
            );
        }
        output.push_str(&indent(depth));
        output.push_str("})");
        Ok(output)
    }

    fn render_property(&self, node: &Property, depth: usize) -> Result<String, RenderError> {
        let prefix = indent(depth);
        let description = node.trimmed_description();
        let mut output = String::new();

        if let Some(description) = description {
            output.push_str(&format!("{prefix}{}\n", doc_comment(description)));
        }

        output.push_str(&format!(
            "{prefix}{}: {}",
            quote_if_needed(&node.key),
            self.render_expression(&node.value, depth)?
        ));

        if let Some(description) = description {
            let quoted = json_string(description);
            if quoted.len() > 2 {
                output.push_str(&format!(".describe({quoted})"));
            }
        }

        output.push_str(",\n");
        Ok(output)
    }

    /// Validators have no generic application; the arguments are inlined.
    fn render_generic(&self, node: &GenericExpression, depth: usize) -> Result<String, RenderError> {
        if node.args.is_empty() {
            return Err(RenderError::EmptyGeneric(node.name.clone()));
        }

        let args = node
            .args
            .iter()
            .map(|arg| self.render_expression(arg, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(args.join(", "))
    }

    fn render_extends(&self, node: &ExtendsClause, depth: usize) -> Result<String, RenderError> {
        let branch_indent = indent(depth + 1);
        Ok(format!(
            "{} extends {}\n{branch_indent}? {}\n{branch_indent}: {}",
            node.name,
            self.render_expression(&node.test, depth + 1)?,
            self.render_expression(&node.consequent, depth + 1)?,
            self.render_expression(&node.alternate, depth + 1)?,
        ))
    }
}

impl Render for ValidatorRenderer {
    fn render_expression(&self, node: &Expression, depth: usize) -> Result<String, RenderError> {
        match node {
            Expression::Identifier(id) => Ok(self.render_identifier(id)),
            Expression::Literal(literal) => Ok(render_literal(&literal.value)),
            Expression::Array(array) => self.render_array(array, depth),
            Expression::Union(union) => self.render_union(union, depth),
            Expression::Object(object) => self.render_object(object, depth),
            Expression::Generic(generic) => self.render_generic(generic, depth),
            Expression::Extends(clause) => self.render_extends(clause, depth),
            Expression::Infer(clause) => Ok(format!("infer {}", clause.name)),
            Expression::Mapped(mapped) => Ok(format!(
                "z.record(z.string(), {}.optional())",
                self.render_expression(&mapped.value, depth)?
            )),
            Expression::ModuleReference(reference) => {
                Err(RenderError::ModuleReference(reference.module_name.clone()))
            }
        }
    }

    fn render_statement(&self, node: &Statement) -> Result<String, RenderError> {
        match node {
            Statement::Import(_) => Ok(String::new()),
            Statement::Export(export) => self.render_export(export),
        }
    }
}
