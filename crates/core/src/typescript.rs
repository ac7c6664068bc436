//! Static type declarations.
//!
//! Renders the IR as TypeScript type syntax. Object keys and union variants
//! are put into canonical order so the output does not depend on the order
//! the IR was built in.

use typegen_ir::{
    AliasBody, AliasDeclaration, ArrayExpression, Declaration, ExportStatement, Expression,
    ExtendsClause, GenericExpression, ImportClause, ImportStatement, InterfaceDeclaration,
    ObjectExpression, Property, Statement, UnionExpression,
};

use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::render::Render;
use crate::utils::{
    canonical_union_order, doc_comment, indent, json_string, quote_if_needed, render_literal,
    sorted_properties,
};

/// Renders type aliases, interfaces and imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeRenderer {
    options: RenderOptions,
}

impl TypeRenderer {
    /// Renderer configured by `options`.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn render_export(&self, node: &ExportStatement) -> Result<String, RenderError> {
        let declaration = match &node.argument {
            Declaration::Alias(alias) => self.render_alias(alias),
            Declaration::Interface(interface) => self.render_interface(interface),
        }
        .map_err(RenderError::in_declaration(node.argument.name()))?;

        Ok(format!("export {declaration}"))
    }

    fn render_alias(&self, node: &AliasDeclaration) -> Result<String, RenderError> {
        let params = node.body.params();
        let mut output = format!("type {}", node.name);

        if let AliasBody::Template(_) = &node.body {
            if params.is_empty() {
                return Err(RenderError::EmptyTemplate);
            }
            output.push('<');
            output.push_str(&params.join(", "));
            output.push('>');
        }

        output.push_str(" = ");
        output.push_str(&self.render_expression(node.body.expression(), 0)?);
        output.push(';');
        Ok(output)
    }

    fn render_interface(&self, node: &InterfaceDeclaration) -> Result<String, RenderError> {
        Ok(format!(
            "interface {} {}",
            node.name,
            self.render_object(&node.body, 0)?
        ))
    }

    fn render_import(&self, node: &ImportStatement) -> Result<String, RenderError> {
        if node.imports.is_empty() {
            return Err(RenderError::EmptyImport(node.module_name.clone()));
        }

        let items = node
            .imports
            .iter()
            .map(render_import_clause)
            .collect::<Vec<_>>()
            .join(", ");
        let type_keyword = if self.options.type_only_imports {
            "type "
        } else {
            ""
        };

        Ok(format!(
            "import {type_keyword}{{ {items} }} from {};",
            json_string(&node.module_name)
        ))
    }

    fn render_array(&self, node: &ArrayExpression, depth: usize) -> Result<String, RenderError> {
        let element = self.render_expression(&node.element, depth)?;
        // Wrap unions in parentheses: (A | B)[] not A | B[]
        if node.element.is_multi_variant_union() {
            Ok(format!("({element})[]"))
        } else {
            Ok(format!("{element}[]"))
        }
    }

    fn render_union(&self, node: &UnionExpression, depth: usize) -> Result<String, RenderError> {
        if node.variants.is_empty() {
            return Err(RenderError::EmptyUnion);
        }

        let variants = canonical_union_order(&node.variants)
            .into_iter()
            .map(|variant| self.render_expression(variant, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(variants.join(" | "))
    }

    fn render_object(&self, node: &ObjectExpression, depth: usize) -> Result<String, RenderError> {
        if node.properties.is_empty() {
            return Ok("{}".to_string());
        }

        let mut output = String::from("{\n");
        for property in sorted_properties(&node.properties) {
            output.push_str(
                &self
                    .render_property(property, depth + 1)
                    .map_err(RenderError::in_property(&property.key))?,
            );
        }
        output.push_str(&indent(depth));
        output.push('}');
        Ok(output)
    }

    fn render_property(&self, node: &Property, depth: usize) -> Result<String, RenderError> {
        let prefix = indent(depth);
        let mut output = String::new();

        if let Some(description) = node.trimmed_description() {
            output.push_str(&format!("{prefix}{}\n", doc_comment(description)));
        }

        output.push_str(&format!(
            "{prefix}{}: {};\n",
            quote_if_needed(&node.key),
            self.render_expression(&node.value, depth)?
        ));
        Ok(output)
    }

    fn render_generic(&self, node: &GenericExpression, depth: usize) -> Result<String, RenderError> {
        if node.args.is_empty() {
            return Err(RenderError::EmptyGeneric(node.name.clone()));
        }

        let args = node
            .args
            .iter()
            .map(|arg| self.render_expression(arg, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}<{}>", node.name, args.join(", ")))
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

    fn render_mapped(&self, value: &Expression, depth: usize) -> Result<String, RenderError> {
        Ok(format!(
            "{{\n{}[K in string]?: {};\n{}}}",
            indent(depth + 1),
            self.render_expression(value, depth + 1)?,
            indent(depth)
        ))
    }
}

fn render_import_clause(node: &ImportClause) -> String {
    match &node.alias {
        Some(alias) => format!("{} as {}", node.name, alias),
        None => node.name.clone(),
    }
}

impl Render for TypeRenderer {
    fn render_expression(&self, node: &Expression, depth: usize) -> Result<String, RenderError> {
        match node {
            Expression::Identifier(id) => Ok(id.name.clone()),
            Expression::Literal(literal) => Ok(render_literal(&literal.value)),
            Expression::Array(array) => self.render_array(array, depth),
            Expression::Union(union) => self.render_union(union, depth),
            Expression::Object(object) => self.render_object(object, depth),
            Expression::Generic(generic) => self.render_generic(generic, depth),
            Expression::Extends(clause) => self.render_extends(clause, depth),
            Expression::Infer(clause) => Ok(format!("infer {}", clause.name)),
            Expression::Mapped(mapped) => self.render_mapped(&mapped.value, depth),
            Expression::ModuleReference(reference) => {
                Err(RenderError::ModuleReference(reference.module_name.clone()))
            }
        }
    }

    fn render_statement(&self, node: &Statement) -> Result<String, RenderError> {
        match node {
            Statement::Import(import) => self.render_import(import),
            Statement::Export(export) => self.render_export(export),
        }
    }
}
