//! Type IR for declaration generation.
//!
//! This module defines the node model shared by both renderers:
//! - Expression: type expressions (identifiers, unions, objects, generics, ...)
//! - Statement: top-level imports and exported declarations
//!
//! Nodes are plain data. All rendering lives in `typegen-core`.

use serde::{Deserialize, Serialize};

use crate::error::IrError;
use crate::kind::PrimitiveKind;

// =============================================================================
// Expressions
// =============================================================================

/// Type expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Reference to a scalar, a shared definition or a type parameter: `string`, `JsonValue`, `T`
    Identifier(Identifier),
    /// Literal type: `"active"`, `42`, `true`
    Literal(Literal),
    /// Homogeneous sequence: `T[]`
    Array(ArrayExpression),
    /// Sum type: `A | B | null`
    Union(UnionExpression),
    /// Structural record: `{ id: number; name: string }`
    Object(ObjectExpression),
    /// Type constructor application: `ColumnType<S, I, U>`
    Generic(GenericExpression),
    /// Conditional type: `T extends U ? X : Y`
    #[serde(rename = "ExtendsClause")]
    Extends(ExtendsClause),
    /// Placeholder bound inside a conditional type: `infer S`
    #[serde(rename = "InferClause")]
    Infer(InferClause),
    /// Optional string-keyed index signature: `{ [K in string]?: T }`
    #[serde(rename = "MappedType")]
    Mapped(MappedType),
    /// Marks that an identifier has to be imported from a module
    ModuleReference(ModuleReference),
}

/// Named reference with its primitive kind decided at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IdentifierRepr")]
pub struct Identifier {
    /// Name as written in the output
    pub name: String,
    /// What the validator renderer checks for
    pub kind: PrimitiveKind,
}

#[derive(Deserialize)]
struct IdentifierRepr {
    name: String,
    #[serde(default)]
    kind: Option<PrimitiveKind>,
}

impl From<IdentifierRepr> for Identifier {
    fn from(repr: IdentifierRepr) -> Self {
        let kind = repr
            .kind
            .unwrap_or_else(|| PrimitiveKind::classify(&repr.name));
        Identifier {
            name: repr.name,
            kind,
        }
    }
}

impl Identifier {
    /// Build an identifier, classifying its name against the builtin table.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = PrimitiveKind::classify(&name);
        Identifier { name, kind }
    }

    /// Build an identifier that always refers to another declaration,
    /// even when its name collides with a builtin such as `Date`.
    pub fn reference(name: impl Into<String>) -> Self {
        Identifier {
            name: name.into(),
            kind: PrimitiveKind::Reference,
        }
    }

    /// True for the `null` identifier.
    pub fn is_null(&self) -> bool {
        self.name == "null"
    }

    /// True for the `undefined` identifier.
    pub fn is_undefined(&self) -> bool {
        self.name == "undefined"
    }
}

/// Literal values allowed in type position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// `true` or `false`
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// String literal, quoted on output
    String(String),
}

/// Literal type node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    /// The literal
    pub value: LiteralValue,
}

/// `T[]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    /// Element type
    pub element: Box<Expression>,
}

/// Union variants are kept in the order they were built; renderers decide
/// the presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionExpression {
    /// Variants in construction order
    pub variants: Vec<Expression>,
}

impl UnionExpression {
    /// A two-variant union whose second variant is the `null` identifier.
    pub fn nullable_inner(&self) -> Option<&Expression> {
        match self.variants.as_slice() {
            [inner, Expression::Identifier(second)] if second.is_null() => Some(inner),
            _ => None,
        }
    }
}

/// `{ key: T; ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpression {
    /// Properties in construction order
    pub properties: Vec<Property>,
}

/// Object property definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name, quoted on output when it is not a valid identifier
    pub key: String,
    /// Property type
    pub value: Expression,
    /// Emitted as a doc comment and a `.describe(...)` call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    /// Property without description.
    pub fn new(key: impl Into<String>, value: Expression) -> Self {
        Property {
            key: key.into(),
            value,
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description with surrounding whitespace removed, if anything is left.
    pub fn trimmed_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

/// `Name<A, B>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericExpression {
    /// Type constructor
    pub name: String,
    /// Type arguments, never empty
    pub args: Vec<Expression>,
}

/// `name extends test ? consequent : alternate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendsClause {
    /// Checked type parameter
    pub name: String,
    /// Pattern tested against `name`
    pub test: Box<Expression>,
    /// Type when the pattern matches
    pub consequent: Box<Expression>,
    /// Type otherwise
    pub alternate: Box<Expression>,
}

/// `infer name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferClause {
    /// Bound placeholder
    pub name: String,
}

/// `{ [K in string]?: value }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedType {
    /// Value type of every key
    pub value: Box<Expression>,
}

/// Module an identifier is imported from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReference {
    /// Module specifier, e.g. `kysely`
    pub module_name: String,
}

impl ModuleReference {
    /// Reference to `module_name`.
    pub fn new(module_name: impl Into<String>) -> Self {
        ModuleReference {
            module_name: module_name.into(),
        }
    }
}

impl Expression {
    /// Identifier classified by name.
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    /// Identifier that always refers to another declaration.
    pub fn reference(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::reference(name))
    }

    /// The `null` identifier.
    pub fn null() -> Self {
        Expression::identifier("null")
    }

    /// Literal type.
    pub fn literal(value: LiteralValue) -> Self {
        Expression::Literal(Literal { value })
    }

    /// String literal type.
    pub fn string_literal(value: impl Into<String>) -> Self {
        Expression::literal(LiteralValue::String(value.into()))
    }

    /// `element[]`
    pub fn array(element: Expression) -> Self {
        Expression::Array(ArrayExpression {
            element: Box::new(element),
        })
    }

    /// Union of `variants`; fails when there are none.
    pub fn union(variants: Vec<Expression>) -> Result<Self, IrError> {
        if variants.is_empty() {
            return Err(IrError::EmptyUnion);
        }
        Ok(Expression::Union(UnionExpression { variants }))
    }

    /// `T | null`, the shape both renderers collapse into a nullable form.
    pub fn nullable(inner: Expression) -> Self {
        Expression::Union(UnionExpression {
            variants: vec![inner, Expression::null()],
        })
    }

    /// Object type.
    pub fn object(properties: Vec<Property>) -> Self {
        Expression::Object(ObjectExpression { properties })
    }

    /// Generic application; fails without arguments.
    pub fn generic(name: impl Into<String>, args: Vec<Expression>) -> Result<Self, IrError> {
        let name = name.into();
        if args.is_empty() {
            return Err(IrError::EmptyGenericArgs(name));
        }
        Ok(Expression::Generic(GenericExpression { name, args }))
    }

    /// Conditional type.
    pub fn extends(
        name: impl Into<String>,
        test: Expression,
        consequent: Expression,
        alternate: Expression,
    ) -> Self {
        Expression::Extends(ExtendsClause {
            name: name.into(),
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    /// `infer name`
    pub fn infer(name: impl Into<String>) -> Self {
        Expression::Infer(InferClause { name: name.into() })
    }

    /// Mapped type over string keys.
    pub fn mapped(value: Expression) -> Self {
        Expression::Mapped(MappedType {
            value: Box::new(value),
        })
    }

    /// Check if this is a union with at least two variants
    pub fn is_multi_variant_union(&self) -> bool {
        matches!(self, Expression::Union(u) if u.variants.len() >= 2)
    }

    /// The identifier, when this is one.
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expression::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// Call `f` with every name this expression refers to, depth first:
    /// identifier names and generic constructor names.
    pub fn for_each_reference<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            Expression::Identifier(id) => f(&id.name),
            Expression::Literal(_) | Expression::Infer(_) | Expression::ModuleReference(_) => {}
            Expression::Array(array) => array.element.for_each_reference(f),
            Expression::Union(union) => {
                for variant in &union.variants {
                    variant.for_each_reference(f);
                }
            }
            Expression::Object(object) => {
                for property in &object.properties {
                    property.value.for_each_reference(f);
                }
            }
            Expression::Generic(generic) => {
                f(&generic.name);
                for arg in &generic.args {
                    arg.for_each_reference(f);
                }
            }
            Expression::Extends(clause) => {
                clause.test.for_each_reference(f);
                clause.consequent.for_each_reference(f);
                clause.alternate.for_each_reference(f);
            }
            Expression::Mapped(mapped) => mapped.value.for_each_reference(f),
        }
    }
}

// =============================================================================
// Declarations
// =============================================================================

/// Generic parameters wrapped around an alias body: `<T> = ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Type parameter names, never empty
    pub params: Vec<String>,
    /// Body referring to the parameters
    pub expression: Expression,
}

impl Template {
    /// Template over `params`; fails when there are none.
    pub fn new(params: Vec<String>, expression: Expression) -> Result<Self, IrError> {
        if params.is_empty() {
            return Err(IrError::EmptyTemplateParams);
        }
        Ok(Template { params, expression })
    }
}

/// Right-hand side of a type alias, optionally templated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AliasBody {
    /// Generic alias: `type Name<T> = ...`
    Template(Template),
    /// Plain alias: `type Name = ...`
    Expression(Expression),
}

impl AliasBody {
    /// Body expression, without template parameters.
    pub fn expression(&self) -> &Expression {
        match self {
            AliasBody::Template(template) => &template.expression,
            AliasBody::Expression(expression) => expression,
        }
    }

    /// Template parameters; empty for a plain alias.
    pub fn params(&self) -> &[String] {
        match self {
            AliasBody::Template(template) => &template.params,
            AliasBody::Expression(_) => &[],
        }
    }
}

impl From<Expression> for AliasBody {
    fn from(expression: Expression) -> Self {
        AliasBody::Expression(expression)
    }
}

impl From<Template> for AliasBody {
    fn from(template: Template) -> Self {
        AliasBody::Template(template)
    }
}

/// `type Name = ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasDeclaration {
    /// Declared name
    pub name: String,
    /// Right-hand side
    pub body: AliasBody,
}

/// `interface Name { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    /// Declared name
    pub name: String,
    /// Interface members
    pub body: ObjectExpression,
}

/// Declaration wrapped by an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Declaration {
    /// `type Name = ...`
    #[serde(rename = "AliasDeclaration")]
    Alias(AliasDeclaration),
    /// `interface Name { ... }`
    #[serde(rename = "InterfaceDeclaration")]
    Interface(InterfaceDeclaration),
}

impl Declaration {
    /// Declared name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Alias(alias) => &alias.name,
            Declaration::Interface(interface) => &interface.name,
        }
    }
}

/// Import item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportClause {
    /// Imported binding
    pub name: String,
    /// Local name, when renamed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// `import { a, b as c } from "module";`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStatement {
    /// Module specifier
    pub module_name: String,
    /// Bindings, never empty
    pub imports: Vec<ImportClause>,
}

impl ImportStatement {
    /// Import of `names` from `module_name`; fails without names.
    pub fn new(module_name: impl Into<String>, names: &[&str]) -> Result<Self, IrError> {
        let module_name = module_name.into();
        if names.is_empty() {
            return Err(IrError::EmptyImport(module_name));
        }
        let imports = names
            .iter()
            .map(|name| ImportClause {
                name: (*name).to_string(),
                alias: None,
            })
            .collect();
        Ok(ImportStatement {
            module_name,
            imports,
        })
    }
}

/// `export <declaration>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportStatement {
    /// Exported declaration
    pub argument: Declaration,
}

/// Top-level statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `import { ... } from "...";`
    #[serde(rename = "ImportStatement")]
    Import(ImportStatement),
    /// `export ...`
    #[serde(rename = "ExportStatement")]
    Export(ExportStatement),
}

impl Statement {
    /// Export a type alias.
    pub fn export_alias(name: impl Into<String>, body: impl Into<AliasBody>) -> Self {
        Statement::Export(ExportStatement {
            argument: Declaration::Alias(AliasDeclaration {
                name: name.into(),
                body: body.into(),
            }),
        })
    }

    /// Export an interface.
    pub fn export_interface(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Statement::Export(ExportStatement {
            argument: Declaration::Interface(InterfaceDeclaration {
                name: name.into(),
                body: ObjectExpression { properties },
            }),
        })
    }

    /// True for import statements.
    pub fn is_import(&self) -> bool {
        matches!(self, Statement::Import(_))
    }
}
