//! Declaration assembly.
//!
//! Lowers introspected table metadata into the statement sequence the
//! serializer consumes: imports, the shared definitions the tables need,
//! one interface per table and the `DB` interface tying them together.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use typegen_ir::{
    Declaration, Expression, ImportStatement, IrError, Property, Statement, TypeCatalog,
};

use crate::utils::to_pascal_case;

/// Introspected database: the assembler's input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseMetadata {
    /// Tables to declare; order does not matter
    #[serde(default)]
    pub tables: Vec<TableMetadata>,
}

/// One introspected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetadata {
    /// Owning schema; `None` means the dialect's default schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Table name as stored in the database
    pub name: String,
    /// Columns in table order
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
}

/// One introspected column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    /// Column name, used verbatim as the property key
    pub name: String,
    /// Raw database type, e.g. `Nullable(DateTime64(3))`
    pub data_type: String,
    /// Reads may return `null`
    #[serde(default)]
    pub is_nullable: bool,
    /// Holds a list of `data_type` values
    #[serde(default)]
    pub is_array: bool,
    /// Inserts may omit the column
    #[serde(default)]
    pub has_default: bool,
    /// Filled by the database on insert
    #[serde(default)]
    pub is_auto_incrementing: bool,
    /// Column comment, emitted as documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ColumnMetadata {
    /// A non-null, non-array column without default.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_nullable: false,
            is_array: false,
            has_default: false,
            is_auto_incrementing: false,
            comment: None,
        }
    }
}

/// Builds declarations against one dialect's catalog.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    catalog: &'a TypeCatalog,
}

struct TableEntry<'t> {
    /// Key in the `DB` interface: `table` or `schema.table`
    key: String,
    interface: String,
    table: &'t TableMetadata,
}

impl<'a> Assembler<'a> {
    /// Assembler over `catalog`.
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Build the full statement list for `metadata`.
    pub fn assemble(&self, metadata: &DatabaseMetadata) -> Result<Vec<Statement>, IrError> {
        let mut tables: Vec<TableEntry<'_>> =
            metadata.tables.iter().map(|t| self.table_entry(t)).collect();
        tables.sort_by(|a, b| {
            self.schema_of(a.table)
                .cmp(self.schema_of(b.table))
                .then_with(|| a.table.name.cmp(&b.table.name))
        });

        let mut interfaces = Vec::with_capacity(tables.len() + 1);
        for entry in &tables {
            let properties = entry
                .table
                .columns
                .iter()
                .map(|column| self.column_property(column))
                .collect::<Result<Vec<_>, _>>()?;
            trace!(
                table = %entry.key,
                columns = properties.len(),
                "assembled table interface"
            );
            interfaces.push(Statement::export_interface(&entry.interface, properties));
        }

        // `DB` only points at table interfaces, never at definitions.
        let (definitions, imported) = self.referenced_definitions(&interfaces);
        if let Some(entry) = tables.iter().find(|entry| {
            definitions.contains(&entry.interface) || imported.contains(&entry.interface)
        }) {
            return Err(IrError::DeclarationClash(entry.interface.clone()));
        }

        if !tables.is_empty() {
            let db = tables
                .iter()
                .map(|entry| Property::new(&entry.key, Expression::reference(&entry.interface)))
                .collect();
            interfaces.push(Statement::export_interface("DB", db));
        }

        let aliases = self.aliases(definitions);
        let imports = self.imports(imported, !tables.is_empty())?;

        debug!(
            tables = tables.len(),
            imports = imports.len(),
            definitions = aliases.len(),
            "assembled declarations"
        );

        Ok(imports
            .into_iter()
            .chain(aliases)
            .chain(interfaces)
            .collect())
    }

    fn schema_of<'t>(&'t self, table: &'t TableMetadata) -> &'t str {
        table
            .schema
            .as_deref()
            .unwrap_or(&self.catalog.default_schema)
    }

    fn table_entry<'t>(&self, table: &'t TableMetadata) -> TableEntry<'t> {
        match table.schema.as_deref() {
            Some(schema) if schema != self.catalog.default_schema => TableEntry {
                key: format!("{schema}.{}", table.name),
                interface: format!("{}{}", to_pascal_case(schema), to_pascal_case(&table.name)),
                table,
            },
            _ => TableEntry {
                key: table.name.clone(),
                interface: to_pascal_case(&table.name),
                table,
            },
        }
    }

    /// Column value: scalar, then array, then `Generated`, then nullable.
    fn column_property(&self, column: &ColumnMetadata) -> Result<Property, IrError> {
        let resolved = self.catalog.resolve_scalar(&column.data_type);

        let mut value = resolved.expression;
        if column.is_array || resolved.is_array {
            value = Expression::array(value);
        }
        if column.has_default || column.is_auto_incrementing {
            value = Expression::generic("Generated", vec![value])?;
        }
        if column.is_nullable || resolved.is_nullable {
            value = Expression::nullable(value);
        }

        let property = Property::new(&column.name, value);
        Ok(match &column.comment {
            Some(comment) => property.with_description(comment),
            None => property,
        })
    }

    /// Names of the catalog definitions reachable from `roots`, plus the
    /// names that resolve to imports instead.
    fn referenced_definitions(
        &self,
        roots: &[Statement],
    ) -> (BTreeSet<String>, BTreeSet<String>) {
        let mut pending: Vec<String> = Vec::new();
        for root in roots {
            if let Statement::Export(export) = root
                && let Declaration::Interface(interface) = &export.argument
            {
                for property in &interface.body.properties {
                    property
                        .value
                        .for_each_reference(&mut |name| pending.push(name.to_string()));
                }
            }
        }

        let mut definitions = BTreeSet::new();
        let mut imported = BTreeSet::new();
        while let Some(name) = pending.pop() {
            if self.catalog.module_for(&name).is_some() {
                imported.insert(name);
                continue;
            }
            let Some(body) = self.catalog.definition(&name) else {
                continue;
            };
            if !definitions.insert(name) {
                continue;
            }
            let params = body.params();
            body.expression().for_each_reference(&mut |reference| {
                if !params.iter().any(|param| param == reference) {
                    pending.push(reference.to_string());
                }
            });
        }

        (definitions, imported)
    }

    /// Alias exports for `names`, in name order.
    fn aliases(&self, names: BTreeSet<String>) -> Vec<Statement> {
        names
            .into_iter()
            .filter_map(|name| {
                let body = self.catalog.definition(&name)?.clone();
                Some(Statement::export_alias(name, body))
            })
            .collect()
    }

    /// One import per module, sorted by module name.
    fn imports(
        &self,
        mut names: BTreeSet<String>,
        has_tables: bool,
    ) -> Result<Vec<Statement>, IrError> {
        if has_tables {
            names.insert("z".to_string());
        }

        let mut modules: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for name in &names {
            if let Some(module) = self.catalog.module_for(name) {
                modules
                    .entry(module.module_name.as_str())
                    .or_default()
                    .push(name);
            }
        }

        modules
            .into_iter()
            .map(|(module, names)| ImportStatement::new(module, &names).map(Statement::Import))
            .collect()
    }
}
