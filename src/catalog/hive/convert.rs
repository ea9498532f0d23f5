// Hive Catalog Rust Library
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Translation between catalog objects and metastore records

use crate::catalog::error::{CatalogError, ValidationErr};
use crate::catalog::types::*;
use crate::config::StorageFormat;
use crate::metastore::types::*;

/// Parameters describing table statistics; carried over when a table or
/// partition record is replaced.
pub(crate) const STATISTICS_PARAMS: [&str; 4] = [NUM_ROWS, NUM_FILES, TOTAL_SIZE, RAW_DATA_SIZE];

pub(crate) fn database_to_hive(name: &str, database: &CatalogDatabase) -> HiveDatabase {
    HiveDatabase {
        name: name.to_string(),
        description: (!database.comment.is_empty()).then(|| database.comment.clone()),
        location_uri: None,
        parameters: database.properties.clone(),
        owner_name: None,
    }
}

pub(crate) fn database_from_hive(database: HiveDatabase) -> CatalogDatabase {
    CatalogDatabase::new(database.parameters, database.description.unwrap_or_default())
}

fn field_schema(column: &TableColumn) -> Result<FieldSchema, CatalogError> {
    Ok(FieldSchema::new(
        column.name.clone(),
        column.data_type.to_hive_type()?,
    ))
}

fn storage_descriptor(cols: Vec<FieldSchema>, format: StorageFormat) -> StorageDescriptor {
    StorageDescriptor {
        cols,
        location: None,
        input_format: format.input_format().to_string(),
        output_format: format.output_format().to_string(),
        compressed: false,
        serde_info: SerDeInfo {
            name: None,
            serialization_lib: format.serde_lib().to_string(),
            parameters: [("serialization.format".to_string(), "1".to_string())].into(),
        },
    }
}

fn reject_reserved(
    properties: &Properties,
    reserved: &[&'static str],
) -> Result<(), ValidationErr> {
    match reserved.iter().find(|key| properties.contains_key(**key)) {
        Some(key) => Err(ValidationErr::ReservedProperty(*key)),
        None => Ok(()),
    }
}

/// The comment travels as the `comment` parameter, so a property of that
/// name would be lost on read.
fn parameters_with_comment(
    properties: &Properties,
    comment: &str,
) -> Result<Parameters, ValidationErr> {
    reject_reserved(properties, &[COMMENT])?;
    let mut parameters = properties.clone();
    if !comment.is_empty() {
        parameters.insert(COMMENT.to_string(), comment.to_string());
    }
    Ok(parameters)
}

/// Partition keys must close the schema in key order; the metastore keeps
/// them apart from the data columns and they are read back last.
fn check_trailing_partition_keys(table: &CatalogTable) -> Result<(), ValidationErr> {
    let names = table.schema.field_names();
    let keys = &table.partition_keys;
    let trailing = keys.len() <= names.len()
        && names[names.len() - keys.len()..]
            .iter()
            .zip(keys)
            .all(|(name, key)| *name == key.as_str());
    if trailing {
        Ok(())
    } else {
        Err(ValidationErr::PartitionKeysNotTrailing(keys.clone()))
    }
}

/// Builds the metastore record for a table or view.
///
/// Partition key columns are split off the schema into the record's
/// partition columns, in partition-key order; the remaining columns form the
/// storage descriptor.
pub(crate) fn table_to_hive(
    path: &ObjectPath,
    table: &CatalogBaseTable,
    format: StorageFormat,
) -> Result<HiveTable, CatalogError> {
    let builder = HiveTable::builder()
        .db_name(path.database_name())
        .table_name(path.object_name());

    match table {
        CatalogBaseTable::Table(table) => {
            let mut partition_keys = Vec::with_capacity(table.partition_keys.len());
            for key in &table.partition_keys {
                let column = table
                    .schema
                    .column(key)
                    .ok_or_else(|| ValidationErr::UnknownPartitionKey(key.clone()))?;
                partition_keys.push(field_schema(column)?);
            }
            check_trailing_partition_keys(table)?;
            let cols = table
                .schema
                .columns()
                .iter()
                .filter(|c| !table.partition_keys.contains(&c.name))
                .map(field_schema)
                .collect::<Result<Vec<_>, _>>()?;

            Ok(builder
                .sd(storage_descriptor(cols, format))
                .partition_keys(partition_keys)
                .parameters(parameters_with_comment(&table.properties, &table.comment)?)
                .table_type(TableType::ManagedTable)
                .build())
        }
        CatalogBaseTable::View(view) => {
            let cols = view
                .schema
                .columns()
                .iter()
                .map(field_schema)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(builder
                .sd(StorageDescriptor {
                    cols,
                    ..Default::default()
                })
                .parameters(parameters_with_comment(&view.properties, &view.comment)?)
                .view_original_text(view.original_query.clone())
                .view_expanded_text(view.expanded_query.clone())
                .table_type(TableType::VirtualView)
                .build())
        }
    }
}

pub(crate) fn schema_from_hive<'a, I>(fields: I) -> Result<TableSchema, CatalogError>
where
    I: IntoIterator<Item = &'a FieldSchema>,
{
    let columns = fields
        .into_iter()
        .map(|f| -> Result<TableColumn, ValidationErr> {
            Ok(TableColumn::new(f.name.clone(), f.type_name.parse()?))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TableSchema::new(columns)?)
}

/// Rebuilds a table or view from its metastore record. The schema lists data
/// columns first and partition columns last.
pub(crate) fn table_from_hive(table: HiveTable) -> Result<CatalogBaseTable, CatalogError> {
    let schema = schema_from_hive(table.sd.cols.iter().chain(&table.partition_keys))?;
    let mut properties = table.parameters;
    let comment = properties.remove(COMMENT).unwrap_or_default();

    Ok(match table.table_type {
        TableType::VirtualView => CatalogView::builder()
            .schema(schema)
            .original_query(table.view_original_text.unwrap_or_default())
            .expanded_query(table.view_expanded_text.unwrap_or_default())
            .properties(properties)
            .comment(comment)
            .build()
            .into(),
        TableType::ManagedTable | TableType::ExternalTable => CatalogTable::builder()
            .schema(schema)
            .partition_keys(table.partition_keys.into_iter().map(|k| k.name).collect())
            .properties(properties)
            .comment(comment)
            .build()
            .into(),
    })
}

/// Builds the metastore record of a partition of `table`.
pub(crate) fn partition_to_hive(
    table: &HiveTable,
    values: Vec<String>,
    partition: &CatalogPartition,
) -> Result<HivePartition, ValidationErr> {
    let mut sd = table.sd.clone();
    sd.location = None;
    let mut parameters = partition.properties().clone();
    match partition {
        CatalogPartition::Hive(p) => {
            reject_reserved(&parameters, &[IS_GENERIC])?;
            sd.location = p.location.clone();
        }
        CatalogPartition::Generic(p) => {
            reject_reserved(&parameters, &[IS_GENERIC, COMMENT])?;
            parameters.insert(IS_GENERIC.to_string(), "true".to_string());
            parameters.insert(COMMENT.to_string(), p.comment.clone());
        }
    }
    Ok(HivePartition {
        db_name: table.db_name.clone(),
        table_name: table.table_name.clone(),
        values,
        create_time: 0,
        sd,
        parameters,
    })
}

pub(crate) fn partition_from_hive(partition: HivePartition) -> CatalogPartition {
    let mut parameters = partition.parameters;
    let is_generic = parameters
        .remove(IS_GENERIC)
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    if is_generic {
        let comment = parameters.remove(COMMENT).unwrap_or_default();
        GenericCatalogPartition::builder()
            .properties(parameters)
            .comment(comment)
            .build()
            .into()
    } else {
        CatalogPartition::Hive(HiveCatalogPartition {
            properties: parameters,
            location: partition.sd.location,
        })
    }
}

/// Pairs partition values with the table's partition keys.
pub(crate) fn spec_from_values(keys: &[FieldSchema], values: &[String]) -> CatalogPartitionSpec {
    keys.iter()
        .zip(values)
        .map(|(k, v)| (k.name.clone(), v.clone()))
        .collect()
}

pub(crate) fn function_to_hive(path: &ObjectPath, function: &CatalogFunction) -> HiveFunction {
    HiveFunction {
        db_name: path.database_name().to_string(),
        function_name: path.object_name().to_string(),
        class_name: function.class_name.clone(),
        owner_name: None,
        function_type: FunctionType::Java,
        create_time: 0,
    }
}

pub(crate) fn function_from_hive(function: HiveFunction) -> CatalogFunction {
    CatalogFunction::new(function.class_name)
}

/// Copies statistics parameters from `existing` that `parameters` lacks.
pub(crate) fn carry_statistics(existing: &Parameters, parameters: &mut Parameters) {
    for key in STATISTICS_PARAMS {
        if let Some(value) = existing.get(key) {
            parameters
                .entry(key.to_string())
                .or_insert_with(|| value.clone());
        }
    }
}
