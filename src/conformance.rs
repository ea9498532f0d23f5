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

//! Conformance checks between requested and materialized catalog objects
//!
//! A metastore-backed catalog does not return exactly what it was given: the
//! store adds bookkeeping properties such as the last DDL time or the
//! owner. The functions here decide whether an object read back from a
//! catalog is an acceptable realization of the object that was requested.
//!
//! Property mappings are compared with [`is_superset_of`]: the materialized
//! mapping may carry extra entries but must hold every requested entry with
//! the same value. Every other compared field must match exactly.
//!
//! ```
//! use hive_catalog::catalog::types::Properties;
//! use hive_catalog::conformance::is_superset_of;
//!
//! let requested = Properties::from([("k1".to_string(), "v1".to_string())]);
//! let mut materialized = requested.clone();
//! materialized.insert("transient_lastDdlTime".to_string(), "1700000000".to_string());
//!
//! assert!(is_superset_of(&materialized, &requested));
//! assert!(!is_superset_of(&requested, &materialized));
//! ```

use crate::catalog::types::*;
use std::fmt;
use thiserror::Error;

/// Kind of object a [`Mismatch`] was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Database,
    Table,
    View,
    Partition,
    Function,
    TableStatistics,
    ColumnStatistics,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ObjectKind::Database => "database",
            ObjectKind::Table => "table",
            ObjectKind::View => "view",
            ObjectKind::Partition => "partition",
            ObjectKind::Function => "function",
            ObjectKind::TableStatistics => "table statistics",
            ObjectKind::ColumnStatistics => "column statistics",
        })
    }
}

/// First difference found between a requested and a materialized object
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Mismatch {
    #[error("{object} {field} differs: requested {requested}, materialized {materialized}")]
    Field {
        object: ObjectKind,
        field: &'static str,
        requested: String,
        materialized: String,
    },

    #[error("{object} property '{key}' (requested '{value}') is missing")]
    MissingProperty {
        object: ObjectKind,
        key: String,
        value: String,
    },

    #[error(
        "{object} property '{key}' was altered: requested '{requested}', materialized '{materialized}'"
    )]
    AlteredProperty {
        object: ObjectKind,
        key: String,
        requested: String,
        materialized: String,
    },

    #[error("{object} variant differs: requested {requested}, materialized {materialized}")]
    VariantMismatch {
        object: ObjectKind,
        requested: &'static str,
        materialized: &'static str,
    },

    #[error("statistics of column '{column}' are missing")]
    MissingColumnStatistics { column: String },

    #[error("unexpected statistics for column '{column}'")]
    UnexpectedColumnStatistics { column: String },

    #[error(
        "statistics of column '{column}' differ: requested {requested:?}, materialized {materialized:?}"
    )]
    ColumnStatisticsDiffer {
        column: String,
        requested: ColumnStatisticsData,
        materialized: ColumnStatisticsData,
    },
}

/// True when every entry of `subset` is present in `superset` with the same
/// value.
pub fn is_superset_of(superset: &Properties, subset: &Properties) -> bool {
    subset
        .iter()
        .all(|(k, v)| superset.get(k).is_some_and(|s| s == v))
}

fn report(mismatch: Mismatch) -> Result<(), Mismatch> {
    log::debug!("conformance mismatch: {mismatch}");
    Err(mismatch)
}

fn check_field<T: PartialEq + fmt::Debug + ?Sized>(
    object: ObjectKind,
    field: &'static str,
    requested: &T,
    materialized: &T,
) -> Result<(), Mismatch> {
    if requested == materialized {
        return Ok(());
    }
    report(Mismatch::Field {
        object,
        field,
        requested: format!("{requested:?}"),
        materialized: format!("{materialized:?}"),
    })
}

/// Checks the materialized properties hold every requested entry, reporting
/// the first offending key in sorted order.
fn check_properties(
    object: ObjectKind,
    requested: &Properties,
    materialized: &Properties,
) -> Result<(), Mismatch> {
    let mut keys: Vec<&String> = requested.keys().collect();
    keys.sort();
    for key in keys {
        let value = &requested[key];
        match materialized.get(key) {
            None => {
                return report(Mismatch::MissingProperty {
                    object,
                    key: key.clone(),
                    value: value.clone(),
                });
            }
            Some(actual) if actual != value => {
                return report(Mismatch::AlteredProperty {
                    object,
                    key: key.clone(),
                    requested: value.clone(),
                    materialized: actual.clone(),
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

pub fn compare_tables(
    requested: &CatalogTable,
    materialized: &CatalogTable,
) -> Result<(), Mismatch> {
    let object = ObjectKind::Table;
    check_field(object, "schema", &requested.schema, &materialized.schema)?;
    check_field(object, "comment", &requested.comment, &materialized.comment)?;
    check_field(
        object,
        "partition keys",
        &requested.partition_keys,
        &materialized.partition_keys,
    )?;
    check_field(
        object,
        "partitioned flag",
        &requested.is_partitioned(),
        &materialized.is_partitioned(),
    )?;
    check_properties(object, &requested.properties, &materialized.properties)
}

pub fn compare_views(requested: &CatalogView, materialized: &CatalogView) -> Result<(), Mismatch> {
    let object = ObjectKind::View;
    check_field(object, "schema", &requested.schema, &materialized.schema)?;
    check_field(object, "comment", &requested.comment, &materialized.comment)?;
    check_field(
        object,
        "original query",
        &requested.original_query,
        &materialized.original_query,
    )?;
    check_field(
        object,
        "expanded query",
        &requested.expanded_query,
        &materialized.expanded_query,
    )?;
    check_properties(object, &requested.properties, &materialized.properties)
}

/// Dispatches to [`compare_tables`] or [`compare_views`]; a table compared
/// with a view is a [`Mismatch::VariantMismatch`].
pub fn compare_base_tables(
    requested: &CatalogBaseTable,
    materialized: &CatalogBaseTable,
) -> Result<(), Mismatch> {
    match (requested, materialized) {
        (CatalogBaseTable::Table(r), CatalogBaseTable::Table(m)) => compare_tables(r, m),
        (CatalogBaseTable::View(r), CatalogBaseTable::View(m)) => compare_views(r, m),
        _ => report(Mismatch::VariantMismatch {
            object: ObjectKind::Table,
            requested: requested.kind(),
            materialized: materialized.kind(),
        }),
    }
}

/// Compares two Hive partitions.
///
/// Both sides must be [`CatalogPartition::Hive`]; any other pairing is a
/// [`Mismatch::VariantMismatch`]. A location set on the requested partition
/// must be kept; one left unset may be assigned by the store.
pub fn compare_partitions(
    requested: &CatalogPartition,
    materialized: &CatalogPartition,
) -> Result<(), Mismatch> {
    let object = ObjectKind::Partition;
    match (requested, materialized) {
        (CatalogPartition::Hive(r), CatalogPartition::Hive(m)) => {
            if r.location.is_some() {
                check_field(object, "location", &r.location, &m.location)?;
            }
        }
        _ => {
            return report(Mismatch::VariantMismatch {
                object,
                requested: requested.kind(),
                materialized: materialized.kind(),
            });
        }
    }
    check_field(
        object,
        "description",
        &requested.description(),
        &materialized.description(),
    )?;
    check_field(
        object,
        "detailed description",
        &requested.detailed_description(),
        &materialized.detailed_description(),
    )?;
    check_properties(object, requested.properties(), materialized.properties())
}

/// Requires exactly the same columns with exactly the same statistics.
pub fn compare_column_statistics(
    requested: &ColumnStatistics,
    materialized: &ColumnStatistics,
) -> Result<(), Mismatch> {
    let mut columns: Vec<_> = requested.columns().iter().collect();
    columns.sort_by(|a, b| a.0.cmp(b.0));
    for (column, data) in columns {
        match materialized.get(column) {
            None => {
                return report(Mismatch::MissingColumnStatistics {
                    column: column.clone(),
                });
            }
            Some(actual) if actual != data => {
                return report(Mismatch::ColumnStatisticsDiffer {
                    column: column.clone(),
                    requested: data.clone(),
                    materialized: actual.clone(),
                });
            }
            Some(_) => {}
        }
    }

    let mut extra: Vec<&String> = materialized
        .columns()
        .keys()
        .filter(|c| requested.get(c).is_none())
        .collect();
    extra.sort();
    if let Some(column) = extra.first() {
        return report(Mismatch::UnexpectedColumnStatistics {
            column: column.to_string(),
        });
    }
    Ok(())
}

pub fn compare_databases(
    requested: &CatalogDatabase,
    materialized: &CatalogDatabase,
) -> Result<(), Mismatch> {
    let object = ObjectKind::Database;
    check_field(object, "comment", &requested.comment, &materialized.comment)?;
    check_properties(object, &requested.properties, &materialized.properties)
}

pub fn compare_functions(
    requested: &CatalogFunction,
    materialized: &CatalogFunction,
) -> Result<(), Mismatch> {
    check_field(
        ObjectKind::Function,
        "class name",
        &requested.class_name,
        &materialized.class_name,
    )
}

pub fn compare_table_statistics(
    requested: &TableStatistics,
    materialized: &TableStatistics,
) -> Result<(), Mismatch> {
    let object = ObjectKind::TableStatistics;
    check_field(object, "row count", &requested.row_count, &materialized.row_count)?;
    check_field(object, "file count", &requested.file_count, &materialized.file_count)?;
    check_field(object, "total size", &requested.total_size, &materialized.total_size)?;
    check_field(
        object,
        "raw data size",
        &requested.raw_data_size,
        &materialized.raw_data_size,
    )
}
