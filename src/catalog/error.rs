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

//! Error types for catalog operations

use crate::catalog::types::{CatalogPartitionSpec, ObjectPath};
use crate::metastore::MetastoreError;
use thiserror::Error;

/// Errors raised while constructing catalog objects from user input.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationErr {
    #[error("column name cannot be empty")]
    EmptyColumnName,

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    #[error("partition key '{0}' is not a column of the table schema")]
    UnknownPartitionKey(String),

    #[error("partition keys {0:?} must be the trailing columns of the schema, in key order")]
    PartitionKeysNotTrailing(Vec<String>),

    #[error("property '{0}' is reserved")]
    ReservedProperty(&'static str),

    #[error("invalid object path '{0}': expected <database>.<object>")]
    InvalidObjectPath(String),

    #[error("invalid type '{input}': {reason}")]
    InvalidType { input: String, reason: String },

    #[error("{type_name} length {length} is out of range 1..={max}")]
    InvalidLength {
        type_name: &'static str,
        length: u32,
        max: u32,
    },
}

/// Errors returned by [`Catalog`](crate::catalog::Catalog) operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database {database} already exists in Catalog {catalog}.")]
    DatabaseAlreadyExist { catalog: String, database: String },

    #[error("Database {database} does not exist in Catalog {catalog}.")]
    DatabaseNotExist { catalog: String, database: String },

    #[error("Database {database} in catalog {catalog} is not empty.")]
    DatabaseNotEmpty { catalog: String, database: String },

    #[error("Table (or view) {path} already exists in Catalog {catalog}.")]
    TableAlreadyExist { catalog: String, path: ObjectPath },

    #[error("Table (or view) {path} does not exist in Catalog {catalog}.")]
    TableNotExist { catalog: String, path: ObjectPath },

    #[error("Table {path} in catalog {catalog} is not partitioned.")]
    TableNotPartitioned { catalog: String, path: ObjectPath },

    #[error(
        "PartitionSpec {spec} does not match partition keys {partition_keys:?} of table {path} in catalog {catalog}."
    )]
    PartitionSpecInvalid {
        catalog: String,
        path: ObjectPath,
        partition_keys: Vec<String>,
        spec: CatalogPartitionSpec,
    },

    #[error("Partition {spec} of table {path} in catalog {catalog} already exists.")]
    PartitionAlreadyExists {
        catalog: String,
        path: ObjectPath,
        spec: CatalogPartitionSpec,
    },

    #[error("Partition {spec} of table {path} in catalog {catalog} does not exist.")]
    PartitionNotExist {
        catalog: String,
        path: ObjectPath,
        spec: CatalogPartitionSpec,
    },

    #[error("Function {path} already exists in Catalog {catalog}.")]
    FunctionAlreadyExist { catalog: String, path: ObjectPath },

    #[error("Function {path} does not exist in Catalog {catalog}.")]
    FunctionNotExist { catalog: String, path: ObjectPath },

    #[error("Column {column} does not exist in table {path} of catalog {catalog}.")]
    ColumnNotExist {
        catalog: String,
        path: ObjectPath,
        column: String,
    },

    #[error("{object} types don't match. Existing {object} is '{existing}' and new {object} is '{new}'.")]
    IncompatibleKind {
        object: &'static str,
        existing: &'static str,
        new: &'static str,
    },

    #[error("{0}")]
    Unsupported(String),

    #[error("Catalog {catalog} is not open")]
    NotOpen { catalog: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("metastore error: {0}")]
    Metastore(#[from] MetastoreError),
}
