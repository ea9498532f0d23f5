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

//! Hive metastore client contract
//!
//! [`MetastoreClient`] is the system of record behind
//! [`HiveCatalog`](crate::catalog::hive::HiveCatalog). It speaks in metastore
//! records ([`types`]) rather than catalog objects; translating between the
//! two is the catalog's job. [`memory::InMemoryMetastore`] is a complete
//! implementation that keeps everything in process.

pub mod error;
pub mod memory;
pub mod types;

pub use error::MetastoreError;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::collections::HashMap;
use std::fmt::Debug;
use types::*;

/// Value used in partition names for an empty partition value
pub const DEFAULT_PARTITION_NAME: &str = "__HIVE_DEFAULT_PARTITION__";

/// Characters Hive escapes in partition path components
const PARTITION_ESCAPE: &AsciiSet = &CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'*')
    .add(b'/')
    .add(b':')
    .add(b'=')
    .add(b'?')
    .add(b'\\')
    .add(b'{')
    .add(b'[')
    .add(b']')
    .add(b'^');

/// Escapes one partition key or value for use in a partition name.
pub fn escape_path_name(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_PARTITION_NAME.to_string();
    }
    utf8_percent_encode(name, PARTITION_ESCAPE).to_string()
}

/// Builds a partition name such as `second=bob/third=2000`.
///
/// Keys and values are paired positionally.
pub fn make_partition_name<K: AsRef<str>, V: AsRef<str>>(keys: &[K], values: &[V]) -> String {
    keys.iter()
        .zip(values)
        .map(|(k, v)| {
            format!(
                "{}={}",
                escape_path_name(k.as_ref()),
                escape_path_name(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Operations of a Hive metastore
///
/// Names are matched case-insensitively; implementations store them
/// lowercased. Missing objects are reported as
/// [`MetastoreError::NoSuchObject`], duplicates as
/// [`MetastoreError::AlreadyExists`].
#[async_trait]
pub trait MetastoreClient: Send + Sync + Debug {
    async fn get_all_databases(&self) -> Result<Vec<String>, MetastoreError>;

    async fn get_database(&self, name: &str) -> Result<HiveDatabase, MetastoreError>;

    async fn create_database(&self, database: HiveDatabase) -> Result<(), MetastoreError>;

    /// Drops a database. Without `cascade`, fails with
    /// [`MetastoreError::InvalidOperation`] unless it holds no tables or
    /// functions.
    async fn drop_database(&self, name: &str, cascade: bool) -> Result<(), MetastoreError>;

    async fn alter_database(&self, name: &str, database: HiveDatabase)
    -> Result<(), MetastoreError>;

    async fn get_all_tables(&self, db_name: &str) -> Result<Vec<String>, MetastoreError>;

    async fn get_tables_by_type(
        &self,
        db_name: &str,
        table_type: TableType,
    ) -> Result<Vec<String>, MetastoreError>;

    async fn get_table(&self, db_name: &str, table_name: &str)
    -> Result<HiveTable, MetastoreError>;

    async fn table_exists(&self, db_name: &str, table_name: &str) -> Result<bool, MetastoreError>;

    async fn create_table(&self, table: HiveTable) -> Result<(), MetastoreError>;

    /// Replaces a table record. A different `table_name` on `table` renames
    /// the table, carrying its partitions and statistics along.
    async fn alter_table(
        &self,
        db_name: &str,
        table_name: &str,
        table: HiveTable,
    ) -> Result<(), MetastoreError>;

    /// Drops a table together with its partitions and statistics.
    async fn drop_table(&self, db_name: &str, table_name: &str) -> Result<(), MetastoreError>;

    async fn list_partitions(
        &self,
        db_name: &str,
        table_name: &str,
    ) -> Result<Vec<HivePartition>, MetastoreError>;

    async fn get_partition(
        &self,
        db_name: &str,
        table_name: &str,
        values: &[String],
    ) -> Result<HivePartition, MetastoreError>;

    /// Adds a partition and returns it as stored.
    async fn add_partition(&self, partition: HivePartition)
    -> Result<HivePartition, MetastoreError>;

    async fn alter_partition(
        &self,
        db_name: &str,
        table_name: &str,
        partition: HivePartition,
    ) -> Result<(), MetastoreError>;

    async fn drop_partition(
        &self,
        db_name: &str,
        table_name: &str,
        values: &[String],
    ) -> Result<(), MetastoreError>;

    async fn get_functions(&self, db_name: &str) -> Result<Vec<String>, MetastoreError>;

    async fn get_function(
        &self,
        db_name: &str,
        function_name: &str,
    ) -> Result<HiveFunction, MetastoreError>;

    async fn create_function(&self, function: HiveFunction) -> Result<(), MetastoreError>;

    async fn alter_function(
        &self,
        db_name: &str,
        function_name: &str,
        function: HiveFunction,
    ) -> Result<(), MetastoreError>;

    async fn drop_function(&self, db_name: &str, function_name: &str)
    -> Result<(), MetastoreError>;

    /// Merges column statistics into what is stored for the table.
    async fn update_table_column_statistics(
        &self,
        statistics: HiveColumnStatistics,
    ) -> Result<(), MetastoreError>;

    /// Returns the stored statistics of the named columns; columns without
    /// statistics are left out.
    async fn get_table_column_statistics(
        &self,
        db_name: &str,
        table_name: &str,
        col_names: &[String],
    ) -> Result<Vec<ColumnStatisticsObj>, MetastoreError>;

    /// Merges column statistics into what is stored for the partition named
    /// by `statistics.desc.part_name`.
    async fn update_partition_column_statistics(
        &self,
        statistics: HiveColumnStatistics,
    ) -> Result<(), MetastoreError>;

    /// Returns, per partition name, the stored statistics of the named
    /// columns. Partitions without statistics are left out.
    async fn get_partition_column_statistics(
        &self,
        db_name: &str,
        table_name: &str,
        part_names: &[String],
        col_names: &[String],
    ) -> Result<HashMap<String, Vec<ColumnStatisticsObj>>, MetastoreError>;

    /// Releases the client. Further calls fail with [`MetastoreError::Closed`].
    async fn close(&self) -> Result<(), MetastoreError>;
}
