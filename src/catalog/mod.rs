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

//! Catalog contract
//!
//! A [`Catalog`] manages databases and the tables, views, partitions,
//! functions and statistics inside them. Operations that create an object
//! take an `ignore_if_exists` flag; operations that alter or drop one take
//! `ignore_if_not_exists`. Without the flag the corresponding
//! `*AlreadyExist`/`*NotExist` [`CatalogError`] is returned.

pub mod error;
pub mod hive;
pub mod types;

pub use error::{CatalogError, ValidationErr};

use async_trait::async_trait;
use types::*;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Opens the catalog; every other operation requires an open catalog.
    async fn open(&self) -> Result<(), CatalogError>;

    async fn close(&self) -> Result<(), CatalogError>;

    fn name(&self) -> &str;

    fn default_database(&self) -> &str;

    // ---------------------------------------------------------------------
    // databases

    async fn list_databases(&self) -> Result<Vec<String>, CatalogError>;

    async fn get_database(&self, name: &str) -> Result<CatalogDatabase, CatalogError>;

    async fn database_exists(&self, name: &str) -> Result<bool, CatalogError>;

    async fn create_database(
        &self,
        name: &str,
        database: CatalogDatabase,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError>;

    /// Drops a database. A database holding tables or functions is only
    /// dropped with `cascade`, otherwise [`CatalogError::DatabaseNotEmpty`].
    async fn drop_database(
        &self,
        name: &str,
        ignore_if_not_exists: bool,
        cascade: bool,
    ) -> Result<(), CatalogError>;

    async fn alter_database(
        &self,
        name: &str,
        database: CatalogDatabase,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    // ---------------------------------------------------------------------
    // tables and views

    /// Names of all tables and views in a database
    async fn list_tables(&self, database: &str) -> Result<Vec<String>, CatalogError>;

    async fn list_views(&self, database: &str) -> Result<Vec<String>, CatalogError>;

    async fn get_table(&self, path: &ObjectPath) -> Result<CatalogBaseTable, CatalogError>;

    async fn table_exists(&self, path: &ObjectPath) -> Result<bool, CatalogError>;

    async fn create_table(
        &self,
        path: &ObjectPath,
        table: CatalogBaseTable,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError>;

    /// Replaces a table or view. Changing a table into a view (or back) is
    /// rejected with [`CatalogError::IncompatibleKind`].
    async fn alter_table(
        &self,
        path: &ObjectPath,
        table: CatalogBaseTable,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn rename_table(
        &self,
        path: &ObjectPath,
        new_name: &str,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn drop_table(
        &self,
        path: &ObjectPath,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    // ---------------------------------------------------------------------
    // partitions

    async fn list_partitions(
        &self,
        path: &ObjectPath,
    ) -> Result<Vec<CatalogPartitionSpec>, CatalogError>;

    /// Partitions whose values match every entry of a partial spec
    async fn list_partitions_by_spec(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<Vec<CatalogPartitionSpec>, CatalogError>;

    async fn get_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<CatalogPartition, CatalogError>;

    async fn partition_exists(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<bool, CatalogError>;

    async fn create_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        partition: CatalogPartition,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn alter_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        partition: CatalogPartition,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn drop_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    // ---------------------------------------------------------------------
    // functions

    async fn list_functions(&self, database: &str) -> Result<Vec<String>, CatalogError>;

    async fn get_function(&self, path: &ObjectPath) -> Result<CatalogFunction, CatalogError>;

    async fn function_exists(&self, path: &ObjectPath) -> Result<bool, CatalogError>;

    async fn create_function(
        &self,
        path: &ObjectPath,
        function: CatalogFunction,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn alter_function(
        &self,
        path: &ObjectPath,
        function: CatalogFunction,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn drop_function(
        &self,
        path: &ObjectPath,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    // ---------------------------------------------------------------------
    // statistics

    async fn get_table_statistics(
        &self,
        path: &ObjectPath,
    ) -> Result<TableStatistics, CatalogError>;

    async fn get_table_column_statistics(
        &self,
        path: &ObjectPath,
    ) -> Result<ColumnStatistics, CatalogError>;

    async fn get_partition_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<TableStatistics, CatalogError>;

    async fn get_partition_column_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<ColumnStatistics, CatalogError>;

    async fn alter_table_statistics(
        &self,
        path: &ObjectPath,
        statistics: TableStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn alter_table_column_statistics(
        &self,
        path: &ObjectPath,
        statistics: ColumnStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn alter_partition_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        statistics: TableStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;

    async fn alter_partition_column_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        statistics: ColumnStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError>;
}
