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

//! Metastore-backed catalog
//!
//! [`HiveCatalog`] implements [`Catalog`] on top of a [`MetastoreClient`].
//! Catalog objects are translated to metastore records on the way in and
//! back on the way out. The metastore adds bookkeeping parameters to what it
//! stores, so objects read back carry a superset of the properties they were
//! created with.
//!
//! # Example
//!
//! ```
//! use hive_catalog::catalog::Catalog;
//! use hive_catalog::catalog::hive::HiveCatalog;
//! use hive_catalog::catalog::types::CatalogDatabase;
//! use hive_catalog::metastore::memory::InMemoryMetastore;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let catalog = HiveCatalog::builder()
//!     .name("hive")
//!     .client(Arc::new(InMemoryMetastore::default()))
//!     .build();
//! catalog.open().await.unwrap();
//! catalog
//!     .create_database("db1", CatalogDatabase::new(Default::default(), "test comment"), false)
//!     .await
//!     .unwrap();
//! assert!(catalog.database_exists("db1").await.unwrap());
//! catalog.close().await.unwrap();
//! # }
//! ```

mod convert;
mod stats;

use crate::catalog::Catalog;
use crate::catalog::error::CatalogError;
use crate::catalog::types::*;
use crate::config::HiveConf;
use crate::metastore::types::{
    ColumnStatisticsDesc, HiveColumnStatistics, HivePartition, HiveTable, IS_GENERIC, TableType,
};
use crate::metastore::{MetastoreClient, MetastoreError, make_partition_name};
use async_trait::async_trait;
use convert::*;
use stats::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use typed_builder::TypedBuilder;

/// Message of the error returned for streaming tables
pub const STREAMING_UNSUPPORTED: &str = "HiveCatalog doesn't support streaming tables.";

/// Catalog persisting its objects in a Hive metastore
#[derive(Debug, Clone, TypedBuilder)]
pub struct HiveCatalog {
    #[builder(setter(into))]
    name: String,
    client: Arc<dyn MetastoreClient>,
    #[builder(default)]
    conf: HiveConf,
    /// Defaults to the configured default database
    #[builder(default = conf.default_database.clone(), setter(into))]
    default_database: String,
    #[builder(default, setter(skip))]
    open: Arc<AtomicBool>,
}

fn is_missing(err: &MetastoreError) -> bool {
    matches!(err, MetastoreError::NoSuchObject(_))
}

fn is_duplicate(err: &MetastoreError) -> bool {
    matches!(err, MetastoreError::AlreadyExists(_))
}

fn ignore_or(ignore: bool, err: CatalogError) -> Result<(), CatalogError> {
    if ignore { Ok(()) } else { Err(err) }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl HiveCatalog {
    pub fn conf(&self) -> &HiveConf {
        &self.conf
    }

    pub fn client(&self) -> &Arc<dyn MetastoreClient> {
        &self.client
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn check_open(&self) -> Result<(), CatalogError> {
        if !self.is_open() {
            return Err(CatalogError::NotOpen {
                catalog: self.name.clone(),
            });
        }
        Ok(())
    }

    fn database_not_exist(&self, database: &str) -> CatalogError {
        CatalogError::DatabaseNotExist {
            catalog: self.name.clone(),
            database: database.to_string(),
        }
    }

    fn table_not_exist(&self, path: &ObjectPath) -> CatalogError {
        CatalogError::TableNotExist {
            catalog: self.name.clone(),
            path: path.clone(),
        }
    }

    fn partition_not_exist(&self, path: &ObjectPath, spec: &CatalogPartitionSpec) -> CatalogError {
        CatalogError::PartitionNotExist {
            catalog: self.name.clone(),
            path: path.clone(),
            spec: spec.clone(),
        }
    }

    fn function_not_exist(&self, path: &ObjectPath) -> CatalogError {
        CatalogError::FunctionNotExist {
            catalog: self.name.clone(),
            path: path.clone(),
        }
    }

    /// Returns the metastore record of a table or view, including its
    /// storage format.
    pub async fn get_hive_table(&self, path: &ObjectPath) -> Result<HiveTable, CatalogError> {
        self.check_open()?;
        self.client
            .get_table(path.database_name(), path.object_name())
            .await
            .map_err(|e| {
                if is_missing(&e) {
                    self.table_not_exist(path)
                } else {
                    e.into()
                }
            })
    }

    async fn get_partitioned_table(&self, path: &ObjectPath) -> Result<HiveTable, CatalogError> {
        let table = self.get_hive_table(path).await?;
        if table.partition_keys.is_empty() {
            return Err(CatalogError::TableNotPartitioned {
                catalog: self.name.clone(),
                path: path.clone(),
            });
        }
        Ok(table)
    }

    fn spec_invalid(
        &self,
        path: &ObjectPath,
        table: &HiveTable,
        spec: &CatalogPartitionSpec,
    ) -> CatalogError {
        CatalogError::PartitionSpecInvalid {
            catalog: self.name.clone(),
            path: path.clone(),
            partition_keys: table.partition_keys.iter().map(|k| k.name.clone()).collect(),
            spec: spec.clone(),
        }
    }

    /// Partition values in partition-key order. The partition spec must name exactly
    /// the table's partition keys.
    fn full_partition_values(
        &self,
        path: &ObjectPath,
        table: &HiveTable,
        spec: &CatalogPartitionSpec,
    ) -> Result<Vec<String>, CatalogError> {
        if spec.len() != table.partition_keys.len() {
            return Err(self.spec_invalid(path, table, spec));
        }
        table
            .partition_keys
            .iter()
            .map(|k| {
                spec.get(&k.name)
                    .map(str::to_string)
                    .ok_or_else(|| self.spec_invalid(path, table, spec))
            })
            .collect()
    }

    /// Resolves the table of a partition operation that tolerates a missing
    /// partition. `Ok(None)` means the table is missing and `ignore` is set.
    async fn table_for_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        ignore: bool,
    ) -> Result<Option<HiveTable>, CatalogError> {
        match self.get_partitioned_table(path).await {
            Ok(table) => Ok(Some(table)),
            Err(CatalogError::TableNotExist { .. }) => {
                ignore_or(ignore, self.partition_not_exist(path, spec)).map(|_| None)
            }
            Err(e) => Err(e),
        }
    }

    async fn get_hive_partition(
        &self,
        path: &ObjectPath,
        table: &HiveTable,
        spec: &CatalogPartitionSpec,
    ) -> Result<HivePartition, CatalogError> {
        let values = self.full_partition_values(path, table, spec)?;
        self.client
            .get_partition(path.database_name(), path.object_name(), &values)
            .await
            .map_err(|e| {
                if is_missing(&e) {
                    self.partition_not_exist(path, spec)
                } else {
                    e.into()
                }
            })
    }

    fn check_not_streaming(table: &CatalogBaseTable) -> Result<(), CatalogError> {
        if let CatalogBaseTable::Table(t) = table
            && t.is_streaming()
        {
            return Err(CatalogError::Unsupported(STREAMING_UNSUPPORTED.to_string()));
        }
        Ok(())
    }

    fn data_schema(table: &HiveTable) -> Result<TableSchema, CatalogError> {
        schema_from_hive(&table.sd.cols)
    }

    fn data_column_names(table: &HiveTable) -> Vec<String> {
        table.sd.cols.iter().map(|c| c.name.clone()).collect()
    }
}

#[async_trait]
impl Catalog for HiveCatalog {
    async fn open(&self) -> Result<(), CatalogError> {
        match self.client.get_database(&self.default_database).await {
            Ok(_) => {}
            Err(e) if is_missing(&e) => {
                return Err(CatalogError::Config(format!(
                    "Configured default database {} doesn't exist in catalog {}.",
                    self.default_database, self.name
                )));
            }
            Err(e) => return Err(e.into()),
        }
        if !self.open.swap(true, Ordering::SeqCst) {
            log::info!("Opened catalog {}", self.name);
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), CatalogError> {
        if self.open.swap(false, Ordering::SeqCst) {
            self.client.close().await?;
            log::info!("Closed catalog {}", self.name);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn default_database(&self) -> &str {
        &self.default_database
    }

    async fn list_databases(&self) -> Result<Vec<String>, CatalogError> {
        self.check_open()?;
        Ok(self.client.get_all_databases().await?)
    }

    async fn get_database(&self, name: &str) -> Result<CatalogDatabase, CatalogError> {
        self.check_open()?;
        match self.client.get_database(name).await {
            Ok(db) => Ok(database_from_hive(db)),
            Err(e) if is_missing(&e) => Err(self.database_not_exist(name)),
            Err(e) => Err(e.into()),
        }
    }

    async fn database_exists(&self, name: &str) -> Result<bool, CatalogError> {
        match self.get_database(name).await {
            Ok(_) => Ok(true),
            Err(CatalogError::DatabaseNotExist { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_database(
        &self,
        name: &str,
        database: CatalogDatabase,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError> {
        self.check_open()?;
        match self
            .client
            .create_database(database_to_hive(name, &database))
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if is_duplicate(&e) => ignore_or(
                ignore_if_exists,
                CatalogError::DatabaseAlreadyExist {
                    catalog: self.name.clone(),
                    database: name.to_string(),
                },
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn drop_database(
        &self,
        name: &str,
        ignore_if_not_exists: bool,
        cascade: bool,
    ) -> Result<(), CatalogError> {
        if !self.database_exists(name).await? {
            return ignore_or(ignore_if_not_exists, self.database_not_exist(name));
        }
        if !cascade
            && (!self.client.get_all_tables(name).await?.is_empty()
                || !self.client.get_functions(name).await?.is_empty())
        {
            return Err(CatalogError::DatabaseNotEmpty {
                catalog: self.name.clone(),
                database: name.to_string(),
            });
        }
        match self.client.drop_database(name, cascade).await {
            Ok(()) => Ok(()),
            Err(e) if is_missing(&e) => {
                ignore_or(ignore_if_not_exists, self.database_not_exist(name))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn alter_database(
        &self,
        name: &str,
        database: CatalogDatabase,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        self.check_open()?;
        let existing = match self.client.get_database(name).await {
            Ok(db) => db,
            Err(e) if is_missing(&e) => {
                return ignore_or(ignore_if_not_exists, self.database_not_exist(name));
            }
            Err(e) => return Err(e.into()),
        };
        let mut altered = database_to_hive(name, &database);
        altered.location_uri = existing.location_uri;
        altered.owner_name = existing.owner_name;
        Ok(self.client.alter_database(name, altered).await?)
    }

    async fn list_tables(&self, database: &str) -> Result<Vec<String>, CatalogError> {
        self.check_open()?;
        match self.client.get_all_tables(database).await {
            Ok(tables) => Ok(tables),
            Err(e) if is_missing(&e) => Err(self.database_not_exist(database)),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_views(&self, database: &str) -> Result<Vec<String>, CatalogError> {
        self.check_open()?;
        match self
            .client
            .get_tables_by_type(database, TableType::VirtualView)
            .await
        {
            Ok(views) => Ok(views),
            Err(e) if is_missing(&e) => Err(self.database_not_exist(database)),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_table(&self, path: &ObjectPath) -> Result<CatalogBaseTable, CatalogError> {
        table_from_hive(self.get_hive_table(path).await?)
    }

    async fn table_exists(&self, path: &ObjectPath) -> Result<bool, CatalogError> {
        self.check_open()?;
        Ok(self
            .client
            .table_exists(path.database_name(), path.object_name())
            .await?)
    }

    async fn create_table(
        &self,
        path: &ObjectPath,
        table: CatalogBaseTable,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError> {
        self.check_open()?;
        Self::check_not_streaming(&table)?;
        if !self.database_exists(path.database_name()).await? {
            return Err(self.database_not_exist(path.database_name()));
        }

        let record = table_to_hive(path, &table, self.conf.default_file_format)?;
        match self.client.create_table(record).await {
            Ok(()) => {
                log::debug!("Created {} {path} in catalog {}", table.kind(), self.name);
                Ok(())
            }
            Err(e) if is_duplicate(&e) => ignore_or(
                ignore_if_exists,
                CatalogError::TableAlreadyExist {
                    catalog: self.name.clone(),
                    path: path.clone(),
                },
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn alter_table(
        &self,
        path: &ObjectPath,
        table: CatalogBaseTable,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        Self::check_not_streaming(&table)?;
        let existing = match self.get_hive_table(path).await {
            Ok(existing) => existing,
            Err(CatalogError::TableNotExist { .. }) => {
                return ignore_or(ignore_if_not_exists, self.table_not_exist(path));
            }
            Err(e) => return Err(e),
        };

        let existing_kind = if existing.is_view() { "view" } else { "table" };
        if existing_kind != table.kind() {
            return Err(CatalogError::IncompatibleKind {
                object: "Table",
                existing: existing_kind,
                new: table.kind(),
            });
        }

        let mut altered = table_to_hive(path, &table, self.conf.default_file_format)?;
        if !altered.is_view() {
            let cols = std::mem::take(&mut altered.sd.cols);
            altered.sd = existing.sd.clone();
            altered.sd.cols = cols;
        }
        altered.owner = existing.owner.clone();
        carry_statistics(&existing.parameters, &mut altered.parameters);

        self.client
            .alter_table(path.database_name(), path.object_name(), altered)
            .await?;
        Ok(())
    }

    async fn rename_table(
        &self,
        path: &ObjectPath,
        new_name: &str,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        let mut table = match self.get_hive_table(path).await {
            Ok(table) => table,
            Err(CatalogError::TableNotExist { .. }) => {
                return ignore_or(ignore_if_not_exists, self.table_not_exist(path));
            }
            Err(e) => return Err(e),
        };
        let new_path = ObjectPath::new(path.database_name(), new_name);
        if self.table_exists(&new_path).await? {
            return Err(CatalogError::TableAlreadyExist {
                catalog: self.name.clone(),
                path: new_path,
            });
        }
        table.table_name = new_name.to_string();
        self.client
            .alter_table(path.database_name(), path.object_name(), table)
            .await?;
        Ok(())
    }

    async fn drop_table(
        &self,
        path: &ObjectPath,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        self.check_open()?;
        match self
            .client
            .drop_table(path.database_name(), path.object_name())
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if is_missing(&e) => {
                ignore_or(ignore_if_not_exists, self.table_not_exist(path))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_partitions(
        &self,
        path: &ObjectPath,
    ) -> Result<Vec<CatalogPartitionSpec>, CatalogError> {
        let table = self.get_partitioned_table(path).await?;
        let partitions = self
            .client
            .list_partitions(path.database_name(), path.object_name())
            .await?;
        Ok(partitions
            .iter()
            .map(|p| spec_from_values(&table.partition_keys, &p.values))
            .collect())
    }

    async fn list_partitions_by_spec(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<Vec<CatalogPartitionSpec>, CatalogError> {
        let table = self.get_partitioned_table(path).await?;
        let is_partial_spec = spec
            .spec()
            .keys()
            .all(|k| table.partition_keys.iter().any(|p| &p.name == k));
        if !is_partial_spec {
            return Err(self.spec_invalid(path, &table, spec));
        }
        let partitions = self
            .client
            .list_partitions(path.database_name(), path.object_name())
            .await?;
        Ok(partitions
            .iter()
            .map(|p| spec_from_values(&table.partition_keys, &p.values))
            .filter(|candidate| {
                spec.spec()
                    .iter()
                    .all(|(k, v)| candidate.get(k) == Some(v.as_str()))
            })
            .collect())
    }

    async fn get_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<CatalogPartition, CatalogError> {
        let table = self.get_partitioned_table(path).await?;
        let partition = self.get_hive_partition(path, &table, spec).await?;
        Ok(partition_from_hive(partition))
    }

    async fn partition_exists(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<bool, CatalogError> {
        let table = match self.get_partitioned_table(path).await {
            Ok(table) => table,
            Err(CatalogError::TableNotExist { .. }) => return Ok(false),
            Err(e) => return Err(e),
        };
        match self.get_hive_partition(path, &table, spec).await {
            Ok(_) => Ok(true),
            Err(CatalogError::PartitionNotExist { .. })
            | Err(CatalogError::PartitionSpecInvalid { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        partition: CatalogPartition,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError> {
        let table = self.get_partitioned_table(path).await?;
        let values = self.full_partition_values(path, &table, spec)?;
        let record = partition_to_hive(&table, values, &partition)?;
        match self.client.add_partition(record).await {
            Ok(_) => {
                log::debug!(
                    "Created {} partition {spec} of {path} in catalog {}",
                    partition.kind(),
                    self.name
                );
                Ok(())
            }
            Err(e) if is_duplicate(&e) => ignore_or(
                ignore_if_exists,
                CatalogError::PartitionAlreadyExists {
                    catalog: self.name.clone(),
                    path: path.clone(),
                    spec: spec.clone(),
                },
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn alter_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        partition: CatalogPartition,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        let Some(table) = self
            .table_for_partition(path, spec, ignore_if_not_exists)
            .await?
        else {
            return Ok(());
        };
        let existing = match self.get_hive_partition(path, &table, spec).await {
            Ok(existing) => existing,
            Err(CatalogError::PartitionNotExist { .. }) => {
                return ignore_or(ignore_if_not_exists, self.partition_not_exist(path, spec));
            }
            Err(e) => return Err(e),
        };

        let existing_kind = if existing.parameters.contains_key(IS_GENERIC) {
            "generic"
        } else {
            "hive"
        };
        if existing_kind != partition.kind() {
            return Err(CatalogError::IncompatibleKind {
                object: "Partition",
                existing: existing_kind,
                new: partition.kind(),
            });
        }

        let mut altered = partition_to_hive(&table, existing.values.clone(), &partition)?;
        if altered.sd.location.is_none() {
            altered.sd.location = existing.sd.location.clone();
        }
        carry_statistics(&existing.parameters, &mut altered.parameters);
        self.client
            .alter_partition(path.database_name(), path.object_name(), altered)
            .await?;
        Ok(())
    }

    async fn drop_partition(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        let Some(table) = self
            .table_for_partition(path, spec, ignore_if_not_exists)
            .await?
        else {
            return Ok(());
        };
        let values = self.full_partition_values(path, &table, spec)?;
        match self
            .client
            .drop_partition(path.database_name(), path.object_name(), &values)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if is_missing(&e) => {
                ignore_or(ignore_if_not_exists, self.partition_not_exist(path, spec))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_functions(&self, database: &str) -> Result<Vec<String>, CatalogError> {
        self.check_open()?;
        match self.client.get_functions(database).await {
            Ok(functions) => Ok(functions),
            Err(e) if is_missing(&e) => Err(self.database_not_exist(database)),
            Err(e) => Err(e.into()),
        }
    }

    async fn get_function(&self, path: &ObjectPath) -> Result<CatalogFunction, CatalogError> {
        self.check_open()?;
        match self
            .client
            .get_function(path.database_name(), path.object_name())
            .await
        {
            Ok(function) => Ok(function_from_hive(function)),
            Err(e) if is_missing(&e) => Err(self.function_not_exist(path)),
            Err(e) => Err(e.into()),
        }
    }

    async fn function_exists(&self, path: &ObjectPath) -> Result<bool, CatalogError> {
        match self.get_function(path).await {
            Ok(_) => Ok(true),
            Err(CatalogError::FunctionNotExist { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn create_function(
        &self,
        path: &ObjectPath,
        function: CatalogFunction,
        ignore_if_exists: bool,
    ) -> Result<(), CatalogError> {
        if !self.database_exists(path.database_name()).await? {
            return Err(self.database_not_exist(path.database_name()));
        }
        match self
            .client
            .create_function(function_to_hive(path, &function))
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if is_duplicate(&e) => ignore_or(
                ignore_if_exists,
                CatalogError::FunctionAlreadyExist {
                    catalog: self.name.clone(),
                    path: path.clone(),
                },
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn alter_function(
        &self,
        path: &ObjectPath,
        function: CatalogFunction,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        self.check_open()?;
        match self
            .client
            .alter_function(
                path.database_name(),
                path.object_name(),
                function_to_hive(path, &function),
            )
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if is_missing(&e) => {
                ignore_or(ignore_if_not_exists, self.function_not_exist(path))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn drop_function(
        &self,
        path: &ObjectPath,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        self.check_open()?;
        match self
            .client
            .drop_function(path.database_name(), path.object_name())
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if is_missing(&e) => {
                ignore_or(ignore_if_not_exists, self.function_not_exist(path))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_table_statistics(
        &self,
        path: &ObjectPath,
    ) -> Result<TableStatistics, CatalogError> {
        let table = self.get_hive_table(path).await?;
        if !table.partition_keys.is_empty() {
            return Ok(TableStatistics::UNKNOWN);
        }
        Ok(table_statistics_from_params(&table.parameters))
    }

    async fn get_table_column_statistics(
        &self,
        path: &ObjectPath,
    ) -> Result<ColumnStatistics, CatalogError> {
        let table = self.get_hive_table(path).await?;
        let objs = self
            .client
            .get_table_column_statistics(
                path.database_name(),
                path.object_name(),
                &Self::data_column_names(&table),
            )
            .await?;
        Ok(column_statistics_from_hive(objs))
    }

    async fn get_partition_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<TableStatistics, CatalogError> {
        let table = self.get_partitioned_table(path).await?;
        let partition = self.get_hive_partition(path, &table, spec).await?;
        Ok(table_statistics_from_params(&partition.parameters))
    }

    async fn get_partition_column_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
    ) -> Result<ColumnStatistics, CatalogError> {
        let table = self.get_partitioned_table(path).await?;
        let partition = self.get_hive_partition(path, &table, spec).await?;
        let keys: Vec<&str> = table.partition_keys.iter().map(|k| k.name.as_str()).collect();
        let part_name = make_partition_name(&keys, &partition.values);
        let mut by_partition = self
            .client
            .get_partition_column_statistics(
                path.database_name(),
                path.object_name(),
                std::slice::from_ref(&part_name),
                &Self::data_column_names(&table),
            )
            .await?;
        Ok(column_statistics_from_hive(
            by_partition.remove(&part_name).unwrap_or_default(),
        ))
    }

    async fn alter_table_statistics(
        &self,
        path: &ObjectPath,
        statistics: TableStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        let mut table = match self.get_hive_table(path).await {
            Ok(table) => table,
            Err(CatalogError::TableNotExist { .. }) => {
                return ignore_or(ignore_if_not_exists, self.table_not_exist(path));
            }
            Err(e) => return Err(e),
        };
        if update_statistics_params(&mut table.parameters, &statistics) {
            self.client
                .alter_table(path.database_name(), path.object_name(), table)
                .await?;
        }
        Ok(())
    }

    async fn alter_table_column_statistics(
        &self,
        path: &ObjectPath,
        statistics: ColumnStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        let table = match self.get_hive_table(path).await {
            Ok(table) => table,
            Err(CatalogError::TableNotExist { .. }) => {
                return ignore_or(ignore_if_not_exists, self.table_not_exist(path));
            }
            Err(e) => return Err(e),
        };
        let stats_obj =
            column_statistics_to_hive(&self.name, path, &Self::data_schema(&table)?, &statistics)?;
        self.client
            .update_table_column_statistics(HiveColumnStatistics {
                desc: ColumnStatisticsDesc {
                    is_tbl_level: true,
                    db_name: path.database_name().to_string(),
                    table_name: path.object_name().to_string(),
                    part_name: None,
                    last_analyzed: Some(now()),
                },
                stats_obj,
            })
            .await?;
        Ok(())
    }

    async fn alter_partition_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        statistics: TableStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        let Some(table) = self
            .table_for_partition(path, spec, ignore_if_not_exists)
            .await?
        else {
            return Ok(());
        };
        let mut partition = match self.get_hive_partition(path, &table, spec).await {
            Ok(partition) => partition,
            Err(CatalogError::PartitionNotExist { .. }) => {
                return ignore_or(ignore_if_not_exists, self.partition_not_exist(path, spec));
            }
            Err(e) => return Err(e),
        };
        if update_statistics_params(&mut partition.parameters, &statistics) {
            self.client
                .alter_partition(path.database_name(), path.object_name(), partition)
                .await?;
        }
        Ok(())
    }

    async fn alter_partition_column_statistics(
        &self,
        path: &ObjectPath,
        spec: &CatalogPartitionSpec,
        statistics: ColumnStatistics,
        ignore_if_not_exists: bool,
    ) -> Result<(), CatalogError> {
        let Some(table) = self
            .table_for_partition(path, spec, ignore_if_not_exists)
            .await?
        else {
            return Ok(());
        };
        let partition = match self.get_hive_partition(path, &table, spec).await {
            Ok(partition) => partition,
            Err(CatalogError::PartitionNotExist { .. }) => {
                return ignore_or(ignore_if_not_exists, self.partition_not_exist(path, spec));
            }
            Err(e) => return Err(e),
        };
        let stats_obj =
            column_statistics_to_hive(&self.name, path, &Self::data_schema(&table)?, &statistics)?;
        let keys: Vec<&str> = table.partition_keys.iter().map(|k| k.name.as_str()).collect();
        self.client
            .update_partition_column_statistics(HiveColumnStatistics {
                desc: ColumnStatisticsDesc {
                    is_tbl_level: false,
                    db_name: path.database_name().to_string(),
                    table_name: path.object_name().to_string(),
                    part_name: Some(make_partition_name(&keys, &partition.values)),
                    last_analyzed: Some(now()),
                },
                stats_obj,
            })
            .await?;
        Ok(())
    }
}
