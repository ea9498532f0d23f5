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

//! In-process metastore
//!
//! [`InMemoryMetastore`] keeps every record in concurrent maps and behaves
//! like a real metastore towards its callers: names are lowercased and
//! validated, and every stored object is stamped with bookkeeping entries
//! (creation time, last DDL time, owner, default locations). Callers that
//! compare what they stored with what they read back must therefore allow for
//! extra parameters.

use crate::config::HiveConf;
use crate::metastore::types::*;
use crate::metastore::{MetastoreClient, MetastoreError, make_partition_name};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

/// Database every metastore starts with; it cannot be dropped
pub const DEFAULT_DATABASE_NAME: &str = "default";

static VALID_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

type TableKey = (String, String);
type FunctionKey = (String, String);

#[derive(Debug, Clone)]
struct PartitionEntry {
    partition: HivePartition,
    column_stats: HashMap<String, ColumnStatisticsObj>,
}

#[derive(Debug, Clone)]
struct TableEntry {
    table: HiveTable,
    /// Keyed by partition name
    partitions: BTreeMap<String, PartitionEntry>,
    column_stats: HashMap<String, ColumnStatisticsObj>,
}

impl TableEntry {
    fn partition_key_names(&self) -> Vec<&str> {
        self.table
            .partition_keys
            .iter()
            .map(|k| k.name.as_str())
            .collect()
    }

    fn partition_name(&self, values: &[String]) -> Result<String, MetastoreError> {
        let keys = self.partition_key_names();
        if keys.is_empty() {
            return Err(MetastoreError::InvalidObject(format!(
                "table {}.{} is not partitioned",
                self.table.db_name, self.table.table_name
            )));
        }
        if keys.len() != values.len() {
            return Err(MetastoreError::InvalidObject(format!(
                "expected {} partition values for table {}.{}, got {}",
                keys.len(),
                self.table.db_name,
                self.table.table_name,
                values.len()
            )));
        }
        Ok(make_partition_name(&keys, values))
    }

    fn has_column(&self, name: &str) -> bool {
        self.table
            .sd
            .cols
            .iter()
            .chain(&self.table.partition_keys)
            .any(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Metastore held entirely in memory
#[derive(Debug)]
pub struct InMemoryMetastore {
    conf: HiveConf,
    databases: DashMap<String, HiveDatabase>,
    tables: DashMap<TableKey, TableEntry>,
    functions: DashMap<FunctionKey, HiveFunction>,
    closed: AtomicBool,
}

impl Default for InMemoryMetastore {
    fn default() -> Self {
        Self::new(HiveConf::default())
    }
}

impl InMemoryMetastore {
    pub fn new(conf: HiveConf) -> Self {
        let databases = DashMap::new();
        databases.insert(
            DEFAULT_DATABASE_NAME.to_string(),
            HiveDatabase {
                name: DEFAULT_DATABASE_NAME.to_string(),
                description: Some("Default Hive database".to_string()),
                location_uri: Some(conf.warehouse_dir.clone()),
                parameters: Parameters::new(),
                owner_name: Some(conf.owner.clone()),
            },
        );
        Self {
            conf,
            databases,
            tables: DashMap::new(),
            functions: DashMap::new(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn conf(&self) -> &HiveConf {
        &self.conf
    }

    fn check_open(&self) -> Result<(), MetastoreError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(MetastoreError::Closed);
        }
        Ok(())
    }

    fn database_location(&self, db_name: &str) -> Result<String, MetastoreError> {
        let db = self
            .databases
            .get(db_name)
            .ok_or_else(|| MetastoreError::NoSuchObject(format!("database {db_name}")))?;
        Ok(db
            .location_uri
            .clone()
            .unwrap_or_else(|| self.conf.database_location(db_name)))
    }

    fn require_database(&self, db_name: &str) -> Result<(), MetastoreError> {
        if !self.databases.contains_key(db_name) {
            return Err(MetastoreError::NoSuchObject(format!("database {db_name}")));
        }
        Ok(())
    }

    fn table_entry(&self, key: &TableKey) -> Result<TableEntry, MetastoreError> {
        self.tables
            .get(key)
            .map(|e| e.value().clone())
            .ok_or_else(|| no_such_table(key))
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

fn validated(kind: &str, name: &str) -> Result<String, MetastoreError> {
    if !VALID_NAME.is_match(name) {
        return Err(MetastoreError::InvalidObject(format!(
            "{name} is not a valid {kind} name"
        )));
    }
    Ok(normalize(name))
}

fn table_key(db_name: &str, table_name: &str) -> TableKey {
    (normalize(db_name), normalize(table_name))
}

fn no_such_table(key: &TableKey) -> MetastoreError {
    MetastoreError::NoSuchObject(format!("table {}.{}", key.0, key.1))
}

fn stamp_ddl_time(parameters: &mut Parameters) {
    parameters.insert(DDL_TIME.to_string(), now().to_string());
}

fn merge_stats(
    target: &mut HashMap<String, ColumnStatisticsObj>,
    stats: Vec<ColumnStatisticsObj>,
) {
    for obj in stats {
        target.insert(normalize(&obj.col_name), obj);
    }
}

fn select_stats(
    stats: &HashMap<String, ColumnStatisticsObj>,
    col_names: &[String],
) -> Vec<ColumnStatisticsObj> {
    col_names
        .iter()
        .filter_map(|c| stats.get(&normalize(c)).cloned())
        .collect()
}

#[async_trait]
impl MetastoreClient for InMemoryMetastore {
    async fn get_all_databases(&self) -> Result<Vec<String>, MetastoreError> {
        self.check_open()?;
        let mut names: Vec<String> = self.databases.iter().map(|e| e.key().clone()).collect();
        names.sort();
        Ok(names)
    }

    async fn get_database(&self, name: &str) -> Result<HiveDatabase, MetastoreError> {
        self.check_open()?;
        self.databases
            .get(&normalize(name))
            .map(|e| e.value().clone())
            .ok_or_else(|| MetastoreError::NoSuchObject(format!("database {name}")))
    }

    async fn create_database(&self, mut database: HiveDatabase) -> Result<(), MetastoreError> {
        self.check_open()?;
        let name = validated("database", &database.name)?;
        database.location_uri = database
            .location_uri
            .or_else(|| Some(self.conf.database_location(&name)));
        database.owner_name = database.owner_name.or_else(|| Some(self.conf.owner.clone()));
        database.name = name.clone();
        match self.databases.entry(name) {
            Entry::Occupied(e) => Err(MetastoreError::AlreadyExists(format!(
                "database {}",
                e.key()
            ))),
            Entry::Vacant(e) => {
                log::debug!("created database {}", e.key());
                e.insert(database);
                Ok(())
            }
        }
    }

    async fn drop_database(&self, name: &str, cascade: bool) -> Result<(), MetastoreError> {
        self.check_open()?;
        let name = normalize(name);
        if name == DEFAULT_DATABASE_NAME {
            return Err(MetastoreError::InvalidOperation(
                "cannot drop the default database".to_string(),
            ));
        }
        self.require_database(&name)?;

        let has_tables = self.tables.iter().any(|e| e.key().0 == name);
        let has_functions = self.functions.iter().any(|e| e.key().0 == name);
        if (has_tables || has_functions) && !cascade {
            return Err(MetastoreError::InvalidOperation(format!(
                "database {name} is not empty"
            )));
        }

        self.tables.retain(|k, _| k.0 != name);
        self.functions.retain(|k, _| k.0 != name);
        self.databases.remove(&name);
        log::debug!("dropped database {name} (cascade={cascade})");
        Ok(())
    }

    async fn alter_database(
        &self,
        name: &str,
        mut database: HiveDatabase,
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let name = normalize(name);
        let mut existing = self
            .databases
            .get_mut(&name)
            .ok_or_else(|| MetastoreError::NoSuchObject(format!("database {name}")))?;
        database.name = name;
        database.location_uri = database.location_uri.or(existing.location_uri.take());
        database.owner_name = database.owner_name.or(existing.owner_name.take());
        *existing = database;
        Ok(())
    }

    async fn get_all_tables(&self, db_name: &str) -> Result<Vec<String>, MetastoreError> {
        self.check_open()?;
        let db_name = normalize(db_name);
        self.require_database(&db_name)?;
        let mut names: Vec<String> = self
            .tables
            .iter()
            .filter(|e| e.key().0 == db_name)
            .map(|e| e.key().1.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn get_tables_by_type(
        &self,
        db_name: &str,
        table_type: TableType,
    ) -> Result<Vec<String>, MetastoreError> {
        self.check_open()?;
        let db_name = normalize(db_name);
        self.require_database(&db_name)?;
        let mut names: Vec<String> = self
            .tables
            .iter()
            .filter(|e| e.key().0 == db_name && e.value().table.table_type == table_type)
            .map(|e| e.key().1.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn get_table(
        &self,
        db_name: &str,
        table_name: &str,
    ) -> Result<HiveTable, MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        Ok(self.table_entry(&key)?.table)
    }

    async fn table_exists(&self, db_name: &str, table_name: &str) -> Result<bool, MetastoreError> {
        self.check_open()?;
        Ok(self.tables.contains_key(&table_key(db_name, table_name)))
    }

    async fn create_table(&self, mut table: HiveTable) -> Result<(), MetastoreError> {
        self.check_open()?;
        let db_name = normalize(&table.db_name);
        let db_location = self.database_location(&db_name)?;
        let table_name = validated("table", &table.table_name)?;

        table.db_name = db_name.clone();
        table.table_name = table_name.clone();
        table.create_time = now();
        if table.owner.is_empty() {
            table.owner = self.conf.owner.clone();
        }
        if !table.is_view() && table.sd.location.is_none() {
            table.sd.location = Some(format!("{db_location}/{table_name}"));
        }
        stamp_ddl_time(&mut table.parameters);

        match self.tables.entry((db_name, table_name)) {
            Entry::Occupied(e) => Err(MetastoreError::AlreadyExists(format!(
                "table {}.{}",
                e.key().0,
                e.key().1
            ))),
            Entry::Vacant(e) => {
                log::debug!(
                    "created {} {}.{}",
                    table.table_type.as_str(),
                    e.key().0,
                    e.key().1
                );
                e.insert(TableEntry {
                    table,
                    partitions: BTreeMap::new(),
                    column_stats: HashMap::new(),
                });
                Ok(())
            }
        }
    }

    async fn alter_table(
        &self,
        db_name: &str,
        table_name: &str,
        mut table: HiveTable,
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        let existing = self.table_entry(&key)?;

        if normalize(&table.db_name) != key.0 {
            return Err(MetastoreError::InvalidOperation(format!(
                "cannot move table {}.{} to database {}",
                key.0, key.1, table.db_name
            )));
        }
        let new_name = validated("table", &table.table_name)?;
        table.db_name = key.0.clone();
        table.table_name = new_name.clone();
        table.create_time = existing.table.create_time;
        if table.owner.is_empty() {
            table.owner = existing.table.owner.clone();
        }
        stamp_ddl_time(&mut table.parameters);

        if new_name == key.1 {
            if let Some(mut entry) = self.tables.get_mut(&key) {
                entry.table = table;
            }
            return Ok(());
        }

        // Rename: the record moves to a new key together with its partitions
        // and statistics.
        let new_key = (key.0.clone(), new_name.clone());
        let db_location = self.database_location(&key.0)?;
        let old_location = format!("{db_location}/{}", key.1);
        let new_location = format!("{db_location}/{new_name}");
        if table.sd.location.as_deref() == Some(old_location.as_str()) {
            table.sd.location = Some(new_location.clone());
        }

        match self.tables.entry(new_key) {
            Entry::Occupied(e) => {
                return Err(MetastoreError::AlreadyExists(format!(
                    "table {}.{}",
                    e.key().0,
                    e.key().1
                )));
            }
            Entry::Vacant(e) => {
                let mut partitions = existing.partitions;
                for entry in partitions.values_mut() {
                    entry.partition.table_name = new_name.clone();
                    if let Some(location) = entry.partition.sd.location.as_mut()
                        && location.starts_with(&old_location)
                    {
                        *location = location.replacen(&old_location, &new_location, 1);
                    }
                }
                e.insert(TableEntry {
                    table,
                    partitions,
                    column_stats: existing.column_stats,
                });
            }
        }
        self.tables.remove(&key);
        log::debug!("renamed table {}.{} to {}.{new_name}", key.0, key.1, key.0);
        Ok(())
    }

    async fn drop_table(&self, db_name: &str, table_name: &str) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        if self.tables.remove(&key).is_none() {
            return Err(no_such_table(&key));
        }
        log::debug!("dropped table {}.{}", key.0, key.1);
        Ok(())
    }

    async fn list_partitions(
        &self,
        db_name: &str,
        table_name: &str,
    ) -> Result<Vec<HivePartition>, MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        let entry = self.tables.get(&key).ok_or_else(|| no_such_table(&key))?;
        Ok(entry
            .partitions
            .values()
            .map(|p| p.partition.clone())
            .collect())
    }

    async fn get_partition(
        &self,
        db_name: &str,
        table_name: &str,
        values: &[String],
    ) -> Result<HivePartition, MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        let entry = self.tables.get(&key).ok_or_else(|| no_such_table(&key))?;
        let name = entry.partition_name(values)?;
        entry
            .partitions
            .get(&name)
            .map(|p| p.partition.clone())
            .ok_or_else(|| {
                MetastoreError::NoSuchObject(format!("partition {name} of {}.{}", key.0, key.1))
            })
    }

    async fn add_partition(
        &self,
        mut partition: HivePartition,
    ) -> Result<HivePartition, MetastoreError> {
        self.check_open()?;
        let key = table_key(&partition.db_name, &partition.table_name);
        let mut entry = self
            .tables
            .get_mut(&key)
            .ok_or_else(|| no_such_table(&key))?;
        let name = entry.partition_name(&partition.values)?;
        if entry.partitions.contains_key(&name) {
            return Err(MetastoreError::AlreadyExists(format!(
                "partition {name} of {}.{}",
                key.0, key.1
            )));
        }

        partition.db_name = key.0.clone();
        partition.table_name = key.1.clone();
        partition.create_time = now();
        if partition.sd.input_format.is_empty() {
            let location = partition.sd.location.take();
            partition.sd = entry.table.sd.clone();
            partition.sd.location = location;
        }
        if partition.sd.location.is_none() {
            let table_location = entry.table.sd.location.clone().unwrap_or_default();
            partition.sd.location = Some(format!("{table_location}/{name}"));
        }
        stamp_ddl_time(&mut partition.parameters);

        entry.partitions.insert(
            name.clone(),
            PartitionEntry {
                partition: partition.clone(),
                column_stats: HashMap::new(),
            },
        );
        log::debug!("added partition {name} to {}.{}", key.0, key.1);
        Ok(partition)
    }

    async fn alter_partition(
        &self,
        db_name: &str,
        table_name: &str,
        mut partition: HivePartition,
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        let mut entry = self
            .tables
            .get_mut(&key)
            .ok_or_else(|| no_such_table(&key))?;
        let name = entry.partition_name(&partition.values)?;
        let existing = entry.partitions.get_mut(&name).ok_or_else(|| {
            MetastoreError::NoSuchObject(format!("partition {name} of {}.{}", key.0, key.1))
        })?;

        partition.db_name = key.0.clone();
        partition.table_name = key.1.clone();
        partition.create_time = existing.partition.create_time;
        if partition.sd.input_format.is_empty() {
            let location = partition.sd.location.take();
            partition.sd = existing.partition.sd.clone();
            partition.sd.location = location;
        }
        if partition.sd.location.is_none() {
            partition.sd.location = existing.partition.sd.location.clone();
        }
        stamp_ddl_time(&mut partition.parameters);
        existing.partition = partition;
        Ok(())
    }

    async fn drop_partition(
        &self,
        db_name: &str,
        table_name: &str,
        values: &[String],
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        let mut entry = self
            .tables
            .get_mut(&key)
            .ok_or_else(|| no_such_table(&key))?;
        let name = entry.partition_name(values)?;
        entry.partitions.remove(&name).map(|_| ()).ok_or_else(|| {
            MetastoreError::NoSuchObject(format!("partition {name} of {}.{}", key.0, key.1))
        })
    }

    async fn get_functions(&self, db_name: &str) -> Result<Vec<String>, MetastoreError> {
        self.check_open()?;
        let db_name = normalize(db_name);
        self.require_database(&db_name)?;
        let mut names: Vec<String> = self
            .functions
            .iter()
            .filter(|e| e.key().0 == db_name)
            .map(|e| e.key().1.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn get_function(
        &self,
        db_name: &str,
        function_name: &str,
    ) -> Result<HiveFunction, MetastoreError> {
        self.check_open()?;
        let key = (normalize(db_name), normalize(function_name));
        self.functions
            .get(&key)
            .map(|e| e.value().clone())
            .ok_or_else(|| MetastoreError::NoSuchObject(format!("function {}.{}", key.0, key.1)))
    }

    async fn create_function(&self, mut function: HiveFunction) -> Result<(), MetastoreError> {
        self.check_open()?;
        let db_name = normalize(&function.db_name);
        self.require_database(&db_name)?;
        let function_name = validated("function", &function.function_name)?;

        function.db_name = db_name.clone();
        function.function_name = function_name.clone();
        function.create_time = now();
        function.owner_name = function.owner_name.or_else(|| Some(self.conf.owner.clone()));

        match self.functions.entry((db_name, function_name)) {
            Entry::Occupied(e) => Err(MetastoreError::AlreadyExists(format!(
                "function {}.{}",
                e.key().0,
                e.key().1
            ))),
            Entry::Vacant(e) => {
                e.insert(function);
                Ok(())
            }
        }
    }

    async fn alter_function(
        &self,
        db_name: &str,
        function_name: &str,
        mut function: HiveFunction,
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = (normalize(db_name), normalize(function_name));
        let mut existing = self.functions.get_mut(&key).ok_or_else(|| {
            MetastoreError::NoSuchObject(format!("function {}.{}", key.0, key.1))
        })?;
        function.db_name = key.0.clone();
        function.function_name = key.1.clone();
        function.create_time = existing.create_time;
        function.owner_name = function.owner_name.or(existing.owner_name.take());
        *existing = function;
        Ok(())
    }

    async fn drop_function(
        &self,
        db_name: &str,
        function_name: &str,
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = (normalize(db_name), normalize(function_name));
        self.functions
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| MetastoreError::NoSuchObject(format!("function {}.{}", key.0, key.1)))
    }

    async fn update_table_column_statistics(
        &self,
        statistics: HiveColumnStatistics,
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = table_key(&statistics.desc.db_name, &statistics.desc.table_name);
        let mut entry = self
            .tables
            .get_mut(&key)
            .ok_or_else(|| no_such_table(&key))?;
        if let Some(obj) = statistics
            .stats_obj
            .iter()
            .find(|obj| !entry.has_column(&obj.col_name))
        {
            return Err(MetastoreError::InvalidObject(format!(
                "column {} does not exist in table {}.{}",
                obj.col_name, key.0, key.1
            )));
        }
        merge_stats(&mut entry.column_stats, statistics.stats_obj);
        Ok(())
    }

    async fn get_table_column_statistics(
        &self,
        db_name: &str,
        table_name: &str,
        col_names: &[String],
    ) -> Result<Vec<ColumnStatisticsObj>, MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        let entry = self.tables.get(&key).ok_or_else(|| no_such_table(&key))?;
        Ok(select_stats(&entry.column_stats, col_names))
    }

    async fn update_partition_column_statistics(
        &self,
        statistics: HiveColumnStatistics,
    ) -> Result<(), MetastoreError> {
        self.check_open()?;
        let key = table_key(&statistics.desc.db_name, &statistics.desc.table_name);
        let part_name = statistics.desc.part_name.clone().ok_or_else(|| {
            MetastoreError::InvalidObject("partition statistics need a partition name".to_string())
        })?;
        let mut entry = self
            .tables
            .get_mut(&key)
            .ok_or_else(|| no_such_table(&key))?;
        if let Some(obj) = statistics
            .stats_obj
            .iter()
            .find(|obj| !entry.has_column(&obj.col_name))
        {
            return Err(MetastoreError::InvalidObject(format!(
                "column {} does not exist in table {}.{}",
                obj.col_name, key.0, key.1
            )));
        }
        let partition = entry.partitions.get_mut(&part_name).ok_or_else(|| {
            MetastoreError::NoSuchObject(format!("partition {part_name} of {}.{}", key.0, key.1))
        })?;
        merge_stats(&mut partition.column_stats, statistics.stats_obj);
        Ok(())
    }

    async fn get_partition_column_statistics(
        &self,
        db_name: &str,
        table_name: &str,
        part_names: &[String],
        col_names: &[String],
    ) -> Result<HashMap<String, Vec<ColumnStatisticsObj>>, MetastoreError> {
        self.check_open()?;
        let key = table_key(db_name, table_name);
        let entry = self.tables.get(&key).ok_or_else(|| no_such_table(&key))?;
        Ok(part_names
            .iter()
            .filter_map(|name| {
                let stats = select_stats(&entry.partitions.get(name)?.column_stats, col_names);
                (!stats.is_empty()).then(|| (name.clone(), stats))
            })
            .collect())
    }

    async fn close(&self) -> Result<(), MetastoreError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
