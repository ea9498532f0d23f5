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

//! Catalog object model

pub mod partition;
pub mod schema;
pub mod stats;
pub mod table;

pub use partition::{CatalogPartition, GenericCatalogPartition, HiveCatalogPartition};
pub use schema::{DataType, TableColumn, TableSchema, TableSchemaBuilder};
pub use stats::{ColumnStatistics, ColumnStatisticsData, Date, TableStatistics};
pub use table::{CatalogBaseTable, CatalogTable, CatalogView};

use crate::catalog::error::ValidationErr;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Key-value properties attached to catalog objects
pub type Properties = HashMap<String, String>;

/// Table property marking a streaming table
pub const IS_STREAMING: &str = "is_streaming";

/// Fully qualified name of a table, view or function: `<database>.<object>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectPath {
    database_name: String,
    object_name: String,
}

impl ObjectPath {
    pub fn new<S1: Into<String>, S2: Into<String>>(database_name: S1, object_name: S2) -> Self {
        Self {
            database_name: database_name.into(),
            object_name: object_name.into(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn full_name(&self) -> String {
        format!("{}.{}", self.database_name, self.object_name)
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.database_name, self.object_name)
    }
}

impl FromStr for ObjectPath {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((db, object))
                if !db.trim().is_empty() && !object.trim().is_empty() && !object.contains('.') =>
            {
                Ok(Self::new(db, object))
            }
            _ => Err(ValidationErr::InvalidObjectPath(s.to_string())),
        }
    }
}

/// Partition key to value mapping identifying one partition (or, when
/// partial, a set of partitions)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPartitionSpec {
    spec: HashMap<String, String>,
}

impl CatalogPartitionSpec {
    pub fn new(spec: HashMap<String, String>) -> Self {
        Self { spec }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.spec.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.spec.contains_key(key)
    }

    pub fn spec(&self) -> &HashMap<String, String> {
        &self.spec
    }

    pub fn len(&self) -> usize {
        self.spec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CatalogPartitionSpec {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for CatalogPartitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.spec.iter().collect();
        entries.sort();
        write!(f, "{{")?;
        for (i, (k, v)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        write!(f, "}}")
    }
}

/// Database descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogDatabase {
    pub properties: Properties,
    pub comment: String,
}

impl CatalogDatabase {
    pub fn new<S: Into<String>>(properties: Properties, comment: S) -> Self {
        Self {
            properties,
            comment: comment.into(),
        }
    }
}

/// User-defined function, identified by its implementing class
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogFunction {
    pub class_name: String,
}

impl CatalogFunction {
    pub fn new<S: Into<String>>(class_name: S) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}
