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

//! Records kept by a Hive metastore
//!
//! These mirror the metastore's own object model: a table is a record with a
//! storage descriptor, partition columns and a free-form parameter map; a
//! partition is a value list plus its own storage descriptor; column
//! statistics are per-column objects grouped under a descriptor naming the
//! table or partition they belong to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Parameter holding the last DDL time (seconds since the epoch)
pub const DDL_TIME: &str = "transient_lastDdlTime";
/// Parameter holding a table, partition or database comment
pub const COMMENT: &str = "comment";
/// Parameter marking a partition created from a generic descriptor
pub const IS_GENERIC: &str = "is_generic";
pub const NUM_ROWS: &str = "numRows";
pub const NUM_FILES: &str = "numFiles";
pub const TOTAL_SIZE: &str = "totalSize";
pub const RAW_DATA_SIZE: &str = "rawDataSize";

pub type Parameters = HashMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableType {
    #[default]
    ManagedTable,
    ExternalTable,
    VirtualView,
}

impl TableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::ManagedTable => "MANAGED_TABLE",
            TableType::ExternalTable => "EXTERNAL_TABLE",
            TableType::VirtualView => "VIRTUAL_VIEW",
        }
    }
}

/// Column of a storage descriptor or partition column list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    /// Hive type name, e.g. `varchar(20)`
    #[serde(rename = "type")]
    pub type_name: String,
    pub comment: Option<String>,
}

impl FieldSchema {
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, type_name: S2) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            comment: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerDeInfo {
    pub name: Option<String>,
    pub serialization_lib: String,
    pub parameters: Parameters,
}

/// Physical layout of a table or partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageDescriptor {
    pub cols: Vec<FieldSchema>,
    pub location: Option<String>,
    pub input_format: String,
    pub output_format: String,
    pub compressed: bool,
    pub serde_info: SerDeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct HiveTable {
    #[builder(setter(into))]
    pub db_name: String,
    #[builder(setter(into))]
    pub table_name: String,
    #[builder(default, setter(into))]
    pub owner: String,
    /// Seconds since the epoch; stamped by the metastore
    #[builder(default)]
    pub create_time: i64,
    #[builder(default)]
    pub sd: StorageDescriptor,
    #[builder(default)]
    pub partition_keys: Vec<FieldSchema>,
    #[builder(default)]
    pub parameters: Parameters,
    #[builder(default, setter(strip_option, into))]
    pub view_original_text: Option<String>,
    #[builder(default, setter(strip_option, into))]
    pub view_expanded_text: Option<String>,
    #[builder(default)]
    pub table_type: TableType,
}

impl HiveTable {
    pub fn is_view(&self) -> bool {
        self.table_type == TableType::VirtualView
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HivePartition {
    pub db_name: String,
    pub table_name: String,
    /// Values in the order of the table's partition keys
    pub values: Vec<String>,
    pub create_time: i64,
    pub sd: StorageDescriptor,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveDatabase {
    pub name: String,
    pub description: Option<String>,
    pub location_uri: Option<String>,
    pub parameters: Parameters,
    pub owner_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FunctionType {
    #[default]
    Java,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiveFunction {
    pub db_name: String,
    pub function_name: String,
    pub class_name: String,
    pub owner_name: Option<String>,
    pub function_type: FunctionType,
    pub create_time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanColumnStatsData {
    pub num_trues: i64,
    pub num_falses: i64,
    pub num_nulls: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongColumnStatsData {
    pub low_value: Option<i64>,
    pub high_value: Option<i64>,
    pub num_nulls: i64,
    pub num_dvs: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleColumnStatsData {
    pub low_value: Option<f64>,
    pub high_value: Option<f64>,
    pub num_nulls: i64,
    pub num_dvs: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StringColumnStatsData {
    pub max_col_len: i64,
    pub avg_col_len: f64,
    pub num_nulls: i64,
    pub num_dvs: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryColumnStatsData {
    pub max_col_len: i64,
    pub avg_col_len: f64,
    pub num_nulls: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateColumnStatsData {
    /// Days since the epoch
    pub low_value: Option<i64>,
    pub high_value: Option<i64>,
    pub num_nulls: i64,
    pub num_dvs: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HiveColumnStatisticsData {
    Boolean(BooleanColumnStatsData),
    Long(LongColumnStatsData),
    Double(DoubleColumnStatsData),
    String(StringColumnStatsData),
    Binary(BinaryColumnStatsData),
    Date(DateColumnStatsData),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatisticsObj {
    pub col_name: String,
    /// Hive type name of the column
    pub col_type: String,
    pub stats_data: HiveColumnStatisticsData,
}

/// Names the table or partition a set of column statistics belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStatisticsDesc {
    pub is_tbl_level: bool,
    pub db_name: String,
    pub table_name: String,
    /// Partition name (`k1=v1/k2=v2`) for partition-level statistics
    pub part_name: Option<String>,
    pub last_analyzed: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiveColumnStatistics {
    pub desc: ColumnStatisticsDesc,
    pub stats_obj: Vec<ColumnStatisticsObj>,
}
