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

//! Fixture objects shared by the catalog integration tests.
//!
//! Every table fixture is a batch table: it carries `is_streaming=false`,
//! which the metastore keeps next to the bookkeeping entries it adds itself.

use hive_catalog::catalog::types::*;

pub const TEST_CATALOG_NAME: &str = "test-catalog";
pub const TEST_COMMENT: &str = "test comment";

pub const T1: &str = "t1";
pub const T2: &str = "t2";
pub const T3: &str = "t3";

pub fn batch_table_properties() -> Properties {
    Properties::from([(IS_STREAMING.to_string(), "false".to_string())])
}

pub fn streaming_table_properties() -> Properties {
    Properties::from([(IS_STREAMING.to_string(), "true".to_string())])
}

pub fn create_db() -> CatalogDatabase {
    CatalogDatabase::new(
        Properties::from([("k1".to_string(), "v1".to_string())]),
        TEST_COMMENT,
    )
}

pub fn create_another_db() -> CatalogDatabase {
    CatalogDatabase::new(
        Properties::from([("k2".to_string(), "v2".to_string())]),
        "this is another database.",
    )
}

pub fn create_table_schema() -> TableSchema {
    TableSchema::builder()
        .field("first", DataType::String)
        .field("second", DataType::Int)
        .field("third", DataType::String)
        .build()
        .unwrap()
}

pub fn create_another_table_schema() -> TableSchema {
    TableSchema::builder()
        .field("first", DataType::String)
        .field("second", DataType::String)
        .field("third", DataType::String)
        .build()
        .unwrap()
}

pub fn create_partition_keys() -> Vec<String> {
    vec!["second".to_string(), "third".to_string()]
}

pub fn create_table() -> CatalogTable {
    CatalogTable::builder()
        .schema(create_table_schema())
        .properties(batch_table_properties())
        .comment(TEST_COMMENT)
        .build()
}

pub fn create_another_table() -> CatalogTable {
    CatalogTable::builder()
        .schema(create_another_table_schema())
        .properties(batch_table_properties())
        .comment(TEST_COMMENT)
        .build()
}

pub fn create_streaming_table() -> CatalogTable {
    CatalogTable::builder()
        .schema(create_table_schema())
        .properties(streaming_table_properties())
        .comment(TEST_COMMENT)
        .build()
}

pub fn create_partitioned_table() -> CatalogTable {
    CatalogTable::builder()
        .schema(create_table_schema())
        .partition_keys(create_partition_keys())
        .properties(batch_table_properties())
        .comment(TEST_COMMENT)
        .build()
}

/// View over the table at `path`
pub fn create_view(path: &ObjectPath) -> CatalogView {
    CatalogView::builder()
        .schema(create_table_schema())
        .original_query(format!("select * from {}", path.object_name()))
        .expanded_query(format!(
            "select * from {TEST_CATALOG_NAME}.{}",
            path.full_name()
        ))
        .comment("This is a hive view")
        .build()
}

pub fn create_another_view(path: &ObjectPath) -> CatalogView {
    CatalogView::builder()
        .schema(create_another_table_schema())
        .original_query(format!("select * from {}", path.object_name()))
        .expanded_query(format!(
            "select * from {TEST_CATALOG_NAME}.{}",
            path.full_name()
        ))
        .comment("This is another hive view")
        .build()
}

pub fn create_function() -> CatalogFunction {
    CatalogFunction::new("test.class.name")
}

pub fn create_another_function() -> CatalogFunction {
    CatalogFunction::new("test.another.class.name")
}

pub fn create_partition() -> CatalogPartition {
    HiveCatalogPartition::new(batch_table_properties()).into()
}

pub fn create_generic_partition() -> CatalogPartition {
    GenericCatalogPartition::builder()
        .properties(batch_table_properties())
        .comment("Generic partition")
        .build()
        .into()
}

pub fn create_partition_spec() -> CatalogPartitionSpec {
    [("third", "2000"), ("second", "bob")].into_iter().collect()
}

pub fn create_another_partition_spec() -> CatalogPartitionSpec {
    [("third", "2010"), ("second", "bob")].into_iter().collect()
}

pub fn create_partition_spec_subset() -> CatalogPartitionSpec {
    [("second", "bob")].into_iter().collect()
}

pub fn create_another_partition_spec_subset() -> CatalogPartitionSpec {
    [("third", "2000")].into_iter().collect()
}

/// Names a column that is not a partition key
pub fn create_invalid_partition_spec_subset() -> CatalogPartitionSpec {
    [("fourth", "2010")].into_iter().collect()
}

pub fn create_table_statistics() -> TableStatistics {
    TableStatistics::new(1000, 10, 100_000, 120_000)
}

/// Seven columns, one per kind of column statistics
pub fn create_statistics_table() -> CatalogTable {
    let schema = TableSchema::builder()
        .field("first", DataType::String)
        .field("second", DataType::Int)
        .field("third", DataType::Boolean)
        .field("fourth", DataType::Date)
        .field("fifth", DataType::Double)
        .field("sixth", DataType::Bigint)
        .field("seventh", DataType::Varbinary(200))
        .build()
        .unwrap();
    CatalogTable::builder()
        .schema(schema)
        .properties(batch_table_properties())
        .comment(TEST_COMMENT)
        .build()
}

pub fn create_column_statistics() -> ColumnStatistics {
    ColumnStatistics::default()
        .with_column(
            "first",
            ColumnStatisticsData::String {
                max_length: 10,
                avg_length: 5.2,
                ndv: 3,
                null_count: 100,
            },
        )
        .with_column(
            "second",
            ColumnStatisticsData::Long {
                min: 0,
                max: 1000,
                ndv: 3,
                null_count: 0,
            },
        )
        .with_column(
            "third",
            ColumnStatisticsData::Boolean {
                true_count: 15,
                false_count: 20,
                null_count: 3,
            },
        )
        .with_column(
            "fourth",
            ColumnStatisticsData::Date {
                min: Date::new(71),
                max: Date::new(17923),
                ndv: 1321,
                null_count: 0,
            },
        )
        .with_column(
            "fifth",
            ColumnStatisticsData::Double {
                min: 15.02,
                max: 20.01,
                ndv: 3,
                null_count: 10,
            },
        )
        .with_column(
            "sixth",
            ColumnStatisticsData::Long {
                min: 0,
                max: 20,
                ndv: 3,
                null_count: 2,
            },
        )
        .with_column(
            "seventh",
            ColumnStatisticsData::Binary {
                max_length: 150,
                avg_length: 20.0,
                null_count: 3,
            },
        )
}

/// Statistics for the `first` column only
pub fn create_partition_column_statistics() -> ColumnStatistics {
    ColumnStatistics::default().with_column(
        "first",
        ColumnStatisticsData::String {
            max_length: 10,
            avg_length: 5.2,
            ndv: 3,
            null_count: 100,
        },
    )
}
