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

//! The store may add entries to what it was asked to persist but must never
//! drop or alter requested ones.

use super::common::*;
use hive_catalog::catalog::Catalog;
use hive_catalog::catalog::types::IS_STREAMING;
use hive_catalog::conformance::{
    Mismatch, ObjectKind, compare_base_tables, compare_column_statistics, compare_partitions,
    is_superset_of,
};
use hive_catalog::metastore::MetastoreClient;
use hive_catalog::metastore::types::DDL_TIME;
use hive_catalog_common::test_context::TestContext;

#[hive_catalog_macros::test]
async fn enriched_table_conforms(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let table = create_table();
    create_table_helper(catalog, &path, table.clone()).await;

    let stored = catalog.get_table(&path).await.unwrap();
    assert!(stored.properties().len() > table.properties.len());
    assert!(is_superset_of(stored.properties(), &table.properties));
    assert!(!is_superset_of(&table.properties, stored.properties()));
    assert_conforms(compare_base_tables(&table.into(), &stored));
}

#[hive_catalog_macros::test]
async fn dropped_property_is_a_mismatch(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let table = create_table();
    create_table_helper(catalog, &path, table.clone()).await;

    let mut record = ctx.metastore.get_table(&database_name, T1).await.unwrap();
    record.parameters.remove(IS_STREAMING);
    ctx.metastore
        .alter_table(&database_name, T1, record)
        .await
        .unwrap();

    let stored = catalog.get_table(&path).await.unwrap();
    match compare_base_tables(&table.into(), &stored) {
        Err(Mismatch::MissingProperty { object, key, value }) => {
            assert_eq!(object, ObjectKind::Table);
            assert_eq!(key, IS_STREAMING);
            assert_eq!(value, "false");
        }
        other => panic!("Unexpected comparison outcome: {other:?}"),
    }
}

#[hive_catalog_macros::test]
async fn altered_property_is_a_mismatch(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let spec = create_partition_spec();
    create_partitioned_table_helper(catalog, &path).await;
    catalog
        .create_partition(&path, &spec, create_partition(), false)
        .await
        .unwrap();

    let values = vec!["bob".to_string(), "2000".to_string()];
    let mut record = ctx
        .metastore
        .get_partition(&database_name, T1, &values)
        .await
        .unwrap();
    assert!(record.parameters.contains_key(DDL_TIME));
    record
        .parameters
        .insert(IS_STREAMING.to_string(), "true".to_string());
    ctx.metastore
        .alter_partition(&database_name, T1, record)
        .await
        .unwrap();

    let stored = catalog.get_partition(&path, &spec).await.unwrap();
    match compare_partitions(&create_partition(), &stored) {
        Err(Mismatch::AlteredProperty {
            object,
            requested,
            materialized,
            ..
        }) => {
            assert_eq!(object, ObjectKind::Partition);
            assert_eq!(requested, "false");
            assert_eq!(materialized, "true");
        }
        other => panic!("Unexpected comparison outcome: {other:?}"),
    }
}

#[hive_catalog_macros::test]
async fn column_statistics_are_not_relaxed(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_statistics_table()).await;
    catalog
        .alter_table_column_statistics(&path, create_column_statistics(), false)
        .await
        .unwrap();
    let stored = catalog.get_table_column_statistics(&path).await.unwrap();

    // A subset of what is stored is not good enough
    match compare_column_statistics(&create_partition_column_statistics(), &stored) {
        Err(Mismatch::UnexpectedColumnStatistics { column }) => assert_eq!(column, "fifth"),
        other => panic!("Unexpected comparison outcome: {other:?}"),
    }
    match compare_column_statistics(&stored, &create_partition_column_statistics()) {
        Err(Mismatch::MissingColumnStatistics { column }) => assert_eq!(column, "fifth"),
        other => panic!("Unexpected comparison outcome: {other:?}"),
    }
}

#[hive_catalog_macros::test]
async fn table_and_view_do_not_conform(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    let stored = catalog.get_table(&path).await.unwrap();
    match compare_base_tables(&create_view(&path).into(), &stored) {
        Err(Mismatch::VariantMismatch {
            requested,
            materialized,
            ..
        }) => {
            assert_eq!(requested, "view");
            assert_eq!(materialized, "table");
        }
        other => panic!("Unexpected comparison outcome: {other:?}"),
    }
}
