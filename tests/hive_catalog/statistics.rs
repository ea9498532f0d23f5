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

use super::common::*;
use hive_catalog::catalog::types::{ColumnStatistics, ColumnStatisticsData, TableStatistics};
use hive_catalog::catalog::{Catalog, CatalogError};
use hive_catalog::conformance::{compare_column_statistics, compare_table_statistics};
use hive_catalog_common::test_context::TestContext;

#[hive_catalog_macros::test]
async fn alter_table_column_statistics(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_statistics_table()).await;
    assert!(
        catalog
            .get_table_column_statistics(&path)
            .await
            .unwrap()
            .is_empty()
    );

    let statistics = create_column_statistics();
    catalog
        .alter_table_column_statistics(&path, statistics.clone(), false)
        .await
        .unwrap();

    let stored = catalog.get_table_column_statistics(&path).await.unwrap();
    assert_conforms(compare_column_statistics(&statistics, &stored));
    assert_eq!(stored, statistics);
}

#[hive_catalog_macros::test]
async fn alter_partition_column_statistics(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let spec = create_partition_spec();
    create_partitioned_table_helper(catalog, &path).await;
    catalog
        .create_partition(&path, &spec, create_partition(), true)
        .await
        .unwrap();

    let statistics = create_partition_column_statistics();
    catalog
        .alter_partition_column_statistics(&path, &spec, statistics.clone(), false)
        .await
        .unwrap();

    let stored = catalog
        .get_partition_column_statistics(&path, &spec)
        .await
        .unwrap();
    assert_conforms(compare_column_statistics(&statistics, &stored));

    // Other partitions have none
    catalog
        .create_partition(&path, &create_another_partition_spec(), create_partition(), false)
        .await
        .unwrap();
    assert!(
        catalog
            .get_partition_column_statistics(&path, &create_another_partition_spec())
            .await
            .unwrap()
            .is_empty()
    );
}

#[hive_catalog_macros::test]
async fn column_statistics_checked_against_schema(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_statistics_table()).await;

    let unknown_column = ColumnStatistics::default().with_column(
        "eighth",
        ColumnStatisticsData::Long {
            min: 0,
            max: 1,
            ndv: 2,
            null_count: 0,
        },
    );
    match catalog
        .alter_table_column_statistics(&path, unknown_column, false)
        .await
    {
        Ok(_) => panic!("Statistics were stored for a missing column"),
        Err(CatalogError::ColumnNotExist { column, .. }) => assert_eq!(column, "eighth"),
        Err(e) => panic!("Unexpected error: {e:?}"),
    }

    let wrong_kind = ColumnStatistics::default().with_column(
        "third",
        ColumnStatisticsData::Long {
            min: 0,
            max: 1,
            ndv: 2,
            null_count: 0,
        },
    );
    match catalog
        .alter_table_column_statistics(&path, wrong_kind, false)
        .await
    {
        Ok(_) => panic!("Long statistics were stored for a boolean column"),
        Err(CatalogError::Unsupported(_)) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    assert!(
        catalog
            .get_table_column_statistics(&path)
            .await
            .unwrap()
            .is_empty()
    );
}

#[hive_catalog_macros::test]
async fn partition_key_has_no_column_statistics(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let spec = create_partition_spec();
    create_partitioned_table_helper(catalog, &path).await;
    catalog
        .create_partition(&path, &spec, create_partition(), false)
        .await
        .unwrap();

    let on_key = ColumnStatistics::default().with_column(
        "third",
        ColumnStatisticsData::String {
            max_length: 4,
            avg_length: 4.0,
            ndv: 1,
            null_count: 0,
        },
    );
    match catalog
        .alter_partition_column_statistics(&path, &spec, on_key, false)
        .await
    {
        Ok(_) => panic!("Statistics were stored for a partition key"),
        Err(CatalogError::ColumnNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn table_statistics(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;
    assert_eq!(
        catalog.get_table_statistics(&path).await.unwrap(),
        TableStatistics::UNKNOWN
    );

    let statistics = create_table_statistics();
    catalog
        .alter_table_statistics(&path, statistics, false)
        .await
        .unwrap();
    let stored = catalog.get_table_statistics(&path).await.unwrap();
    assert_conforms(compare_table_statistics(&statistics, &stored));

    // Statistics are kept when the table is altered
    catalog
        .alter_table(&path, create_another_table().into(), false)
        .await
        .unwrap();
    assert_eq!(catalog.get_table_statistics(&path).await.unwrap(), statistics);
}

#[hive_catalog_macros::test]
async fn partitioned_table_statistics_are_unknown(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_partitioned_table_helper(catalog, &path).await;

    catalog
        .alter_table_statistics(&path, create_table_statistics(), false)
        .await
        .unwrap();
    assert_eq!(
        catalog.get_table_statistics(&path).await.unwrap(),
        TableStatistics::UNKNOWN
    );
}

#[hive_catalog_macros::test]
async fn partition_statistics(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let spec = create_partition_spec();
    create_partitioned_table_helper(catalog, &path).await;
    catalog
        .create_partition(&path, &spec, create_partition(), false)
        .await
        .unwrap();
    assert_eq!(
        catalog.get_partition_statistics(&path, &spec).await.unwrap(),
        TableStatistics::UNKNOWN
    );

    let statistics = create_table_statistics();
    catalog
        .alter_partition_statistics(&path, &spec, statistics, false)
        .await
        .unwrap();
    let stored = catalog.get_partition_statistics(&path, &spec).await.unwrap();
    assert_conforms(compare_table_statistics(&statistics, &stored));

    // Statistics are kept when the partition is altered
    catalog
        .alter_partition(&path, &spec, create_partition(), false)
        .await
        .unwrap();
    assert_eq!(
        catalog.get_partition_statistics(&path, &spec).await.unwrap(),
        statistics
    );
}

#[hive_catalog_macros::test]
async fn statistics_of_missing_objects(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let missing = non_exist_object_path(&database_name);
    let spec = create_partition_spec();

    match catalog
        .alter_table_statistics(&missing, create_table_statistics(), false)
        .await
    {
        Ok(_) => panic!("Statistics were stored for a missing table"),
        Err(CatalogError::TableNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog
        .alter_table_statistics(&missing, create_table_statistics(), true)
        .await
        .unwrap();
    catalog
        .alter_table_column_statistics(&missing, create_column_statistics(), true)
        .await
        .unwrap();
    catalog
        .alter_partition_statistics(&missing, &spec, create_table_statistics(), true)
        .await
        .unwrap();
    catalog
        .alter_partition_column_statistics(
            &missing,
            &spec,
            create_partition_column_statistics(),
            true,
        )
        .await
        .unwrap();

    let path = path1(&database_name);
    create_partitioned_table_helper(catalog, &path).await;
    match catalog
        .alter_partition_column_statistics(
            &path,
            &spec,
            create_partition_column_statistics(),
            false,
        )
        .await
    {
        Ok(_) => panic!("Statistics were stored for a missing partition"),
        Err(CatalogError::PartitionNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}
