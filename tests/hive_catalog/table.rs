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
use hive_catalog::catalog::hive::STREAMING_UNSUPPORTED;
use hive_catalog::catalog::types::CatalogBaseTable;
use hive_catalog::catalog::{Catalog, CatalogError, ValidationErr};
use hive_catalog::config::{HiveConf, StorageFormat};
use hive_catalog::conformance::{compare_base_tables, compare_tables, is_superset_of};
use hive_catalog::metastore::types::{COMMENT, DDL_TIME, TableType};
use hive_catalog_common::test_context::TestContext;
use hive_catalog_common::utils::rand_database_name;

#[hive_catalog_macros::test]
async fn create_table_conforms(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let table = create_table();

    catalog
        .create_table(&path, table.clone().into(), false)
        .await
        .unwrap();

    let stored = catalog.get_table(&path).await.unwrap();
    assert_conforms(compare_base_tables(&table.clone().into(), &stored));
    let stored = stored.as_table().unwrap();
    assert!(!stored.is_partitioned());
    assert!(is_superset_of(&stored.properties, &table.properties));
    assert!(stored.properties.contains_key(DDL_TIME));

    assert_eq!(catalog.list_tables(&database_name).await.unwrap(), vec![T1]);
    assert!(catalog.list_views(&database_name).await.unwrap().is_empty());
}

#[hive_catalog_macros::test]
async fn create_partitioned_table_conforms(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let table = create_partitioned_table();
    create_table_helper(catalog, &path, table.clone()).await;

    let stored = catalog.get_table(&path).await.unwrap();
    let stored = stored.as_table().unwrap();
    assert_conforms(compare_tables(&table, stored));
    assert!(stored.is_partitioned());

    // Partition columns live next to the data columns in the metastore record
    let record = catalog.get_hive_table(&path).await.unwrap();
    let data_columns: Vec<&str> = record.sd.cols.iter().map(|c| c.name.as_str()).collect();
    let partition_columns: Vec<&str> = record
        .partition_keys
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(data_columns, vec!["first"]);
    assert_eq!(partition_columns, vec!["second", "third"]);
}

#[hive_catalog_macros::test]
async fn create_table_storage_format_set(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    let record = catalog.get_hive_table(&path).await.unwrap();
    assert_eq!(record.table_type, TableType::ManagedTable);
    let sd = &record.sd;
    assert!(!sd.input_format.trim().is_empty());
    assert!(!sd.output_format.trim().is_empty());
    assert!(!sd.serde_info.serialization_lib.trim().is_empty());
}

#[hive_catalog_macros::test(no_database)]
async fn storage_format_follows_configuration(ctx: TestContext) {
    let conf = HiveConf {
        default_file_format: StorageFormat::Orc,
        ..ctx.conf.clone()
    };
    let orc = TestContext::with_conf(conf);
    orc.catalog.open().await.unwrap();
    let (database_name, guard) = orc.create_database_helper().await;

    let path = path1(&database_name);
    create_table_helper(&orc.catalog, &path, create_table()).await;
    let record = orc.catalog.get_hive_table(&path).await.unwrap();
    assert_eq!(record.sd.input_format, StorageFormat::Orc.input_format());
    assert_eq!(record.sd.output_format, StorageFormat::Orc.output_format());
    assert_eq!(
        record.sd.serde_info.serialization_lib,
        StorageFormat::Orc.serde_lib()
    );

    guard.cleanup().await;
    orc.catalog.close().await.unwrap();
}

#[hive_catalog_macros::test]
async fn create_table_partition_keys_not_trailing(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let mut table = create_partitioned_table();
    table.partition_keys = vec!["first".to_string()];

    match catalog.create_table(&path, table.into(), false).await {
        Ok(_) => panic!("Table with leading partition key was created"),
        Err(CatalogError::Validation(ValidationErr::PartitionKeysNotTrailing(keys))) => {
            assert_eq!(keys, vec!["first"])
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    assert!(!catalog.table_exists(&path).await.unwrap());
}

#[hive_catalog_macros::test]
async fn create_table_reserved_property(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let mut table = create_table();
    table.properties.insert(COMMENT.to_string(), "not the comment".to_string());

    match catalog.create_table(&path, table.into(), false).await {
        Ok(_) => panic!("Table with a reserved property was created"),
        Err(CatalogError::Validation(ValidationErr::ReservedProperty(key))) => {
            assert_eq!(key, COMMENT)
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    assert!(!catalog.table_exists(&path).await.unwrap());
}

#[hive_catalog_macros::test]
async fn create_table_streaming(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);

    match catalog
        .create_table(&path, create_streaming_table().into(), false)
        .await
    {
        Ok(_) => panic!("Streaming table was created"),
        Err(CatalogError::Unsupported(msg)) => assert_eq!(msg, STREAMING_UNSUPPORTED),
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    assert!(!catalog.table_exists(&path).await.unwrap());
}

#[hive_catalog_macros::test]
async fn create_table_already_exists(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    match catalog
        .create_table(&path, create_another_table().into(), false)
        .await
    {
        Ok(_) => panic!("Table already exists, but was created again"),
        Err(CatalogError::TableAlreadyExist { path: p, .. }) => assert_eq!(p, path),
        Err(e) => panic!("Unexpected error: {e:?}"),
    }

    catalog
        .create_table(&path, create_another_table().into(), true)
        .await
        .unwrap();
    let stored = catalog.get_table(&path).await.unwrap();
    assert_conforms(compare_base_tables(&create_table().into(), &stored));
}

#[hive_catalog_macros::test(no_database)]
async fn create_table_database_not_exist(ctx: TestContext) {
    let path = path1(&rand_database_name());
    match ctx
        .catalog
        .create_table(&path, create_table().into(), false)
        .await
    {
        Ok(_) => panic!("Table was created in a missing database"),
        Err(CatalogError::DatabaseNotExist { database, .. }) => {
            assert_eq!(database, path.database_name())
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn get_table_not_exist(ctx: TestContext, database_name: String) {
    match ctx
        .catalog
        .get_table(&non_exist_object_path(&database_name))
        .await
    {
        Ok(_) => panic!("Table does not exist, but was returned"),
        Err(CatalogError::TableNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn drop_table(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    catalog.drop_table(&path, false).await.unwrap();
    assert!(!catalog.table_exists(&path).await.unwrap());

    match catalog.drop_table(&path, false).await {
        Ok(_) => panic!("Table does not exist, but was dropped"),
        Err(CatalogError::TableNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog.drop_table(&path, true).await.unwrap();
}

#[hive_catalog_macros::test]
async fn alter_table(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    let mut altered = create_another_table();
    altered
        .properties
        .insert("k2".to_string(), "v2".to_string());
    catalog
        .alter_table(&path, altered.clone().into(), false)
        .await
        .unwrap();

    let stored = catalog.get_table(&path).await.unwrap();
    assert_conforms(compare_base_tables(&altered.into(), &stored));

    // The storage format of the existing record is kept
    let record = catalog.get_hive_table(&path).await.unwrap();
    assert!(!record.sd.input_format.is_empty());
}

#[hive_catalog_macros::test]
async fn alter_table_not_exist(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = non_exist_object_path(&database_name);

    match catalog.alter_table(&path, create_table().into(), false).await {
        Ok(_) => panic!("Table does not exist, but was altered"),
        Err(CatalogError::TableNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog
        .alter_table(&path, create_table().into(), true)
        .await
        .unwrap();
    assert!(!catalog.table_exists(&path).await.unwrap());
}

#[hive_catalog_macros::test]
async fn alter_table_into_view(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    let view: CatalogBaseTable = create_view(&path).into();
    match catalog.alter_table(&path, view, false).await {
        Ok(_) => panic!("Table was altered into a view"),
        Err(CatalogError::IncompatibleKind { existing, new, .. }) => {
            assert_eq!(existing, "table");
            assert_eq!(new, "view");
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn alter_table_streaming(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    match catalog
        .alter_table(&path, create_streaming_table().into(), false)
        .await
    {
        Ok(_) => panic!("Table was altered into a streaming table"),
        Err(CatalogError::Unsupported(msg)) => assert_eq!(msg, STREAMING_UNSUPPORTED),
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn rename_table(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let table = create_partitioned_table();
    create_table_helper(catalog, &path, table.clone()).await;
    catalog
        .create_partition(&path, &create_partition_spec(), create_partition(), false)
        .await
        .unwrap();

    catalog.rename_table(&path, T2, false).await.unwrap();

    let renamed = path2(&database_name);
    assert!(!catalog.table_exists(&path).await.unwrap());
    let stored = catalog.get_table(&renamed).await.unwrap();
    assert_conforms(compare_base_tables(&table.into(), &stored));
    assert_eq!(
        catalog.list_partitions(&renamed).await.unwrap(),
        vec![create_partition_spec()]
    );
}

#[hive_catalog_macros::test]
async fn rename_table_target_exists(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    create_table_helper(catalog, &path1(&database_name), create_table()).await;
    create_table_helper(catalog, &path3(&database_name), create_another_table()).await;

    match catalog.rename_table(&path1(&database_name), T3, false).await {
        Ok(_) => panic!("Table was renamed onto an existing table"),
        Err(CatalogError::TableAlreadyExist { path, .. }) => {
            assert_eq!(path, path3(&database_name))
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn rename_table_not_exist(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = non_exist_object_path(&database_name);

    match catalog.rename_table(&path, T2, false).await {
        Ok(_) => panic!("Table does not exist, but was renamed"),
        Err(CatalogError::TableNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog.rename_table(&path, T2, true).await.unwrap();
}
