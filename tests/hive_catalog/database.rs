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
use hive_catalog::catalog::types::CatalogDatabase;
use hive_catalog::catalog::{Catalog, CatalogError};
use hive_catalog::conformance::compare_databases;
use hive_catalog::metastore::MetastoreError;
use hive_catalog_common::test_context::TestContext;
use hive_catalog_common::utils::rand_database_name;

#[hive_catalog_macros::test(no_database)]
async fn create_database(ctx: TestContext) {
    let catalog = &ctx.catalog;
    let db1 = rand_database_name();

    assert!(!catalog.database_exists(&db1).await.unwrap());
    catalog.create_database(&db1, create_db(), false).await.unwrap();

    assert!(catalog.database_exists(&db1).await.unwrap());
    assert!(catalog.list_databases().await.unwrap().contains(&db1));
    let stored = catalog.get_database(&db1).await.unwrap();
    assert_conforms(compare_databases(&create_db(), &stored));

    // Creating it again fails unless asked to ignore
    match catalog.create_database(&db1, create_db(), false).await {
        Ok(_) => panic!("Database already exists, but was created again"),
        Err(CatalogError::DatabaseAlreadyExist { database, .. }) => assert_eq!(database, db1),
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog
        .create_database(&db1, create_another_db(), true)
        .await
        .unwrap();
    let stored = catalog.get_database(&db1).await.unwrap();
    assert_conforms(compare_databases(&create_db(), &stored));

    catalog.drop_database(&db1, false, false).await.unwrap();
}

#[hive_catalog_macros::test(no_database)]
async fn get_database_not_exist(ctx: TestContext) {
    match ctx.catalog.get_database("nonexistent").await {
        Ok(_) => panic!("Database does not exist, but was returned"),
        Err(CatalogError::DatabaseNotExist { database, catalog }) => {
            assert_eq!(database, "nonexistent");
            assert_eq!(catalog, TEST_CATALOG_NAME);
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test(no_database)]
async fn default_database(ctx: TestContext) {
    let catalog = &ctx.catalog;
    assert_eq!(catalog.default_database(), "default");
    assert!(catalog.database_exists("default").await.unwrap());

    match catalog.drop_database("default", false, true).await {
        Ok(_) => panic!("The default database was dropped"),
        Err(CatalogError::Metastore(MetastoreError::InvalidOperation(_))) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn drop_database(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;

    catalog.drop_database(&database_name, false, false).await.unwrap();
    assert!(!catalog.database_exists(&database_name).await.unwrap());

    match catalog.drop_database(&database_name, false, false).await {
        Ok(_) => panic!("Database does not exist, but was dropped"),
        Err(CatalogError::DatabaseNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog.drop_database(&database_name, true, false).await.unwrap();
}

#[hive_catalog_macros::test]
async fn drop_non_empty_database(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    create_table_helper(catalog, &path1(&database_name), create_table()).await;

    match catalog.drop_database(&database_name, false, false).await {
        Ok(_) => panic!("Non-empty database was dropped without cascade"),
        Err(CatalogError::DatabaseNotEmpty { database, .. }) => assert_eq!(database, database_name),
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    assert!(catalog.table_exists(&path1(&database_name)).await.unwrap());

    catalog.drop_database(&database_name, false, true).await.unwrap();
    assert!(!catalog.database_exists(&database_name).await.unwrap());
    assert!(!catalog.table_exists(&path1(&database_name)).await.unwrap());
}

#[hive_catalog_macros::test]
async fn database_with_function_is_not_empty(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    catalog
        .create_function(&path1(&database_name), create_function(), false)
        .await
        .unwrap();

    match catalog.drop_database(&database_name, false, false).await {
        Ok(_) => panic!("Non-empty database was dropped without cascade"),
        Err(CatalogError::DatabaseNotEmpty { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn alter_database(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;

    catalog
        .alter_database(&database_name, create_another_db(), false)
        .await
        .unwrap();
    let stored = catalog.get_database(&database_name).await.unwrap();
    assert_conforms(compare_databases(&create_another_db(), &stored));
    assert!(!stored.properties.contains_key("k1"));

    match catalog
        .alter_database("nonexistent", create_db(), false)
        .await
    {
        Ok(_) => panic!("Database does not exist, but was altered"),
        Err(CatalogError::DatabaseNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog
        .alter_database("nonexistent", create_db(), true)
        .await
        .unwrap();
    assert!(!catalog.database_exists("nonexistent").await.unwrap());
}

#[hive_catalog_macros::test(no_database)]
async fn invalid_database_name(ctx: TestContext) {
    match ctx
        .catalog
        .create_database("not-valid", CatalogDatabase::default(), false)
        .await
    {
        Ok(_) => panic!("Database with an invalid name was created"),
        Err(CatalogError::Metastore(MetastoreError::InvalidObject(_))) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test(no_database)]
async fn catalog_must_be_open(ctx: TestContext) {
    let unopened = TestContext::with_conf(ctx.conf.clone());
    assert!(!unopened.catalog.is_open());

    match unopened.catalog.list_databases().await {
        Ok(_) => panic!("Catalog is not open, but answered"),
        Err(CatalogError::NotOpen { catalog }) => assert_eq!(catalog, TEST_CATALOG_NAME),
        Err(e) => panic!("Unexpected error: {e:?}"),
    }

    unopened.catalog.open().await.unwrap();
    assert!(unopened.catalog.list_databases().await.unwrap().contains(&"default".to_string()));
    unopened.catalog.close().await.unwrap();
    assert!(!unopened.catalog.is_open());
}
