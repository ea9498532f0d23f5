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
use hive_catalog::catalog::{Catalog, CatalogError};
use hive_catalog::conformance::compare_functions;
use hive_catalog_common::test_context::TestContext;
use hive_catalog_common::utils::rand_database_name;

#[hive_catalog_macros::test]
async fn create_function_conforms(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);

    assert!(!catalog.function_exists(&path).await.unwrap());
    catalog
        .create_function(&path, create_function(), false)
        .await
        .unwrap();

    assert!(catalog.function_exists(&path).await.unwrap());
    assert_eq!(catalog.list_functions(&database_name).await.unwrap(), vec![T1]);
    let stored = catalog.get_function(&path).await.unwrap();
    assert_conforms(compare_functions(&create_function(), &stored));

    match catalog
        .create_function(&path, create_another_function(), false)
        .await
    {
        Ok(_) => panic!("Function already exists, but was created again"),
        Err(CatalogError::FunctionAlreadyExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog
        .create_function(&path, create_another_function(), true)
        .await
        .unwrap();
    let stored = catalog.get_function(&path).await.unwrap();
    assert_conforms(compare_functions(&create_function(), &stored));
}

#[hive_catalog_macros::test(no_database)]
async fn create_function_database_not_exist(ctx: TestContext) {
    let path = path1(&rand_database_name());
    match ctx
        .catalog
        .create_function(&path, create_function(), false)
        .await
    {
        Ok(_) => panic!("Function was created in a missing database"),
        Err(CatalogError::DatabaseNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn alter_function(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    catalog
        .create_function(&path, create_function(), false)
        .await
        .unwrap();

    catalog
        .alter_function(&path, create_another_function(), false)
        .await
        .unwrap();
    let stored = catalog.get_function(&path).await.unwrap();
    assert_conforms(compare_functions(&create_another_function(), &stored));
    assert!(compare_functions(&create_function(), &stored).is_err());

    let missing = non_exist_object_path(&database_name);
    match catalog.alter_function(&missing, create_function(), false).await {
        Ok(_) => panic!("Function does not exist, but was altered"),
        Err(CatalogError::FunctionNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog
        .alter_function(&missing, create_function(), true)
        .await
        .unwrap();
    assert!(!catalog.function_exists(&missing).await.unwrap());
}

#[hive_catalog_macros::test]
async fn drop_function(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    catalog
        .create_function(&path, create_function(), false)
        .await
        .unwrap();

    catalog.drop_function(&path, false).await.unwrap();
    assert!(!catalog.function_exists(&path).await.unwrap());

    match catalog.drop_function(&path, false).await {
        Ok(_) => panic!("Function does not exist, but was dropped"),
        Err(CatalogError::FunctionNotExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
    catalog.drop_function(&path, true).await.unwrap();
}

#[hive_catalog_macros::test]
async fn functions_survive_table_drop(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    create_table_helper(catalog, &path, create_table()).await;
    catalog
        .create_function(&path2(&database_name), create_function(), false)
        .await
        .unwrap();

    catalog.drop_table(&path, false).await.unwrap();
    assert!(catalog.function_exists(&path2(&database_name)).await.unwrap());
}
