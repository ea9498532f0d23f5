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
use hive_catalog::catalog::types::CatalogBaseTable;
use hive_catalog::catalog::{Catalog, CatalogError};
use hive_catalog::conformance::{compare_base_tables, compare_views};
use hive_catalog::metastore::types::TableType;
use hive_catalog_common::test_context::TestContext;

#[hive_catalog_macros::test]
async fn create_view_conforms(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let view_path = path2(&database_name);
    create_table_helper(catalog, &path, create_table()).await;

    let view = create_view(&path);
    create_table_helper(catalog, &view_path, view.clone()).await;

    let stored = catalog.get_table(&view_path).await.unwrap();
    assert_conforms(compare_views(&view, stored.as_view().unwrap()));

    let record = catalog.get_hive_table(&view_path).await.unwrap();
    assert_eq!(record.table_type, TableType::VirtualView);
    assert_eq!(record.view_original_text.as_deref(), Some("select * from t1"));

    assert_eq!(catalog.list_tables(&database_name).await.unwrap(), vec![T1, T2]);
    assert_eq!(catalog.list_views(&database_name).await.unwrap(), vec![T2]);
}

#[hive_catalog_macros::test]
async fn create_view_already_exists(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path2(&database_name);
    create_table_helper(catalog, &path, create_view(&path1(&database_name))).await;

    match catalog
        .create_table(&path, create_another_view(&path).into(), false)
        .await
    {
        Ok(_) => panic!("View already exists, but was created again"),
        Err(CatalogError::TableAlreadyExist { .. }) => {}
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn alter_view(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let path = path1(&database_name);
    let view_path = path2(&database_name);
    create_table_helper(catalog, &view_path, create_view(&path)).await;

    let altered = create_another_view(&path3(&database_name));
    catalog
        .alter_table(&view_path, altered.clone().into(), false)
        .await
        .unwrap();

    let stored = catalog.get_table(&view_path).await.unwrap();
    assert_conforms(compare_base_tables(&altered.into(), &stored));
}

#[hive_catalog_macros::test]
async fn alter_view_into_table(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let view_path = path2(&database_name);
    create_table_helper(catalog, &view_path, create_view(&path1(&database_name))).await;

    let table: CatalogBaseTable = create_table().into();
    match catalog.alter_table(&view_path, table, false).await {
        Ok(_) => panic!("View was altered into a table"),
        Err(CatalogError::IncompatibleKind { existing, new, .. }) => {
            assert_eq!(existing, "view");
            assert_eq!(new, "table");
        }
        Err(e) => panic!("Unexpected error: {e:?}"),
    }
}

#[hive_catalog_macros::test]
async fn drop_view(ctx: TestContext, database_name: String) {
    let catalog = &ctx.catalog;
    let view_path = path2(&database_name);
    create_table_helper(catalog, &view_path, create_view(&path1(&database_name))).await;

    catalog.drop_table(&view_path, false).await.unwrap();
    assert!(!catalog.table_exists(&view_path).await.unwrap());
    assert!(catalog.list_views(&database_name).await.unwrap().is_empty());
}
