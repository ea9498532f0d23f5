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

use crate::cleanup_guard::CleanupGuard;
use crate::fixtures::TEST_CATALOG_NAME;
use crate::utils::rand_database_name;
use hive_catalog::catalog::Catalog;
use hive_catalog::catalog::hive::HiveCatalog;
use hive_catalog::catalog::types::CatalogDatabase;
use hive_catalog::config::HiveConf;
use hive_catalog::metastore::memory::InMemoryMetastore;
use std::sync::Arc;

/// Everything a test needs: a catalog over a fresh metastore of its own.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub catalog: HiveCatalog,
    pub metastore: Arc<InMemoryMetastore>,
    pub conf: HiveConf,
}

impl TestContext {
    /// Builds a context from the `HIVE_*` environment variables. The catalog
    /// is not opened yet.
    pub fn new_from_env() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let conf = HiveConf::from_env().unwrap();
        Self::with_conf(conf)
    }

    pub fn with_conf(conf: HiveConf) -> Self {
        log::debug!(
            "test catalog {TEST_CATALOG_NAME}: warehouse={}, format={}",
            conf.warehouse_dir,
            conf.default_file_format
        );
        let metastore = Arc::new(InMemoryMetastore::new(conf.clone()));
        let catalog = HiveCatalog::builder()
            .name(TEST_CATALOG_NAME)
            .client(metastore.clone())
            .conf(conf.clone())
            .build();
        Self {
            catalog,
            metastore,
            conf,
        }
    }

    /// Creates a database with a random name together with a guard that
    /// drops it again.
    ///
    /// # Example
    /// ```ignore
    /// let (database, guard) = ctx.create_database_helper().await;
    /// // ...
    /// guard.cleanup().await;
    /// ```
    pub async fn create_database_helper(&self) -> (String, CleanupGuard) {
        let database = rand_database_name();
        self.catalog
            .create_database(&database, CatalogDatabase::default(), false)
            .await
            .unwrap();
        let guard = CleanupGuard::new(self.catalog.clone(), &database);
        (database, guard)
    }
}
