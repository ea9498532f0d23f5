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

use hive_catalog::catalog::Catalog;
use hive_catalog::catalog::hive::HiveCatalog;

/// Cleanup guard that drops a database, with everything in it, on request
pub struct CleanupGuard {
    catalog: HiveCatalog,
    database: String,
}

impl CleanupGuard {
    #[allow(dead_code)]
    pub fn new<S: Into<String>>(catalog: HiveCatalog, database: S) -> Self {
        Self {
            catalog,
            database: database.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(self.catalog.clone(), &self.database).await;
    }
}

pub async fn cleanup(catalog: HiveCatalog, database: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while dropping database {database}");
        },
        outcome = catalog.drop_database(database, true, true) => {
            if let Err(e) = outcome {
                eprintln!("Error dropping database '{database}':\n{e}");
            }
        }
    );
}
