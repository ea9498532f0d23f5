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

//! Table and view descriptors

use crate::catalog::types::{IS_STREAMING, Properties, TableSchema};
use typed_builder::TypedBuilder;

/// Table descriptor
///
/// # Example
///
/// ```
/// use hive_catalog::catalog::types::{CatalogTable, DataType, TableSchema};
///
/// let schema = TableSchema::builder()
///     .field("first", DataType::String)
///     .field("second", DataType::Int)
///     .build()
///     .unwrap();
/// let table = CatalogTable::builder()
///     .schema(schema)
///     .partition_keys(vec!["second".to_string()])
///     .comment("test comment")
///     .build();
/// assert!(table.is_partitioned());
/// ```
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct CatalogTable {
    pub schema: TableSchema,
    /// Partition key column names, in partition order
    #[builder(default)]
    pub partition_keys: Vec<String>,
    #[builder(default, setter(into))]
    pub properties: Properties,
    #[builder(default, setter(into))]
    pub comment: String,
}

impl CatalogTable {
    pub fn is_partitioned(&self) -> bool {
        !self.partition_keys.is_empty()
    }

    /// True when the `is_streaming` property is `true`
    pub fn is_streaming(&self) -> bool {
        self.properties
            .get(IS_STREAMING)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// View descriptor
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct CatalogView {
    pub schema: TableSchema,
    /// Query text as written by the user
    #[builder(setter(into))]
    pub original_query: String,
    /// Query text with all identifiers fully qualified
    #[builder(setter(into))]
    pub expanded_query: String,
    #[builder(default, setter(into))]
    pub properties: Properties,
    #[builder(default, setter(into))]
    pub comment: String,
}

/// Either a table or a view; both live in the same namespace
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogBaseTable {
    Table(CatalogTable),
    View(CatalogView),
}

impl CatalogBaseTable {
    pub fn schema(&self) -> &TableSchema {
        match self {
            CatalogBaseTable::Table(t) => &t.schema,
            CatalogBaseTable::View(v) => &v.schema,
        }
    }

    pub fn comment(&self) -> &str {
        match self {
            CatalogBaseTable::Table(t) => &t.comment,
            CatalogBaseTable::View(v) => &v.comment,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            CatalogBaseTable::Table(t) => &t.properties,
            CatalogBaseTable::View(v) => &v.properties,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CatalogBaseTable::Table(_) => "table",
            CatalogBaseTable::View(_) => "view",
        }
    }

    pub fn as_table(&self) -> Option<&CatalogTable> {
        match self {
            CatalogBaseTable::Table(t) => Some(t),
            CatalogBaseTable::View(_) => None,
        }
    }

    pub fn as_view(&self) -> Option<&CatalogView> {
        match self {
            CatalogBaseTable::Table(_) => None,
            CatalogBaseTable::View(v) => Some(v),
        }
    }
}

impl From<CatalogTable> for CatalogBaseTable {
    fn from(table: CatalogTable) -> Self {
        CatalogBaseTable::Table(table)
    }
}

impl From<CatalogView> for CatalogBaseTable {
    fn from(view: CatalogView) -> Self {
        CatalogBaseTable::View(view)
    }
}
