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

//! # Hive Catalog (`hive-catalog`)
//!
//! An async catalog of databases, tables, views, partitions, functions and
//! statistics persisted in a Hive-compatible metastore, together with the
//! conformance checks used to verify that what the metastore returns is an
//! acceptable realization of what was requested.
//!
//! ## Basic Usage
//!
//! ```
//! use hive_catalog::catalog::Catalog;
//! use hive_catalog::catalog::hive::HiveCatalog;
//! use hive_catalog::catalog::types::{CatalogTable, DataType, ObjectPath, TableSchema};
//! use hive_catalog::conformance::compare_base_tables;
//! use hive_catalog::metastore::memory::InMemoryMetastore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = HiveCatalog::builder()
//!         .name("hive")
//!         .client(Arc::new(InMemoryMetastore::default()))
//!         .build();
//!     catalog.open().await.unwrap();
//!
//!     let schema = TableSchema::builder()
//!         .field("first", DataType::String)
//!         .field("second", DataType::Int)
//!         .build()
//!         .unwrap();
//!     let table = CatalogTable::builder().schema(schema).comment("test comment").build();
//!     let path = ObjectPath::new("default", "t1");
//!
//!     catalog.create_table(&path, table.clone().into(), false).await.unwrap();
//!     let stored = catalog.get_table(&path).await.unwrap();
//!     compare_base_tables(&table.into(), &stored).expect("materialized table conforms");
//! }
//! ```
//!
//! ## Design
//! - [`catalog::Catalog`] is the catalog contract; [`catalog::hive::HiveCatalog`] implements it
//!   on top of any [`metastore::MetastoreClient`]
//! - [`metastore::memory::InMemoryMetastore`] is an in-process metastore that stamps the same
//!   bookkeeping entries a real one does
//! - [`conformance`] compares requested objects with materialized ones, allowing the store to
//!   add properties but never to drop or alter them
//! - [`config::HiveConf`] carries the warehouse location, default storage format and owner

#![allow(clippy::result_large_err)]
pub mod catalog;
pub mod config;
pub mod conformance;
pub mod metastore;
