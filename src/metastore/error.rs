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

use thiserror::Error;

/// Errors reported by a [`MetastoreClient`](crate::metastore::MetastoreClient)
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MetastoreError {
    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("no such object: {0}")]
    NoSuchObject(String),

    #[error("invalid object: {0}")]
    InvalidObject(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("metastore failure: {0}")]
    Meta(String),

    #[error("metastore client is closed")]
    Closed,
}
