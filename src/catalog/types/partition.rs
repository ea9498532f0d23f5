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

//! Partition descriptors

use crate::catalog::types::Properties;
use typed_builder::TypedBuilder;

/// A partition of a partitioned table
///
/// Partitions come in two flavors. `Hive` partitions are native metastore
/// partitions: a property mapping plus the storage location the metastore
/// assigns. `Generic` partitions carry a free-form comment and are stored
/// with a marker so they read back as the same variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPartition {
    Hive(HiveCatalogPartition),
    Generic(GenericCatalogPartition),
}

impl CatalogPartition {
    pub fn properties(&self) -> &Properties {
        match self {
            CatalogPartition::Hive(p) => &p.properties,
            CatalogPartition::Generic(p) => &p.properties,
        }
    }

    /// Short description; Hive partitions have none.
    pub fn description(&self) -> Option<String> {
        match self {
            CatalogPartition::Hive(_) => None,
            CatalogPartition::Generic(p) => Some(p.comment.clone()),
        }
    }

    /// Long description; Hive partitions have none.
    pub fn detailed_description(&self) -> Option<String> {
        match self {
            CatalogPartition::Hive(_) => None,
            CatalogPartition::Generic(p) => Some(format!(
                "This is a generic catalog partition with comment '{}'",
                p.comment
            )),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CatalogPartition::Hive(_) => "hive",
            CatalogPartition::Generic(_) => "generic",
        }
    }
}

/// Native metastore partition
#[derive(Debug, Clone, Default, PartialEq, TypedBuilder)]
pub struct HiveCatalogPartition {
    #[builder(default, setter(into))]
    pub properties: Properties,
    /// Storage location; assigned by the metastore when absent
    #[builder(default, setter(into, strip_option))]
    pub location: Option<String>,
}

impl HiveCatalogPartition {
    pub fn new(properties: Properties) -> Self {
        Self {
            properties,
            location: None,
        }
    }
}

/// Partition with a comment, independent of any particular store
#[derive(Debug, Clone, Default, PartialEq, TypedBuilder)]
pub struct GenericCatalogPartition {
    #[builder(default, setter(into))]
    pub properties: Properties,
    #[builder(default, setter(into))]
    pub comment: String,
}

impl From<HiveCatalogPartition> for CatalogPartition {
    fn from(partition: HiveCatalogPartition) -> Self {
        CatalogPartition::Hive(partition)
    }
}

impl From<GenericCatalogPartition> for CatalogPartition {
    fn from(partition: GenericCatalogPartition) -> Self {
        CatalogPartition::Generic(partition)
    }
}
