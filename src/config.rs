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

//! Catalog and metastore configuration
//!
//! [`HiveConf`] can be built from defaults, from environment variables, or
//! from a JSON document. Every field has a default, so a JSON document only
//! needs to name the values it overrides:
//!
//! ```
//! use hive_catalog::config::{HiveConf, StorageFormat};
//!
//! let conf = HiveConf::from_json_str(r#"{ "default-file-format": "ORC" }"#).unwrap();
//! assert_eq!(conf.default_file_format, StorageFormat::Orc);
//! assert_eq!(conf.default_database, "default");
//! ```

use crate::catalog::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const ENV_WAREHOUSE_DIR: &str = "HIVE_WAREHOUSE_DIR";
pub const ENV_DEFAULT_FILE_FORMAT: &str = "HIVE_DEFAULT_FILEFORMAT";
pub const ENV_OWNER: &str = "HIVE_METASTORE_OWNER";
pub const ENV_DEFAULT_DATABASE: &str = "HIVE_DEFAULT_DATABASE";

pub const DEFAULT_WAREHOUSE_DIR: &str = "file:///user/hive/warehouse";
pub const DEFAULT_OWNER: &str = "hive";
pub const DEFAULT_DATABASE: &str = "default";

/// File format of a table's storage descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageFormat {
    #[default]
    #[serde(rename = "TextFile")]
    TextFile,
    #[serde(rename = "SequenceFile")]
    SequenceFile,
    #[serde(rename = "RCFile")]
    RcFile,
    #[serde(rename = "ORC")]
    Orc,
    #[serde(rename = "Parquet")]
    Parquet,
    #[serde(rename = "Avro")]
    Avro,
}

impl StorageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageFormat::TextFile => "TextFile",
            StorageFormat::SequenceFile => "SequenceFile",
            StorageFormat::RcFile => "RCFile",
            StorageFormat::Orc => "ORC",
            StorageFormat::Parquet => "Parquet",
            StorageFormat::Avro => "Avro",
        }
    }

    pub fn input_format(&self) -> &'static str {
        match self {
            StorageFormat::TextFile => "org.apache.hadoop.mapred.TextInputFormat",
            StorageFormat::SequenceFile => "org.apache.hadoop.mapred.SequenceFileInputFormat",
            StorageFormat::RcFile => "org.apache.hadoop.hive.ql.io.RCFileInputFormat",
            StorageFormat::Orc => "org.apache.hadoop.hive.ql.io.orc.OrcInputFormat",
            StorageFormat::Parquet => {
                "org.apache.hadoop.hive.ql.io.parquet.MapredParquetInputFormat"
            }
            StorageFormat::Avro => "org.apache.hadoop.hive.ql.io.avro.AvroContainerInputFormat",
        }
    }

    pub fn output_format(&self) -> &'static str {
        match self {
            StorageFormat::TextFile => "org.apache.hadoop.hive.ql.io.HiveIgnoreKeyTextOutputFormat",
            StorageFormat::SequenceFile => {
                "org.apache.hadoop.hive.ql.io.HiveSequenceFileOutputFormat"
            }
            StorageFormat::RcFile => "org.apache.hadoop.hive.ql.io.RCFileOutputFormat",
            StorageFormat::Orc => "org.apache.hadoop.hive.ql.io.orc.OrcOutputFormat",
            StorageFormat::Parquet => {
                "org.apache.hadoop.hive.ql.io.parquet.MapredParquetOutputFormat"
            }
            StorageFormat::Avro => "org.apache.hadoop.hive.ql.io.avro.AvroContainerOutputFormat",
        }
    }

    /// SerDe library used to (de)serialize rows of this format
    pub fn serde_lib(&self) -> &'static str {
        match self {
            StorageFormat::TextFile | StorageFormat::SequenceFile => {
                "org.apache.hadoop.hive.serde2.lazy.LazySimpleSerDe"
            }
            StorageFormat::RcFile => {
                "org.apache.hadoop.hive.serde2.columnar.LazyBinaryColumnarSerDe"
            }
            StorageFormat::Orc => "org.apache.hadoop.hive.ql.io.orc.OrcSerde",
            StorageFormat::Parquet => "org.apache.hadoop.hive.ql.io.parquet.serde.ParquetHiveSerDe",
            StorageFormat::Avro => "org.apache.hadoop.hive.serde2.avro.AvroSerDe",
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "textfile" => Ok(StorageFormat::TextFile),
            "sequencefile" => Ok(StorageFormat::SequenceFile),
            "rcfile" => Ok(StorageFormat::RcFile),
            "orc" => Ok(StorageFormat::Orc),
            "parquet" => Ok(StorageFormat::Parquet),
            "avro" => Ok(StorageFormat::Avro),
            _ => Err(CatalogError::Config(format!(
                "unknown storage format '{s}'; expected one of TextFile, SequenceFile, RCFile, ORC, Parquet, Avro"
            ))),
        }
    }
}

/// Settings shared by [`HiveCatalog`](crate::catalog::hive::HiveCatalog) and
/// [`InMemoryMetastore`](crate::metastore::memory::InMemoryMetastore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HiveConf {
    /// Root under which database and table locations are assigned
    pub warehouse_dir: String,
    /// Storage format of newly created tables
    pub default_file_format: StorageFormat,
    /// Owner stamped on objects created without one
    pub owner: String,
    /// Database a catalog uses when none is named
    pub default_database: String,
}

impl Default for HiveConf {
    fn default() -> Self {
        Self {
            warehouse_dir: DEFAULT_WAREHOUSE_DIR.to_string(),
            default_file_format: StorageFormat::default(),
            owner: DEFAULT_OWNER.to_string(),
            default_database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl HiveConf {
    /// Builds a configuration from `HIVE_*` environment variables, falling
    /// back to defaults for unset ones.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] if `HIVE_DEFAULT_FILEFORMAT` names an
    /// unknown format.
    pub fn from_env() -> Result<Self, CatalogError> {
        let defaults = HiveConf::default();

        let warehouse_dir = std::env::var(ENV_WAREHOUSE_DIR).unwrap_or(defaults.warehouse_dir);
        log::debug!("{ENV_WAREHOUSE_DIR}={warehouse_dir}");
        let default_file_format = match std::env::var(ENV_DEFAULT_FILE_FORMAT) {
            Ok(v) => v.parse()?,
            Err(_) => defaults.default_file_format,
        };
        log::debug!("{ENV_DEFAULT_FILE_FORMAT}={default_file_format}");
        let owner = std::env::var(ENV_OWNER).unwrap_or(defaults.owner);
        log::debug!("{ENV_OWNER}={owner}");
        let default_database =
            std::env::var(ENV_DEFAULT_DATABASE).unwrap_or(defaults.default_database);
        log::debug!("{ENV_DEFAULT_DATABASE}={default_database}");

        Ok(Self {
            warehouse_dir,
            default_file_format,
            owner,
            default_database,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json)
            .map_err(|e| CatalogError::Config(format!("invalid configuration: {e}")))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }

    /// Location assigned to a database that does not name one
    pub fn database_location(&self, database: &str) -> String {
        format!("{}/{database}.db", self.warehouse_dir.trim_end_matches('/'))
    }
}
