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

//! Table and column statistics

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Calendar date stored as the number of days since 1970-01-01
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    days_since_epoch: i64,
}

impl Date {
    pub fn new(days_since_epoch: i64) -> Self {
        Self { days_since_epoch }
    }

    pub fn days_since_epoch(&self) -> i64 {
        self.days_since_epoch
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH.date_naive();
        Self::new(date.signed_duration_since(epoch).num_days())
    }

    /// Returns `None` if the date is outside what `chrono` can represent.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let epoch = DateTime::<Utc>::UNIX_EPOCH.date_naive();
        let days = Days::new(self.days_since_epoch.unsigned_abs());
        if self.days_since_epoch >= 0 {
            epoch.checked_add_days(days)
        } else {
            epoch.checked_sub_days(days)
        }
    }
}

/// Aggregates describing the data distribution of one column
///
/// The variant is chosen by the column's type: character strings use
/// `String`, integral numbers `Long`, approximate numbers `Double`, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnStatisticsData {
    String {
        max_length: i64,
        avg_length: f64,
        ndv: i64,
        null_count: i64,
    },
    Long {
        min: i64,
        max: i64,
        ndv: i64,
        null_count: i64,
    },
    Double {
        min: f64,
        max: f64,
        ndv: i64,
        null_count: i64,
    },
    Boolean {
        true_count: i64,
        false_count: i64,
        null_count: i64,
    },
    Date {
        min: Date,
        max: Date,
        ndv: i64,
        null_count: i64,
    },
    Binary {
        max_length: i64,
        avg_length: f64,
        null_count: i64,
    },
}

impl ColumnStatisticsData {
    /// Name of the statistics kind, e.g. `"string"`
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnStatisticsData::String { .. } => "string",
            ColumnStatisticsData::Long { .. } => "long",
            ColumnStatisticsData::Double { .. } => "double",
            ColumnStatisticsData::Boolean { .. } => "boolean",
            ColumnStatisticsData::Date { .. } => "date",
            ColumnStatisticsData::Binary { .. } => "binary",
        }
    }

    pub fn null_count(&self) -> i64 {
        match self {
            ColumnStatisticsData::String { null_count, .. }
            | ColumnStatisticsData::Long { null_count, .. }
            | ColumnStatisticsData::Double { null_count, .. }
            | ColumnStatisticsData::Boolean { null_count, .. }
            | ColumnStatisticsData::Date { null_count, .. }
            | ColumnStatisticsData::Binary { null_count, .. } => *null_count,
        }
    }
}

/// Column name to statistics mapping for a table or partition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    columns: HashMap<String, ColumnStatisticsData>,
}

impl ColumnStatistics {
    pub fn new(columns: HashMap<String, ColumnStatisticsData>) -> Self {
        Self { columns }
    }

    /// Adds or replaces the statistics of one column.
    pub fn with_column<S: Into<String>>(mut self, column: S, data: ColumnStatisticsData) -> Self {
        self.columns.insert(column.into(), data);
        self
    }

    pub fn columns(&self) -> &HashMap<String, ColumnStatisticsData> {
        &self.columns
    }

    pub fn get(&self, column: &str) -> Option<&ColumnStatisticsData> {
        self.columns.get(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<HashMap<String, ColumnStatisticsData>> for ColumnStatistics {
    fn from(columns: HashMap<String, ColumnStatisticsData>) -> Self {
        Self::new(columns)
    }
}

/// Table- or partition-level statistics; `-1` marks an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableStatistics {
    pub row_count: i64,
    pub file_count: i32,
    pub total_size: i64,
    pub raw_data_size: i64,
}

impl TableStatistics {
    pub const UNKNOWN: TableStatistics = TableStatistics {
        row_count: -1,
        file_count: -1,
        total_size: -1,
        raw_data_size: -1,
    };

    pub fn new(row_count: i64, file_count: i32, total_size: i64, raw_data_size: i64) -> Self {
        Self {
            row_count,
            file_count,
            total_size,
            raw_data_size,
        }
    }
}

impl Default for TableStatistics {
    fn default() -> Self {
        Self::UNKNOWN
    }
}
