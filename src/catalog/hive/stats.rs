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

//! Statistics conversion
//!
//! Column statistics are checked against the column type before they are
//! stored: a string column takes string statistics, an integral column long
//! statistics, and so on. Table statistics live in the `numRows`,
//! `numFiles`, `totalSize` and `rawDataSize` parameters of the table or
//! partition record.

use crate::catalog::error::CatalogError;
use crate::catalog::types::*;
use crate::metastore::types::*;
use std::collections::HashMap;

fn accepts(data_type: &DataType, data: &ColumnStatisticsData) -> bool {
    match data {
        ColumnStatisticsData::String { .. } => data_type.is_character_string(),
        ColumnStatisticsData::Long { .. } => data_type.is_integral(),
        ColumnStatisticsData::Double { .. } => data_type.is_floating(),
        ColumnStatisticsData::Boolean { .. } => *data_type == DataType::Boolean,
        ColumnStatisticsData::Date { .. } => *data_type == DataType::Date,
        ColumnStatisticsData::Binary { .. } => data_type.is_binary_string(),
    }
}

fn data_to_hive(data: &ColumnStatisticsData) -> HiveColumnStatisticsData {
    match *data {
        ColumnStatisticsData::String {
            max_length,
            avg_length,
            ndv,
            null_count,
        } => HiveColumnStatisticsData::String(StringColumnStatsData {
            max_col_len: max_length,
            avg_col_len: avg_length,
            num_nulls: null_count,
            num_dvs: ndv,
        }),
        ColumnStatisticsData::Long {
            min,
            max,
            ndv,
            null_count,
        } => HiveColumnStatisticsData::Long(LongColumnStatsData {
            low_value: Some(min),
            high_value: Some(max),
            num_nulls: null_count,
            num_dvs: ndv,
        }),
        ColumnStatisticsData::Double {
            min,
            max,
            ndv,
            null_count,
        } => HiveColumnStatisticsData::Double(DoubleColumnStatsData {
            low_value: Some(min),
            high_value: Some(max),
            num_nulls: null_count,
            num_dvs: ndv,
        }),
        ColumnStatisticsData::Boolean {
            true_count,
            false_count,
            null_count,
        } => HiveColumnStatisticsData::Boolean(BooleanColumnStatsData {
            num_trues: true_count,
            num_falses: false_count,
            num_nulls: null_count,
        }),
        ColumnStatisticsData::Date {
            min,
            max,
            ndv,
            null_count,
        } => HiveColumnStatisticsData::Date(DateColumnStatsData {
            low_value: Some(min.days_since_epoch()),
            high_value: Some(max.days_since_epoch()),
            num_nulls: null_count,
            num_dvs: ndv,
        }),
        ColumnStatisticsData::Binary {
            max_length,
            avg_length,
            null_count,
        } => HiveColumnStatisticsData::Binary(BinaryColumnStatsData {
            max_col_len: max_length,
            avg_col_len: avg_length,
            num_nulls: null_count,
        }),
    }
}

// Missing low/high values read back as 0.
fn data_from_hive(data: HiveColumnStatisticsData) -> ColumnStatisticsData {
    match data {
        HiveColumnStatisticsData::String(s) => ColumnStatisticsData::String {
            max_length: s.max_col_len,
            avg_length: s.avg_col_len,
            ndv: s.num_dvs,
            null_count: s.num_nulls,
        },
        HiveColumnStatisticsData::Long(s) => ColumnStatisticsData::Long {
            min: s.low_value.unwrap_or_default(),
            max: s.high_value.unwrap_or_default(),
            ndv: s.num_dvs,
            null_count: s.num_nulls,
        },
        HiveColumnStatisticsData::Double(s) => ColumnStatisticsData::Double {
            min: s.low_value.unwrap_or_default(),
            max: s.high_value.unwrap_or_default(),
            ndv: s.num_dvs,
            null_count: s.num_nulls,
        },
        HiveColumnStatisticsData::Boolean(s) => ColumnStatisticsData::Boolean {
            true_count: s.num_trues,
            false_count: s.num_falses,
            null_count: s.num_nulls,
        },
        HiveColumnStatisticsData::Date(s) => ColumnStatisticsData::Date {
            min: Date::new(s.low_value.unwrap_or_default()),
            max: Date::new(s.high_value.unwrap_or_default()),
            ndv: s.num_dvs,
            null_count: s.num_nulls,
        },
        HiveColumnStatisticsData::Binary(s) => ColumnStatisticsData::Binary {
            max_length: s.max_col_len,
            avg_length: s.avg_col_len,
            null_count: s.num_nulls,
        },
    }
}

/// Converts column statistics into metastore objects, checking every column
/// exists in `schema` and the statistics kind suits the column type.
pub(crate) fn column_statistics_to_hive(
    catalog: &str,
    path: &ObjectPath,
    schema: &TableSchema,
    statistics: &ColumnStatistics,
) -> Result<Vec<ColumnStatisticsObj>, CatalogError> {
    let mut columns: Vec<_> = statistics.columns().iter().collect();
    columns.sort_by(|a, b| a.0.cmp(b.0));

    let mut objs = Vec::with_capacity(columns.len());
    for (name, data) in columns {
        let column = schema
            .column(name)
            .ok_or_else(|| CatalogError::ColumnNotExist {
                catalog: catalog.to_string(),
                path: path.clone(),
                column: name.clone(),
            })?;
        if !accepts(&column.data_type, data) {
            return Err(CatalogError::Unsupported(format!(
                "cannot store {} statistics for column {name} of type {}",
                data.kind(),
                column.data_type
            )));
        }
        objs.push(ColumnStatisticsObj {
            col_name: name.clone(),
            col_type: column.data_type.to_hive_type()?,
            stats_data: data_to_hive(data),
        });
    }
    Ok(objs)
}

pub(crate) fn column_statistics_from_hive(objs: Vec<ColumnStatisticsObj>) -> ColumnStatistics {
    objs.into_iter()
        .map(|obj| (obj.col_name, data_from_hive(obj.stats_data)))
        .collect::<HashMap<_, _>>()
        .into()
}

fn parse_param(parameters: &Parameters, key: &str) -> i64 {
    parameters
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(-1)
}

/// Reads table statistics from record parameters; absent or unparsable
/// values read as `-1`.
pub(crate) fn table_statistics_from_params(parameters: &Parameters) -> TableStatistics {
    TableStatistics {
        row_count: parse_param(parameters, NUM_ROWS),
        file_count: i32::try_from(parse_param(parameters, NUM_FILES)).unwrap_or(-1),
        total_size: parse_param(parameters, TOTAL_SIZE),
        raw_data_size: parse_param(parameters, RAW_DATA_SIZE),
    }
}

/// Writes table statistics into record parameters. Returns `false` without
/// touching the parameters when they already hold these values.
pub(crate) fn update_statistics_params(
    parameters: &mut Parameters,
    statistics: &TableStatistics,
) -> bool {
    if table_statistics_from_params(parameters) == *statistics {
        return false;
    }
    parameters.insert(NUM_ROWS.to_string(), statistics.row_count.to_string());
    parameters.insert(NUM_FILES.to_string(), statistics.file_count.to_string());
    parameters.insert(TOTAL_SIZE.to_string(), statistics.total_size.to_string());
    parameters.insert(
        RAW_DATA_SIZE.to_string(),
        statistics.raw_data_size.to_string(),
    );
    true
}
