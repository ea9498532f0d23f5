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

//! Table schemas and column data types
//!
//! A [`TableSchema`] is an ordered list of named, typed columns. Each
//! [`DataType`] has a Hive type name (`string`, `varchar(10)`, `array<int>`,
//! ...) which is what the metastore stores; [`DataType::to_hive_type`] and the
//! [`FromStr`] implementation convert in both directions.
//!
//! Hive has no length-bounded binary type, so `BINARY(n)` and `VARBINARY(n)`
//! are stored as `binary` and read back as [`DataType::Bytes`].

use crate::catalog::error::ValidationErr;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Longest `CHAR` Hive accepts
pub const MAX_CHAR_LENGTH: u32 = 255;
/// Longest `VARCHAR` Hive accepts
pub const MAX_VARCHAR_LENGTH: u32 = 65535;

/// Logical type of a table column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Fixed-length character string
    Char(u32),
    /// Bounded variable-length character string
    Varchar(u32),
    /// Unbounded character string
    String,
    Boolean,
    /// Fixed-length byte string
    Binary(u32),
    /// Bounded variable-length byte string
    Varbinary(u32),
    /// Unbounded byte string
    Bytes,
    /// Fixed-point decimal
    Decimal {
        /// Total number of digits
        precision: u32,
        /// Number of digits after the decimal point
        scale: u32,
    },
    Tinyint,
    Smallint,
    Int,
    Bigint,
    Float,
    Double,
    Date,
    Timestamp,
    Array(Box<DataType>),
    Map(Box<DataType>, Box<DataType>),
}

impl DataType {
    /// Returns the Hive type name used by the metastore for this type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErr::InvalidLength`] if a `CHAR` or `VARCHAR` length
    /// is outside what Hive supports.
    pub fn to_hive_type(&self) -> Result<String, ValidationErr> {
        Ok(match self {
            DataType::Char(n) => {
                check_length("char", *n, MAX_CHAR_LENGTH)?;
                format!("char({n})")
            }
            DataType::Varchar(n) => {
                check_length("varchar", *n, MAX_VARCHAR_LENGTH)?;
                format!("varchar({n})")
            }
            DataType::String => "string".to_string(),
            DataType::Boolean => "boolean".to_string(),
            DataType::Binary(_) | DataType::Varbinary(_) | DataType::Bytes => {
                "binary".to_string()
            }
            DataType::Decimal { precision, scale } => format!("decimal({precision},{scale})"),
            DataType::Tinyint => "tinyint".to_string(),
            DataType::Smallint => "smallint".to_string(),
            DataType::Int => "int".to_string(),
            DataType::Bigint => "bigint".to_string(),
            DataType::Float => "float".to_string(),
            DataType::Double => "double".to_string(),
            DataType::Date => "date".to_string(),
            DataType::Timestamp => "timestamp".to_string(),
            DataType::Array(element) => format!("array<{}>", element.to_hive_type()?),
            DataType::Map(key, value) => {
                format!("map<{},{}>", key.to_hive_type()?, value.to_hive_type()?)
            }
        })
    }

    /// True for character string types
    pub fn is_character_string(&self) -> bool {
        matches!(
            self,
            DataType::Char(_) | DataType::Varchar(_) | DataType::String
        )
    }

    /// True for byte string types
    pub fn is_binary_string(&self) -> bool {
        matches!(
            self,
            DataType::Binary(_) | DataType::Varbinary(_) | DataType::Bytes
        )
    }

    /// True for integral numeric types
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            DataType::Tinyint | DataType::Smallint | DataType::Int | DataType::Bigint
        )
    }

    /// True for approximate numeric types
    pub fn is_floating(&self) -> bool {
        matches!(self, DataType::Float | DataType::Double)
    }
}

fn check_length(type_name: &'static str, length: u32, max: u32) -> Result<(), ValidationErr> {
    if length == 0 || length > max {
        return Err(ValidationErr::InvalidLength {
            type_name,
            length,
            max,
        });
    }
    Ok(())
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Char(n) => write!(f, "CHAR({n})"),
            DataType::Varchar(n) => write!(f, "VARCHAR({n})"),
            DataType::String => write!(f, "STRING"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Binary(n) => write!(f, "BINARY({n})"),
            DataType::Varbinary(n) => write!(f, "VARBINARY({n})"),
            DataType::Bytes => write!(f, "BYTES"),
            DataType::Decimal { precision, scale } => write!(f, "DECIMAL({precision}, {scale})"),
            DataType::Tinyint => write!(f, "TINYINT"),
            DataType::Smallint => write!(f, "SMALLINT"),
            DataType::Int => write!(f, "INT"),
            DataType::Bigint => write!(f, "BIGINT"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Double => write!(f, "DOUBLE"),
            DataType::Date => write!(f, "DATE"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::Array(element) => write!(f, "ARRAY<{element}>"),
            DataType::Map(key, value) => write!(f, "MAP<{key}, {value}>"),
        }
    }
}

/// Parses a Hive type name such as `varchar(20)` or `map<string,array<int>>`.
impl FromStr for DataType {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        let mut parser = HiveTypeParser {
            input: &lowered,
            pos: 0,
        };
        let data_type = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos != parser.input.len() {
            return Err(parser.error("unexpected trailing characters"));
        }
        Ok(data_type)
    }
}

struct HiveTypeParser<'a> {
    input: &'a str,
    pos: usize,
}

impl HiveTypeParser<'_> {
    fn error(&self, reason: &str) -> ValidationErr {
        ValidationErr::InvalidType {
            input: self.input.to_string(),
            reason: format!("{reason} at offset {}", self.pos),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn consume(&mut self, expected: u8) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<(), ValidationErr> {
        if self.consume(expected) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", expected as char)))
        }
    }

    fn identifier(&mut self) -> &str {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn number(&mut self) -> Result<u32, ValidationErr> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }
        self.input[start..self.pos]
            .parse::<u32>()
            .map_err(|_| self.error("expected a number"))
    }

    fn length(&mut self) -> Result<u32, ValidationErr> {
        self.expect(b'(')?;
        let n = self.number()?;
        self.expect(b')')?;
        Ok(n)
    }

    fn parse_type(&mut self) -> Result<DataType, ValidationErr> {
        let name = self.identifier().to_string();
        let data_type = match name.as_str() {
            "char" => DataType::Char(self.length()?),
            "varchar" => DataType::Varchar(self.length()?),
            "string" => DataType::String,
            "boolean" => DataType::Boolean,
            "binary" => DataType::Bytes,
            "decimal" => {
                let (mut precision, mut scale) = (10, 0);
                if self.consume(b'(') {
                    precision = self.number()?;
                    if self.consume(b',') {
                        scale = self.number()?;
                    }
                    self.expect(b')')?;
                }
                DataType::Decimal { precision, scale }
            }
            "tinyint" => DataType::Tinyint,
            "smallint" => DataType::Smallint,
            "int" | "integer" => DataType::Int,
            "bigint" => DataType::Bigint,
            "float" => DataType::Float,
            "double" => DataType::Double,
            "date" => DataType::Date,
            "timestamp" => DataType::Timestamp,
            "array" => {
                self.expect(b'<')?;
                let element = self.parse_type()?;
                self.expect(b'>')?;
                DataType::Array(Box::new(element))
            }
            "map" => {
                self.expect(b'<')?;
                let key = self.parse_type()?;
                self.expect(b',')?;
                let value = self.parse_type()?;
                self.expect(b'>')?;
                DataType::Map(Box::new(key), Box::new(value))
            }
            "" => return Err(self.error("expected a type name")),
            other => return Err(self.error(&format!("unsupported type '{other}'"))),
        };
        Ok(data_type)
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    pub data_type: DataType,
}

impl TableColumn {
    pub fn new<S: Into<String>>(name: S, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of table columns
///
/// # Example
///
/// ```
/// use hive_catalog::catalog::types::{DataType, TableSchema};
///
/// let schema = TableSchema::builder()
///     .field("first", DataType::String)
///     .field("second", DataType::Int)
///     .build()
///     .unwrap();
/// assert_eq!(schema.field_names(), vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<TableColumn>,
}

impl TableSchema {
    pub fn builder() -> TableSchemaBuilder {
        TableSchemaBuilder::default()
    }

    /// Creates a schema from columns, rejecting empty or duplicate names.
    pub fn new(columns: Vec<TableColumn>) -> Result<Self, ValidationErr> {
        let mut seen = HashSet::new();
        for column in &columns {
            if column.name.trim().is_empty() {
                return Err(ValidationErr::EmptyColumnName);
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ValidationErr::DuplicateColumn(column.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn field_data_types(&self) -> Vec<&DataType> {
        self.columns.iter().map(|c| &c.data_type).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "`{}` {}", column.name, column.data_type)?;
        }
        write!(f, ")")
    }
}

/// Incremental builder for [`TableSchema`]
#[derive(Debug, Clone, Default)]
pub struct TableSchemaBuilder {
    columns: Vec<TableColumn>,
}

impl TableSchemaBuilder {
    pub fn field<S: Into<String>>(mut self, name: S, data_type: DataType) -> Self {
        self.columns.push(TableColumn::new(name, data_type));
        self
    }

    pub fn build(self) -> Result<TableSchema, ValidationErr> {
        TableSchema::new(self.columns)
    }
}
