//! Parameterized statements
//!
//! A [`Statement`] is finished SQL text plus the values bound to its `$n`
//! placeholders, in placeholder order.

use crate::errors::StoreError;
use sqlx::postgres::PgArguments;
use sqlx::Arguments;
use std::fmt;

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Double(f64),
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Integer(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::BigInt(value)
    }
}

impl From<f64> for BindValue {
    fn from(value: f64) -> Self {
        BindValue::Double(value)
    }
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindValue::Text(v) => write!(f, "'{}'", v),
            BindValue::Integer(v) => write!(f, "{}", v),
            BindValue::BigInt(v) => write!(f, "{}", v),
            BindValue::Double(v) => write!(f, "{}", v),
        }
    }
}

/// SQL text with its bound values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statement {
    pub sql: String,
    pub values: Vec<BindValue>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, values: Vec<BindValue>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }

    /// Number of bound values, which is also the highest placeholder index
    pub fn param_count(&self) -> usize {
        self.values.len()
    }

    /// Placeholder indices in the order they appear in the SQL text
    pub fn placeholder_indices(&self) -> Vec<usize> {
        let bytes = self.sql.as_bytes();
        let mut indices = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if let Ok(index) = self.sql[start..end].parse() {
                    indices.push(index);
                }
                i = end.max(start);
            } else {
                i += 1;
            }
        }

        indices
    }

    /// True when every index 1..=N appears exactly once, N being the number
    /// of bound values
    pub fn has_contiguous_placeholders(&self) -> bool {
        let mut indices = self.placeholder_indices();
        indices.sort_unstable();
        indices.iter().copied().eq(1..=self.values.len())
    }

    /// Encode the bound values into Postgres arguments
    pub fn arguments(&self) -> Result<PgArguments, StoreError> {
        let mut args = PgArguments::default();

        for value in &self.values {
            let added = match value {
                BindValue::Text(v) => args.add(v.clone()),
                BindValue::Integer(v) => args.add(*v),
                BindValue::BigInt(v) => args.add(*v),
                BindValue::Double(v) => args.add(*v),
            };
            added.map_err(|e| StoreError::Bind(e.to_string()))?;
        }

        Ok(args)
    }
}

/// Monotonic `$n` placeholder allocator shared by every clause of a statement
#[derive(Debug, Default)]
pub(crate) struct Placeholders {
    values: Vec<BindValue>,
}

impl Placeholders {
    pub(crate) fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Bind a value and return the placeholder that refers to it
    pub(crate) fn push(&mut self, value: BindValue) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }

    pub(crate) fn into_values(self) -> Vec<BindValue> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_sequential() {
        let mut placeholders = Placeholders::new();

        assert_eq!(placeholders.push(BindValue::from("a")), "$1");
        assert_eq!(placeholders.push(BindValue::from(2)), "$2");
        assert_eq!(placeholders.push(BindValue::from(3.5)), "$3");

        let values = placeholders.into_values();
        assert_eq!(
            values,
            vec![
                BindValue::Text("a".to_string()),
                BindValue::Integer(2),
                BindValue::Double(3.5)
            ]
        );
    }

    #[test]
    fn test_statement_arguments_accept_every_variant() {
        let statement = Statement::new(
            "SELECT $1, $2, $3, $4",
            vec![
                BindValue::from("text"),
                BindValue::from(1_i32),
                BindValue::from(2_i64),
                BindValue::from(0.5),
            ],
        );

        assert_eq!(statement.param_count(), 4);
        assert!(statement.arguments().is_ok());
    }

    #[test]
    fn test_placeholder_indices() {
        let statement = Statement::new(
            "SELECT * FROM t WHERE a = $1 AND b >= $2 LIMIT $10",
            vec![BindValue::Integer(1); 10],
        );
        assert_eq!(statement.placeholder_indices(), vec![1, 2, 10]);
        assert!(!statement.has_contiguous_placeholders());

        let statement = Statement::new("SELECT $2, $1", vec![BindValue::Integer(1); 2]);
        assert!(statement.has_contiguous_placeholders());

        let statement = Statement::new("SELECT $1, $1", vec![BindValue::Integer(1); 2]);
        assert!(!statement.has_contiguous_placeholders());
    }

    #[test]
    fn test_bind_value_display() {
        assert_eq!(BindValue::from("%van%").to_string(), "'%van%'");
        assert_eq!(BindValue::BigInt(5000).to_string(), "5000");
    }
}
