/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
}

impl JoinType {
    /// Convert JoinType to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// A complete JOIN clause with an ON equality
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: String,
    pub left_field: String,
    pub right_field: String,
}

impl JoinClause {
    /// Create a new JOIN clause with ON condition
    pub fn new_on(
        join_type: JoinType,
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self {
            join_type,
            table: table.into(),
            left_field: left_field.into(),
            right_field: right_field.into(),
        }
    }

    /// Create an INNER JOIN
    pub fn inner(
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self::new_on(JoinType::Inner, table, left_field, right_field)
    }

    /// Create a LEFT JOIN
    pub fn left(
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self::new_on(JoinType::Left, table, left_field, right_field)
    }

    pub fn to_sql(&self) -> String {
        format!(
            "{} {} ON {} = {}",
            self.join_type.to_sql(),
            self.table,
            self.left_field,
            self.right_field
        )
    }
}
