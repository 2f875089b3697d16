/// Represents SQL aggregate functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateFunction {
    /// COUNT(*) or COUNT(field)
    Count,
    /// SUM(field)
    Sum,
    /// AVG(field)
    Avg,
    /// MIN(field)
    Min,
    /// MAX(field)
    Max,
}

impl AggregateFunction {
    /// Convert aggregate function to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "COUNT",
            AggregateFunction::Sum => "SUM",
            AggregateFunction::Avg => "AVG",
            AggregateFunction::Min => "MIN",
            AggregateFunction::Max => "MAX",
        }
    }

    /// Render the aggregate applied to a field, e.g. `AVG(property_reviews.rating)`.
    /// Also used on the left-hand side of HAVING conditions.
    pub fn apply(&self, field: Option<&str>) -> String {
        format!("{}({})", self.to_sql(), field.unwrap_or("*"))
    }
}

/// Represents a field selection in a SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub enum SelectField {
    /// Select all fields: SELECT *
    All,
    /// Select all fields of one table: SELECT table.*
    AllOf(String),
    /// Select specific field: SELECT field_name
    Field(String),
    /// Select field with alias: SELECT field_name AS alias
    FieldWithAlias { field: String, alias: String },
    /// Select aggregate function: SELECT AVG(field)::cast AS alias
    Aggregate {
        function: AggregateFunction,
        field: Option<String>, // None for COUNT(*)
        cast: Option<String>,
        alias: Option<String>,
    },
}

impl SelectField {
    /// Create a simple field selection
    pub fn field(field: impl Into<String>) -> Self {
        SelectField::Field(field.into())
    }

    /// Create a `table.*` selection
    pub fn all_of(table: impl Into<String>) -> Self {
        SelectField::AllOf(table.into())
    }

    /// Create a field with alias
    pub fn field_as(field: impl Into<String>, alias: impl Into<String>) -> Self {
        SelectField::FieldWithAlias {
            field: field.into(),
            alias: alias.into(),
        }
    }

    fn aggregate(function: AggregateFunction, field: Option<String>) -> Self {
        SelectField::Aggregate {
            function,
            field,
            cast: None,
            alias: None,
        }
    }

    /// Create COUNT(*) aggregate
    pub fn count_all() -> Self {
        Self::aggregate(AggregateFunction::Count, None)
    }

    pub fn count(field: impl Into<String>) -> Self {
        Self::aggregate(AggregateFunction::Count, Some(field.into()))
    }

    pub fn sum(field: impl Into<String>) -> Self {
        Self::aggregate(AggregateFunction::Sum, Some(field.into()))
    }

    pub fn avg(field: impl Into<String>) -> Self {
        Self::aggregate(AggregateFunction::Avg, Some(field.into()))
    }

    pub fn min(field: impl Into<String>) -> Self {
        Self::aggregate(AggregateFunction::Min, Some(field.into()))
    }

    pub fn max(field: impl Into<String>) -> Self {
        Self::aggregate(AggregateFunction::Max, Some(field.into()))
    }

    /// Add an alias to this selection.
    /// Plain fields become [`SelectField::FieldWithAlias`]; `*` selections ignore it.
    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        match self {
            SelectField::Field(field) | SelectField::FieldWithAlias { field, .. } => {
                SelectField::FieldWithAlias {
                    field,
                    alias: alias.into(),
                }
            }
            SelectField::Aggregate {
                function,
                field,
                cast,
                ..
            } => SelectField::Aggregate {
                function,
                field,
                cast,
                alias: Some(alias.into()),
            },
            other => other,
        }
    }

    /// Cast an aggregate result to a SQL type (`AVG(x)::float8`)
    pub fn with_cast(self, sql_type: impl Into<String>) -> Self {
        match self {
            SelectField::Aggregate {
                function,
                field,
                alias,
                ..
            } => SelectField::Aggregate {
                function,
                field,
                cast: Some(sql_type.into()),
                alias,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_apply() {
        assert_eq!(AggregateFunction::Count.apply(None), "COUNT(*)");
        assert_eq!(
            AggregateFunction::Avg.apply(Some("property_reviews.rating")),
            "AVG(property_reviews.rating)"
        );
    }

    #[test]
    fn test_select_field_avg_with_cast_and_alias() {
        let field = SelectField::avg("rating")
            .with_cast("float8")
            .with_alias("average_rating");

        match field {
            SelectField::Aggregate {
                function,
                field,
                cast,
                alias,
            } => {
                assert_eq!(function, AggregateFunction::Avg);
                assert_eq!(field.as_deref(), Some("rating"));
                assert_eq!(cast.as_deref(), Some("float8"));
                assert_eq!(alias.as_deref(), Some("average_rating"));
            }
            _ => panic!("Expected Aggregate variant"),
        }
    }

    #[test]
    fn test_with_alias_on_plain_field() {
        let field = SelectField::field("reservations.id").with_alias("reservation_id");
        assert_eq!(
            field,
            SelectField::FieldWithAlias {
                field: "reservations.id".to_string(),
                alias: "reservation_id".to_string(),
            }
        );
    }

    #[test]
    fn test_with_cast_ignored_on_plain_field() {
        let field = SelectField::field("city").with_cast("text");
        assert_eq!(field, SelectField::Field("city".to_string()));
    }
}
