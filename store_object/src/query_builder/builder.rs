//! Query builder
//!
//! Fluent construction of a single SELECT statement. Identifiers handed to
//! the builder are program constants; user input only ever enters through
//! bound values.

use crate::query_builder::aggregation::SelectField;
use crate::query_builder::filter::QueryFilter;
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::join::JoinClause;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::statement::{Placeholders, Statement};

#[derive(Debug, Clone, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Query builder for constructing parameterized SELECT statements
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    pub(crate) table: String,
    pub(crate) select_fields: Vec<SelectField>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) group_by: Option<GroupBy>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<i64>,
}

impl QueryBuilder {
    /// Start a query selecting from `table`
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select_fields: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            group_by: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Add a field to the SELECT list (empty list selects `*`)
    pub fn select(mut self, field: SelectField) -> Self {
        self.select_fields.push(field);
        self
    }

    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.conditions.extend(filters);
        self
    }

    /// Group results by the given fields
    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    /// Add a HAVING condition. Requires a prior `group_by`; ignored otherwise.
    pub fn having(mut self, condition: QueryFilter) -> Self {
        if let Some(group_by) = self.group_by.take() {
            self.group_by = Some(group_by.having(condition));
        }
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Cap the row count. The limit is bound as the last placeholder.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the statement.
    ///
    /// Placeholders are numbered in render order: WHERE conditions first,
    /// then HAVING conditions, then the limit.
    pub fn build(&self) -> Statement {
        let mut placeholders = Placeholders::new();

        let mut parts = vec![
            format!(
                "SELECT {}",
                SqlGenerator::build_select_clause(&self.select_fields)
            ),
            format!("FROM {}", self.table),
            SqlGenerator::build_join_clause(&self.joins),
            SqlGenerator::build_where_clause(&self.conditions, &mut placeholders),
            SqlGenerator::build_group_by_clause(self.group_by.as_ref()),
            SqlGenerator::build_having_clause(self.group_by.as_ref(), &mut placeholders),
            SqlGenerator::build_order_clause(&self.order_by),
            SqlGenerator::build_limit_clause(self.limit, &mut placeholders),
        ];
        parts.retain(|part| !part.is_empty());

        Statement::new(parts.join(" "), placeholders.into_values())
    }
}
