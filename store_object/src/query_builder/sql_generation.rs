//! SQL rendering
//!
//! Every clause that binds values takes the same [`Placeholders`] so the
//! indices stay contiguous across WHERE, HAVING and LIMIT.

use crate::query_builder::aggregation::SelectField;
use crate::query_builder::builder::SortOrder;
use crate::query_builder::filter::{LogicalOperator, QueryCondition, QueryFilter, QueryOperator};
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::join::JoinClause;
use crate::query_builder::statement::Placeholders;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from conditions
    pub(crate) fn build_where_clause(
        conditions: &[QueryFilter],
        placeholders: &mut Placeholders,
    ) -> String {
        match Self::join_conditions(conditions, placeholders) {
            Some(sql) => format!("WHERE {}", sql),
            None => String::new(),
        }
    }

    /// Build GROUP BY clause
    pub fn build_group_by_clause(group_by: Option<&GroupBy>) -> String {
        match group_by {
            Some(group) if !group.fields.is_empty() => {
                format!("GROUP BY {}", group.fields.join(", "))
            }
            _ => String::new(),
        }
    }

    /// Build HAVING clause, continuing the numbering of the WHERE clause
    pub(crate) fn build_having_clause(
        group_by: Option<&GroupBy>,
        placeholders: &mut Placeholders,
    ) -> String {
        let having = match group_by {
            Some(group) if group.has_having() => group.having.as_deref().unwrap_or_default(),
            _ => return String::new(),
        };

        match Self::join_conditions(having, placeholders) {
            Some(sql) => format!("HAVING {}", sql),
            None => String::new(),
        }
    }

    fn join_conditions(
        conditions: &[QueryFilter],
        placeholders: &mut Placeholders,
    ) -> Option<String> {
        let parts: Vec<String> = conditions
            .iter()
            .map(|condition| Self::build_condition_sql(condition, placeholders))
            .filter(|sql| !sql.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" AND "))
        }
    }

    fn build_condition_sql(filter: &QueryFilter, placeholders: &mut Placeholders) -> String {
        match filter {
            QueryFilter::Condition(condition) => {
                Self::build_single_condition_sql(condition, placeholders)
            }
            QueryFilter::Group { operator, filters } => {
                let operator_str = match operator {
                    LogicalOperator::And => " AND ",
                    LogicalOperator::Or => " OR ",
                };

                let parts: Vec<String> = filters
                    .iter()
                    .map(|f| Self::build_condition_sql(f, placeholders))
                    .filter(|sql| !sql.is_empty())
                    .collect();

                match parts.len() {
                    0 => String::new(),
                    1 => parts.into_iter().next().unwrap_or_default(),
                    _ => format!("({})", parts.join(operator_str)),
                }
            }
        }
    }

    fn build_single_condition_sql(
        condition: &QueryCondition,
        placeholders: &mut Placeholders,
    ) -> String {
        let field = &condition.field;

        match (&condition.operator, &condition.value) {
            (QueryOperator::IsNull, _) | (QueryOperator::Eq, None) => {
                format!("{} IS NULL", field)
            }
            (QueryOperator::IsNotNull, _) | (QueryOperator::Ne, None) => {
                format!("{} IS NOT NULL", field)
            }
            (operator, Some(value)) => {
                let param = placeholders.push(value.clone());
                format!("{} {} {}", field, operator.to_sql(), param)
            }
            // A comparison against nothing matches nothing
            (_, None) => "1=0".to_string(),
        }
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[(String, SortOrder)]) -> String {
        if order_by.is_empty() {
            return String::new();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| format!("{} {}", field, order.to_sql()))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// Build LIMIT clause with the limit bound as the next placeholder
    pub(crate) fn build_limit_clause(limit: Option<i64>, placeholders: &mut Placeholders) -> String {
        match limit {
            Some(limit) => format!("LIMIT {}", placeholders.push(limit.into())),
            None => String::new(),
        }
    }

    /// Build SELECT clause from fields
    pub fn build_select_clause(fields: &[SelectField]) -> String {
        if fields.is_empty() {
            return "*".to_string();
        }

        fields
            .iter()
            .map(Self::build_select_field)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn build_select_field(field: &SelectField) -> String {
        match field {
            SelectField::All => "*".to_string(),
            SelectField::AllOf(table) => format!("{}.*", table),
            SelectField::Field(name) => name.clone(),
            SelectField::FieldWithAlias { field, alias } => {
                format!("{} AS {}", field, alias)
            }
            SelectField::Aggregate {
                function,
                field,
                cast,
                alias,
            } => {
                let mut sql = function.apply(field.as_deref());
                if let Some(cast) = cast {
                    sql.push_str("::");
                    sql.push_str(cast);
                }
                if let Some(alias) = alias {
                    sql.push_str(" AS ");
                    sql.push_str(alias);
                }
                sql
            }
        }
    }

    /// Build JOIN clauses
    pub fn build_join_clause(joins: &[JoinClause]) -> String {
        joins
            .iter()
            .map(JoinClause::to_sql)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
