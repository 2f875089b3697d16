use super::filter::QueryFilter;

/// Represents a GROUP BY clause with optional HAVING conditions
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    /// Fields to group by
    pub fields: Vec<String>,
    /// Optional HAVING conditions for filtering grouped results
    pub having: Option<Vec<QueryFilter>>,
}

impl GroupBy {
    /// Create a new GROUP BY clause with the specified fields
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            having: None,
        }
    }

    /// Create a GROUP BY clause with a single field
    pub fn single(field: impl Into<String>) -> Self {
        Self {
            fields: vec![field.into()],
            having: None,
        }
    }

    /// Add HAVING conditions to filter grouped results
    pub fn with_having(mut self, conditions: Vec<QueryFilter>) -> Self {
        self.having = Some(conditions);
        self
    }

    /// Add a single HAVING condition
    pub fn having(mut self, condition: QueryFilter) -> Self {
        match &mut self.having {
            Some(conditions) => conditions.push(condition),
            None => self.having = Some(vec![condition]),
        }
        self
    }

    /// Check if this GROUP BY has HAVING conditions
    pub fn has_having(&self) -> bool {
        self.having
            .as_ref()
            .map(|h| !h.is_empty())
            .unwrap_or(false)
    }
}
