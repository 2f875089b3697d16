use crate::query_builder::statement::{BindValue, Placeholders, Statement};

/// Builder for `INSERT ... RETURNING *` statements
#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    table: String,
    columns: Vec<(String, BindValue)>,
}

impl InsertBuilder {
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Set a column value. Columns render in the order they are set.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<BindValue>) -> Self {
        self.columns.push((column.into(), value.into()));
        self
    }

    pub fn build(&self) -> Statement {
        let mut placeholders = Placeholders::new();

        let (columns, params): (Vec<&str>, Vec<String>) = self
            .columns
            .iter()
            .map(|(column, value)| (column.as_str(), placeholders.push(value.clone())))
            .unzip();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            self.table,
            columns.join(", "),
            params.join(", ")
        );

        Statement::new(sql, placeholders.into_values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statement() {
        let statement = InsertBuilder::into_table("users")
            .set("name", "Ada")
            .set("email", "ada@example.com")
            .set("password", "secret")
            .build();

        assert_eq!(
            statement.sql,
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *"
        );
        assert_eq!(statement.values.len(), 3);
        assert_eq!(statement.values[1], BindValue::from("ada@example.com"));
    }
}
