use super::executor::{fetch_one, fetch_optional};
use crate::errors::StoreError;
use crate::models::{NewUser, User};
use crate::query_builder::{BindValue, InsertBuilder, QueryBuilder, QueryFilter, Statement};
use crate::traits::UserRepository;
use crate::DbPool;
use async_trait::async_trait;

const TABLE: &str = "users";

/// PostgreSQL-backed [`UserRepository`]
#[derive(Debug, Clone)]
pub struct UserStore {
    db_pool: DbPool,
}

impl UserStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    pub(crate) fn lookup_statement(column: &str, value: impl Into<BindValue>) -> Statement {
        QueryBuilder::from(TABLE)
            .filter(QueryFilter::eq(column, value))
            .limit(1)
            .build()
    }

    pub(crate) fn insert_statement(user: NewUser) -> Statement {
        InsertBuilder::into_table(TABLE)
            .set("name", user.name)
            .set("email", user.email.to_lowercase())
            .set("password", user.password)
            .build()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let statement = Self::lookup_statement("email", email.to_lowercase());
        fetch_optional(&self.db_pool, TABLE, "get_user_with_email", &statement).await
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        let statement = Self::lookup_statement("id", id);
        fetch_optional(&self.db_pool, TABLE, "get_user_with_id", &statement).await
    }

    async fn add_user(&self, user: NewUser) -> Result<User, StoreError> {
        let statement = Self::insert_statement(user);
        fetch_one(&self.db_pool, TABLE, "add_user", &statement).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_statement() {
        let statement = UserStore::lookup_statement("email", "ada@example.com");

        assert_eq!(
            statement.sql,
            "SELECT * FROM users WHERE email = $1 LIMIT $2"
        );
        assert_eq!(
            statement.values,
            vec![BindValue::from("ada@example.com"), BindValue::BigInt(1)]
        );
    }

    #[test]
    fn test_insert_lowercases_email() {
        let statement = UserStore::insert_statement(NewUser {
            name: "Ada Lovelace".to_string(),
            email: "Ada@Example.COM".to_string(),
            password: "hash".to_string(),
        });

        assert_eq!(
            statement.sql,
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *"
        );
        assert_eq!(statement.values[1], BindValue::from("ada@example.com"));
    }
}
