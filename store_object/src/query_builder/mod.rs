//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

pub mod aggregation;
pub mod builder;
pub mod filter;
pub mod grouping;
pub mod insert;
pub mod join;
pub mod sql_generation;
pub mod statement;


pub use aggregation::{AggregateFunction, SelectField};
pub use builder::{QueryBuilder, SortOrder};
pub use filter::{QueryFilter, QueryOperator};
pub use grouping::GroupBy;
pub use insert::InsertBuilder;
pub use join::{JoinClause, JoinType};
pub use statement::{BindValue, Statement};
