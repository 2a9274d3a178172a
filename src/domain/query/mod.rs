//! Query descriptions and result rows exchanged with the query executor.

pub mod row;
pub mod select;

pub use row::Row;
pub use select::{Direction, Join, JoinKind, Param, Predicate, SelectQuery};
