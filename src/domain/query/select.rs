//! Structured description of a read query.
//!
//! Gateways describe what they need with [`SelectQuery`]; executors decide how
//! to render and run it. Keeping the description as data lets unit tests
//! assert on tables, predicates and bound ids without a database.

/// Sort direction for `ORDER BY` terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub alias: String,
    pub condition: String,
}

/// A value bound to a query placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(i64),
    Text(String),
    IntList(Vec<i64>),
}

/// A filter term. Terms are combined with `AND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Eq { column: String, value: Param },
    /// `column IN (ids)`, bound as one typed integer list.
    In { column: String, ids: Vec<i64> },
}

impl Predicate {
    pub fn eq(column: impl Into<String>, value: Param) -> Self {
        Predicate::Eq {
            column: column.into(),
            value,
        }
    }

    pub fn is_in(column: impl Into<String>, ids: Vec<i64>) -> Self {
        Predicate::In {
            column: column.into(),
            ids,
        }
    }

    pub fn column(&self) -> &str {
        match self {
            Predicate::Eq { column, .. } | Predicate::In { column, .. } => column,
        }
    }

    pub fn param(&self) -> Param {
        match self {
            Predicate::Eq { value, .. } => value.clone(),
            Predicate::In { ids, .. } => Param::IntList(ids.clone()),
        }
    }
}

/// A `SELECT` over one base table with optional joins, filters, grouping and
/// ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    pub columns: Vec<String>,
    pub from: Option<(String, String)>,
    pub joins: Vec<Join>,
    pub predicates: Vec<Predicate>,
    pub group_by: Vec<String>,
    pub order_by: Vec<(String, Direction)>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the select list.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn from(mut self, table: impl Into<String>, alias: impl Into<String>) -> Self {
        self.from = Some((table.into(), alias.into()));
        self
    }

    pub fn inner_join(
        self,
        table: impl Into<String>,
        alias: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        self.join(JoinKind::Inner, table, alias, condition)
    }

    pub fn left_join(
        self,
        table: impl Into<String>,
        alias: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        self.join(JoinKind::Left, table, alias, condition)
    }

    fn join(
        mut self,
        kind: JoinKind,
        table: impl Into<String>,
        alias: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        self.joins.push(Join {
            kind,
            table: table.into(),
            alias: alias.into(),
            condition: condition.into(),
        });
        self
    }

    pub fn and_where(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by = vec![column.into()];
        self
    }

    pub fn add_group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by.push(column.into());
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order_by = vec![(column.into(), direction)];
        self
    }

    pub fn add_order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push((column.into(), direction));
        self
    }

    /// Bound values in placeholder order.
    pub fn parameters(&self) -> Vec<Param> {
        self.predicates.iter().map(Predicate::param).collect()
    }

    /// Ids bound to the `IN` predicate on `column`, if there is one.
    pub fn in_list(&self, column: &str) -> Option<&[i64]> {
        self.predicates.iter().find_map(|p| match p {
            Predicate::In { column: c, ids } if c == column => Some(ids.as_slice()),
            _ => None,
        })
    }
}
