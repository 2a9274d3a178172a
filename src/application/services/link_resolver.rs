//! Resolution of related links for batches of products.

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::{LinkRecord, ProductRef, ShopContext};
use crate::domain::hydration::LinkHydrator;
use crate::domain::query::{Direction, Predicate, Row, SelectQuery};
use crate::domain::repositories::{Entity, FieldSelector, QueryExecutor};
use crate::error::AppError;

const LINK_TABLE: &str = "s_articles_information";
const LINK_ATTRIBUTE_TABLE: &str = "s_articles_information_attributes";

/// Links keyed by product number, in the order the products were passed in.
pub type LinkMap = IndexMap<String, Vec<LinkRecord>>;

/// Resolves the related links of many products with a single query.
///
/// Results are keyed by [`ProductRef::number`] and are sparse: products
/// without links have no entry.
pub struct LinkResolver<Q: QueryExecutor, F: FieldSelector> {
    executor: Arc<Q>,
    fields: Arc<F>,
    hydrator: LinkHydrator,
}

impl<Q: QueryExecutor, F: FieldSelector> LinkResolver<Q, F> {
    /// Creates a new link resolver.
    pub fn new(executor: Arc<Q>, fields: Arc<F>) -> Self {
        Self {
            executor,
            fields,
            hydrator: LinkHydrator::new(),
        }
    }

    /// Returns the links of a single product, or `None` if it has none.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve`].
    pub async fn get(
        &self,
        product: &ProductRef,
        context: &ShopContext,
    ) -> Result<Option<Vec<LinkRecord>>, AppError> {
        let mut links = self.resolve(std::slice::from_ref(product), context).await?;
        Ok(links.shift_remove_index(0).map(|(_, links)| links))
    }

    /// Returns the links of every product that has at least one.
    ///
    /// Product ids are deduplicated before querying. If two products share a
    /// number, the later one wins.
    ///
    /// # Errors
    ///
    /// Propagates executor errors unchanged and returns
    /// [`AppError::Hydration`] if a link row is incomplete.
    #[tracing::instrument(skip_all, fields(products = products.len()))]
    pub async fn resolve(
        &self,
        products: &[ProductRef],
        context: &ShopContext,
    ) -> Result<LinkMap, AppError> {
        let ids = unique_ids(products);
        if ids.is_empty() {
            return Ok(LinkMap::new());
        }

        let query = self.build_query(ids);
        let rows = self.executor.fetch_all(&query, context).await?;
        tracing::debug!(rows = rows.len(), "Fetched link rows");

        let links = self.group_by_product(&rows)?;

        Ok(project_onto(products, &links))
    }

    /// Builds the link query for the given product ids.
    pub fn build_query(&self, ids: Vec<i64>) -> SelectQuery {
        let link = Entity::Link.alias();
        let attribute = Entity::LinkAttribute.alias();

        SelectQuery::new()
            .select(self.fields.fields(Entity::Link))
            .add_select(self.fields.fields(Entity::LinkAttribute))
            .from(LINK_TABLE, link)
            .left_join(
                LINK_ATTRIBUTE_TABLE,
                attribute,
                format!("{attribute}.information_id = {link}.id"),
            )
            .and_where(Predicate::is_in(format!("{link}.article_id"), ids))
            .order_by(format!("{link}.id"), Direction::Asc)
    }

    /// Hydrates rows and groups them by owning product id, keeping row order
    /// within each product.
    pub fn group_by_product(&self, rows: &[Row]) -> Result<HashMap<i64, Vec<LinkRecord>>, AppError> {
        let mut links: HashMap<i64, Vec<LinkRecord>> = HashMap::new();

        for row in rows {
            let link = self.hydrator.hydrate(row)?;
            links.entry(link.product_id).or_default().push(link);
        }

        Ok(links)
    }
}

/// Unique product ids in first-seen order.
pub fn unique_ids(products: &[ProductRef]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(products.len());
    products
        .iter()
        .map(|p| p.id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Re-keys grouped links onto the caller's products, in caller order.
///
/// Products without links are skipped.
pub fn project_onto(products: &[ProductRef], links: &HashMap<i64, Vec<LinkRecord>>) -> LinkMap {
    let mut result = LinkMap::new();

    for product in products {
        if let Some(product_links) = links.get(&product.id) {
            result.insert(product.number.clone(), product_links.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hydration::columns;
    use crate::domain::query::Param;
    use crate::domain::repositories::{MockFieldSelector, MockQueryExecutor};

    fn link_row(id: i64, product_id: i64, label: &str) -> Row {
        Row::new()
            .with(columns::LINK_ID, id)
            .with(columns::LINK_PRODUCT_ID, product_id)
            .with(columns::LINK_LABEL, label)
            .with(columns::LINK_URL, format!("https://example.com/{label}"))
            .with(columns::LINK_TARGET, "_blank")
    }

    fn mock_fields() -> MockFieldSelector {
        let mut fields = MockFieldSelector::new();
        fields
            .expect_fields()
            .returning(|entity| vec![format!("{}.id AS {}id", entity.alias(), entity.column_prefix())]);
        fields
    }

    fn resolver(executor: MockQueryExecutor) -> LinkResolver<MockQueryExecutor, MockFieldSelector> {
        LinkResolver::new(Arc::new(executor), Arc::new(mock_fields()))
    }

    fn labels(links: &[LinkRecord]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[tokio::test]
    async fn test_resolve_empty_products_skips_query() {
        let mut executor = MockQueryExecutor::new();
        executor.expect_fetch_all().times(0);

        let result = resolver(executor)
            .resolve(&[], &ShopContext::default())
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_without_matching_links_is_empty() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let products = vec![ProductRef::new(1, "SW1"), ProductRef::new(2, "SW2")];
        let result = resolver(executor)
            .resolve(&products, &ShopContext::default())
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_deduplicates_query_ids() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .withf(|query, _| query.in_list("link.article_id") == Some(&[1, 2][..]))
            .times(1)
            .returning(|_, _| Ok(vec![link_row(10, 1, "a"), link_row(11, 2, "b")]));

        let products = vec![
            ProductRef::new(1, "SW1"),
            ProductRef::new(2, "SW2"),
            ProductRef::new(1, "SW1.1"),
        ];
        let result = resolver(executor)
            .resolve(&products, &ShopContext::default())
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(labels(&result["SW1"]), vec!["a"]);
        assert_eq!(labels(&result["SW2"]), vec!["b"]);
        assert_eq!(result["SW1"], result["SW1.1"]);
    }

    #[tokio::test]
    async fn test_resolve_groups_rows_independent_of_arrival_order() {
        let mut executor = MockQueryExecutor::new();
        executor.expect_fetch_all().returning(|_, _| {
            Ok(vec![
                link_row(20, 2, "b1"),
                link_row(10, 1, "a1"),
                link_row(21, 2, "b2"),
            ])
        });

        let products = vec![ProductRef::new(1, "P1"), ProductRef::new(2, "P2")];
        let result = resolver(executor)
            .resolve(&products, &ShopContext::default())
            .await
            .unwrap();

        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["P1", "P2"]);
        assert_eq!(labels(&result["P1"]), vec!["a1"]);
        assert_eq!(labels(&result["P2"]), vec!["b1", "b2"]);
    }

    #[tokio::test]
    async fn test_resolve_omits_products_without_links() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .returning(|_, _| Ok(vec![link_row(10, 1, "a")]));

        let products = vec![ProductRef::new(1, "P1"), ProductRef::new(2, "P2")];
        let result = resolver(executor)
            .resolve(&products, &ShopContext::default())
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert!(!result.contains_key("P2"));
    }

    #[tokio::test]
    async fn test_resolve_shared_number_last_write_wins() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .returning(|_, _| Ok(vec![link_row(10, 1, "first"), link_row(20, 2, "second")]));

        let products = vec![ProductRef::new(1, "SAME"), ProductRef::new(2, "SAME")];
        let result = resolver(executor)
            .resolve(&products, &ShopContext::default())
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(labels(&result["SAME"]), vec!["second"]);
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .times(2)
            .returning(|_, _| Ok(vec![link_row(10, 1, "a"), link_row(11, 1, "b")]));

        let resolver = resolver(executor);
        let products = vec![ProductRef::new(1, "P1")];
        let context = ShopContext::default();

        let first = resolver.resolve(&products, &context).await.unwrap();
        let second = resolver.resolve(&products, &context).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_resolve_propagates_executor_error() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .returning(|_, _| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let err = resolver(executor)
            .resolve(&[ProductRef::new(1, "P1")], &ShopContext::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[tokio::test]
    async fn test_resolve_fails_on_incomplete_row() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .returning(|_, _| Ok(vec![Row::new().with(columns::LINK_ID, 1)]));

        let err = resolver(executor)
            .resolve(&[ProductRef::new(1, "P1")], &ShopContext::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Hydration { .. }));
    }

    #[tokio::test]
    async fn test_get_returns_single_entry() {
        let mut executor = MockQueryExecutor::new();
        executor
            .expect_fetch_all()
            .returning(|_, _| Ok(vec![link_row(10, 1, "a")]));

        let links = resolver(executor)
            .get(&ProductRef::new(1, "P1"), &ShopContext::default())
            .await
            .unwrap();

        assert_eq!(labels(&links.unwrap()), vec!["a"]);
    }

    #[tokio::test]
    async fn test_get_without_links_returns_none() {
        let mut executor = MockQueryExecutor::new();
        executor.expect_fetch_all().returning(|_, _| Ok(vec![]));

        let links = resolver(executor)
            .get(&ProductRef::new(1, "P1"), &ShopContext::default())
            .await
            .unwrap();

        assert!(links.is_none());
    }

    #[test]
    fn test_build_query() {
        let resolver = resolver(MockQueryExecutor::new());

        let query = resolver.build_query(vec![3, 4]);

        assert_eq!(
            query.from,
            Some(("s_articles_information".to_string(), "link".to_string()))
        );
        assert_eq!(query.joins.len(), 1);
        assert_eq!(query.joins[0].condition, "linkattribute.information_id = link.id");
        assert_eq!(query.columns, vec!["link.id AS __link_id", "linkattribute.id AS __linkattribute_id"]);
        assert_eq!(query.parameters(), vec![Param::IntList(vec![3, 4])]);
    }

    #[test]
    fn test_unique_ids_keeps_first_seen_order() {
        let products = vec![
            ProductRef::new(3, "a"),
            ProductRef::new(1, "b"),
            ProductRef::new(3, "c"),
        ];

        assert_eq!(unique_ids(&products), vec![3, 1]);
    }

    #[test]
    fn test_project_onto_follows_caller_order() {
        let mut links = HashMap::new();
        links.insert(1, vec![LinkRecord::new(10, 1, "a", "u", "_blank")]);
        links.insert(2, vec![LinkRecord::new(20, 2, "b", "u", "_blank")]);

        let products = vec![ProductRef::new(2, "P2"), ProductRef::new(1, "P1")];
        let result = project_onto(&products, &links);

        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["P2", "P1"]);
    }
}
