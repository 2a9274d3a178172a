#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use storefront_gateway::infrastructure::persistence::StorefrontFieldHelper;
use storefront_gateway::state::Gateways;

pub async fn create_test_link(pool: &PgPool, product_id: i64, label: &str, url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO s_articles_information (article_id, description, link, target) \
         VALUES ($1, $2, $3, '_blank') RETURNING id",
    )
    .bind(product_id)
    .bind(label)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_link_attribute(pool: &PgPool, link_id: i64, attr1: Option<&str>) {
    sqlx::query("INSERT INTO s_articles_information_attributes (information_id, attr1) VALUES ($1, $2)")
        .bind(link_id)
        .bind(attr1)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_price_group(pool: &PgPool, id: i64, name: &str) {
    sqlx::query("INSERT INTO s_core_pricegroups (id, description) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_discount(
    pool: &PgPool,
    group_id: i64,
    customer_group_id: i64,
    threshold: f64,
    percentage: f64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO s_core_pricegroups_discounts (group_id, customer_group_id, discount_start, discount) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(group_id)
    .bind(customer_group_id)
    .bind(threshold)
    .bind(percentage)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_gateways(pool: PgPool) -> Gateways {
    Gateways::new(Arc::new(pool), StorefrontFieldHelper::default())
}
