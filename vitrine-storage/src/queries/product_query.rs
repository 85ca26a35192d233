//! Ranked queries and filtered catalog listing.
//!
//! Ordering contract: rating ties break by rowid ascending, i.e. stable
//! insertion order. The engines rely on this and never re-sort.

use std::collections::HashSet;

use rusqlite::types::Value;
use rusqlite::Connection;

use vitrine_core::errors::VitrineResult;
use vitrine_core::models::{CatalogFilter, CatalogPage, CatalogSort, PageRequest, Product, ProductId};

use super::product_ops::{parse_product_row, PRODUCT_COLUMNS};
use crate::to_storage_err;

/// Products in any of `categories`, excluding the given ids,
/// rating descending, at most `limit`.
pub fn find_by_categories(
    conn: &Connection,
    categories: &HashSet<String>,
    excluding: &HashSet<ProductId>,
    limit: usize,
) -> VitrineResult<Vec<Product>> {
    if categories.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let cat_marks = vec!["?"; categories.len()].join(", ");
    let mut sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE category IN ({cat_marks})"
    );
    if !excluding.is_empty() {
        let ex_marks = vec!["?"; excluding.len()].join(", ");
        sql.push_str(&format!(" AND id NOT IN ({ex_marks})"));
    }
    sql.push_str(&format!(" ORDER BY rating DESC, rowid ASC LIMIT {limit}"));

    let mut binds: Vec<&str> = categories.iter().map(String::as_str).collect();
    binds.extend(excluding.iter().map(ProductId::as_str));

    collect_products(conn, &sql, rusqlite::params_from_iter(binds))
}

/// Globally top-rated products, at most `limit`.
pub fn top_rated(conn: &Connection, limit: usize) -> VitrineResult<Vec<Product>> {
    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY rating DESC, rowid ASC LIMIT {limit}"
    );
    collect_products(conn, &sql, [])
}

/// Filtered, sorted, paginated listing with a total count.
pub fn list_products(
    conn: &Connection,
    filter: &CatalogFilter,
    page: PageRequest,
) -> VitrineResult<CatalogPage> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut binds: Vec<Value> = Vec::new();

    if let Some(category) = &filter.category {
        clauses.push("category = ?");
        binds.push(Value::Text(category.clone()));
    }
    if let Some(min_price) = filter.min_price {
        clauses.push("price >= ?");
        binds.push(Value::Real(min_price));
    }
    if let Some(max_price) = filter.max_price {
        clauses.push("price <= ?");
        binds.push(Value::Real(max_price));
    }
    if let Some(min_rating) = filter.min_rating {
        clauses.push("rating >= ?");
        binds.push(Value::Real(min_rating));
    }

    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let order = match filter.sort {
        CatalogSort::Newest => "created_at DESC, rowid DESC",
        CatalogSort::PriceAsc => "price ASC, rowid ASC",
        CatalogSort::PriceDesc => "price DESC, rowid ASC",
        CatalogSort::RatingDesc => "rating DESC, rowid ASC",
        CatalogSort::NameAsc => "name ASC, rowid ASC",
    };

    let total: usize = conn
        .query_row(
            &format!("SELECT COUNT(*) FROM products{where_clause}"),
            rusqlite::params_from_iter(binds.iter()),
            |row| row.get::<_, i64>(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))? as usize;

    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products{where_clause}
         ORDER BY {order} LIMIT {} OFFSET {}",
        page.per_page,
        page.offset(),
    );
    let products = collect_products(conn, &sql, rusqlite::params_from_iter(binds.iter()))?;

    Ok(CatalogPage {
        products,
        page: page.page,
        per_page: page.per_page,
        total,
    })
}

/// Run a product SELECT and collect the parsed rows.
pub(crate) fn collect_products<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> VitrineResult<Vec<Product>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params, |row| Ok(parse_product_row(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(results)
}
