//! Profile reads and capped-list writes.
//!
//! Each capped append is one transaction: insert the new row, then trim
//! everything beyond the newest 20. Concurrent appenders to the same
//! profile serialize on the write connection; the cap holds either way.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use vitrine_core::constants::{HISTORY_CAP, SEARCH_HISTORY_CAP};
use vitrine_core::errors::VitrineResult;
use vitrine_core::models::{ProductId, SearchEvent, UserId, UserProfile, ViewEvent};

use crate::to_storage_err;

/// Load a full profile. `Ok(None)` when the user has never written one.
pub fn get_profile(conn: &Connection, user: &UserId) -> VitrineResult<Option<UserProfile>> {
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE user_id = ?1)",
            params![user.0],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if !exists {
        return Ok(None);
    }

    let view_history = load_views(conn, user)?;
    let search_history = load_searches(conn, user)?;
    let favorites = load_favorites(conn, user)?;

    Ok(Some(UserProfile {
        id: user.clone(),
        view_history,
        search_history,
        favorites,
    }))
}

fn load_views(conn: &Connection, user: &UserId) -> VitrineResult<Vec<ViewEvent>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT product_id, at FROM profile_views
             WHERE user_id = ?1 ORDER BY id DESC LIMIT {HISTORY_CAP}"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user.0], |row| {
            let product_id: String = row.get(0)?;
            let at: String = row.get(1)?;
            Ok((product_id, at))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let (product_id, at) = row.map_err(|e| to_storage_err(e.to_string()))?;
        events.push(ViewEvent {
            product_id: ProductId(product_id),
            at: parse_timestamp(&at)?,
        });
    }
    Ok(events)
}

fn load_searches(conn: &Connection, user: &UserId) -> VitrineResult<Vec<SearchEvent>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT term, at FROM profile_searches
             WHERE user_id = ?1 ORDER BY id DESC LIMIT {SEARCH_HISTORY_CAP}"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user.0], |row| {
            let term: String = row.get(0)?;
            let at: String = row.get(1)?;
            Ok((term, at))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        let (term, at) = row.map_err(|e| to_storage_err(e.to_string()))?;
        events.push(SearchEvent {
            term,
            at: parse_timestamp(&at)?,
        });
    }
    Ok(events)
}

fn load_favorites(conn: &Connection, user: &UserId) -> VitrineResult<HashSet<ProductId>> {
    let mut stmt = conn
        .prepare("SELECT product_id FROM profile_favorites WHERE user_id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user.0], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut favorites = HashSet::new();
    for row in rows {
        favorites.insert(ProductId(row.map_err(|e| to_storage_err(e.to_string()))?));
    }
    Ok(favorites)
}

/// Prepend a view event and trim beyond the cap, atomically.
pub fn append_view(conn: &Connection, user: &UserId, product: &ProductId) -> VitrineResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("append_view begin: {e}")))?;

    let result = (|| {
        ensure_profile(&tx, user)?;
        tx.execute(
            "INSERT INTO profile_views (user_id, product_id) VALUES (?1, ?2)",
            params![user.0, product.0],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tx.execute(
            &format!(
                "DELETE FROM profile_views WHERE user_id = ?1 AND id NOT IN (
                     SELECT id FROM profile_views WHERE user_id = ?1
                     ORDER BY id DESC LIMIT {HISTORY_CAP}
                 )"
            ),
            params![user.0],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    })();

    finish(tx, result, "append_view")
}

/// Prepend a search event and trim beyond the cap, atomically.
pub fn append_search(conn: &Connection, user: &UserId, term: &str) -> VitrineResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("append_search begin: {e}")))?;

    let result = (|| {
        ensure_profile(&tx, user)?;
        tx.execute(
            "INSERT INTO profile_searches (user_id, term) VALUES (?1, ?2)",
            params![user.0, term],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tx.execute(
            &format!(
                "DELETE FROM profile_searches WHERE user_id = ?1 AND id NOT IN (
                     SELECT id FROM profile_searches WHERE user_id = ?1
                     ORDER BY id DESC LIMIT {SEARCH_HISTORY_CAP}
                 )"
            ),
            params![user.0],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(())
    })();

    finish(tx, result, "append_search")
}

/// Flip favorite membership. Returns the new state.
pub fn toggle_favorite(
    conn: &Connection,
    user: &UserId,
    product: &ProductId,
) -> VitrineResult<bool> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("toggle_favorite begin: {e}")))?;

    let result = (|| {
        ensure_profile(&tx, user)?;
        let removed = tx
            .execute(
                "DELETE FROM profile_favorites WHERE user_id = ?1 AND product_id = ?2",
                params![user.0, product.0],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
        if removed > 0 {
            return Ok(false);
        }
        tx.execute(
            "INSERT INTO profile_favorites (user_id, product_id) VALUES (?1, ?2)",
            params![user.0, product.0],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(true)
    })();

    finish(tx, result, "toggle_favorite")
}

fn ensure_profile(conn: &Connection, user: &UserId) -> VitrineResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO profiles (user_id) VALUES (?1)",
        params![user.0],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn finish<T>(
    tx: rusqlite::Transaction,
    result: VitrineResult<T>,
    op: &str,
) -> VitrineResult<T> {
    match result {
        Ok(value) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("{op} commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(e)
        }
    }
}

fn parse_timestamp(raw: &str) -> VitrineResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp: {e}")))
}
