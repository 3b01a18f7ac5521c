//! Cross-category search.
//!
//! [`search_all`] fans one query out to all six categories concurrently and
//! merges the results under a deliberate ranking policy: films sort before
//! everything else, then names compare within each partition. The ordering
//! is part of the contract, not incidental.
//!
//! [`SearchDebouncer`] is the interactive wrapper: a 300ms quiescence timer
//! re-armed per keystroke, with a 2-character minimum before anything fires.

mod debounce;

pub use debounce::{SearchDebouncer, DEBOUNCE_DELAY, MIN_QUERY_LEN};

use futures::future;
use log::warn;

use crate::client::{CatalogClient, Fetch};
use crate::models::Category;
use crate::urls;

/// One search match, annotated with its source category and locally-derived
/// id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub url: String,
}

impl SearchHit {
    /// Local route to the hit's detail page.
    pub fn route(&self) -> String {
        format!("/category/{}/{}", self.category, self.id)
    }
}

/// Search every category for `query` and return ranked hits.
///
/// A trimmed-empty query returns no hits without issuing any request. The
/// six category searches run concurrently; a failing category is logged and
/// contributes an empty set rather than aborting the whole search.
pub async fn search_all<F: Fetch>(client: &CatalogClient<F>, query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let per_category = future::join_all(Category::ALL.into_iter().map(|category| async move {
        match client.search(category, query).await {
            Ok(items) => (category, items),
            Err(e) => {
                warn!("search \"{}\" failed for {}: {}", query, category, e);
                (category, Vec::new())
            }
        }
    }))
    .await;

    let mut hits: Vec<SearchHit> = per_category
        .into_iter()
        .flat_map(|(category, items)| {
            items.into_iter().map(move |item| SearchHit {
                id: urls::id_from_url(item.url()).to_string(),
                name: item.display_name().to_string(),
                url: item.url().to_string(),
                category,
            })
        })
        .collect();

    // Films before everything else, then by name within each partition.
    hits.sort_by(|a, b| {
        let key = |hit: &SearchHit| (hit.category != Category::Films, hit.name.clone());
        key(a).cmp(&key(b))
    });
    hits
}
