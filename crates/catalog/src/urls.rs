//! URL and relation-name utilities.
//!
//! The catalog hands out canonical resource URLs as the only identity; these
//! helpers derive local ids and route paths from them, and map API-side
//! relation keys ("characters", "residents", "pilots") onto the closed
//! category set used for routing.

use crate::models::Category;

/// Extract the id from a canonical resource URL: the last non-empty path
/// segment. Returns `""` when the URL has none; callers must treat that as
/// "unresolvable", never as a valid id to retry.
pub fn id_from_url(url: &str) -> &str {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or("")
}

/// Infer the category of a canonical resource URL from its path: the
/// segment before the id (e.g. `.../api/people/4/` -> `People`). `None`
/// when no path segment names a known category.
pub fn category_from_url(url: &str) -> Option<Category> {
    url.split('/')
        .rev()
        .find_map(|segment| segment.parse::<Category>().ok())
}

/// Map an API-side relation key onto the category its targets live in.
/// `None` for unrecognized keys.
pub fn category_for_relation(name: &str) -> Option<Category> {
    match name {
        "characters" | "residents" | "pilots" | "people" => Some(Category::People),
        "planets" => Some(Category::Planets),
        "species" => Some(Category::Species),
        "vehicles" => Some(Category::Vehicles),
        "starships" => Some(Category::Starships),
        "films" => Some(Category::Films),
        _ => None,
    }
}

/// Route path segment for a relation key; unrecognized keys pass through
/// unchanged so a future upstream relation still routes somewhere.
pub fn relation_route(name: &str) -> &str {
    match category_for_relation(name) {
        Some(category) => category.as_str(),
        None => name,
    }
}

/// Section heading for a relation key ("characters" -> "Characters").
pub fn relation_title(name: &str) -> String {
    match name {
        "characters" => "Characters".to_string(),
        "residents" => "Residents".to_string(),
        "pilots" => "Pilots".to_string(),
        "people" => "People".to_string(),
        "planets" => "Planets".to_string(),
        "species" => "Species".to_string(),
        "vehicles" => "Vehicles".to_string(),
        "starships" => "Starships".to_string(),
        "films" => "Films".to_string(),
        other => other.to_string(),
    }
}

/// Local route for a category list page.
pub fn category_route(category: Category) -> String {
    format!("/category/{}", category)
}

/// Local route for a resource detail page, derived from its canonical URL.
/// The relation key decides the routing category (a film's "characters" link
/// routes to people).
pub fn detail_route(relation_name: &str, url: &str) -> String {
    format!("/category/{}/{}", relation_route(relation_name), id_from_url(url))
}
