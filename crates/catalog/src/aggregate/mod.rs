//! Relation resolution and detail aggregation.
//!
//! A loaded resource carries relation fields: ordered lists of canonical
//! URLs pointing at resources in other categories. This module walks those
//! URLs and merges the results into a display-ready detail view, with two
//! hard rules:
//!
//! - fan-out per relation is capped at [`RELATED_FETCH_CAP`] URLs, fired
//!   concurrently and joined; the untruncated length is kept for "view all"
//! - partial success is the default policy: a relation whose fetch set fails
//!   is logged and omitted, never escalated; a missing homeworld degrades to
//!   "Unknown" instead of blocking the page

use std::collections::BTreeMap;

use futures::future;
use log::warn;

use crate::client::{CatalogClient, Fetch};
use crate::display::{item_details, DetailField};
use crate::errors::CatalogError;
use crate::models::{Category, Resource};
use crate::urls;

/// Per-relation fan-out cap. Bounds both request volume and UI section size;
/// URLs past the cap are never requested.
pub const RELATED_FETCH_CAP: usize = 6;

/// Fully-loaded related items for one relation.
#[derive(Debug)]
pub struct RelatedSection {
    /// Loaded items in the relation's original URL order, at most
    /// [`RELATED_FETCH_CAP`] of them.
    pub items: Vec<Resource>,
    /// Untruncated relation length.
    pub total: usize,
}

impl RelatedSection {
    /// Whether the relation holds more items than were loaded, i.e. whether
    /// a "view all" affordance applies.
    pub fn has_more(&self) -> bool {
        self.total > self.items.len()
    }
}

/// A resolved single scalar homeworld relation.
#[derive(Debug, Clone)]
pub struct HomeworldRef {
    pub name: String,
    pub url: String,
}

impl HomeworldRef {
    /// Local route to the homeworld's detail page.
    pub fn route(&self) -> String {
        format!("/category/planets/{}", urls::id_from_url(&self.url))
    }
}

/// Everything a detail page renders for one resource.
#[derive(Debug)]
pub struct ItemDetail {
    pub resource: Resource,
    pub details: Vec<DetailField>,
    pub homeworld: Option<HomeworldRef>,
    pub related: BTreeMap<String, RelatedSection>,
}

/// Resolve every relation field on `resource` into loaded items.
///
/// Empty relations are omitted without issuing a fetch. Within a relation
/// the capped URL list is fetched concurrently; output preserves request
/// order, not completion order. Any failure inside a relation's fetch set
/// drops that whole relation from the result.
pub async fn resolve_related<F: Fetch>(
    client: &CatalogClient<F>,
    resource: &Resource,
) -> BTreeMap<String, RelatedSection> {
    let mut sections = BTreeMap::new();

    for relation in resource.relations() {
        if relation.urls.is_empty() {
            continue;
        }
        let capped = &relation.urls[..relation.urls.len().min(RELATED_FETCH_CAP)];
        let results = future::join_all(capped.iter().map(|url| client.get_by_url(url))).await;

        let mut items = Vec::with_capacity(capped.len());
        let mut failure: Option<CatalogError> = None;
        for result in results {
            match result {
                Ok(item) => items.push(item),
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        match failure {
            None => {
                sections.insert(
                    relation.name.to_string(),
                    RelatedSection {
                        items,
                        total: relation.urls.len(),
                    },
                );
            }
            Some(e) => {
                warn!(
                    "omitting related {} for {}: {}",
                    relation.name,
                    resource.url(),
                    e
                );
            }
        }
    }

    sections
}

/// Resolve the single scalar homeworld relation, where the resource has one.
///
/// Returns `None` for categories without a homeworld, for a species with a
/// null homeworld, and on fetch failure; the caller renders "Unknown".
pub async fn resolve_homeworld<F: Fetch>(
    client: &CatalogClient<F>,
    resource: &Resource,
) -> Option<HomeworldRef> {
    let url = resource.homeworld_url()?;
    match client.get_by_url(url).await {
        Ok(planet) => Some(HomeworldRef {
            name: planet.display_name().to_string(),
            url: url.to_string(),
        }),
        Err(e) => {
            warn!("failed to load homeworld {}: {}", url, e);
            None
        }
    }
}

/// Load a detail page: the primary item, its detail fields, and its related
/// sections.
///
/// Only the primary fetch can fail; homeworld and relation resolution
/// degrade per the policies above.
pub async fn load_detail<F: Fetch>(
    client: &CatalogClient<F>,
    category: Category,
    id: &str,
) -> Result<ItemDetail, CatalogError> {
    let resource = client.get_by_id(category, id).await?;
    let homeworld = resolve_homeworld(client, &resource).await;
    let details = item_details(&resource, homeworld.as_ref());
    let related = resolve_related(client, &resource).await;
    Ok(ItemDetail {
        resource,
        details,
        homeworld,
        related,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{film_json, person_json, planet_json, FakeFetcher};
    use serde_json::json;

    fn client(fetcher: FakeFetcher) -> CatalogClient<FakeFetcher> {
        CatalogClient::with_fetcher("https://swapi.dev/api", fetcher)
    }

    fn film_url(id: u32) -> String {
        format!("https://swapi.dev/api/films/{}/", id)
    }

    /// A person whose `films` relation holds the given URLs and whose other
    /// relations are empty.
    fn person_with_films(film_urls: &[String]) -> Resource {
        let mut value = person_json("1", "Luke Skywalker");
        value["films"] = json!(film_urls);
        Resource::from_value(Category::People, value).unwrap()
    }

    #[tokio::test]
    async fn test_cap_limits_fetches_and_preserves_order() {
        let fetcher = FakeFetcher::new();
        let urls: Vec<String> = (1..=8).map(film_url).collect();
        for id in 1..=6 {
            fetcher.insert(&film_url(id), film_json(&id.to_string(), &format!("Episode {}", id)));
        }
        let person = person_with_films(&urls);
        let client = client(fetcher);

        let sections = resolve_related(&client, &person).await;

        // URLs 7 and 8 are never requested.
        assert_eq!(client.fetcher().request_count(), 6);
        assert!(!client.fetcher().requests().contains(&film_url(7)));

        let films = sections.get("films").expect("films relation present");
        assert_eq!(films.total, 8);
        assert!(films.has_more());
        let titles: Vec<&str> = films.items.iter().map(|r| r.display_name()).collect();
        assert_eq!(
            titles,
            ["Episode 1", "Episode 2", "Episode 3", "Episode 4", "Episode 5", "Episode 6"]
        );
    }

    #[tokio::test]
    async fn test_empty_relation_omitted_without_fetch() {
        let fetcher = FakeFetcher::new();
        let person = person_with_films(&[]);
        let client = client(fetcher);

        let sections = resolve_related(&client, &person).await;

        assert!(sections.is_empty());
        assert_eq!(client.fetcher().request_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_relation_omitted_others_kept() {
        let fetcher = FakeFetcher::new();
        // films: one good URL, one that 500s; species: one good URL.
        let mut value = person_json("1", "Luke Skywalker");
        value["films"] = json!([film_url(1), film_url(2)]);
        value["species"] = json!(["https://swapi.dev/api/species/1/"]);
        fetcher.insert(&film_url(1), film_json("1", "A New Hope"));
        fetcher.fail_url(&film_url(2));
        fetcher.insert(
            "https://swapi.dev/api/species/1/",
            json!({
                "name": "Human",
                "classification": "mammal",
                "designation": "sentient",
                "average_height": "180",
                "skin_colors": "caucasian, black, asian, hispanic",
                "hair_colors": "blonde, brown, black, red",
                "eye_colors": "brown, blue, green, hazel, grey, amber",
                "average_lifespan": "120",
                "homeworld": null,
                "language": "Galactic Basic",
                "people": [],
                "films": [],
                "created": "2014-12-10T13:52:11.567000Z",
                "edited": "2014-12-20T21:36:42.136000Z",
                "url": "https://swapi.dev/api/species/1/"
            }),
        );
        let person = Resource::from_value(Category::People, value).unwrap();
        let client = client(fetcher);

        let sections = resolve_related(&client, &person).await;

        assert!(!sections.contains_key("films"));
        let species = sections.get("species").expect("species relation present");
        assert_eq!(species.items[0].display_name(), "Human");
    }

    #[tokio::test]
    async fn test_homeworld_resolves_to_planet_name() {
        let fetcher = FakeFetcher::new();
        fetcher.insert(
            "https://swapi.dev/api/planets/1/",
            planet_json("1", "Tatooine", "200000"),
        );
        let person = person_with_films(&[]);
        let client = client(fetcher);

        let homeworld = resolve_homeworld(&client, &person).await.unwrap();
        assert_eq!(homeworld.name, "Tatooine");
        assert_eq!(homeworld.route(), "/category/planets/1");
    }

    #[tokio::test]
    async fn test_homeworld_failure_degrades_to_none() {
        let fetcher = FakeFetcher::new();
        fetcher.fail_url("https://swapi.dev/api/planets/1/");
        let person = person_with_films(&[]);
        let client = client(fetcher);

        assert!(resolve_homeworld(&client, &person).await.is_none());
    }

    #[tokio::test]
    async fn test_load_detail_primary_failure_surfaces() {
        let fetcher = FakeFetcher::new();
        let client = client(fetcher);
        let err = load_detail(&client, Category::People, "999").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_detail_merges_details_and_relations() {
        let fetcher = FakeFetcher::new();
        let mut person = person_json("1", "Luke Skywalker");
        person["films"] = json!([film_url(1)]);
        fetcher.insert("https://swapi.dev/api/people/1/", person);
        fetcher.insert(&film_url(1), film_json("1", "A New Hope"));
        fetcher.insert(
            "https://swapi.dev/api/planets/1/",
            planet_json("1", "Tatooine", "200000"),
        );
        let client = client(fetcher);

        let detail = load_detail(&client, Category::People, "1").await.unwrap();
        assert_eq!(detail.resource.display_name(), "Luke Skywalker");
        assert_eq!(detail.homeworld.as_ref().unwrap().name, "Tatooine");
        assert!(detail.related.contains_key("films"));
        assert!(detail
            .details
            .iter()
            .any(|field| field.label == "Homeworld" && field.value == "Tatooine"));
    }
}
