//! In-memory transport fake and record builders shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::Fetch;
use crate::errors::CatalogError;

/// A `Fetch` backed by a URL-to-JSON map. Records every requested URL so
/// tests can assert on request counts and ordering; URLs marked with
/// `fail_url` return HTTP 500, unseeded URLs return 404.
pub(crate) struct FakeFetcher {
    responses: Mutex<HashMap<String, Value>>,
    failing: Mutex<HashSet<String>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&self, url: &str, body: Value) {
        self.responses.lock().unwrap().insert(url.to_string(), body);
    }

    pub fn fail_url(&self, url: &str) {
        self.failing.lock().unwrap().insert(url.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetch for FakeFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, CatalogError> {
        self.requests.lock().unwrap().push(url.to_string());

        if self.failing.lock().unwrap().contains(url) {
            return Err(CatalogError::UpstreamStatus {
                status: 500,
                url: url.to_string(),
            });
        }
        match self.responses.lock().unwrap().get(url) {
            Some(body) => Ok(body.clone()),
            None => Err(CatalogError::NotFound {
                url: url.to_string(),
            }),
        }
    }
}

/// Page envelope around a result list.
pub(crate) fn page_json(count: u64, results: Vec<Value>) -> Value {
    json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    })
}

pub(crate) fn person_json(id: &str, name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": "https://swapi.dev/api/planets/1/",
        "films": [],
        "species": [],
        "vehicles": [],
        "starships": [],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": format!("https://swapi.dev/api/people/{}/", id),
    })
}

pub(crate) fn film_json(id: &str, title: &str) -> Value {
    json!({
        "title": title,
        "episode_id": 4,
        "opening_crawl": "It is a period of civil war.",
        "director": "George Lucas",
        "producer": "Gary Kurtz, Rick McCallum",
        "release_date": "1977-05-25",
        "characters": [],
        "planets": [],
        "starships": [],
        "vehicles": [],
        "species": [],
        "created": "2014-12-10T14:23:31.880000Z",
        "edited": "2014-12-20T19:49:45.256000Z",
        "url": format!("https://swapi.dev/api/films/{}/", id),
    })
}

pub(crate) fn planet_json(id: &str, name: &str, population: &str) -> Value {
    json!({
        "name": name,
        "rotation_period": "23",
        "orbital_period": "304",
        "diameter": "10465",
        "climate": "arid",
        "gravity": "1 standard",
        "terrain": "desert",
        "surface_water": "1",
        "population": population,
        "residents": [],
        "films": [],
        "created": "2014-12-09T13:50:49.641000Z",
        "edited": "2014-12-20T20:58:18.411000Z",
        "url": format!("https://swapi.dev/api/planets/{}/", id),
    })
}

pub(crate) fn starship_json(id: &str, name: &str) -> Value {
    json!({
        "name": name,
        "model": "T-65 X-wing",
        "manufacturer": "Incom Corporation",
        "cost_in_credits": "149999",
        "length": "12.5",
        "max_atmosphering_speed": "1050",
        "crew": "1",
        "passengers": "0",
        "cargo_capacity": "110",
        "consumables": "1 week",
        "hyperdrive_rating": "1.0",
        "MGLT": "100",
        "starship_class": "Starfighter",
        "pilots": [],
        "films": [],
        "created": "2014-12-12T11:19:05.340000Z",
        "edited": "2014-12-20T21:23:49.886000Z",
        "url": format!("https://swapi.dev/api/starships/{}/", id),
    })
}
