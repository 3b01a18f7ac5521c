//! Wire-shaped resource records.
//!
//! Field names mirror the upstream JSON exactly. Numeric-looking scalars are
//! kept as strings because the upstream substitutes the sentinel `"unknown"`
//! (or `"n/a"` for gender) where a value is missing; parsing happens in the
//! display layer, never during deserialization.

use serde::Deserialize;

/// A film. The only record keyed by `title` rather than `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

/// A character. `homeworld` is a single canonical Planet URL, resolved
/// individually rather than as a relation list.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Planet {
    pub name: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub climate: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub population: String,
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

/// A species. `homeworld` may be null upstream (e.g. droids).
#[derive(Debug, Clone, Deserialize)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: String,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan: String,
    pub homeworld: Option<String>,
    pub language: String,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub vehicle_class: String,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}

/// A starship: the vehicle shape plus hyperdrive fields, with
/// `starship_class` replacing `vehicle_class`.
#[derive(Debug, Clone, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub max_atmosphering_speed: String,
    pub crew: String,
    pub passengers: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: String,
    pub edited: String,
    pub url: String,
}
