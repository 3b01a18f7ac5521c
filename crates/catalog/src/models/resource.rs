use serde_json::Value;

use super::{Category, Film, Person, Planet, Species, Starship, Vehicle};
use crate::errors::CatalogError;

/// One relation field on a resource: the API-side key and the ordered list
/// of canonical URLs it points at. The referenced resources are not
/// guaranteed to exist or be reachable.
#[derive(Debug, Clone, Copy)]
pub struct RelationList<'a> {
    pub name: &'static str,
    pub urls: &'a [String],
}

/// A category-tagged catalog resource.
///
/// The wrapper is what crosses module boundaries: matching on it is
/// exhaustive over the six categories, so per-category handling (detail
/// fields, cards, relation declarations) cannot silently miss a variant.
#[derive(Debug, Clone)]
pub enum Resource {
    Film(Film),
    Person(Person),
    Planet(Planet),
    Species(Species),
    Vehicle(Vehicle),
    Starship(Starship),
}

impl Resource {
    /// Deserialize a raw JSON item into the record shape for `category`.
    pub fn from_value(category: Category, value: Value) -> Result<Resource, CatalogError> {
        let parse_err = |e: serde_json::Error| CatalogError::InvalidResponse {
            message: format!("malformed {} record: {}", category, e),
        };
        Ok(match category {
            Category::Films => Resource::Film(serde_json::from_value(value).map_err(parse_err)?),
            Category::People => Resource::Person(serde_json::from_value(value).map_err(parse_err)?),
            Category::Planets => {
                Resource::Planet(serde_json::from_value(value).map_err(parse_err)?)
            }
            Category::Species => {
                Resource::Species(serde_json::from_value(value).map_err(parse_err)?)
            }
            Category::Vehicles => {
                Resource::Vehicle(serde_json::from_value(value).map_err(parse_err)?)
            }
            Category::Starships => {
                Resource::Starship(serde_json::from_value(value).map_err(parse_err)?)
            }
        })
    }

    pub fn category(&self) -> Category {
        match self {
            Resource::Film(_) => Category::Films,
            Resource::Person(_) => Category::People,
            Resource::Planet(_) => Category::Planets,
            Resource::Species(_) => Category::Species,
            Resource::Vehicle(_) => Category::Vehicles,
            Resource::Starship(_) => Category::Starships,
        }
    }

    /// Display name: films carry a `title`, everything else a `name`.
    pub fn display_name(&self) -> &str {
        match self {
            Resource::Film(film) => &film.title,
            Resource::Person(person) => &person.name,
            Resource::Planet(planet) => &planet.name,
            Resource::Species(species) => &species.name,
            Resource::Vehicle(vehicle) => &vehicle.name,
            Resource::Starship(starship) => &starship.name,
        }
    }

    /// The canonical URL: sole identity and re-fetch address.
    pub fn url(&self) -> &str {
        match self {
            Resource::Film(film) => &film.url,
            Resource::Person(person) => &person.url,
            Resource::Planet(planet) => &planet.url,
            Resource::Species(species) => &species.url,
            Resource::Vehicle(vehicle) => &vehicle.url,
            Resource::Starship(starship) => &starship.url,
        }
    }

    pub fn created(&self) -> &str {
        match self {
            Resource::Film(film) => &film.created,
            Resource::Person(person) => &person.created,
            Resource::Planet(planet) => &planet.created,
            Resource::Species(species) => &species.created,
            Resource::Vehicle(vehicle) => &vehicle.created,
            Resource::Starship(starship) => &starship.created,
        }
    }

    pub fn edited(&self) -> &str {
        match self {
            Resource::Film(film) => &film.edited,
            Resource::Person(person) => &person.edited,
            Resource::Planet(planet) => &planet.edited,
            Resource::Species(species) => &species.edited,
            Resource::Vehicle(vehicle) => &vehicle.edited,
            Resource::Starship(starship) => &starship.edited,
        }
    }

    /// Relation fields in the order the catalog declares them.
    ///
    /// Single scalar relations (a person's or species' homeworld) are not
    /// listed here; see [`homeworld_url`](Self::homeworld_url).
    pub fn relations(&self) -> Vec<RelationList<'_>> {
        fn rel<'a>(name: &'static str, urls: &'a [String]) -> RelationList<'a> {
            RelationList { name, urls }
        }
        match self {
            Resource::Film(film) => vec![
                rel("characters", &film.characters),
                rel("planets", &film.planets),
                rel("species", &film.species),
                rel("vehicles", &film.vehicles),
                rel("starships", &film.starships),
            ],
            Resource::Person(person) => vec![
                rel("films", &person.films),
                rel("species", &person.species),
                rel("vehicles", &person.vehicles),
                rel("starships", &person.starships),
            ],
            Resource::Planet(planet) => vec![
                rel("residents", &planet.residents),
                rel("films", &planet.films),
            ],
            Resource::Species(species) => vec![
                rel("people", &species.people),
                rel("films", &species.films),
            ],
            Resource::Vehicle(vehicle) => vec![
                rel("pilots", &vehicle.pilots),
                rel("films", &vehicle.films),
            ],
            Resource::Starship(starship) => vec![
                rel("pilots", &starship.pilots),
                rel("films", &starship.films),
            ],
        }
    }

    /// The single scalar homeworld relation, where the category has one.
    /// `None` both for categories without it and for a species with a null
    /// homeworld.
    pub fn homeworld_url(&self) -> Option<&str> {
        match self {
            Resource::Person(person) => Some(person.homeworld.as_str()),
            Resource::Species(species) => species.homeworld.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_person() -> Value {
        json!({
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": [],
            "vehicles": ["https://swapi.dev/api/vehicles/14/"],
            "starships": ["https://swapi.dev/api/starships/12/"],
            "created": "2014-12-09T13:50:51.644000Z",
            "edited": "2014-12-20T21:17:56.891000Z",
            "url": "https://swapi.dev/api/people/1/"
        })
    }

    #[test]
    fn test_person_from_value() {
        let resource = Resource::from_value(Category::People, sample_person()).unwrap();
        assert_eq!(resource.category(), Category::People);
        assert_eq!(resource.display_name(), "Luke Skywalker");
        assert_eq!(resource.url(), "https://swapi.dev/api/people/1/");
        assert_eq!(
            resource.homeworld_url(),
            Some("https://swapi.dev/api/planets/1/")
        );
    }

    #[test]
    fn test_person_relations_declared_order() {
        let resource = Resource::from_value(Category::People, sample_person()).unwrap();
        let names: Vec<&str> = resource.relations().iter().map(|r| r.name).collect();
        assert_eq!(names, ["films", "species", "vehicles", "starships"]);
    }

    #[test]
    fn test_wrong_shape_is_invalid_response() {
        let err = Resource::from_value(Category::Films, sample_person()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidResponse { .. }));
    }

    #[test]
    fn test_species_null_homeworld() {
        let droid = json!({
            "name": "Droid",
            "classification": "artificial",
            "designation": "sentient",
            "average_height": "n/a",
            "skin_colors": "n/a",
            "hair_colors": "n/a",
            "eye_colors": "n/a",
            "average_lifespan": "indefinite",
            "homeworld": null,
            "language": "n/a",
            "people": [],
            "films": [],
            "created": "2014-12-10T15:16:16.259000Z",
            "edited": "2014-12-20T21:36:42.139000Z",
            "url": "https://swapi.dev/api/species/2/"
        });
        let resource = Resource::from_value(Category::Species, droid).unwrap();
        assert_eq!(resource.homeworld_url(), None);
    }
}
