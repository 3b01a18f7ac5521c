//! Display-ready transforms.
//!
//! Turns wire records into labeled fields and list cards. All sentinel
//! handling lives here: the literal `"unknown"` (and `"n/a"` for gender) is
//! an absent value and renders as "Unknown" instead of passing through
//! numeric formatting.

mod format;

pub use format::{format_date, format_quantity, format_with_unit, is_sentinel, release_year};

use crate::aggregate::HomeworldRef;
use crate::models::Resource;

/// One labeled value on a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

impl DetailField {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// A list/related-item card.
#[derive(Debug, Clone)]
pub struct Card {
    /// Locally-derived id (last URL path segment); used for routing.
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub details: Vec<DetailField>,
}

/// The labeled detail fields for a resource, branched exhaustively over the
/// six categories.
///
/// `homeworld` is the separately-resolved scalar relation; `None` renders
/// "Unknown" (or "Unknown/None" for a species that declares no homeworld at
/// all).
pub fn item_details(resource: &Resource, homeworld: Option<&HomeworldRef>) -> Vec<DetailField> {
    let homeworld_name = || {
        homeworld
            .map(|hw| hw.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    };

    match resource {
        Resource::Film(film) => vec![
            DetailField::new("Episode", format!("Episode {}", film.episode_id)),
            DetailField::new("Director", &film.director),
            DetailField::new("Producer", &film.producer),
            DetailField::new("Release Date", format_date(&film.release_date)),
        ],
        Resource::Person(person) => vec![
            DetailField::new("Height", format_with_unit(&person.height, "cm")),
            DetailField::new("Mass", format_with_unit(&person.mass, "kg")),
            DetailField::new("Hair Color", display_or_unknown(&person.hair_color)),
            DetailField::new("Skin Color", display_or_unknown(&person.skin_color)),
            DetailField::new("Eye Color", display_or_unknown(&person.eye_color)),
            DetailField::new("Birth Year", display_or_unknown(&person.birth_year)),
            DetailField::new("Gender", display_or_unknown(&person.gender)),
            DetailField::new("Homeworld", homeworld_name()),
        ],
        Resource::Planet(planet) => vec![
            DetailField::new(
                "Rotation Period",
                format_with_unit(&planet.rotation_period, "hours"),
            ),
            DetailField::new(
                "Orbital Period",
                format_with_unit(&planet.orbital_period, "days"),
            ),
            DetailField::new("Diameter", format_with_unit(&planet.diameter, "km")),
            DetailField::new("Climate", display_or_unknown(&planet.climate)),
            DetailField::new("Gravity", display_or_unknown(&planet.gravity)),
            DetailField::new("Terrain", display_or_unknown(&planet.terrain)),
            DetailField::new(
                "Surface Water",
                if is_sentinel(&planet.surface_water) {
                    "Unknown".to_string()
                } else {
                    format!("{}%", planet.surface_water)
                },
            ),
            DetailField::new("Population", format_quantity(&planet.population)),
        ],
        Resource::Species(species) => {
            let mut fields = vec![
                DetailField::new("Classification", display_or_unknown(&species.classification)),
                DetailField::new("Designation", display_or_unknown(&species.designation)),
                DetailField::new(
                    "Average Height",
                    format_with_unit(&species.average_height, "cm"),
                ),
                DetailField::new("Skin Colors", display_or_unknown(&species.skin_colors)),
                DetailField::new("Hair Colors", display_or_unknown(&species.hair_colors)),
                DetailField::new("Eye Colors", display_or_unknown(&species.eye_colors)),
                DetailField::new(
                    "Average Lifespan",
                    format_with_unit(&species.average_lifespan, "years"),
                ),
                DetailField::new("Language", display_or_unknown(&species.language)),
            ];
            fields.push(DetailField::new(
                "Homeworld",
                if species.homeworld.is_none() {
                    "Unknown/None".to_string()
                } else {
                    homeworld_name()
                },
            ));
            fields
        }
        Resource::Vehicle(vehicle) => vec![
            DetailField::new("Model", display_or_unknown(&vehicle.model)),
            DetailField::new("Manufacturer", display_or_unknown(&vehicle.manufacturer)),
            DetailField::new(
                "Cost",
                if is_sentinel(&vehicle.cost_in_credits) {
                    "Unknown".to_string()
                } else {
                    format!("{} credits", format_quantity(&vehicle.cost_in_credits))
                },
            ),
            DetailField::new("Length", format_with_unit(&vehicle.length, "m")),
            DetailField::new(
                "Max Speed",
                format_with_unit(&vehicle.max_atmosphering_speed, "km/h"),
            ),
            DetailField::new("Crew", display_or_unknown(&vehicle.crew)),
            DetailField::new("Passengers", display_or_unknown(&vehicle.passengers)),
            DetailField::new("Cargo Capacity", format_quantity(&vehicle.cargo_capacity)),
            DetailField::new("Consumables", display_or_unknown(&vehicle.consumables)),
            DetailField::new("Vehicle Class", display_or_unknown(&vehicle.vehicle_class)),
        ],
        Resource::Starship(starship) => vec![
            DetailField::new("Model", display_or_unknown(&starship.model)),
            DetailField::new("Manufacturer", display_or_unknown(&starship.manufacturer)),
            DetailField::new(
                "Cost",
                if is_sentinel(&starship.cost_in_credits) {
                    "Unknown".to_string()
                } else {
                    format!("{} credits", format_quantity(&starship.cost_in_credits))
                },
            ),
            DetailField::new("Length", format_with_unit(&starship.length, "m")),
            DetailField::new(
                "Max Speed",
                format_with_unit(&starship.max_atmosphering_speed, "km/h"),
            ),
            DetailField::new("Crew", display_or_unknown(&starship.crew)),
            DetailField::new("Passengers", display_or_unknown(&starship.passengers)),
            DetailField::new("Cargo Capacity", format_quantity(&starship.cargo_capacity)),
            DetailField::new("Consumables", display_or_unknown(&starship.consumables)),
            DetailField::new(
                "Hyperdrive Rating",
                display_or_unknown(&starship.hyperdrive_rating),
            ),
            DetailField::new("MGLT", display_or_unknown(&starship.mglt)),
            DetailField::new("Starship Class", display_or_unknown(&starship.starship_class)),
        ],
    }
}

/// The card transform for a resource, branched exhaustively over the six
/// categories.
pub fn card_for(resource: &Resource) -> Card {
    let id = crate::urls::id_from_url(resource.url()).to_string();
    match resource {
        Resource::Film(film) => Card {
            id,
            title: film.title.clone(),
            subtitle: Some(format!("Episode {}", film.episode_id)),
            details: vec![
                DetailField::new("Director", &film.director),
                DetailField::new("Release", release_year(&film.release_date)),
            ],
        },
        Resource::Person(person) => Card {
            id,
            title: person.name.clone(),
            subtitle: if is_sentinel(&person.gender) {
                None
            } else {
                Some(person.gender.clone())
            },
            details: vec![DetailField::new(
                "Birth Year",
                display_or_unknown(&person.birth_year),
            )],
        },
        Resource::Planet(planet) => Card {
            id,
            title: planet.name.clone(),
            subtitle: Some(format!("Population: {}", format_quantity(&planet.population))),
            details: vec![DetailField::new("Climate", display_or_unknown(&planet.climate))],
        },
        Resource::Species(species) => Card {
            id,
            title: species.name.clone(),
            subtitle: Some(species.classification.clone()),
            details: vec![DetailField::new(
                "Language",
                display_or_unknown(&species.language),
            )],
        },
        Resource::Vehicle(vehicle) => Card {
            id,
            title: vehicle.name.clone(),
            subtitle: Some(vehicle.manufacturer.clone()),
            details: vec![DetailField::new(
                "Class",
                display_or_unknown(&vehicle.vehicle_class),
            )],
        },
        Resource::Starship(starship) => Card {
            id,
            title: starship.name.clone(),
            subtitle: Some(starship.model.clone()),
            details: vec![DetailField::new(
                "Class",
                display_or_unknown(&starship.starship_class),
            )],
        },
    }
}

fn display_or_unknown(value: &str) -> String {
    if is_sentinel(value) {
        "Unknown".to_string()
    } else {
        value.to_string()
    }
}
