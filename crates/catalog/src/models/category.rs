use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// The six resource categories exposed by the catalog.
///
/// The set is closed: every list page, detail page, and search request is
/// addressed to exactly one of these, and matching on `Category` is
/// exhaustive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Films,
    People,
    Planets,
    Species,
    Vehicles,
    Starships,
}

impl Category {
    /// All categories, in the order the catalog presents them.
    pub const ALL: [Category; 6] = [
        Category::Films,
        Category::People,
        Category::Planets,
        Category::Species,
        Category::Vehicles,
        Category::Starships,
    ];

    /// The path segment used in catalog URLs and local routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Films => "films",
            Category::People => "people",
            Category::Planets => "planets",
            Category::Species => "species",
            Category::Vehicles => "vehicles",
            Category::Starships => "starships",
        }
    }

    /// Section heading for the category's list page.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Films => "Films",
            Category::People => "Characters",
            Category::Planets => "Planets",
            Category::Species => "Species",
            Category::Vehicles => "Vehicles",
            Category::Starships => "Starships",
        }
    }

    /// Singular form of the title, used on detail pages.
    pub fn singular_title(&self) -> &'static str {
        match self {
            Category::Films => "Film",
            Category::People => "Character",
            Category::Planets => "Planet",
            Category::Species => "Species",
            Category::Vehicles => "Vehicle",
            Category::Starships => "Starship",
        }
    }

    /// Short blurb shown under the list page heading.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Films => "All films from the original trilogy to the latest releases.",
            Category::People => "Heroes, villains, and everyone in between.",
            Category::Planets => "Diverse worlds that make up the galaxy.",
            Category::Species => "Various species that inhabit the galaxy.",
            Category::Vehicles => "Ground and air vehicles used for transport and combat.",
            Category::Starships => "Spacecraft used for interplanetary and interstellar travel.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "films" => Ok(Category::Films),
            "people" => Ok(Category::People),
            "planets" => Ok(Category::Planets),
            "species" => Ok(Category::Species),
            "vehicles" => Ok(Category::Vehicles),
            "starships" => Ok(Category::Starships),
            other => Err(CatalogError::UnknownCategory {
                name: other.to_string(),
            }),
        }
    }
}
