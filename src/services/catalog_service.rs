use crate::models::{
    catalog::{CatalogDefinition, CatalogOptions, TimeTable},
    suggestion::{ActivitySuggestion, SelectionCriteria},
};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

const FREE_BUDGET: &str = "Free";
const FREE_COST: &str = "Free";
const VARIABLE_COST: &str = "Varies";

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    IncompleteEntry(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Failed to read catalog: {}", err),
            CatalogError::Parse(err) => write!(f, "Failed to parse catalog: {}", err),
            CatalogError::IncompleteEntry(path) => {
                write!(f, "Catalog entry has an empty field: {}", path)
            }
        }
    }
}

impl Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// Read-only suggestion table, built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct SuggestionCatalog {
    options: CatalogOptions,
    suggestions: HashMap<String, TimeTable>,
}

impl SuggestionCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }

    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        for (location, times) in &definition.suggestions {
            for (time, budgets) in times {
                for (budget, entries) in budgets {
                    if entries.is_empty() {
                        return Err(CatalogError::IncompleteEntry(format!(
                            "{} / {} / {} has no suggestions",
                            location, time, budget
                        )));
                    }
                    if let Some(index) = entries.iter().position(|entry| !entry.is_complete()) {
                        return Err(CatalogError::IncompleteEntry(format!(
                            "{} / {} / {} #{}",
                            location, time, budget, index
                        )));
                    }
                }
            }
        }

        Ok(Self {
            options: definition.options,
            suggestions: definition.suggestions,
        })
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Number of location/time/budget combinations with curated entries.
    pub fn combination_count(&self) -> usize {
        self.suggestions
            .values()
            .flat_map(|times| times.values())
            .map(|budgets| budgets.len())
            .sum()
    }

    /// Every location/time/budget combination with curated entries.
    pub fn combinations(&self) -> impl Iterator<Item = SelectionCriteria> + '_ {
        self.suggestions.iter().flat_map(|(location, times)| {
            times.iter().flat_map(move |(time, budgets)| {
                budgets
                    .keys()
                    .map(move |budget| SelectionCriteria::new(location, time, budget))
            })
        })
    }

    /// Exact three-level lookup. A miss at any level yields the default list.
    pub fn lookup(&self, criteria: &SelectionCriteria) -> Vec<ActivitySuggestion> {
        self.suggestions
            .get(&criteria.location)
            .and_then(|times| times.get(&criteria.time_of_day))
            .and_then(|budgets| budgets.get(&criteria.budget_tier))
            .cloned()
            .unwrap_or_else(|| default_suggestions(&criteria.budget_tier))
    }
}

/// Generic "explore your area" list used for uncovered combinations.
pub fn default_suggestions(budget_tier: &str) -> Vec<ActivitySuggestion> {
    let cost = if budget_tier == FREE_BUDGET {
        FREE_COST
    } else {
        VARIABLE_COST
    };

    vec![
        ActivitySuggestion::new(
            "Explore a Local Park",
            "Find the nearest park or trail and spend some time outdoors. Bring a snack and look for a spot you have not visited before.",
            cost,
            "Your nearest park or green space",
        ),
        ActivitySuggestion::new(
            "Visit a Neighborhood Museum or Gallery",
            "Small museums and galleries often have rotating exhibits and quiet rooms worth an hour of your time.",
            cost,
            "Local museums and galleries",
        ),
        ActivitySuggestion::new(
            "Wander a Historic Main Street",
            "Pick a downtown or historic district and walk it end to end, ducking into independent shops and cafes along the way.",
            cost,
            "Historic downtown districts",
        ),
        ActivitySuggestion::new(
            "Check the Community Events Calendar",
            "Libraries, community centers, and town websites list markets, concerts, and classes happening today.",
            cost,
            "Libraries and community centers",
        ),
    ]
}
