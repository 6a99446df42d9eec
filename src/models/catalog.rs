use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::suggestion::ActivitySuggestion;

/// budget tier -> suggestions
pub type BudgetTable = HashMap<String, Vec<ActivitySuggestion>>;
/// time of day -> budget tier -> suggestions
pub type TimeTable = HashMap<String, BudgetTable>;

/// Choices offered to the front-end, in display order.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    pub locations: Vec<String>,
    pub times: Vec<String>,
    pub budgets: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub options: CatalogOptions,
    pub suggestions: HashMap<String, TimeTable>,
}
