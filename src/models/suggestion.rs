use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ActivitySuggestion {
    pub name: String,
    pub description: String,
    pub estimated_cost: String,
    pub location_hint: String,
}

impl ActivitySuggestion {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        estimated_cost: impl Into<String>,
        location_hint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            estimated_cost: estimated_cost.into(),
            location_hint: location_hint.into(),
        }
    }

    /// True when every field carries visible text.
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.description,
            &self.estimated_cost,
            &self.location_hint,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub location: String,
    pub time_of_day: String,
    pub budget_tier: String,
}

impl SelectionCriteria {
    pub fn new(
        location: impl Into<String>,
        time_of_day: impl Into<String>,
        budget_tier: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            time_of_day: time_of_day.into(),
            budget_tier: budget_tier.into(),
        }
    }
}

/*
    Body of POST /api/suggestions. Field names follow the front-end's payload.
*/
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SuggestionRequest {
    pub location: Option<String>,
    pub time: Option<String>,
    pub budget: Option<String>,
}

impl SuggestionRequest {
    /// Returns criteria only when all three fields are present and non-blank.
    pub fn into_criteria(self) -> Option<SelectionCriteria> {
        let location = non_blank(self.location)?;
        let time = non_blank(self.time)?;
        let budget = non_blank(self.budget)?;
        Some(SelectionCriteria::new(location, time, budget))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
