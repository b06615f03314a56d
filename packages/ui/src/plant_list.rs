use api::{Plant, PlantId};

/// The fetched plant collection plus the active name filter.
///
/// Filtering always runs against the full collection, so clearing the query
/// brings back every record without another request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlantList {
    all: Vec<Plant>,
    query: String,
}

impl PlantList {
    pub fn new(plants: Vec<Plant>) -> Self {
        Self {
            all: plants,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }

    /// Records whose name contains the query, ignoring case.
    pub fn visible(&self) -> Vec<&Plant> {
        let needle = self.query.trim().to_lowercase();
        self.all
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Drop a record the server confirmed deleted. Returns whether it was present.
    pub fn remove(&mut self, id: &PlantId) -> bool {
        let before = self.all.len();
        self.all.retain(|p| &p.id != id);
        before != self.all.len()
    }
}
