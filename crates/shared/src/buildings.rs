use std::collections::HashSet;

use crate::models::Building;

const CAMPUS_BUILDINGS_JSON: &str = include_str!("../data/buildings.json");

/// Ordered, read-only list of campus buildings.
///
/// Names are non-empty and unique. The list never changes after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildingDirectory {
    buildings: Vec<Building>,
}

impl BuildingDirectory {
    /// Parse and validate a JSON array of `{ "name", "drink", "food" }` entries.
    pub fn from_json(data: &str) -> Result<Self, String> {
        let buildings: Vec<Building> = serde_json::from_str(data)
            .map_err(|e| format!("Failed to parse building list: {}", e))?;
        Self::new(buildings)
    }

    pub fn new(buildings: Vec<Building>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for (i, b) in buildings.iter().enumerate() {
            if b.name.trim().is_empty() {
                return Err(format!("Building #{} has an empty name", i));
            }
            if !seen.insert(b.name.as_str()) {
                return Err(format!("Duplicate building name: {}", b.name));
            }
        }

        tracing::debug!(buildings = buildings.len(), "Loaded building directory");

        Ok(BuildingDirectory { buildings })
    }

    /// The embedded campus dataset.
    pub fn campus() -> Result<Self, String> {
        Self::from_json(CAMPUS_BUILDINGS_JSON)
    }

    pub fn all(&self) -> &[Building] {
        &self.buildings
    }

    #[cfg(test)]
    pub fn find_by_name(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_dataset_loads() {
        let dir = BuildingDirectory::campus().unwrap();
        assert_eq!(dir.all().len(), 18);
        assert_eq!(dir.all()[0].name, "Folsom Library");
        assert_eq!(dir.all()[17].name, "West Hall");
    }

    #[test]
    fn test_campus_dataset_flags() {
        let dir = BuildingDirectory::campus().unwrap();
        let quad = dir.find_by_name("Quadrangle Complex").unwrap();
        assert!(quad.has_drink_vending);
        assert!(!quad.has_food_vending);
        assert!(dir.all().iter().all(|b| b.has_drink_vending));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = BuildingDirectory::new(vec![
            Building::new("Sharp Hall", true, true),
            Building::new("Sharp Hall", false, false),
        ])
        .unwrap_err();
        assert!(err.contains("Duplicate"));
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = BuildingDirectory::new(vec![Building::new("  ", true, true)]).unwrap_err();
        assert!(err.contains("empty name"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = BuildingDirectory::from_json(r#"[{"name": "X"}]"#).unwrap_err();
        assert!(err.starts_with("Failed to parse"));
    }

    #[test]
    fn test_find_by_name_missing() {
        let dir = BuildingDirectory::campus().unwrap();
        assert!(dir.find_by_name("Nowhere Hall").is_none());
    }
}
