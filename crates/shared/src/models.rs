use serde::{Deserialize, Serialize};

/// A campus building and the vending amenities it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    #[serde(rename = "drink")]
    pub has_drink_vending: bool,
    #[serde(rename = "food")]
    pub has_food_vending: bool,
}

impl Building {
    pub fn new(name: &str, has_drink_vending: bool, has_food_vending: bool) -> Self {
        Building {
            name: name.to_string(),
            has_drink_vending,
            has_food_vending,
        }
    }

    /// Short amenity summary for the map key ("Drinks & Food", "Drinks", ...).
    pub fn amenities_label(&self) -> &'static str {
        match (self.has_drink_vending, self.has_food_vending) {
            (true, true) => "Drinks & Food",
            (true, false) => "Drinks",
            (false, true) => "Food",
            (false, false) => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    VendingMachine,
    Location,
    AppFunctionality,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        IssueType::VendingMachine,
        IssueType::Location,
        IssueType::AppFunctionality,
        IssueType::Other,
    ];

    /// Value used in the form's `<select>` and in the serialized report.
    pub fn value(&self) -> &'static str {
        match self {
            IssueType::VendingMachine => "vending_machine",
            IssueType::Location => "location",
            IssueType::AppFunctionality => "app_functionality",
            IssueType::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::VendingMachine => write!(f, "Vending Machine Issue"),
            IssueType::Location => write!(f, "Location Issue"),
            IssueType::AppFunctionality => write!(f, "App Functionality Issue"),
            IssueType::Other => write!(f, "Other"),
        }
    }
}

/// A validated issue report, ready to hand to a reporting backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    pub title: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}
