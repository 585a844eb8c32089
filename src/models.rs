use serde::{Deserialize, Serialize};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn is_unset(value: &Option<u32>) -> bool {
    value.map_or(true, |v| v == 0)
}

/// Pagination options shared by every Socrata resource.
///
/// Zero is treated like unset and left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    #[serde(rename = "$offset", skip_serializing_if = "is_unset")]
    pub offset: Option<u32>,
    #[serde(rename = "$limit", skip_serializing_if = "is_unset")]
    pub limit: Option<u32>,
}

/// Filters for the registered vehicles dataset.
///
/// Unset and empty fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisteredVehiclesListOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(rename = "kenteken", skip_serializing_if = "is_blank")]
    pub license_plate: Option<String>,
    #[serde(rename = "merk", skip_serializing_if = "is_blank")]
    pub brand: Option<String>,
    #[serde(rename = "handelsbenaming", skip_serializing_if = "is_blank")]
    pub model: Option<String>,
    #[serde(rename = "voertuigsoort", skip_serializing_if = "is_blank")]
    pub vehicle_type: Option<String>,
}

impl RegisteredVehiclesListOptions {
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.list.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.list.limit = Some(limit);
        self
    }

    pub fn with_license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = Some(license_plate.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }
}

/// One row of the registered vehicles dataset (m9d7-ebf2)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredVehicle {
    #[serde(rename = "kenteken", default)]
    pub license_plate: String,
    #[serde(rename = "voertuigsoort", default)]
    pub vehicle_type: String,
    #[serde(rename = "merk", default)]
    pub brand: String,
    #[serde(rename = "handelsbenaming", default)]
    pub model: String,
}
