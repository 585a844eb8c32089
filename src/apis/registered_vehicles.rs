use super::{Resource, ResourceApi};
use crate::models::{RegisteredVehicle, RegisteredVehiclesListOptions};

/// Open data dataset "Gekentekende voertuigen"
pub struct RegisteredVehicles;

impl Resource for RegisteredVehicles {
    const NAME: &'static str = "registered vehicles";
    const PATH: &'static str = "/resource/m9d7-ebf2.json";

    type Options = RegisteredVehiclesListOptions;
    type Record = RegisteredVehicle;
}

/// Registered vehicles API operations
pub type RegisteredVehiclesApi<'a> = ResourceApi<'a, RegisteredVehicles>;
