pub mod registered_vehicles;

use crate::{client::RdwClient, error::RdwResult};
use log::{debug, info};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;

// Re-export all APIs
pub use registered_vehicles::{RegisteredVehicles, RegisteredVehiclesApi};

/// A listable dataset endpoint
pub trait Resource {
    /// Name used in error context and logs
    const NAME: &'static str;
    /// Path relative to the portal host
    const PATH: &'static str;

    type Options: Serialize + Send + Sync;
    type Record: DeserializeOwned;
}

/// List API of a single dataset endpoint
pub struct ResourceApi<'a, R> {
    client: &'a RdwClient,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceApi<'a, R> {
    pub fn new(client: &'a RdwClient) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    /// List records matching the options with a single GET.
    ///
    /// Failures while building the request (such as a missing token) are
    /// returned as is; failures of the round trip are wrapped with the
    /// resource name. An empty list means nothing matched.
    pub async fn list(&self, options: &R::Options) -> RdwResult<Vec<R::Record>> {
        info!("Listing {}", R::NAME);
        let req = self
            .client
            .build_request(Method::GET, R::PATH, None::<&()>, Some(options))
            .await?;

        let records: Vec<R::Record> = self
            .client
            .execute(req)
            .await
            .map_err(|e| e.with_context(format!("error while requesting {}", R::NAME)))?;

        debug!("Received {} {}", records.len(), R::NAME);
        Ok(records)
    }
}
