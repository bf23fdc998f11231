use std::sync::Arc;

use k8s_openapi::api::networking::v1::Ingress;

use crate::error::Result;

use super::{Create, Delete, Retrieve, Update};

/// Maps a domain route to and from the ingress that materializes it.
pub trait IngressConverter: Send + Sync {
    type Route: Send + Sync;

    fn route_to_ingress(&self, route: &Self::Route) -> Ingress;
    fn ingress_to_route(&self, ingress: &Ingress) -> Self::Route;
    /// Ingresses using features the route model cannot express are hidden from listings.
    fn is_ingress_supported(&self, ingress: &Ingress) -> bool;
}

/// Routes stored as ingresses in the managed namespace.
pub struct RouteService<B, C> {
    backend: Arc<B>,
    converter: C,
}

impl<B, C> RouteService<B, C>
where
    B: Retrieve + Create + Update + Delete,
    C: IngressConverter,
{
    pub fn new(backend: Arc<B>, converter: C) -> Self {
        Self { backend, converter }
    }

    /// All supported routes, or only those labeled with `domain` when it is non-empty.
    pub async fn list(&self, domain: Option<&str>) -> Result<Vec<C::Route>> {
        let ingresses = match domain.filter(|d| !d.is_empty()) {
            Some(domain) => self.backend.list_ingress_by_domain(domain).await?,
            None => self.backend.list_ingress().await?,
        };
        Ok(ingresses.iter().filter(|ingress| self.converter.is_ingress_supported(ingress)).map(|ingress| self.converter.ingress_to_route(ingress)).collect())
    }

    pub async fn query(&self, name: &str) -> Result<Option<C::Route>> {
        Ok(self.backend.read_ingress(name).await?.map(|ingress| self.converter.ingress_to_route(&ingress)))
    }

    /// Fails with [`crate::Error::Conflict`] if a route with the same name exists.
    pub async fn add(&self, route: &C::Route) -> Result<C::Route> {
        let ingress = self.backend.create_ingress(self.converter.route_to_ingress(route)).await?;
        Ok(self.converter.ingress_to_route(&ingress))
    }

    /// Fails with [`crate::Error::Conflict`] if the stored ingress changed since it was read.
    pub async fn update(&self, route: &C::Route) -> Result<C::Route> {
        let ingress = self.backend.replace_ingress(self.converter.route_to_ingress(route)).await?;
        Ok(self.converter.ingress_to_route(&ingress))
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        self.backend.delete_ingress(name).await
    }
}
