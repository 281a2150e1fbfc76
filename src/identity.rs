//! Route and display-identity derivation for domain entities.
//!
//! Entities opt in through [`Identifiable`]; route, URL, and display
//! identifier are free functions over that capability, computed on demand
//! from entity state. They are only meaningful once the entity has an id,
//! so each returns `None` for an unsaved entity.

use crate::inflect::{classify, pluralize};
use axum::http::Method;

/// Capability for entities that can name themselves.
pub trait Identifiable {
    /// Primary key, once the entity is saved.
    fn id(&self) -> Option<i64>;
    /// Stable type name, e.g. "Appointment" or "appointment_requests".
    fn type_name(&self) -> &str;
}

/// Routing descriptor handed to the [`UrlResolver`] collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub controller: String,
    pub action: String,
    pub id: i64,
    pub method: Method,
}

/// Target for URL resolution: a raw path, or a route descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTarget {
    Path(String),
    Route(RouteDescriptor),
}

/// External routing collaborator.
pub trait UrlResolver {
    fn resolve(&self, target: &UrlTarget, absolute: bool) -> String;
}

/// Singular, classified form of the entity's type name.
/// e.g. "Appointment"
pub fn classification<E: Identifiable + ?Sized>(entity: &E) -> String {
    classify(entity.type_name())
}

/// Base view route for the entity. `None` until the entity has an id.
pub fn route<E: Identifiable + ?Sized>(entity: &E) -> Option<RouteDescriptor> {
    let id = entity.id()?;
    Some(RouteDescriptor {
        controller: pluralize(&classification(entity)),
        action: "view".to_string(),
        id,
        method: Method::GET,
    })
}

/// e.g. "Appointment 2917"
pub fn long_identifier<E: Identifiable + ?Sized>(entity: &E) -> Option<String> {
    let id = entity.id()?;
    Some(format!("{} {}", classification(entity), id))
}

/// Absolute URL for the entity's view route.
pub fn url<E, R>(entity: &E, resolver: &R) -> Option<String>
where
    E: Identifiable + ?Sized,
    R: UrlResolver,
{
    let route = route(entity)?;
    Some(resolver.resolve(&UrlTarget::Route(route), true))
}
