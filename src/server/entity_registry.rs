//! Entity registry collecting the route sets of every resource

use axum::Router;
use std::collections::HashMap;

/// Trait that describes how to build routes for an entity
///
/// Each resource (company, industry, invoice) implements this trait to
/// provide its routes, already bound to its manager state.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "company")
    fn entity_type(&self) -> &str;

    /// The plural form, also the root path segment (e.g., "companies")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    fn build_routes(&self) -> Router;
}

/// Registry for all entities in the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: HashMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is the key; registering it again replaces the
    /// previous descriptor.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge the routes of every registered entity into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Root paths of the registered entities, sorted
    pub fn resource_paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self
            .descriptors
            .values()
            .map(|d| format!("/{}", d.plural()))
            .collect();
        paths.sort();
        paths
    }
}
