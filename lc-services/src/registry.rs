//! Service registry for dependency injection and lifecycle management.
//!
//! The registry holds all services, initializes them in order, and handles
//! ordered shutdown. Callers that need a concrete service construct it over
//! the same shared infrastructure (config handle, record store, event bus).

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use lc_core::config::ConfigHandle;
use lc_core::error::{LcError, LcResult};
use lc_models::kv::KvStore;

use crate::event_bus::EventBus;
use crate::journal::JournalService;
use crate::service::{Service, ServiceState};
use crate::settings::SettingsService;
use crate::theme::ThemeService;

/// Central service registry that manages all application services.
///
/// Provides dependency injection by holding shared references to core
/// infrastructure (record store, config, event bus) and managing service
/// lifecycle in the correct order.
pub struct ServiceRegistry {
    /// Application configuration.
    pub config: ConfigHandle,
    /// Key-value record store.
    pub store: KvStore,
    /// Application-level event bus.
    pub event_bus: EventBus,
    /// Registered services in initialization order.
    services: Vec<(String, Arc<RwLock<Box<dyn Service>>>)>,
}

impl ServiceRegistry {
    /// Create a new ServiceRegistry with core infrastructure.
    pub fn new(config: ConfigHandle, store: KvStore) -> Self {
        Self {
            config,
            store,
            event_bus: EventBus::new(256),
            services: Vec::new(),
        }
    }

    /// Register a service. Services are initialized in registration order.
    pub fn register<S: Service + 'static>(&mut self, service: S) {
        let name = service.name().to_string();
        info!("registered service: {name}");
        self.services
            .push((name, Arc::new(RwLock::new(Box::new(service)))));
    }

    /// Register all default services in the correct dependency order.
    ///
    /// Initialization order:
    /// 1. Settings (config)
    /// 2. Journal (store, event_bus)
    /// 3. Theme (store, event_bus)
    pub fn register_all(&mut self) {
        let bus = self.event_bus.clone();

        // 1. Settings
        self.register(SettingsService::new(self.config.clone()));

        // 2. Journal
        self.register(JournalService::new(self.store.clone(), bus.clone()));

        // 3. Theme
        self.register(ThemeService::new(self.store.clone(), bus));

        info!("registered {} default services", self.services.len());
    }

    /// Initialize all registered services in order.
    pub async fn init_all(&self) -> LcResult<()> {
        info!("initializing {} services", self.services.len());

        for (name, service) in &self.services {
            let mut svc = service.write().await;
            if let Err(e) = svc.init() {
                error!("failed to initialize service {name}: {e}");
                return Err(LcError::ServiceInit(format!("{name}: {e}")));
            }
        }

        info!("all services initialized");
        Ok(())
    }

    /// Shut down all services in reverse order.
    pub async fn shutdown_all(&self) -> LcResult<()> {
        info!("shutting down services");

        for (name, service) in self.services.iter().rev() {
            let mut svc = service.write().await;
            if let Err(e) = svc.shutdown() {
                error!("error shutting down service {name}: {e}");
                // Continue shutting down other services
            }
        }

        info!("all services shut down");
        Ok(())
    }

    /// Get a reference to the event bus.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Get the health status of all services.
    pub async fn health_check(&self) -> Vec<(String, ServiceState, bool)> {
        let mut results = Vec::new();
        for (name, service) in &self.services {
            let svc = service.read().await;
            results.push((name.clone(), svc.state(), svc.is_healthy()));
        }
        results
    }

    /// Get the number of registered services.
    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_core::config::AppConfig;

    fn make_registry() -> ServiceRegistry {
        let config = ConfigHandle::new(AppConfig::default());
        ServiceRegistry::new(config, KvStore::in_memory())
    }

    #[tokio::test]
    async fn test_register_all() {
        let mut registry = make_registry();
        registry.register_all();
        assert_eq!(registry.service_count(), 3);
    }

    #[tokio::test]
    async fn test_init_and_shutdown() {
        let mut registry = make_registry();
        registry.register_all();

        registry.init_all().await.unwrap();

        let health = registry.health_check().await;
        for (name, state, healthy) in &health {
            assert!(healthy, "service {name} is not healthy (state: {state})");
        }

        registry.shutdown_all().await.unwrap();
        let health = registry.health_check().await;
        for (_, state, _) in &health {
            assert_eq!(*state, ServiceState::Stopped);
        }
    }
}
