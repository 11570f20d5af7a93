//! The provider registry.
//!
//! Backends register themselves here; consumers ask for "whichever
//! permission or chat system is installed" without naming one.

use std::sync::Arc;

use parking_lot::RwLock;

use warden_chat::Chat;
use warden_perms::Permission;

use crate::config::ServicesConfig;
use crate::error::{Result, ServiceError};

/// Priority of a registered provider. Higher priorities win lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServicePriority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Highest,
}

/// What the registry needs to know about a provider.
trait Provider {
    fn provider_name(&self) -> &str;
    fn provider_enabled(&self) -> bool;
}

impl Provider for dyn Permission {
    fn provider_name(&self) -> &str {
        self.name()
    }

    fn provider_enabled(&self) -> bool {
        self.is_enabled()
    }
}

impl Provider for dyn Chat {
    fn provider_name(&self) -> &str {
        self.name()
    }

    fn provider_enabled(&self) -> bool {
        self.is_enabled()
    }
}

struct Registration<T: ?Sized> {
    name: String,
    provider: Arc<T>,
    priority: ServicePriority,
}

/// Registrations for one service, highest priority first. Equal
/// priorities keep registration order.
///
/// A slot never calls into provider code; names are captured before the
/// registry lock is taken, and lookups run on a snapshot.
struct Slot<T: ?Sized> {
    service: &'static str,
    entries: Vec<Registration<T>>,
}

impl<T: ?Sized> Slot<T> {
    fn new(service: &'static str) -> Self {
        Self {
            service,
            entries: Vec::new(),
        }
    }

    fn register(&mut self, name: String, provider: Arc<T>, priority: ServicePriority) {
        self.entries.retain(|r| r.name != name);

        let at = self
            .entries
            .iter()
            .position(|r| r.priority < priority)
            .unwrap_or(self.entries.len());

        tracing::info!(
            service = self.service,
            provider = %name,
            ?priority,
            "Provider registered"
        );
        self.entries.insert(
            at,
            Registration {
                name,
                provider,
                priority,
            },
        );
    }

    fn unregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|r| r.name != name);
        let removed = self.entries.len() != before;
        if removed {
            tracing::info!(service = self.service, provider = %name, "Provider unregistered");
        }
        removed
    }

    fn snapshot(&self) -> Vec<Arc<T>> {
        self.entries.iter().map(|r| r.provider.clone()).collect()
    }

    fn names(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.name.clone()).collect()
    }
}

/// Pick the preferred provider if it is enabled, else the first enabled one.
fn resolve<T: Provider + ?Sized>(
    service: &'static str,
    providers: Vec<Arc<T>>,
    preferred: Option<&str>,
) -> Result<Arc<T>> {
    if let Some(preferred) = preferred {
        let found = providers
            .iter()
            .find(|p| p.provider_name() == preferred);
        match found {
            Some(p) if p.provider_enabled() => return Ok(p.clone()),
            Some(_) => tracing::warn!(
                service,
                provider = %preferred,
                "Preferred provider is disabled"
            ),
            None => tracing::warn!(
                service,
                provider = %preferred,
                "Preferred provider is not registered"
            ),
        }
    }

    providers
        .into_iter()
        .find(|p| p.provider_enabled())
        .ok_or(ServiceError::NotRegistered(service))
}

struct ServicesInner {
    permissions: Slot<dyn Permission>,
    chats: Slot<dyn Chat>,
}

/// A thread-safe registry of permission and chat providers.
///
/// Registering a provider under a name that is already registered
/// replaces the earlier registration.
pub struct Services {
    config: ServicesConfig,
    inner: RwLock<ServicesInner>,
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}

impl Services {
    /// Create an empty registry with no preferences.
    pub fn new() -> Self {
        Self::with_config(ServicesConfig::default())
    }

    /// Create an empty registry.
    pub fn with_config(config: ServicesConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(ServicesInner {
                permissions: Slot::new("permission"),
                chats: Slot::new("chat"),
            }),
        }
    }

    pub fn config(&self) -> &ServicesConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Permission
    // ─────────────────────────────────────────────────────────────────────────

    pub fn register_permission(&self, provider: Arc<dyn Permission>, priority: ServicePriority) {
        let name = provider.name().to_owned();
        self.inner.write().permissions.register(name, provider, priority);
    }

    /// Remove the permission provider called `name`.
    pub fn unregister_permission(&self, name: &str) -> bool {
        self.inner.write().permissions.unregister(name)
    }

    /// The preferred permission provider if it is enabled, else the
    /// highest-priority enabled one.
    pub fn permission(&self) -> Result<Arc<dyn Permission>> {
        let providers = self.inner.read().permissions.snapshot();
        resolve(
            "permission",
            providers,
            self.config.preferred_permission.as_deref(),
        )
    }

    /// Names of registered permission providers, in lookup order.
    pub fn permission_providers(&self) -> Vec<String> {
        self.inner.read().permissions.names()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────────────────────

    pub fn register_chat(&self, provider: Arc<dyn Chat>, priority: ServicePriority) {
        let name = provider.name().to_owned();
        self.inner.write().chats.register(name, provider, priority);
    }

    /// Remove the chat provider called `name`.
    pub fn unregister_chat(&self, name: &str) -> bool {
        self.inner.write().chats.unregister(name)
    }

    /// The preferred chat provider if it is enabled, else the
    /// highest-priority enabled one.
    pub fn chat(&self) -> Result<Arc<dyn Chat>> {
        let providers = self.inner.read().chats.snapshot();
        resolve("chat", providers, self.config.preferred_chat.as_deref())
    }

    /// Names of registered chat providers, in lookup order.
    pub fn chat_providers(&self) -> Vec<String> {
        self.inner.read().chats.names()
    }
}
