//! Enabled address families and the static nameserver store.

use crate::record::{AddressFamily, NameserverRecord};

/// Which address families the enumerator will recognize.
///
/// Disabled families make the corresponding literals unrecognizable: in
/// file-backed enumeration such lines are skipped, in static enumeration a
/// configured server of a disabled family is an error.
///
/// # Example
///
/// ```
/// use resolv_scan::{AddressFamily, FamilySupport};
///
/// let families = FamilySupport::ipv4_only();
///
/// assert!(families.supports(AddressFamily::Ipv4));
/// assert!(!families.supports(AddressFamily::Ipv6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySupport {
    /// Recognize IPv4 literals.
    pub ipv4: bool,
    /// Recognize IPv6 literals.
    pub ipv6: bool,
}

impl FamilySupport {
    /// Both families enabled.
    #[must_use]
    pub const fn both() -> Self {
        Self {
            ipv4: true,
            ipv6: true,
        }
    }

    /// IPv4 only.
    #[must_use]
    pub const fn ipv4_only() -> Self {
        Self {
            ipv4: true,
            ipv6: false,
        }
    }

    /// IPv6 only.
    #[must_use]
    pub const fn ipv6_only() -> Self {
        Self {
            ipv4: false,
            ipv6: true,
        }
    }

    /// Returns `true` if `family` is enabled.
    #[must_use]
    pub const fn supports(self, family: AddressFamily) -> bool {
        match family {
            AddressFamily::Ipv4 => self.ipv4,
            AddressFamily::Ipv6 => self.ipv6,
        }
    }
}

impl Default for FamilySupport {
    fn default() -> Self {
        Self::both()
    }
}

/// Static-mode nameserver store: at most one preconfigured server.
///
/// Owned and mutated by the caller; enumeration only reads it. The store is
/// a plain value so tests and independent resolver instances can each hold
/// their own. Callers sharing one across threads must provide their own
/// synchronization.
///
/// # Example
///
/// ```
/// use resolv_scan::{NameserverRecord, ResolverConfiguration};
///
/// let mut config = ResolverConfiguration::new();
/// assert!(config.server().is_none());
///
/// config.set_server(NameserverRecord::ipv4("10.0.0.1".parse().unwrap()));
/// assert!(config.server().is_some());
///
/// config.clear_server();
/// assert!(config.server().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverConfiguration {
    server: Option<NameserverRecord>,
}

impl ResolverConfiguration {
    /// Creates a store with no server configured.
    #[must_use]
    pub const fn new() -> Self {
        Self { server: None }
    }

    /// Configures the server, replacing any previous one.
    pub fn set_server(&mut self, record: NameserverRecord) {
        tracing::debug!(
            family = %record.family(),
            addr = %record.ip(),
            "Configured static nameserver"
        );
        self.server = Some(record);
    }

    /// Removes the configured server, if any.
    pub fn clear_server(&mut self) {
        if self.server.take().is_some() {
            tracing::debug!("Cleared static nameserver");
        }
    }

    /// The configured server, if any.
    #[must_use]
    pub const fn server(&self) -> Option<NameserverRecord> {
        self.server
    }
}
