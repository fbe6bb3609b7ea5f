//! Visitor-driven enumeration over the configured nameservers.

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use crate::config::{FamilySupport, ResolverConfiguration};
use crate::error::{Result, ScanError};
use crate::file_source::ConfigFileSource;
use crate::parse;
use crate::record::NameserverRecord;

/// Default resolver configuration file path.
const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Enumerates configured nameservers and drives a visitor over them.
///
/// An enumerator reads from exactly one source: a resolver configuration
/// file ([`resolv_conf`](Self::resolv_conf)) or a caller-owned static store
/// ([`static_config`](Self::static_config)). Each [`for_each`](Self::for_each)
/// call is one synchronous, single-pass walk in the calling thread.
///
/// The visitor returns [`ControlFlow`]: `Continue(())` keeps the walk going,
/// `Break(code)` stops it immediately and surfaces `code` through
/// [`ScanError::Aborted`]. Any context the visitor needs lives in its
/// captured environment.
///
/// # Example
///
/// ```no_run
/// use std::ops::ControlFlow;
/// use resolv_scan::NameserverEnumerator;
///
/// let enumerator = NameserverEnumerator::resolv_conf();
/// enumerator.for_each(|record| {
///     println!("{}", record.socket_addr());
///     ControlFlow::Continue(())
/// })?;
/// # Ok::<(), resolv_scan::ScanError>(())
/// ```
#[derive(Debug)]
pub struct NameserverEnumerator<'c> {
    source: Source<'c>,
    families: FamilySupport,
}

#[derive(Debug)]
enum Source<'c> {
    ResolvConf(PathBuf),
    Static(&'c ResolverConfiguration),
}

impl NameserverEnumerator<'static> {
    /// File-backed enumeration over the default `/etc/resolv.conf`.
    #[must_use]
    pub fn resolv_conf() -> Self {
        Self::resolv_conf_at(DEFAULT_RESOLV_CONF)
    }
}

impl<'c> NameserverEnumerator<'c> {
    /// File-backed enumeration over a custom path (useful for testing).
    #[must_use]
    pub fn resolv_conf_at(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::ResolvConf(path.into()),
            families: FamilySupport::both(),
        }
    }

    /// Static enumeration over a caller-owned configuration.
    #[must_use]
    pub const fn static_config(config: &'c ResolverConfiguration) -> Self {
        Self {
            source: Source::Static(config),
            families: FamilySupport::both(),
        }
    }

    /// Overrides the enabled address families.
    #[must_use]
    pub const fn with_families(mut self, families: FamilySupport) -> Self {
        self.families = families;
        self
    }

    /// Walks every valid nameserver entry, invoking `visit` for each.
    ///
    /// File-backed: lines that are not `nameserver` directives, and
    /// directive lines whose address token is unrecognized under the
    /// enabled families, are skipped without error. The file handle is
    /// released on every exit path.
    ///
    /// Static: the visitor runs at most once, and its result is returned
    /// directly.
    ///
    /// # Errors
    ///
    /// - [`ScanError::Io`] if the configuration file cannot be opened or
    ///   read; the visitor is never invoked on an open failure.
    /// - [`ScanError::Aborted`] carrying the visitor's break code verbatim;
    ///   no further entries are visited.
    /// - [`ScanError::UnsupportedFamily`] in static mode when the
    ///   configured server's family is not enabled; the visitor is not
    ///   invoked.
    pub fn for_each<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&NameserverRecord) -> ControlFlow<i32>,
    {
        match &self.source {
            Source::ResolvConf(path) => self.walk_file(path, &mut visit),
            Source::Static(config) => self.walk_static(config, &mut visit),
        }
    }

    /// Collects every valid nameserver entry into a vec.
    ///
    /// # Errors
    ///
    /// Same as [`for_each`](Self::for_each), except the collecting visitor
    /// never breaks.
    pub fn servers(&self) -> Result<Vec<NameserverRecord>> {
        let mut servers = Vec::new();
        self.for_each(|record| {
            servers.push(*record);
            ControlFlow::Continue(())
        })?;
        Ok(servers)
    }

    fn walk_file(
        &self,
        path: &Path,
        visit: &mut dyn FnMut(&NameserverRecord) -> ControlFlow<i32>,
    ) -> Result<()> {
        let mut lines = match ConfigFileSource::open(path) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "Failed to open resolver configuration"
                );
                return Err(e.into());
            }
        };

        while let Some(line) = lines.next_line()? {
            let Some(token) = parse::nameserver_token(line) else {
                continue;
            };
            match parse::parse_address(token, self.families) {
                Some(record) => {
                    if let ControlFlow::Break(code) = visit(&record) {
                        tracing::debug!(code, "Nameserver enumeration aborted by visitor");
                        return Err(ScanError::Aborted(code));
                    }
                }
                None => {
                    tracing::debug!(token, "Unrecognized nameserver address, skipping");
                }
            }
        }
        Ok(())
    }

    fn walk_static(
        &self,
        config: &ResolverConfiguration,
        visit: &mut dyn FnMut(&NameserverRecord) -> ControlFlow<i32>,
    ) -> Result<()> {
        let Some(record) = config.server() else {
            return Ok(());
        };

        if !self.families.supports(record.family()) {
            tracing::debug!(
                family = %record.family(),
                "Configured nameserver family is not enabled"
            );
            return Err(ScanError::UnsupportedFamily {
                family: record.family(),
            });
        }

        match visit(&record) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(code) => Err(ScanError::Aborted(code)),
        }
    }
}
