//! # resolv-scan
//!
//! Enumerate configured DNS nameservers from `resolv.conf` or a static
//! in-memory configuration.
//!
//! Network stacks keep their resolver's server list in one of two places:
//! a `resolv.conf`-style text file, or a single preconfigured address held
//! by the stack itself. This crate walks either source and hands every
//! valid entry to a caller-supplied visitor, which can stop the walk at any
//! point.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::ops::ControlFlow;
//! use resolv_scan::NameserverEnumerator;
//!
//! let enumerator = NameserverEnumerator::resolv_conf();
//!
//! // Visit each configured nameserver.
//! enumerator.for_each(|record| {
//!     println!("{} ({})", record.socket_addr(), record.family());
//!     ControlFlow::Continue(())
//! })?;
//!
//! // Or just collect them.
//! let servers = enumerator.servers()?;
//! # Ok::<(), resolv_scan::ScanError>(())
//! ```
//!
//! ## Static configuration
//!
//! Embedded and test setups often have no configuration file at all, just
//! one server address configured through the stack's own API:
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use resolv_scan::{NameserverEnumerator, NameserverRecord, ResolverConfiguration};
//!
//! let mut config = ResolverConfiguration::new();
//! config.set_server(NameserverRecord::ipv4("10.0.0.1".parse()?));
//!
//! NameserverEnumerator::static_config(&config).for_each(|record| {
//!     assert_eq!(record.port(), 53);
//!     ControlFlow::Continue(())
//! })?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## File format
//!
//! One directive per line: optional leading whitespace, the literal keyword
//! `nameserver`, whitespace, then an IPv4 or IPv6 literal. Every other line
//! (blanks, comments, other directives) is ignored, as are directive
//! lines whose address is unrecognized. Nameserver entries always use port
//! 53; custom ports are not supported.
//!
//! Lines longer than 80 bytes are split at the bound and the remainder is
//! re-evaluated as its own line.
//!
//! ## Early termination
//!
//! Returning `ControlFlow::Break(code)` from the visitor stops the walk
//! immediately: no further lines are read, the file handle is released, and
//! `code` comes back verbatim in [`ScanError::Aborted`]. There is no other
//! cancellation mechanism.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod enumerator;
pub mod error;
mod file_source;
mod parse;
pub mod record;

pub use config::{FamilySupport, ResolverConfiguration};
pub use enumerator::NameserverEnumerator;
pub use error::{Result, ScanError};
pub use record::{AddressFamily, NameserverRecord};
