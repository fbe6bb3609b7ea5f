//! Line and address parsing for `nameserver` directives.

use crate::config::FamilySupport;
use crate::record::NameserverRecord;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Directive keyword introducing a nameserver entry.
const NAMESERVER_KEYWORD: &str = "nameserver";

/// Extracts the address token from a `nameserver` directive line.
///
/// Leading whitespace is skipped, then the line must start with the keyword
/// `nameserver` (case-sensitive, compared for exactly the keyword's length).
/// The token is the first whitespace-delimited word after the keyword;
/// anything after it on the line is ignored.
///
/// Returns `None` for every other line (blanks, comments, other
/// directives, non-UTF-8 bytes). Those lines are simply not nameserver
/// entries; skipping them is not an error.
pub(crate) fn nameserver_token(line: &[u8]) -> Option<&str> {
    let line = std::str::from_utf8(line).ok()?;
    let rest = line.trim_start().strip_prefix(NAMESERVER_KEYWORD)?;
    Some(rest.split_whitespace().next().unwrap_or(""))
}

/// Converts an address token into a [`NameserverRecord`].
///
/// IPv4 conversion is attempted first when enabled, then IPv6. `None` means
/// the token is unrecognized under the enabled families; the caller logs
/// and moves on.
pub(crate) fn parse_address(token: &str, families: FamilySupport) -> Option<NameserverRecord> {
    if families.ipv4 {
        if let Ok(addr) = token.parse::<Ipv4Addr>() {
            return Some(NameserverRecord::ipv4(addr));
        }
    }
    if families.ipv6 {
        if let Ok(addr) = token.parse::<Ipv6Addr>() {
            return Some(NameserverRecord::ipv6(addr));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AddressFamily;

    #[test]
    fn token_after_keyword() {
        assert_eq!(nameserver_token(b"nameserver 8.8.8.8"), Some("8.8.8.8"));
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(nameserver_token(b"  \t nameserver 1.1.1.1"), Some("1.1.1.1"));
    }

    #[test]
    fn keyword_match_is_prefix_length() {
        // The comparison covers exactly the keyword's length, so a token
        // glued to the keyword still parses.
        assert_eq!(nameserver_token(b"nameserver8.8.8.8"), Some("8.8.8.8"));
    }

    #[test]
    fn trailing_content_is_ignored() {
        assert_eq!(
            nameserver_token(b"nameserver 9.9.9.9 # corp resolver"),
            Some("9.9.9.9")
        );
    }

    #[test]
    fn non_matching_lines() {
        assert_eq!(nameserver_token(b""), None);
        assert_eq!(nameserver_token(b"   "), None);
        assert_eq!(nameserver_token(b"# nameserver 8.8.8.8"), None);
        assert_eq!(nameserver_token(b"search example.com"), None);
        assert_eq!(nameserver_token(b"Nameserver 8.8.8.8"), None);
        assert_eq!(nameserver_token(b"\xff\xfe nameserver 8.8.8.8"), None);
    }

    #[test]
    fn bare_keyword_yields_empty_token() {
        assert_eq!(nameserver_token(b"nameserver"), Some(""));
        assert_eq!(nameserver_token(b"nameserver   "), Some(""));
    }

    #[test]
    fn ipv4_address() {
        let record = parse_address("8.8.8.8", FamilySupport::both()).unwrap();
        assert_eq!(record.family(), AddressFamily::Ipv4);
        assert_eq!(record.ip().to_string(), "8.8.8.8");
        assert_eq!(record.port(), 53);
    }

    #[test]
    fn ipv6_address() {
        let record = parse_address("2001:4860:4860::8888", FamilySupport::both()).unwrap();
        assert_eq!(record.family(), AddressFamily::Ipv6);
        assert_eq!(record.port(), 53);
    }

    #[test]
    fn unrecognized_tokens() {
        assert!(parse_address("not-an-address", FamilySupport::both()).is_none());
        assert!(parse_address("", FamilySupport::both()).is_none());
        assert!(parse_address("8.8.8.8.8", FamilySupport::both()).is_none());
    }

    #[test]
    fn disabled_family_is_unrecognized() {
        assert!(parse_address("8.8.8.8", FamilySupport::ipv6_only()).is_none());
        assert!(parse_address("::1", FamilySupport::ipv4_only()).is_none());
    }

    #[test]
    fn ipv6_still_parses_when_ipv4_enabled() {
        let record = parse_address("::1", FamilySupport::both()).unwrap();
        assert_eq!(record.family(), AddressFamily::Ipv6);
    }
}
