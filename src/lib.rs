//! Syntactic validation of IPv4 and IPv6 textual addresses.
//!
//! This crate decides whether a string is a well-formed address of either
//! family without relying on any platform address-parsing facility. It
//! reports syntactic validity only: the text is never converted to a binary
//! address or normalized, and zone-index suffixes such as `%eth0` are
//! outside the grammar.
//!
//! The IPv6 validator is a single left-to-right scan that enforces hextet
//! grouping, the at-most-once `::` compression rule, and the optional
//! embedded dotted-quad suffix, delegating the suffix to the IPv4 validator.
//!
//! ```
//! use ip_syntax::{is_valid_ipv4, is_valid_ipv6};
//!
//! assert!(is_valid_ipv4("192.0.2.128"));
//! assert!(!is_valid_ipv4("256.0.0.0"));
//!
//! assert!(is_valid_ipv6("2001:db8::1"));
//! assert!(is_valid_ipv6("::ffff:192.0.2.128"));
//! assert!(!is_valid_ipv6("2001:db8:::1"));
//! ```
//!
//! For callers that want the check recorded in the type system, the
//! [`Ipv4Text`] and [`Ipv6Text`] wrappers carry a validated string slice:
//!
//! ```
//! use ip_syntax::Ipv6Text;
//!
//! let addr = Ipv6Text::try_from("fe80::1").expect("well-formed address");
//! assert_eq!(addr.as_str(), "fe80::1");
//! ```

#![no_std]
#![warn(
    clippy::std_instead_of_core,
    clippy::use_self,
    missing_docs,
    unreachable_pub
)]

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

mod ipv4;
mod ipv6;

pub use ipv4::{is_valid_ipv4, Ipv4Text, MAX_IPV4_LEN};
pub use ipv6::{is_valid_ipv6, Ipv6Text, MAX_IPV6_LEN};

/// The input is not a syntactically valid address of the requested family.
///
/// Deliberately fieldless: empty input, a malformed character, a structural
/// violation, a numeric range violation, and an input past the length
/// safety cap all collapse to this one value. Callers needing diagnostics
/// must re-inspect the input themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddrSyntaxError;

impl fmt::Display for AddrSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid address syntax")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddrSyntaxError {}
