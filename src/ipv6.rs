//! IPv6 text validation.
//!
//! The validator is a single left-to-right scan with three pieces of state:
//! a count of completed 16-bit groups, a flag recording whether the `::`
//! compression marker has been seen, and the accumulator for the group in
//! progress. An embedded dotted-quad suffix restarts the current group as
//! IPv4 text and counts as two groups.

use core::fmt;
use core::str;

use crate::{ipv4, AddrSyntaxError};

/// Length of the longest well-formed IPv6 text: six full hextets followed
/// by an embedded dotted-quad, `ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255`.
///
/// Longer inputs are rejected before the scan starts.
pub const MAX_IPV6_LEN: usize = 45;

/// Returns whether `input` is a syntactically valid IPv6 textual address.
///
/// The grammar is one to eight colon-separated groups of one to four hex
/// digits (either case), with at most one `::` eliding one or more all-zero
/// groups, and optionally a trailing embedded IPv4 dotted-quad standing for
/// the last two groups. Without `::` the address must have exactly eight
/// groups; with it, strictly fewer. Zone-index suffixes are not part of the
/// grammar.
///
/// Classification is byte-valued, so Unicode look-alikes of digits and
/// colons are rejected rather than normalized.
///
/// ```
/// assert!(ip_syntax::is_valid_ipv6("::1"));
/// assert!(ip_syntax::is_valid_ipv6("::ffff:192.0.2.128"));
/// assert!(!ip_syntax::is_valid_ipv6("1:2:3:4:5:6:7:8:9"));
/// ```
pub fn is_valid_ipv6(input: &str) -> bool {
    validate(input.as_bytes()).is_ok()
}

/// A string slice checked to be well-formed IPv6 text.
///
/// Carries the validated text, not a numeric address. Equality is plain
/// text equality: `ABCD::1` and `abcd::1` name the same address but are
/// different texts, and this crate does not normalize.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ipv6Text<'a>(&'a str);

impl<'a> Ipv6Text<'a> {
    /// The validated text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl<'a> TryFrom<&'a str> for Ipv6Text<'a> {
    type Error = AddrSyntaxError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        validate(value.as_bytes())?;
        Ok(Self(value))
    }
}

impl<'a> TryFrom<&'a [u8]> for Ipv6Text<'a> {
    type Error = AddrSyntaxError;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        validate(value)?;
        // The grammar admits only ASCII hex digits, colons, and dots.
        Ok(Self(str::from_utf8(value).unwrap()))
    }
}

impl AsRef<str> for Ipv6Text<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Ipv6Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One scanned input byte, pre-classified for the state machine.
enum Token {
    /// A hexadecimal digit and its value, either case.
    Hex(u16),
    Colon,
    Dot,
    Other,
}

fn classify(b: u8) -> Token {
    match b {
        b'0'..=b'9' => Token::Hex(u16::from(b - b'0')),
        b'a'..=b'f' => Token::Hex(u16::from(b - b'a') + 10),
        b'A'..=b'F' => Token::Hex(u16::from(b - b'A') + 10),
        b':' => Token::Colon,
        b'.' => Token::Dot,
        _ => Token::Other,
    }
}

pub(crate) fn validate(input: &[u8]) -> Result<(), AddrSyntaxError> {
    if input.is_empty() || input.len() > MAX_IPV6_LEN {
        return Err(AddrSyntaxError);
    }

    let mut pos = 0;
    // A leading colon is only legal as the start of `::`. The scan resumes
    // at the second colon so the main loop records the compression itself.
    if input[0] == b':' {
        if input.len() == 1 || input[1] != b':' {
            return Err(AddrSyntaxError);
        }
        pos = 1;
    }

    let mut groups = 0u8;
    let mut compressed = false;
    let mut digits = 0u8;
    let mut value = 0u32;
    let mut group_start = pos;

    while pos < input.len() {
        let b = input[pos];
        pos += 1;
        match classify(b) {
            Token::Hex(digit) => {
                if digits == 4 {
                    return Err(AddrSyntaxError);
                }
                value = (value << 4) | u32::from(digit);
                // Unreachable while the four-digit cap holds; kept as an
                // independent guard on the accumulator.
                if value > 0xffff {
                    return Err(AddrSyntaxError);
                }
                digits += 1;
            }
            Token::Colon => {
                group_start = pos;
                if digits == 0 {
                    // An empty group is the compression marker; one only.
                    if compressed {
                        return Err(AddrSyntaxError);
                    }
                    compressed = true;
                    continue;
                }
                if pos == input.len() {
                    // Dangling group terminator, as in "1:2:".
                    return Err(AddrSyntaxError);
                }
                groups += 1;
                if groups > 8 {
                    return Err(AddrSyntaxError);
                }
                digits = 0;
                value = 0;
            }
            Token::Dot if digits > 0 => {
                // The group in progress restarts as an embedded dotted-quad,
                // which takes the rest of the input and stands for two groups.
                ipv4::validate(&input[group_start..])?;
                groups += 2;
                if groups > 8 {
                    return Err(AddrSyntaxError);
                }
                digits = 0;
                break;
            }
            Token::Dot | Token::Other => return Err(AddrSyntaxError),
        }
    }

    // End of input closes a group left open with digits.
    if digits > 0 {
        groups += 1;
        if groups > 8 {
            return Err(AddrSyntaxError);
        }
    }

    // `::` stands for at least one elided group.
    if compressed {
        if groups >= 8 {
            return Err(AddrSyntaxError);
        }
    } else if groups != 8 {
        return Err(AddrSyntaxError);
    }

    Ok(())
}
