//! Dotted-quad IPv4 text validation.

use core::fmt;
use core::str;

use crate::AddrSyntaxError;

/// Length of the longest well-formed dotted-quad, `255.255.255.255`.
///
/// Longer inputs are rejected before the scan starts.
pub const MAX_IPV4_LEN: usize = 15;

/// Returns whether `input` is a syntactically valid IPv4 dotted-quad.
///
/// The grammar is exactly four non-empty decimal segments separated by `.`,
/// each one to three digits with a value in 0..=255. Signs, hexadecimal and
/// octal forms, and surrounding whitespace are all rejected. Leading zeros
/// are accepted: `000.000.000.000` is well-formed under this grammar, even
/// though parsers that treat a leading zero as octal reject it.
///
/// ```
/// assert!(ip_syntax::is_valid_ipv4("127.0.0.1"));
/// assert!(!ip_syntax::is_valid_ipv4("1.2.3"));
/// ```
pub fn is_valid_ipv4(input: &str) -> bool {
    validate(input.as_bytes()).is_ok()
}

/// A string slice checked to be a well-formed dotted-quad.
///
/// Carries the validated text, not a numeric address; this crate never
/// converts to octet values.
///
/// ```
/// use ip_syntax::Ipv4Text;
///
/// let addr = Ipv4Text::try_from("203.0.113.9").unwrap();
/// assert_eq!(addr.as_str(), "203.0.113.9");
/// assert!(Ipv4Text::try_from("203.0.113.").is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ipv4Text<'a>(&'a str);

impl<'a> Ipv4Text<'a> {
    /// The validated text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl<'a> TryFrom<&'a str> for Ipv4Text<'a> {
    type Error = AddrSyntaxError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        validate(value.as_bytes())?;
        Ok(Self(value))
    }
}

impl<'a> TryFrom<&'a [u8]> for Ipv4Text<'a> {
    type Error = AddrSyntaxError;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        validate(value)?;
        // The grammar admits only ASCII digits and dots.
        Ok(Self(str::from_utf8(value).unwrap()))
    }
}

impl AsRef<str> for Ipv4Text<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Ipv4Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Single scan over the raw bytes. Segments close at each `.` and at the
/// end of input; a segment must have folded at least one digit by then.
pub(crate) fn validate(input: &[u8]) -> Result<(), AddrSyntaxError> {
    if input.is_empty() || input.len() > MAX_IPV4_LEN {
        return Err(AddrSyntaxError);
    }

    let mut closed = 0u8;
    let mut digits = 0u8;
    let mut value = 0u16;

    for &b in input {
        match b {
            b'0'..=b'9' => {
                if digits == 3 {
                    return Err(AddrSyntaxError);
                }
                value = value * 10 + u16::from(b - b'0');
                if value > 255 {
                    return Err(AddrSyntaxError);
                }
                digits += 1;
            }
            b'.' => {
                if digits == 0 || closed == 3 {
                    return Err(AddrSyntaxError);
                }
                closed += 1;
                digits = 0;
                value = 0;
            }
            _ => return Err(AddrSyntaxError),
        }
    }

    // End of input closes the fourth segment.
    if digits == 0 || closed != 3 {
        return Err(AddrSyntaxError);
    }

    Ok(())
}
