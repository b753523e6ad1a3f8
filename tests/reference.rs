//! Comparison against the standard library's address parsers.
//!
//! On inputs where this crate's grammar and the platform grammar agree, the
//! verdicts must match. The one deliberate divergence (dotted-quad leading
//! zeros, accepted here and rejected by the standard library) is pinned
//! explicitly so it cannot drift in either direction.

use std::net::{Ipv4Addr, Ipv6Addr};

use ip_syntax::{is_valid_ipv4, is_valid_ipv6};

static AGREED_IPV4: &[&str] = &[
    "0.0.0.0",
    "255.255.255.255",
    "255.255.255.254",
    "127.0.0.1",
    "192.168.1.1",
    "8.8.8.8",
    "1.2.3.4",
    "203.0.113.9",
    "",
    "256.1.1.1",
    "999.1.1.1",
    "300.300.300.300",
    "192.168.1",
    "192.168.1.1.1",
    "192",
    "192.168..1",
    "192.168.1.1.",
    ".192.168.1.1",
    "192.168.a.1",
    "192.168.1.1!",
    "192.168. 1.1",
    "192.168.-1.1",
    "255.255.255.256",
    "99999999999.1.1.1",
    "0xC0.0xA8.0x01.0x01",
    "0777.0777.0777.0777",
    "192'; DROP TABLE--",
    "192<script>",
    "１９２.１６８.１.１",
    "192..168.1.1",
    "255.1.1.0.",
    "255.255.255.255.",
];

static AGREED_IPV6: &[&str] = &[
    "2001:0db8:0000:0000:0000:0000:0000:0001",
    "2001:db8::1",
    "::",
    "::1",
    "1:2:3:4:5:6:7:8",
    "2001:0db8:0001:0000:0000:0ab9:C0A8:0102",
    "2001:db8:1:0:0:ab9:c0a8:102",
    "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
    "2001:0DB8:85A3:0000:0000:8A2E:0370:7334",
    "::ffff:192.0.2.128",
    "::ffff:c000:0280",
    "::192.0.2.128",
    "1:2:3:4:5:6:192.168.1.1",
    "ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255",
    "::8a2e:0370:7334",
    "2001:db8::",
    "2001:db8::8a2e:0370:7334",
    "2001:0db8:0001:0002:0003:0004:0005::",
    "fe80::1",
    "fe80:0000:0000:0000:0204:61ff:fe9d:f156",
    "",
    "2001:db8:::1",
    "2001::::1",
    "2001::db8::1",
    "1:2:3:4:5:6:7:8:9",
    "2001:0db8:0000:0000:0000:0000:0000:0000:0001",
    "1:2:3:4:5:6:7:8::",
    "::1:2:3:4:5:6:7:8",
    "2001:0db8:0g00:0000:0000:0000:0000:0001",
    "2001:0db8:00000:0000:0000:0000:0000:0001",
    "20011:0db8:0000:0000:0000:0000:0000:0001",
    "ffffffff:0:0:0:0:0:0:1",
    "aBcD:EfGh:0000:0000:0000:0000:0000:0001",
    "::ffff:999.0.2.128",
    "2001:db8:192.168.1.1::",
    ":2001:db8::1",
    "2001:db8::1:",
    "192.168.1.1",
    "2001:db8:192.168.1",
    ":::",
    "::::::::",
    ":1:2:3:4:5:6:7:8",
    "2001:db8∶:1",
    "2001:db8<script>::1",
    "'; DROP TABLE--",
    "1",
    "...",
    ":",
    " ::1",
    "fe80::1%eth0",
    "1111111111111111111111111111111111111111111111111111111111",
];

#[test]
fn ipv4_matches_platform_parser() {
    for &input in AGREED_IPV4 {
        assert_eq!(
            is_valid_ipv4(input),
            input.parse::<Ipv4Addr>().is_ok(),
            "{input:?}"
        );
    }
}

#[test]
fn ipv6_matches_platform_parser() {
    for &input in AGREED_IPV6 {
        assert_eq!(
            is_valid_ipv6(input),
            input.parse::<Ipv6Addr>().is_ok(),
            "{input:?}"
        );
    }
}

#[test]
fn leading_zero_quads_diverge_from_platform() {
    for input in ["000.000.000.000", "007.008.009.010", "192.001.002.003"] {
        assert!(is_valid_ipv4(input), "{input:?}");
        assert!(input.parse::<Ipv4Addr>().is_err(), "{input:?}");
    }

    // The same delta reaches IPv6 through the embedded suffix.
    let embedded = "::ffff:010.020.030.040";
    assert!(is_valid_ipv6(embedded));
    assert!(embedded.parse::<Ipv6Addr>().is_err());
}
