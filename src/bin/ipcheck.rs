//! Regression harness and command-line checker for the address validators.
//!
//! With no arguments, runs the fixed IPv4 and IPv6 suites: every case is fed
//! to this crate's validator and to the standard library's parser for the
//! same family, and both verdicts are compared against the expected one.
//! With `-4` or `-6`, checks a single address of that family and prints both
//! verdicts.
//!
//! Dotted-quads with leading zeros are deliberately absent from the suites:
//! this crate's grammar accepts them while the standard library rejects
//! them, so they live in the library's unit tests and in
//! `tests/reference.rs` instead.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::process::ExitCode;

use clap::Parser;

use ip_syntax::{is_valid_ipv4, is_valid_ipv6};

#[derive(Debug, Parser)]
#[command(name = "ipcheck")]
#[command(about = "Check IPv4/IPv6 address syntax against the platform parser")]
struct Cli {
    /// IPv4 address to check instead of running the suites.
    #[arg(short = '4', long = "ipv4", value_name = "ADDR")]
    ipv4: Option<String>,

    /// IPv6 address to check instead of running the suites.
    #[arg(short = '6', long = "ipv6", value_name = "ADDR")]
    ipv6: Option<String>,
}

/// One labeled regression case. `input` is `None` for the missing-input
/// case; both validators treat absence as invalid.
struct Case {
    name: &'static str,
    input: Option<&'static str>,
    expected: bool,
}

const fn case(name: &'static str, input: &'static str, expected: bool) -> Case {
    Case {
        name,
        input: Some(input),
        expected,
    }
}

/// Per-suite totals, threaded through reporting explicitly.
#[derive(Default)]
struct SuiteStats {
    total: u32,
    passed: u32,
}

impl SuiteStats {
    fn failed(&self) -> u32 {
        self.total - self.passed
    }
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

fn custom_ipv4(input: Option<&str>) -> bool {
    input.is_some_and(is_valid_ipv4)
}

fn custom_ipv6(input: Option<&str>) -> bool {
    input.is_some_and(is_valid_ipv6)
}

/// Platform verdict for IPv4 text, with absent input invalid.
fn reference_ipv4(input: Option<&str>) -> bool {
    input.is_some_and(|s| s.parse::<Ipv4Addr>().is_ok())
}

/// Platform verdict for IPv6 text, with absent input invalid.
fn reference_ipv6(input: Option<&str>) -> bool {
    input.is_some_and(|s| s.parse::<Ipv6Addr>().is_ok())
}

fn report(stats: &mut SuiteStats, case: &Case, reference: bool, custom: bool) {
    stats.total += 1;
    let shown = case.input.unwrap_or("<none>");
    if reference == case.expected && custom == case.expected {
        println!("PASS {}: \"{}\" -> {}", case.name, shown, verdict(custom));
        stats.passed += 1;
    } else {
        println!(
            "\x1b[31mFAIL {}: \"{}\" -> expected: {}, reference: {}, custom: {}\x1b[0m",
            case.name,
            shown,
            verdict(case.expected),
            verdict(reference),
            verdict(custom),
        );
    }
}

fn run_suite(
    cases: &[Case],
    custom: fn(Option<&str>) -> bool,
    reference: fn(Option<&str>) -> bool,
) -> SuiteStats {
    let mut stats = SuiteStats::default();
    for case in cases {
        report(&mut stats, case, reference(case.input), custom(case.input));
    }
    stats
}

const IPV4_CASES: &[Case] = &[
    // Standard valid addresses.
    case("IPv4: minimum address", "0.0.0.0", true),
    case("IPv4: maximum address", "255.255.255.255", true),
    case("IPv4: localhost", "127.0.0.1", true),
    case("IPv4: private network", "192.168.1.1", true),
    case("IPv4: public IP", "8.8.8.8", true),
    case("IPv4: max octets", "255.255.255.254", true),
    case("IPv4: mixed values", "1.2.3.4", true),
    // Out of range.
    case("IPv4 invalid: octet > 255", "256.1.1.1", false),
    case("IPv4 invalid: large octet", "999.1.1.1", false),
    case("IPv4 invalid: all high", "300.300.300.300", false),
    // Wrong number of octets.
    case("IPv4 invalid: too few octets", "192.168.1", false),
    case("IPv4 invalid: too many octets", "192.168.1.1.1", false),
    case("IPv4 invalid: single octet", "192", false),
    // Empty or missing parts.
    case("IPv4 invalid: empty octet", "192.168..1", false),
    case("IPv4 invalid: trailing dot", "192.168.1.1.", false),
    case("IPv4 invalid: leading dot", ".192.168.1.1", false),
    case("IPv4 invalid: empty string", "", false),
    Case {
        name: "IPv4 invalid: missing input",
        input: None,
        expected: false,
    },
    // Invalid characters.
    case("IPv4 invalid: letter in octet", "192.168.a.1", false),
    case("IPv4 invalid: special chars", "192.168.1.1!", false),
    case("IPv4 invalid: space", "192.168. 1.1", false),
    case("IPv4 invalid: negative", "192.168.-1.1", false),
    // Boundary attacks.
    case("IPv4 adversarial: 256 boundary", "255.255.255.256", false),
    case("IPv4 adversarial: overflow attempt", "99999999999.1.1.1", false),
    // Format confusion.
    case("IPv4 adversarial: hex format", "0xC0.0xA8.0x01.0x01", false),
    case("IPv4 adversarial: octal-like", "0777.0777.0777.0777", false),
    // Injection attempts.
    case("IPv4 adversarial: SQL injection", "192'; DROP TABLE--", false),
    case("IPv4 adversarial: script injection", "192<script>", false),
    // Unicode and encoding tricks.
    case("IPv4 adversarial: unicode digits", "１９２.１６８.１.１", false),
    // Multiple dots.
    case("IPv4 adversarial: double dots", "192..168.1.1", false),
    case("IPv4 adversarial: triple dots", "192...168.1.1", false),
    // Trailing dot variants.
    case("IPv4 invalid: trailing dot variant", "255.1.1.0.", false),
    case("IPv4 invalid: trailing dot max", "255.255.255.255.", false),
];

const IPV6_CASES: &[Case] = &[
    // Standard format.
    case("IPv6: full format", "2001:0db8:0000:0000:0000:0000:0000:0001", true),
    case("IPv6: compressed zeros", "2001:db8::1", true),
    case("IPv6: all zeros", "::", true),
    case("IPv6: loopback", "::1", true),
    // Leading zeros within groups.
    case("IPv6: with leading zeros", "2001:0db8:0001:0000:0000:0ab9:C0A8:0102", true),
    case("IPv6: no leading zeros", "2001:db8:1:0:0:ab9:c0a8:102", true),
    // Mixed case.
    case("IPv6: lowercase", "2001:0db8:85a3:0000:0000:8a2e:0370:7334", true),
    case("IPv6: uppercase", "2001:0DB8:85A3:0000:0000:8A2E:0370:7334", true),
    case("IPv6: mixed case", "2001:0dB8:85a3:0000:0000:8A2e:0370:7334", true),
    // IPv4-mapped and IPv4-compatible.
    case("IPv6: IPv4-mapped", "::ffff:192.0.2.128", true),
    case("IPv6: IPv4-mapped hex", "::ffff:c000:0280", true),
    case("IPv6: IPv4-compatible", "::192.0.2.128", true),
    // Compression at different positions.
    case("IPv6: compression at start", "::8a2e:0370:7334", true),
    case("IPv6: compression at end", "2001:db8::", true),
    case("IPv6: compression in middle", "2001:db8::8a2e:0370:7334", true),
    // Link-local.
    case("IPv6: link-local", "fe80::1", true),
    case("IPv6: link-local full", "fe80:0000:0000:0000:0204:61ff:fe9d:f156", true),
    // Triple colons and repeated compression.
    case("IPv6 invalid: triple colon", "2001:db8:::1", false),
    case("IPv6 invalid: quad colon", "2001::::1", false),
    case("IPv6 invalid: multiple compressions", "2001::db8::1", false),
    // Too many groups.
    case("IPv6 invalid: too many groups", "1:2:3:4:5:6:7:8:9", false),
    case(
        "IPv6 invalid: nine groups no compression",
        "2001:0db8:0000:0000:0000:0000:0000:0000:0001",
        false,
    ),
    // Invalid characters.
    case("IPv6 invalid: invalid hex", "2001:0db8:0g00:0000:0000:0000:0000:0001", false),
    case("IPv6 invalid: special char", "2001:0db8:0000:0000:0000:0000:0000:0001!", false),
    // Group too long.
    case("IPv6 invalid: group > 4 digits", "2001:0db8:00000:0000:0000:0000:0000:0001", false),
    case("IPv6 invalid: very long group", "20011:0db8:0000:0000:0000:0000:0000:0001", false),
    // Empty or missing input.
    case("IPv6 invalid: empty string", "", false),
    Case {
        name: "IPv6 invalid: missing input",
        input: None,
        expected: false,
    },
    // Malformed embedded dotted-quads.
    case("IPv6 invalid: bad IPv4 suffix", "::ffff:999.0.2.128", false),
    case("IPv6 invalid: IPv4 wrong position", "2001:db8:192.168.1.1::", false),
    // Single-colon issues.
    case("IPv6 invalid: single colon start", ":2001:db8::1", false),
    case("IPv6 invalid: single colon end", "2001:db8::1:", false),
    // Compression bypass attempts.
    case(
        "IPv6 adversarial: full no compression",
        "2001:0db8:0000:0000:0000:0000:0000:0001",
        true,
    ),
    case(
        "IPv6 adversarial: valid trailing compression",
        "2001:0db8:0001:0002:0003:0004:0005::",
        true,
    ),
    // Case confusion.
    case("IPv6 adversarial: mixed extreme", "aBcD:EfGh:0000:0000:0000:0000:0000:0001", false),
    // Boundary overflows.
    case("IPv6 adversarial: hex overflow", "ffffffff:0:0:0:0:0:0:1", false),
    // Family confusion.
    case("IPv6 adversarial: IPv4 only", "192.168.1.1", false),
    case("IPv6 adversarial: mixed wrong", "2001:db8:192.168.1", false),
    // Colon edge cases.
    case("IPv6 adversarial: only colons", ":::", false),
    case("IPv6 adversarial: many colons", "::::::::", false),
    case("IPv6 adversarial: alternating", ":1:2:3:4:5:6:7:8", false),
    // Empty groups.
    case("IPv6 adversarial: empty groups", "2001::db8:::1", false),
    // Unicode tricks.
    case("IPv6 adversarial: unicode colon", "2001:db8∶:1", false),
    // Injection attempts.
    case("IPv6 adversarial: script tag", "2001:db8<script>::1", false),
    case("IPv6 adversarial: SQL", "'; DROP TABLE--", false),
    // Degenerate shapes.
    case("edge: short string", "1", false),
    case("edge: just dots", "...", false),
    case("edge: lone colon", ":", false),
    // Whitespace.
    case("edge: IPv4 with leading space", " 192.168.1.1", false),
    case("edge: IPv4 with trailing space", "192.168.1.1 ", false),
    case("edge: IPv6 with space", " ::1", false),
    // Very long strings.
    case(
        "edge: very long invalid",
        "1111111111111111111111111111111111111111111111111111111111",
        false,
    ),
    // Unicode digits through the suffix path.
    case("IPv6 adversarial: unicode digits", "１９２.１６８.１.１", false),
];

fn print_summary(ipv4: &SuiteStats, ipv6: &SuiteStats) -> ExitCode {
    let total = ipv4.total + ipv6.total;
    let passed = ipv4.passed + ipv6.passed;

    println!("IPv4 totals {}:{} {}", ipv4.total, ipv4.passed, ipv4.failed());
    println!("IPv6 totals {}:{} {}", ipv6.total, ipv6.passed, ipv6.failed());
    println!("Combined {}:{} {}", total, passed, total - passed);

    if passed == total {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.ipv4.is_none() && cli.ipv6.is_none() {
        let ipv4_stats = run_suite(IPV4_CASES, custom_ipv4, reference_ipv4);
        let ipv6_stats = run_suite(IPV6_CASES, custom_ipv6, reference_ipv6);
        return print_summary(&ipv4_stats, &ipv6_stats);
    }

    if let Some(addr) = cli.ipv4.as_deref() {
        println!("custom IPv4 validator: {} is {}", addr, verdict(is_valid_ipv4(addr)));
        println!("std reference: {} is {}", addr, verdict(reference_ipv4(Some(addr))));
    }

    if let Some(addr) = cli.ipv6.as_deref() {
        println!("custom IPv6 validator: {} is {}", addr, verdict(is_valid_ipv6(addr)));
        println!("std reference: {} is {}", addr, verdict(reference_ipv6(Some(addr))));
    }

    ExitCode::SUCCESS
}
