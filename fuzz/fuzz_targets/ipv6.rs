#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let accepted = ip_syntax::is_valid_ipv6(input);

    // Revalidation is pure.
    assert_eq!(accepted, ip_syntax::is_valid_ipv6(input));

    // The platform grammar is strictly narrower (leading zeros in an
    // embedded dotted-quad are rejected there), so anything it accepts must
    // be accepted here too.
    if input.parse::<std::net::Ipv6Addr>().is_ok() {
        assert!(accepted);
    }
});
