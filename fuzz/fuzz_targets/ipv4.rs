#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let accepted = ip_syntax::is_valid_ipv4(input);

    // Revalidation is pure.
    assert_eq!(accepted, ip_syntax::is_valid_ipv4(input));

    // The platform grammar is strictly narrower (it rejects leading zeros),
    // so anything it accepts must be accepted here too.
    if input.parse::<std::net::Ipv4Addr>().is_ok() {
        assert!(accepted);
    }
});
