#![no_main]

use libfuzzer_sys::fuzz_target;
use mnemossh_core::openssh::{decode_private_key, encode_private_key};

fuzz_target!(|data: &[u8]| {
    let Ok(pem) = std::str::from_utf8(data) else {
        return;
    };

    // decode_private_key must never panic; a successful decode must round-trip.
    // Multi-line comments decode but are refused by the encoder.
    if let Ok(decoded) = decode_private_key(pem) {
        let Ok(encoded) = encode_private_key(&decoded.pair, Some(&decoded.comment)) else {
            return;
        };
        let again = decode_private_key(&encoded).expect("re-encoded key decodes");
        assert_eq!(again.pair, decoded.pair);
        assert_eq!(again.comment, decoded.comment);
    }
});
