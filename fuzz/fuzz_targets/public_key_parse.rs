#![no_main]

use libfuzzer_sys::fuzz_target;
use mnemossh_core::openssh::{encode_public_key, parse_public_key};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must re-encode and parse to the same record
    if let Ok(record) = parse_public_key(line) {
        let encoded = encode_public_key(&record.key, record.comment.as_deref())
            .expect("parsed record re-encodes");
        let reparsed = parse_public_key(&encoded).expect("re-encoded line parses");
        assert_eq!(reparsed, record);
    }
});
