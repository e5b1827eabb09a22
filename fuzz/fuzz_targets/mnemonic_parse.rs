#![no_main]

use libfuzzer_sys::fuzz_target;
use mnemossh_core::seed::parse_mnemonic;

fuzz_target!(|data: &[u8]| {
    // parse_mnemonic must return Ok or Err for any UTF-8 input, never panic.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_mnemonic(s);
    }
});
