#![no_main]

use libfuzzer_sys::fuzz_target;
use mnemossh_core::SeedExpander;

fuzz_target!(|data: &[u8]| {
    // First 32 bytes are the seed, the rest pick read sizes. Any split of the
    // stream into reads must match one contiguous read.
    if data.len() < 32 {
        return;
    }
    let (seed, sizes) = data.split_at(32);

    let mut split = SeedExpander::new(seed).expect("32-byte seed");
    let mut pieces = Vec::new();
    for size in sizes {
        let mut buf = vec![0u8; *size as usize];
        split.fill(&mut buf);
        pieces.extend_from_slice(&buf);
    }

    let mut whole = SeedExpander::new(seed).expect("32-byte seed");
    let mut expected = vec![0u8; pieces.len()];
    whole.fill(&mut expected);

    assert_eq!(pieces, expected);
    assert_eq!(split.position(), whole.position());
});
