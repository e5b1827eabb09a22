//! Print the public key line and fingerprint for a mnemonic without writing files
//! Run with: cargo run --example show_public_key -- "<24 words>"

use mnemossh_core::{derive_keypair, encode_public_key, fingerprint, parse_mnemonic, seed_from_mnemonic};

fn main() {
    let phrase = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mnemonic = match parse_mnemonic(&phrase) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let seed = seed_from_mnemonic(&mnemonic);
    let pair = derive_keypair(&seed[..]).unwrap();

    print!("{}", encode_public_key(&pair.verifying_key(), None).unwrap());
    println!("{}", fingerprint(&pair.verifying_key()).unwrap());
}
