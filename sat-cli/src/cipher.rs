//! A toy two-register mix cipher, kept deliberately weak so that
//! [`recover_key`] can invert it end to end through `sat-core` in a
//! reasonable amount of search. Both a concrete (`u64`) and a symbolic
//! (`sat_core::Integer`) implementation are provided; they must agree bit
//! for bit, which is exactly what `recover_key` exploits.

use rand::Rng;
use sat_core::integer::{integer_constant_constraint, rotate, sum_of, xor_of, Integer};
use sat_core::{iterate_totality, solve, Builder};

use crate::error::CliError;

/// One round: `(r1, r2) = (x + y, rotate(y, rotation) xor (x + y))`.
fn concrete_round(x: u64, y: u64, width: usize, rotation: usize) -> (u64, u64) {
    let modulus = 1u64 << width;
    let rotation = rotation % width.max(1);
    let r1 = (x.wrapping_add(y)) % modulus;
    let r2 = if rotation == 0 {
        y % modulus
    } else {
        ((y << rotation) | (y >> (width - rotation))) % modulus
    };
    (r1, r1 ^ r2)
}

fn symbolic_round(builder: &mut Builder, x: &Integer, y: &Integer, rotation: usize) -> (Integer, Integer) {
    let r1 = sum_of(builder, x, y).value;
    let r2 = rotate(y, rotation);
    let r3 = xor_of(builder, &r1, &r2);
    (r1, r3)
}

/// Encrypts `plaintext` under `key`: whiten with the key, then two mix
/// rounds with different rotation amounts.
pub fn encrypt(plaintext: [u64; 2], key: [u64; 2], width: usize) -> [u64; 2] {
    let x = plaintext[0] ^ key[0];
    let y = plaintext[1] ^ key[1];
    let (a, b) = concrete_round(x, y, width, 1);
    let (c, d) = concrete_round(a, b, width, 2);
    [c, d]
}

/// Generates a random plaintext/key pair of the given bit width, for
/// demonstration purposes.
pub fn random_plaintext_and_key(rng: &mut impl Rng, width: usize) -> ([u64; 2], [u64; 2]) {
    let modulus = 1u64 << width;
    let plaintext = [rng.gen_range(0, modulus), rng.gen_range(0, modulus)];
    let key = [rng.gen_range(0, modulus), rng.gen_range(0, modulus)];
    (plaintext, key)
}

/// Recovers a key consistent with `plaintext` encrypting to `ciphertext`
/// under this cipher, by bit-blasting the whole two-round network and
/// letting `sat-core` search for a satisfying key. Returns the first
/// recovered key (there may be more than one, since whitening plus two
/// narrow mix rounds does not uniquely determine the key from a single
/// plaintext/ciphertext pair at small widths).
pub fn recover_key(plaintext: [u64; 2], ciphertext: [u64; 2], width: usize) -> Result<[u64; 2], CliError> {
    let mut builder = Builder::new();

    let plaintext_vars = [Integer::new(&mut builder, width), Integer::new(&mut builder, width)];
    for (var, &value) in plaintext_vars.iter().zip(plaintext.iter()) {
        integer_constant_constraint(&mut builder, var, value);
    }
    let key_vars = [Integer::new(&mut builder, width), Integer::new(&mut builder, width)];

    let whitened: Vec<Integer> = plaintext_vars
        .iter()
        .zip(key_vars.iter())
        .map(|(p, k)| xor_of(&mut builder, p, k))
        .collect();

    let (a, b) = symbolic_round(&mut builder, &whitened[0], &whitened[1], 1);
    let (c, d) = symbolic_round(&mut builder, &a, &b, 2);

    integer_constant_constraint(&mut builder, &c, ciphertext[0]);
    integer_constant_constraint(&mut builder, &d, ciphertext[1]);

    let instance = builder.make_instance();
    let model = solve(&instance).next().ok_or(CliError::KeyRecoveryFailed)?;
    let total = iterate_totality(&builder, &model).next().expect("totality always yields at least one expansion");

    let recovered = [key_vars[0].decode(&total), key_vars[1].decode(&total)];
    if encrypt(plaintext, recovered, width) != ciphertext {
        return Err(CliError::KeyReplayMismatch);
    }
    Ok(recovered)
}
