//! AES-256 in IGE (Infinite Garble Extension) mode.
//!
//! IGE chains both the previous ciphertext and the previous plaintext block:
//!
//! ```text
//! c[i] = E(p[i] ^ c[i-1]) ^ p[i-1]
//! p[i] = D(c[i] ^ p[i-1]) ^ c[i-1]
//! ```
//!
//! with `c[0] = iv[0..16]` and `p[0] = iv[16..32]`. The mode provides no
//! padding; callers must supply input whose length is a multiple of the
//! 16-byte block size.

use aes::Aes256;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};

fn xor_into(dst: &mut [u8; 16], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Encrypt `data` in place with AES-256-IGE.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 16.
pub fn ige_encrypt(data: &mut [u8], key: &[u8; 32], iv: &[u8; 32]) {
    assert_eq!(data.len() % 16, 0, "IGE input must be block-aligned");
    let cipher = Aes256::new(GenericArray::from_slice(key));

    let mut prev_cipher: [u8; 16] = iv[..16].try_into().unwrap();
    let mut prev_plain: [u8; 16] = iv[16..].try_into().unwrap();

    for block in data.chunks_exact_mut(16) {
        let plain: [u8; 16] = block.try_into().unwrap();

        let mut work = plain;
        xor_into(&mut work, &prev_cipher);
        cipher.encrypt_block(GenericArray::from_mut_slice(&mut work));
        xor_into(&mut work, &prev_plain);

        block.copy_from_slice(&work);
        prev_cipher = work;
        prev_plain = plain;
    }
}

/// Decrypt `data` in place with AES-256-IGE.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 16.
pub fn ige_decrypt(data: &mut [u8], key: &[u8; 32], iv: &[u8; 32]) {
    assert_eq!(data.len() % 16, 0, "IGE input must be block-aligned");
    let cipher = Aes256::new(GenericArray::from_slice(key));

    let mut prev_cipher: [u8; 16] = iv[..16].try_into().unwrap();
    let mut prev_plain: [u8; 16] = iv[16..].try_into().unwrap();

    for block in data.chunks_exact_mut(16) {
        let encrypted: [u8; 16] = block.try_into().unwrap();

        let mut work = encrypted;
        xor_into(&mut work, &prev_plain);
        cipher.decrypt_block(GenericArray::from_mut_slice(&mut work));
        xor_into(&mut work, &prev_cipher);

        block.copy_from_slice(&work);
        prev_cipher = encrypted;
        prev_plain = work;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ([u8; 32], [u8; 32], [u8; 32]) {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let iv: [u8; 32] = core::array::from_fn(|i| (i + 32) as u8);
        let plain: [u8; 32] = core::array::from_fn(|i| (i + 64) as u8);
        (key, iv, plain)
    }

    #[test]
    fn known_answer() {
        let (key, iv, plain) = sample();
        let mut data = plain;
        ige_encrypt(&mut data, &key, &iv);
        assert_eq!(
            data,
            [
                182, 178, 60, 180, 109, 47, 67, 222, 44, 103, 252, 154, 58, 158, 53, 16,
                79, 173, 110, 209, 81, 119, 150, 156, 28, 235, 198, 22, 188, 250, 72, 44,
            ]
        );
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let (key, iv, plain) = sample();
        let mut data = plain;
        ige_encrypt(&mut data, &key, &iv);
        assert_ne!(data, plain);
        ige_decrypt(&mut data, &key, &iv);
        assert_eq!(data, plain);
    }

    #[test]
    fn blocks_chain() {
        // Identical plaintext blocks must yield distinct ciphertext blocks.
        let (key, iv, _) = sample();
        let mut data = [0x5Au8; 48];
        ige_encrypt(&mut data, &key, &iv);
        assert_ne!(data[..16], data[16..32]);
        assert_ne!(data[16..32], data[32..]);
    }

    #[test]
    #[should_panic]
    fn rejects_unaligned_input() {
        let (key, iv, _) = sample();
        let mut data = [0u8; 15];
        ige_encrypt(&mut data, &key, &iv);
    }
}
