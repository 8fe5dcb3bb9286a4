//! Random generation of the PQ challenge factors.
//!
//! `req_pq` answers with a composite `pq = p * q` whose factors are random
//! primes in `[2^31, 2^32)` — large enough that factoring costs the client a
//! deliberate amount of work, small enough that `pq` fits in 64 bits.

fn modpow_u64(n: u64, mut e: u64, m: u64) -> u64 {
    if m == 1 { return 0; }
    let mut result: u128 = 1;
    let mut base = u128::from(n % m);
    let m = u128::from(m);
    while e > 0 {
        if e & 1 == 1 { result = result * base % m; }
        e >>= 1;
        base = base * base % m;
    }
    result as u64
}

/// Deterministic Miller-Rabin for 32-bit candidates.
///
/// The bases {2, 3, 5, 7, 11} are a proven witness set for every
/// n < 2,152,302,898,747, which covers the full u32 range. {2, 3, 5, 7}
/// alone would not: 3,215,031,751 = 151 * 751 * 28351 is a strong
/// pseudoprime to all four and sits inside `[2^31, 2^32)`.
pub fn is_prime_u32(n: u32) -> bool {
    let n = u64::from(n);
    if n < 2 { return false; }
    for p in [2u64, 3, 5, 7, 11] {
        if n % p == 0 { return n == p; }
    }

    let mut d = n - 1;
    let mut r = 0;
    while d % 2 == 0 { d /= 2; r += 1; }

    'witness: for a in [2u64, 3, 5, 7, 11] {
        let mut x = modpow_u64(a, d, n);
        if x == 1 || x == n - 1 { continue; }
        for _ in 0..r - 1 {
            x = (u128::from(x) * u128::from(x) % u128::from(n)) as u64;
            if x == n - 1 { continue 'witness; }
        }
        return false;
    }
    true
}

/// Generate a random prime in `[2^31, 2^32)`.
pub fn random_prime_u32() -> u32 {
    loop {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf).expect("getrandom");
        // Force the top bit (31-bit magnitude floor) and oddness.
        let candidate = u32::from_le_bytes(buf) | (1 << 31) | 1;
        if is_prime_u32(candidate) {
            return candidate;
        }
    }
}

/// Generate a random signed 64-bit value.
pub fn random_long() -> i64 {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf).expect("getrandom");
    i64::from_le_bytes(buf)
}

/// Fill `buf` with cryptographically secure random bytes.
pub fn random_bytes(buf: &mut [u8]) {
    getrandom::getrandom(buf).expect("getrandom");
}
