//! Seeded xorshift32 RNG
//!
//! Each component owns its own `u32` state, no global generator.

const FALLBACK_SEED: u32 = 0x9E37_79B9;

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Xorshift gets stuck on zero, so zero seeds are remapped.
#[inline]
pub fn normalize_seed(seed: u32) -> u32 {
    if seed == 0 { FALLBACK_SEED } else { seed }
}

/// Uniform float in [0, 1)
#[inline]
pub fn next_unit(state: &mut u32) -> f32 {
    // Top 24 bits fit exactly in an f32 mantissa
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Seed from the environment (Math.random in the browser, wall clock natively)
pub fn seed_from_environment() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        normalize_seed((js_sys::Math::random() * u32::MAX as f64) as u32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(FALLBACK_SEED);
        normalize_seed(nanos)
    }
}
