//! Verification code generation

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::verification_code::CODE_LENGTH;

const CODE_SPACE: u32 = 1_000_000;

/// Generate a verification code
///
/// Draws a uniform integer in `[0, 999999]` from the operating system RNG
/// and zero-pads it to six digits.
pub fn generate_code() -> String {
    let value = OsRng.gen_range(0..CODE_SPACE);
    format!("{:0width$}", value, width = CODE_LENGTH)
}
