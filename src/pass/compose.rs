//! Password composition.

use std::fmt;

use crate::rng::RandomSource;

use super::charset;

/// Requested length cannot fit one character from every active class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnderflowError {
    pub length: usize,
    pub required: usize,
}

impl fmt::Display for UnderflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length {} cannot fit {} required character classes",
            self.length, self.required
        )
    }
}

impl std::error::Error for UnderflowError {}

/// Compose one password of exactly `length` characters.
///
/// One character is drawn from each active class in class order, the rest
/// uniformly from the union of the active alphabets, and the whole sequence
/// is shuffled so the guaranteed characters are not clustered at the front.
/// Callers validate `length` up front; the underflow check here only guards
/// against producing a short or corrupted result.
pub fn compose<R: RandomSource>(
    rng: &mut R,
    length: usize,
    use_specials: bool,
) -> Result<String, UnderflowError> {
    let classes = charset::active_classes(use_specials);
    let remaining = length.checked_sub(classes.len()).ok_or(UnderflowError {
        length,
        required: classes.len(),
    })?;

    let mut password: Vec<u8> = Vec::with_capacity(length);

    for class in classes {
        password.push(rng.choose(class));
    }

    let pool = charset::build(use_specials);
    for _ in 0..remaining {
        password.push(rng.choose(&pool));
    }

    rng.shuffle(&mut password);

    // Safety: charset is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(password) })
}
