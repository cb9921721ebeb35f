//! Ordinal number rendering.
//!
//! Only the last significant chunk of an ordinal is inflected; everything
//! above it is spelled as a cardinal by the caller.

use numwords_core::Form;
use numwords_core::digits::get_digits;

use crate::tables::{
    AND, HUNDREDS, ONES, ORDINAL_HUNDREDS, ORDINAL_ONES, ORDINAL_SCALE, ORDINAL_TEENS,
    ORDINAL_TWENTIES, TEENS, TWENTIES,
};

/// Spell out the significant chunk of an ordinal.
///
/// * `chunk` - Value of the last nonzero chunk (0-999)
/// * `chunk_idx` - Its scale position; 0 is the units chunk
/// * `first_chunk` - Whether no higher chunk precedes it
/// * `form` - Form slot of the inflected words
///
/// Returns `None` when the scale position has no tabulated ordinal form.
pub fn chunk_to_ordinal(
    chunk: u32,
    chunk_idx: usize,
    first_chunk: bool,
    form: Form,
) -> Option<String> {
    let scale = ORDINAL_SCALE.get(chunk_idx)?;
    let (ones, tens, hundreds) = get_digits(chunk);
    let (ones, tens, hundreds) = (ones as usize, tens as usize, hundreds as usize);
    let slot = form.index();
    let units = chunk_idx == 0;
    let mut words: Vec<&str> = Vec::new();

    if hundreds > 0 {
        if chunk % 100 == 0 && units {
            words.push(ORDINAL_HUNDREDS[hundreds][slot]);
        } else {
            words.push(HUNDREDS[hundreds]);
        }
    }

    if (hundreds != 0 || (units && !first_chunk)) && (tens == 1 || (tens > 1 && ones == 0)) {
        words.push(AND);
    }

    if tens > 1 {
        if chunk % 10 == 0 && units {
            words.push(ORDINAL_TWENTIES[tens][slot]);
        } else {
            words.push(TWENTIES[tens]);
        }
    }

    if tens == 1 {
        if units {
            words.push(ORDINAL_TEENS[ones][slot]);
        } else {
            words.push(TEENS[ones]);
        }
    } else if ones != 0 && !(chunk == 1 && !units) {
        if chunk > 9 || (units && !first_chunk) {
            words.push(AND);
        }

        if units {
            words.push(ORDINAL_ONES[ones][slot]);
        } else {
            words.push(ONES[ones][form.gender_index()]);
        }
    }

    if !units {
        words.push(scale[slot]);
    }

    Some(words.join(" "))
}
