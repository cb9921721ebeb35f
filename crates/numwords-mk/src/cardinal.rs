//! Cardinal number rendering.

use numwords_core::digits::{chunks, get_digits};
use numwords_core::{Error, Form, Result};

use crate::tables::{AND, HUNDREDS, MAX_VALUE, ONES, SCALE, TEENS, TWENTIES};

/// Plural class of a count: 0 for the singular form, 1 for the plural.
///
/// The singular applies to counts ending in 1, except 11 in each hundred.
pub fn plural_class(n: u128) -> usize {
    let n = n % 100;
    if n == 1 || (n > 20 && n % 10 == 1) {
        0
    } else {
        1
    }
}

/// Pick the singular or plural word form for a count.
pub fn pluralize<T>(n: u128, forms: &[T; 2]) -> &T {
    &forms[plural_class(n)]
}

/// Spell out a non-negative integer.
///
/// Digits agree with `form` unless the scale word of their chunk imposes its
/// own gender. Returns an empty string for zero.
pub fn int_to_words(number: u128, form: Form) -> Result<String> {
    if number >= MAX_VALUE {
        return Err(Error::overflow(number, MAX_VALUE));
    }

    let chunks = chunks(number);
    let mut chunk_len = chunks.len();
    let mut words: Vec<&str> = Vec::new();

    for chunk in chunks {
        chunk_len -= 1;
        let (ones, tens, hundreds) = get_digits(chunk);
        let (ones, tens, hundreds) = (ones as usize, tens as usize, hundreds as usize);

        if hundreds > 0 {
            words.push(HUNDREDS[hundreds]);
        }

        if (hundreds != 0 || (chunk_len == 0 && number > 99))
            && (tens == 1 || (tens > 1 && ones == 0))
        {
            words.push(AND);
        }

        if tens > 1 {
            words.push(TWENTIES[tens]);
        }

        // A bare "one" before a scale word is implied by the singular scale word.
        if tens == 1 {
            words.push(TEENS[ones]);
        } else if ones != 0 && !(chunk == 1 && chunk_len > 0) {
            if chunk > 9 || (chunk_len == 0 && number > 9) {
                words.push(AND);
            }

            let gender = SCALE[chunk_len].gender.unwrap_or(form);
            words.push(ONES[ones][gender.gender_index()]);
        }

        if chunk_len > 0 && chunk != 0 {
            words.push(*pluralize(u128::from(chunk), &SCALE[chunk_len].forms));
        }
    }

    Ok(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: u128) -> String {
        int_to_words(n, Form::Masculine).unwrap()
    }

    #[test]
    fn test_plural_class() {
        for n in [1, 21, 31, 101, 1001] {
            assert_eq!(plural_class(n), 0, "{n} should be singular");
        }
        for n in [0, 2, 11, 12, 20, 100, 111] {
            assert_eq!(plural_class(n), 1, "{n} should be plural");
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(*pluralize(1, &["илјада", "илјади"]), "илјада");
        assert_eq!(*pluralize(5, &["илјада", "илјади"]), "илјади");
        assert_eq!(*pluralize(21, &["денар", "денари"]), "денар");
        assert_eq!(*pluralize(111, &["денар", "денари"]), "денари");
    }

    #[test]
    fn test_basic() {
        assert_eq!(words(0), "");
        assert_eq!(words(1), "еден");
        assert_eq!(words(5), "пет");
        assert_eq!(words(10), "десет");
        assert_eq!(words(11), "единаесет");
        assert_eq!(words(15), "петнаесет");
        assert_eq!(words(20), "дваесет");
        assert_eq!(words(21), "дваесет и еден");
        assert_eq!(words(99), "деведесет и девет");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(words(100), "сто");
        assert_eq!(words(101), "сто и еден");
        assert_eq!(words(105), "сто и пет");
        assert_eq!(words(110), "сто и десет");
        assert_eq!(words(111), "сто и единаесет");
        assert_eq!(words(120), "сто и дваесет");
        assert_eq!(words(121), "сто дваесет и еден");
        assert_eq!(words(200), "двесте");
        assert_eq!(words(345), "триста четириесет и пет");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(words(1_000), "илјада");
        assert_eq!(words(1_001), "илјада и еден");
        assert_eq!(words(1_010), "илјада и десет");
        assert_eq!(words(1_021), "илјада дваесет и еден");
        assert_eq!(words(1_100), "илјада сто");
        assert_eq!(words(2_000), "две илјади");
        assert_eq!(words(11_000), "единаесет илјади");
        assert_eq!(words(21_000), "дваесет и една илјада");
        assert_eq!(words(12_345), "дванаесет илјади триста четириесет и пет");
    }

    #[test]
    fn test_large_scales() {
        assert_eq!(words(1_000_000), "милион");
        assert_eq!(words(2_000_000), "два милиони");
        assert_eq!(words(1_000_000_000), "милијарда");
        assert_eq!(words(2_000_000_000), "две милијарди");
        assert_eq!(words(3_000_001_000), "три милијарди илјада");
    }

    #[test]
    fn test_gender() {
        assert_eq!(int_to_words(1, Form::Feminine).unwrap(), "една");
        assert_eq!(int_to_words(1, Form::Neuter).unwrap(), "едно");
        assert_eq!(int_to_words(2, Form::Feminine).unwrap(), "две");
        assert_eq!(int_to_words(1, Form::Plural).unwrap(), "еден");
        // The thousand chunk stays feminine whatever the caller asks for.
        assert_eq!(int_to_words(2_002, Form::Masculine).unwrap(), "две илјади и два");
    }

    #[test]
    fn test_overflow() {
        assert!(int_to_words(MAX_VALUE - 1, Form::Masculine).is_ok());
        assert!(matches!(
            int_to_words(MAX_VALUE, Form::Masculine),
            Err(Error::Overflow { .. })
        ));
    }
}
