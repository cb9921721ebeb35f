//! Macedonian number word tables.
//!
//! Digit tables are indexed by the digit itself; slots that no digit selects
//! are left empty. Cardinal rows hold masculine, feminine and neuter forms;
//! ordinal rows add a fourth plural form.

use numwords_core::Form;

/// Word for zero.
pub const ZERO: &str = "нула";

/// Prefix for negative numbers.
pub const NEGWORD: &str = "минус";

/// Decimal separator word.
pub const POINTWORD: &str = "запирка";

/// Connective inserted before the last component of a chunk.
pub const AND: &str = "и";

/// Ordinal of zero, by form slot.
pub const ORDINAL_ZERO: [&str; 4] = ["нулти", "нулта", "нулто", "нулти"];

pub const ONES: [[&str; 3]; 10] = [
    ["", "", ""],
    ["еден", "една", "едно"],
    ["два", "две", "две"],
    ["три", "три", "три"],
    ["четири", "четири", "четири"],
    ["пет", "пет", "пет"],
    ["шест", "шест", "шест"],
    ["седум", "седум", "седум"],
    ["осум", "осум", "осум"],
    ["девет", "девет", "девет"],
];

pub const ORDINAL_ONES: [[&str; 4]; 10] = [
    ["", "", "", ""],
    ["прв", "прва", "прво", "први"],
    ["втор", "втора", "второ", "втори"],
    ["трет", "трета", "трето", "трети"],
    ["четврт", "четврта", "четврто", "четврти"],
    ["петти", "петта", "петто", "петти"],
    ["шестти", "шестта", "шестто", "шестти"],
    ["седми", "седма", "седмо", "седми"],
    ["осми", "осма", "осмо", "осми"],
    ["деветти", "деветта", "деветто", "деветти"],
];

/// Ten through nineteen, keyed by the ones digit of the chunk.
pub const TEENS: [&str; 10] = [
    "десет",
    "единаесет",
    "дванаесет",
    "тринаесет",
    "четиринаесет",
    "петнаесет",
    "шеснаесет",
    "седумнаесет",
    "осумнаесет",
    "деветнаесет",
];

/// Ordinal ten through nineteen, keyed by the ones digit of the chunk.
pub const ORDINAL_TEENS: [[&str; 4]; 10] = [
    ["десетти", "десетта", "десетто", "десетти"],
    ["единаесетти", "единаесетта", "единаесетто", "единаесетти"],
    ["дванаесетти", "дванаесетта", "дванаесетто", "дванаесетти"],
    ["тринаесетти", "тринаесетта", "тринаесетто", "тринаесетти"],
    ["четиринаесетти", "четиринаесетта", "четиринаесетто", "четиринаесетти"],
    ["петнаесетти", "петнаесетта", "петнаесетто", "петнаесетти"],
    ["шеснаесетти", "шеснаесетта", "шеснаесетто", "шеснаесетти"],
    ["седумнаесетти", "седумнаесетта", "седумнаесетто", "седумнаесетти"],
    ["осумнаесетти", "осумнаесетта", "осумнаесетто", "осумнаесетти"],
    ["деветнаесетти", "деветнаесетта", "деветнаесетто", "деветнаесетти"],
];

pub const TWENTIES: [&str; 10] = [
    "",
    "",
    "дваесет",
    "триесет",
    "четириесет",
    "педесет",
    "шеесет",
    "седумдесет",
    "осумдесет",
    "деведесет",
];

pub const ORDINAL_TWENTIES: [[&str; 4]; 10] = [
    ["", "", "", ""],
    ["", "", "", ""],
    ["дваесетти", "дваесетта", "дваесетто", "дваесетти"],
    ["триесетти", "триесетта", "триесетто", "триесетти"],
    ["четириесетти", "четириесетта", "четириесетто", "четириесетти"],
    ["педесетти", "педесетта", "педесетто", "педесетти"],
    ["шеесетти", "шеесетта", "шеесетто", "шеесетти"],
    ["седумдесетти", "седумдесетта", "седумдесетто", "седумдесетти"],
    ["осумдесетти", "осумдесетта", "осумдесетто", "осумдесетти"],
    ["деведесетти", "деведесетта", "деведесетто", "деведесетти"],
];

pub const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двесте",
    "триста",
    "четиристотини",
    "петстотини",
    "шестотини",
    "седумстотини",
    "осумстотини",
    "деветстотини",
];

pub const ORDINAL_HUNDREDS: [[&str; 4]; 10] = [
    ["", "", "", ""],
    ["стоти", "стота", "стото", "стоти"],
    ["двестоти", "двестота", "двестото", "двестоти"],
    ["тристоти", "тристота", "тристото", "тристоти"],
    ["четиристоти", "четиристота", "четиристото", "четиристоти"],
    ["петстоти", "петстота", "петстото", "петстоти"],
    ["шестоти", "шестота", "шестото", "шестоти"],
    ["седумстоти", "седумстота", "седумстото", "седумстоти"],
    ["осумстоти", "осумстота", "осумстото", "осумстоти"],
    ["деветстоти", "деветстота", "деветстото", "деветстоти"],
];

/// A power-of-thousand scale word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Singular and plural word.
    pub forms: [&'static str; 2],
    /// Gender the scale word imposes on the digits of its chunk.
    pub gender: Option<Form>,
}

impl Scale {
    const fn new(singular: &'static str, plural: &'static str, gender: Option<Form>) -> Self {
        Self {
            forms: [singular, plural],
            gender,
        }
    }
}

/// Scale words by chunk position; index 0 is the units chunk.
pub const SCALE: [Scale; 11] = [
    Scale::new("", "", None),
    Scale::new("илјада", "илјади", Some(Form::Feminine)), // 10^3
    Scale::new("милион", "милиони", Some(Form::Masculine)), // 10^6
    Scale::new("милијарда", "милијарди", Some(Form::Feminine)), // 10^9
    Scale::new("билион", "билиони", Some(Form::Masculine)), // 10^12
    Scale::new("билијарда", "билијарди", Some(Form::Feminine)), // 10^15
    Scale::new("трилион", "трилиони", Some(Form::Masculine)), // 10^18
    Scale::new("трилијарда", "трилијарди", Some(Form::Feminine)), // 10^21
    Scale::new("квадрилион", "квадрилиони", Some(Form::Masculine)), // 10^24
    Scale::new("квадрилијарда", "квадрилијарди", Some(Form::Feminine)), // 10^27
    Scale::new("квинтилион", "квинтилиони", Some(Form::Masculine)), // 10^30
];

/// Ordinal scale words. Only thousandths and millionths are tabulated.
pub const ORDINAL_SCALE: [[&str; 4]; 3] = [
    ["", "", "", ""],
    ["илјадит", "илјадита", "илјадито", "илјадити"],
    ["милионит", "милионита", "милионито", "милионити"],
];

/// Exclusive upper bound on magnitudes the scale table can spell.
pub const MAX_VALUE: u128 = 10u128.pow(3 * SCALE.len() as u32);
