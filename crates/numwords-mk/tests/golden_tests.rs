//! Golden tests for Macedonian number spelling.
//!
//! These tests verify that the converter produces the expected words for a
//! corpus of representative inputs.

use numwords_core::{ConversionKind, ConvertOptions, CurrencyOptions, Form, Number, NumberToWords};
use numwords_mk::Num2WordMk;

/// Test case structure for golden tests.
struct GoldenTestCase {
    input: &'static str,
    expected: &'static str,
    form: Form,
    description: &'static str,
}

const fn case(
    input: &'static str,
    expected: &'static str,
    form: Form,
    description: &'static str,
) -> GoldenTestCase {
    GoldenTestCase {
        input,
        expected,
        form,
        description,
    }
}

/// Cardinal golden tests.
const CARDINAL_GOLDEN_TESTS: &[GoldenTestCase] = &[
    case("0", "нула", Form::Masculine, "Zero"),
    case("1", "еден", Form::Masculine, "One, masculine"),
    case("1", "една", Form::Feminine, "One, feminine"),
    case("1", "едно", Form::Neuter, "One, neuter"),
    case("2", "две", Form::Neuter, "Two, neuter"),
    case("-15", "минус петнаесет", Form::Masculine, "Negative teen"),
    case("19", "деветнаесет", Form::Masculine, "Last teen"),
    case("40", "четириесет", Form::Masculine, "Bare tens"),
    case("67", "шеесет и седум", Form::Masculine, "Tens and ones"),
    case("100", "сто", Form::Masculine, "Bare hundred"),
    case("416", "четиристотини и шеснаесет", Form::Masculine, "Hundreds and teen"),
    case("780", "седумстотини и осумдесет", Form::Masculine, "Hundreds and bare tens"),
    case("999", "деветстотини деведесет и девет", Form::Masculine, "Full chunk"),
    case("1000", "илјада", Form::Masculine, "Bare thousand"),
    case("1500", "илјада петстотини", Form::Masculine, "Thousand and hundreds"),
    case("2001", "две илјади и еден", Form::Masculine, "Thousands and one"),
    case("31000", "триесет и една илјада", Form::Masculine, "Singular thousand after 31"),
    case("111000", "сто и единаесет илјади", Form::Masculine, "Plural thousand after 111"),
    case("1000000", "милион", Form::Masculine, "Bare million"),
    case("21000000", "дваесет и еден милион", Form::Masculine, "Masculine million"),
    case("2000000000", "две милијарди", Form::Masculine, "Feminine billion"),
    case(
        "1234567",
        "милион двесте триесет и четири илјади петстотини шеесет и седум",
        Form::Masculine,
        "Mixed scales",
    ),
    case("3.05", "три запирка нула пет", Form::Masculine, "Leading fractional zero"),
    case("3,5", "три запирка пет", Form::Masculine, "Comma decimal separator"),
    case("1.1", "една запирка една", Form::Feminine, "Feminine decimal"),
];

/// Ordinal golden tests.
const ORDINAL_GOLDEN_TESTS: &[GoldenTestCase] = &[
    case("1", "прв", Form::Masculine, "First"),
    case("2", "втора", Form::Feminine, "Second, feminine"),
    case("3", "трето", Form::Neuter, "Third, neuter"),
    case("4", "четврти", Form::Plural, "Fourth, plural"),
    case("12", "дванаесетти", Form::Masculine, "Teen"),
    case("30", "триесетти", Form::Masculine, "Bare tens"),
    case("21", "дваесет и прв", Form::Masculine, "Tens and ones"),
    case("200", "двестоти", Form::Masculine, "Bare hundreds"),
    case("215", "двесте и петнаесетти", Form::Masculine, "Hundreds and teen"),
    case("1000", "илјадит", Form::Masculine, "Thousandth"),
    case("3000", "три илјадита", Form::Feminine, "Thousandth, feminine"),
    case("1001", "илјада и прв", Form::Masculine, "Thousand and first"),
    case("1000000", "милионит", Form::Masculine, "Millionth"),
    case("1000000002", "милијарда и втор", Form::Masculine, "Billion and second"),
];

fn run_golden(cases: &[GoldenTestCase], kind: ConversionKind) {
    let converter = Num2WordMk::new();
    let mut failures = Vec::new();

    for test_case in cases {
        let value: Number = test_case.input.parse().expect("valid golden input");
        let options = ConvertOptions {
            form: test_case.form,
            ..ConvertOptions::default()
        };
        let actual = converter
            .convert(value, kind, &options)
            .expect("golden input converts");

        if actual != test_case.expected {
            failures.push(format!(
                "{}: input {:?} ({})\n  expected: {}\n  actual:   {}",
                test_case.description,
                test_case.input,
                test_case.form,
                test_case.expected,
                actual
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} golden test(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn test_cardinal_golden() {
    run_golden(CARDINAL_GOLDEN_TESTS, ConversionKind::Cardinal);
}

#[test]
fn test_ordinal_golden() {
    run_golden(ORDINAL_GOLDEN_TESTS, ConversionKind::Ordinal);
}

#[test]
fn test_year_golden() {
    let converter = Num2WordMk::new();
    let cases = [
        (1914, "илјада деветстотини и четиринаесетта"),
        (1991, "илјада деветстотини деведесет и прва"),
        (2000, "две илјадита"),
        (2010, "две илјади и десетта"),
        (2025, "две илјади дваесет и петта"),
    ];

    for (year, expected) in cases {
        assert_eq!(
            converter.to_year(Number::from(year)).unwrap(),
            expected,
            "year {year}"
        );
    }
}

#[test]
fn test_currency_golden() {
    let converter = Num2WordMk::new();
    let options = CurrencyOptions::default();
    let cases = [
        ("1.01", "EUR", "едно евро, еден цент"),
        ("2.02", "EUR", "две евра, два центи"),
        ("100", "MKD", "сто денари, нула дени"),
        ("1000.01", "MKD", "илјада денари, еден ден"),
        ("31.5", "USD", "триесет и еден долар, педесет центи"),
        ("-1.5", "USD", "минус еден долар, педесет центи"),
    ];

    for (amount, code, expected) in cases {
        let value: Number = amount.parse().unwrap();
        assert_eq!(
            converter.to_currency(value, code, &options).unwrap(),
            expected,
            "{amount} {code}"
        );
    }
}

#[test]
fn test_ordinal_num_golden() {
    let converter = Num2WordMk::new();
    let options = ConvertOptions::default();

    let cases = [(1, "1-рв"), (2, "2-ор"), (8, "8-ми"), (100, "100-ти"), (1000, "1000-ит")];
    for (n, expected) in cases {
        assert_eq!(
            converter
                .convert(Number::from(n), ConversionKind::OrdinalNum, &options)
                .unwrap(),
            expected
        );
    }
}
