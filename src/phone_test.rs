use super::*;

#[test]
fn local_number_gets_country_code() {
    assert_eq!(format_phone("0712345678"), "254712345678");
}

#[test]
fn international_number_only_loses_punctuation() {
    assert_eq!(format_phone("+254712345678"), "254712345678");
    assert_eq!(format_phone("+254 712 345-678"), "254712345678");
}

#[test]
fn separators_are_stripped_before_local_check() {
    assert_eq!(format_phone("(0712) 345 678"), "254712345678");
    assert_eq!(format_phone(" 0712-345-678 "), "254712345678");
}

#[test]
fn only_one_leading_zero_is_replaced() {
    assert_eq!(format_phone("00712"), "2540712");
}

#[test]
fn digits_without_leading_zero_pass_through() {
    assert_eq!(format_phone("712345678"), "712345678");
}

#[test]
fn empty_and_non_digit_input_yield_empty() {
    assert_eq!(format_phone(""), "");
    assert_eq!(format_phone("call us"), "");
}

#[test]
fn country_code_is_configurable() {
    assert_eq!(format_phone_with("0812 345 678", "255"), "255812345678");
}
