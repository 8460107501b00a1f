use inventory_utils::stock::{get_stock_status, StockError, StockStatus};

#[test]
fn test_stock_status_table() {
    let cases: &[(i64, i64, StockStatus)] = &[
        (0, 10, StockStatus::OutOfStock),
        (0, 0, StockStatus::OutOfStock),
        (-5, 10, StockStatus::OutOfStock),
        (-5, -5, StockStatus::OutOfStock),
        (5, 10, StockStatus::Low),
        (10, 10, StockStatus::Low),
        (15, 10, StockStatus::Normal),
        (10, -5, StockStatus::Normal),
    ];

    for &(current, minimum, expected) in cases {
        assert_eq!(
            get_stock_status(current, minimum).unwrap(),
            expected,
            "current={} minimum={}",
            current,
            minimum
        );
    }
}

#[test]
fn test_stock_status_codes_from_strings() {
    assert_eq!(get_stock_status("10", "5").unwrap().code(), 1);
    assert_eq!(get_stock_status("5", "10").unwrap().code(), -1);
    assert_eq!(get_stock_status("0", "10").unwrap().code(), 0);
}

#[test]
fn test_string_and_integer_inputs_agree() {
    for current in -3i64..=12 {
        for minimum in -3i64..=12 {
            let from_ints = get_stock_status(current, minimum).unwrap();
            let from_text =
                get_stock_status(current.to_string(), minimum.to_string()).unwrap();
            assert_eq!(from_ints, from_text);
        }
    }
}

#[test]
fn test_non_numeric_input_is_invalid() {
    let err = get_stock_status("abc", "10").unwrap_err();
    assert!(matches!(err, StockError::InvalidInput { .. }));
    assert!(err.to_string().contains("abc"));

    assert!(get_stock_status("10", "").is_err());
}

#[test]
fn test_decimal_and_exponent_text_is_coerced() {
    assert_eq!(get_stock_status("5.5", "10").unwrap(), StockStatus::Low);
    assert_eq!(get_stock_status("0.5", "0").unwrap(), StockStatus::Normal);
    assert_eq!(get_stock_status("1e3", "10").unwrap(), StockStatus::Normal);
}

#[test]
fn test_non_finite_text_is_invalid() {
    for text in ["Infinity", "inf", "NaN"] {
        assert!(get_stock_status(text, "10").is_err(), "{}", text);
    }
}
