use tracker_core::currency::{format, to_raw, Currency};

#[test]
fn formats_grouped_amount_with_symbol() {
    assert_eq!(format("1234567.8", Currency::Usd), "$1,234,567.8");
    assert_eq!(format("2500", Currency::Kes), "KSh2,500");
    assert_eq!(format("999", Currency::Jpy), "¥999");
}

#[test]
fn raw_payload_survives_formatting() {
    for raw in ["7", "42", "1234", "1234567.8", "0.5", "12345."] {
        for currency in Currency::ALL {
            assert_eq!(
                to_raw(&format(raw, currency)),
                raw,
                "raw {raw:?} through {currency:?}"
            );
        }
    }
}

#[test]
fn stray_text_never_fails() {
    assert_eq!(format("", Currency::Usd), "$");
    assert_eq!(format(".", Currency::Usd), "$.");
    assert_eq!(format("12.34.56", Currency::Usd), "$12.34");
    assert_eq!(to_raw("€1.234,99"), "1.23499");
}
