//! Currency selection and amount-text formatting.

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Kes,
    Ngn,
    Inr,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Kes,
        Currency::Ngn,
        Currency::Inr,
        Currency::Jpy,
    ];

    /// Symbol prepended to formatted amounts.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Kes => "KSh",
            Currency::Ngn => "₦",
            Currency::Inr => "₹",
            Currency::Jpy => "¥",
        }
    }

    /// Menu label combining code and symbol.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Usd => "USD ($)",
            Currency::Eur => "EUR (€)",
            Currency::Gbp => "GBP (£)",
            Currency::Kes => "KES (KSh)",
            Currency::Ngn => "NGN (₦)",
            Currency::Inr => "INR (₹)",
            Currency::Jpy => "JPY (¥)",
        }
    }

    /// Resolves a persisted symbol string back to its currency.
    pub fn from_symbol(symbol: &str) -> Option<Currency> {
        Currency::ALL.into_iter().find(|c| c.symbol() == symbol)
    }
}

/// Strips `input` down to the raw numeric text a user has typed.
///
/// Every character that is not an ASCII digit or a decimal point is removed.
/// If more than one decimal point survives, only the first point's two sides
/// are kept; anything after a second point is discarded.
pub fn to_raw(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match cleaned.split_once('.') {
        Some((int_part, rest)) => {
            let dec_part = rest.split('.').next().unwrap_or("");
            format!("{}.{}", int_part, dec_part)
        }
        None => cleaned,
    }
}

/// Formats a raw amount string for display: thousands grouping on the integer
/// part and the currency symbol prepended with no separator.
///
/// Best-effort over arbitrary text; never fails. An empty raw value formats to
/// the symbol alone, and a lone decimal point to the symbol plus `"."`.
pub fn format(raw: &str, currency: Currency) -> String {
    let cleaned = to_raw(raw);
    let mut body = match cleaned.split_once('.') {
        Some((int_part, dec_part)) => format!("{}.{}", group_digits(int_part), dec_part),
        None => group_digits(&cleaned),
    };
    body.insert_str(0, currency.symbol());
    body
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
