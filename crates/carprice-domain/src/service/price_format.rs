//! Price display formatting

/// Format with two decimals and comma-grouped thousands (e.g. "452,345.68")
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to "0.00"; drop the sign there
    let sign = if price < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// The line shown to the user after a successful prediction
pub fn format_price_message(price: f64) -> String {
    format!("Car Price is going to be {}", format_price(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_price(452345.678), "452,345.68");
        assert_eq!(format_price(1234567.0), "1,234,567.00");
        assert_eq!(format_price(100.0), "100.00");
        assert_eq!(format_price(999.999), "1,000.00");
    }

    #[test]
    fn test_small_and_zero() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(5.5), "5.50");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_price(-1234.5), "-1,234.50");
        assert_eq!(format_price(-0.001), "0.00");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            format_price_message(350000.0),
            "Car Price is going to be 350,000.00"
        );
    }
}
