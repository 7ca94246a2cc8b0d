//! Утилиты форматирования денежных сумм

/// Форматирует число с фиксированным количеством знаков после точки.
///
/// No thousands separator: balances are shown the way the server's own
/// pages show them (`1234.50`).
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    // -0.0 would otherwise render as "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };

    // `format!` breaks exact ties to even; money rounds them away from zero
    if is_decimal_tie(value, decimals) {
        let above = f64::from_bits(value.abs().to_bits() + 1);
        let digits = format!("{:.*}", decimals as usize, above);
        return if value < 0.0 { format!("-{}", digits) } else { digits };
    }

    format!("{:.*}", decimals as usize, value)
}

/// Whether `value` lies exactly halfway between two numbers with `decimals`
/// fraction digits.
///
/// With `value = m * 2^e` and `m` odd, `2 * value * 10^d` equals
/// `m * 5^d * 2^(e + d + 1)`, an odd integer only when `e == -(d + 1)`.
fn is_decimal_tie(value: f64, decimals: u8) -> bool {
    if !value.is_finite() || value == 0.0 {
        return false;
    }

    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    exponent + mantissa.trailing_zeros() as i32 == -(decimals as i32 + 1)
}

/// Сумма с 2 знаками после точки
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Сумма с префиксом валюты: `R$ 123.40`
pub fn format_currency(prefix: &str, value: f64) -> String {
    let amount = format_money(value);
    if prefix.is_empty() {
        amount
    } else {
        format!("{} {}", prefix, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(123.4), "123.40");
        assert_eq!(format_money(1234567.891), "1234567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-0.0), "0.00");
        assert_eq!(format_money(-12.5), "-12.50");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1234.567");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(format_money(1.125), "1.13");
        assert_eq!(format_money(0.375), "0.38");
        assert_eq!(format_money(-1.125), "-1.13");
        assert_eq!(format_number_with_decimals(2.5, 0), "3");
        assert_eq!(format_number_with_decimals(0.5, 0), "1");
        // not representable exactly, so not a tie
        assert_eq!(format_money(1.005), "1.00");
        assert_eq!(format_money(2.675), "2.67");
        assert_eq!(format_currency("R$", 1.125), "R$ 1.13");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("R$", 123.4), "R$ 123.40");
        assert_eq!(format_currency("R$", 10.0), "R$ 10.00");
        assert_eq!(format_currency("", 10.0), "10.00");
    }
}
