//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```text
/// format_number_with_decimals(1234.567, 2) == "1 234.57"
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value), // По умолчанию 2 знака
    };

    // Разделяем целую и дробную части
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Форматирует цену позиции меню: знак валюты + 2 знака после запятой
///
/// # Примеры
///
/// ```text
/// format_price(1234.5) == "$1 234.50"
/// ```
pub fn format_price(value: f64) -> String {
    format!("${}", format_number_with_decimals(value, 2))
}

/// Форматирует целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(99.9), "$99.90");
        assert_eq!(format_price(1234.5), "$1 234.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1 234.56");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1 234");
    }
}
