// src/utils/format.rs

// Asterisks standing in for a password of the given length
pub fn mask_password(length: usize) -> String {
    "*".repeat(length)
}

pub fn check_mark(present: bool) -> &'static str {
    if present {
        "✓"
    } else {
        "✗"
    }
}

// Format a byte count as kilobytes with two decimals
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

// Group digits in thousands, e.g. 50000 -> "50,000"
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(50000), "50,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_size_kb() {
        assert_eq!(format_size_kb(0), "0.00 KB");
        assert_eq!(format_size_kb(1536), "1.50 KB");
    }

    #[test]
    fn test_mask_password() {
        assert_eq!(mask_password(4), "****");
        assert_eq!(mask_password(0), "");
    }
}
