use crate::domain::report::RootNumber;
use crate::tables::digits::element_of;

/// Digit sum folded until it is a single digit, with its Ngũ hành.
pub fn root_number(normalized: &str) -> Option<RootNumber> {
    if normalized.is_empty() {
        return None;
    }

    let mut total: u32 = normalized.chars().filter_map(|c| c.to_digit(10)).sum();
    while total > 9 {
        total = digit_sum(total);
    }

    let value = total as u8;
    Some(RootNumber {
        value,
        element: element_of(value),
    })
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_to_single_digit() {
        // 0+9+1+2+3+4+5+6+7+8 = 45 -> 9
        let root = root_number("0912345678").unwrap();
        assert_eq!(root.value, 9);
        assert_eq!(root.element, "Hỏa");
    }

    #[test]
    fn test_small_and_empty() {
        assert_eq!(root_number("11").unwrap().value, 2);
        assert_eq!(root_number("000").unwrap().element, "Thủy");
        assert!(root_number("").is_none());
    }
}
