use crate::domain::report::DigitWarning;
use crate::tables::combinations::hidden_affection_endings;

struct TripletRule {
    values: &'static [&'static str],
    description: &'static str,
    detail: &'static str,
}

const PEACH_BLOSSOM: TripletRule = TripletRule {
    values: &["618", "816"],
    description: "Lục Sát + Ngũ Quỷ: dễ có duyên với người khác phái, nát Đào Hoa",
    detail: "Đào hoa nát, tình cảm không ổn định, có thể có nhiều mối quan hệ phức tạp.",
};

const HEALTH: TripletRule = TripletRule {
    values: &["218", "812"],
    description: "Tuyệt Mệnh + Ngũ Quỷ: dễ dẫn phát sức khỏe kém, bệnh nan y",
    detail: "Rủi ro sức khỏe cao, cần chú ý tim mạch và các bệnh mạn tính.",
};

const HIDDEN_AFFECTION_DESCRIPTION: &str =
    "Tình cảm ngầm: xuất hiện tình cảm ngầm, tình ngoài giá thú, tình tay ba";
const HIDDEN_AFFECTION_DETAIL: &str =
    "Có nguy cơ tình cảm phức tạp, quan hệ ngoài luồng, dễ gây đổ vỡ gia đình.";

/// Warnings read straight off the digits, independent of segmentation.
pub fn digit_warnings(normalized: &str) -> Vec<DigitWarning> {
    let digits: Vec<char> = normalized.chars().collect();
    let mut warnings = Vec::new();

    for (i, window) in digits.windows(3).enumerate() {
        let forward: String = window.iter().collect();
        let backward: String = window.iter().rev().collect();
        let hit = |values: &[&str]| {
            values.contains(&forward.as_str()) || values.contains(&backward.as_str())
        };
        let position = format!("{}-{}", i + 1, i + 3);

        for rule in [&PEACH_BLOSSOM, &HEALTH] {
            if hit(rule.values) {
                warnings.push(DigitWarning {
                    combination: forward.clone(),
                    position: position.clone(),
                    description: rule.description,
                    detail: rule.detail,
                });
            }
        }
        if hit(hidden_affection_endings()) {
            warnings.push(DigitWarning {
                combination: forward.clone(),
                position,
                description: HIDDEN_AFFECTION_DESCRIPTION,
                detail: HIDDEN_AFFECTION_DETAIL,
            });
        }
    }

    for (i, window) in digits.windows(2).enumerate() {
        if matches!(window, ['1', '9'] | ['9', '1']) {
            warnings.push(DigitWarning {
                combination: window.iter().collect(),
                position: format!("{}-{}", i + 1, i + 2),
                description: "19/91: Không thích hợp nữ nhân dùng, dễ trở thành nữ cường nhân",
                detail: "Phụ nữ có cá tính mạnh, cứng rắn, thiên về công việc, có thể bỏ bê gia đình.",
            });
        }
    }

    let zeros = digits.iter().filter(|c| **c == '0').count();
    if zeros > 2 {
        warnings.push(DigitWarning {
            combination: format!("0 (xuất hiện {} lần)", zeros),
            position: "Nhiều vị trí".to_string(),
            description: "Quá nhiều số 0: hao tổn nguyên khí, sức khỏe dễ mệt nhọc",
            detail: "Năng lượng suy giảm, thể trạng dễ mệt mỏi, đầu tư nhiều nhưng hiệu quả thấp.",
        });
    }

    if digits.last() == Some(&'0') {
        warnings.push(DigitWarning {
            combination: "0".to_string(),
            position: "Cuối".to_string(),
            description: "Số đuôi 0: tứ đại giai không, cuối cùng là không",
            detail: "Mọi nỗ lực cuối cùng có thể không mang lại kết quả như mong đợi.",
        });
    }

    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "digit warnings raised");
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(number: &str) -> Vec<&'static str> {
        digit_warnings(number).iter().map(|w| w.description).collect()
    }

    #[test]
    fn test_clean_number_has_no_warnings() {
        assert!(digit_warnings("0912345678").iter().all(|w| w.combination == "91"));
        assert!(digit_warnings("0234678234").is_empty());
    }

    #[test]
    fn test_triplet_warnings() {
        let warnings = digit_warnings("0946181234");
        let peach = warnings
            .iter()
            .find(|w| w.description.starts_with("Lục Sát"))
            .unwrap();
        assert_eq!(peach.combination, "618");
        assert_eq!(peach.position, "4-6");

        assert!(descriptions("0978122346").iter().any(|d| d.starts_with("Tuyệt Mệnh")));
    }

    #[test]
    fn test_hidden_affection_anywhere() {
        let warnings = digit_warnings("0961034789");
        assert!(warnings
            .iter()
            .any(|w| w.combination == "103" && w.description.starts_with("Tình cảm ngầm")));
    }

    #[test]
    fn test_zero_rules() {
        let d = descriptions("0900700340");
        assert!(d.iter().any(|d| d.starts_with("Quá nhiều số 0")));
        assert!(d.iter().any(|d| d.starts_with("Số đuôi 0")));

        // exactly two zeros is tolerated
        assert!(!descriptions("0987654320")
            .iter()
            .any(|d| d.starts_with("Quá nhiều số 0")));
    }
}
