//! Single-digit readings for the key positions and the five-element map.

/// Reading of the final digit.
static LAST_DIGIT: [&str; 10] = [
    "Số 0: tứ đại giai không, kết quả dễ trống rỗng",
    "Số 1: khởi đầu, độc lập, làm chủ",
    "Số 2: hoà hợp, có đôi có cặp, cần người đồng hành",
    "Số 3: Tam là Tài, tài lộc và sinh sôi",
    "Số 4: Tứ, bền bỉ nhưng nhiều thử thách",
    "Số 5: Ngũ, trung tâm, khuếch đại năng lượng đi kèm",
    "Số 6: Lục là Lộc, thuận lợi và đủ đầy",
    "Số 7: Thất, cứng rắn, kiên định, dễ gặp thị phi",
    "Số 8: Bát là Phát, phát triển và thịnh vượng",
    "Số 9: Cửu, trường cửu, bền lâu",
];

/// Reading of the digit in the third position from the end.
static THIRD_FROM_END: [&str; 10] = [
    "Nền tảng trống, nỗ lực dễ hao phí",
    "Chủ động mở đường, tự lập sự nghiệp",
    "Dựa vào hợp tác và các mối quan hệ",
    "Có tài lộc hỗ trợ từ bên trong",
    "Vất vả tích luỹ, tiến chậm mà chắc",
    "Giữ vai trò trung gian, kết nối",
    "Được lộc từ gia đình và người thân",
    "Ý chí mạnh, hay tự quyết",
    "Đà phát triển tốt, dễ mở rộng",
    "Kiên trì lâu dài, trọng danh dự",
];

/// Reading of the digit in the fifth position from the end.
static FIFTH_FROM_END: [&str; 10] = [
    "Giai đoạn đầu nhiều trống trải",
    "Khởi sự sớm, tự thân vận động",
    "Xuất phát từ hợp tác, có người dẫn dắt",
    "Xuất phát có tài lộc, thuận lợi",
    "Khởi đầu gian nan, cần bền bỉ",
    "Khởi đầu cân bằng, linh hoạt",
    "Gốc gác đủ đầy, được che chở",
    "Tuổi trẻ cứng cỏi, nhiều va chạm",
    "Nền móng vững, phát triển sớm",
    "Chí hướng lớn từ sớm",
];

/// Ngũ hành of a root digit.
static ELEMENTS: [&str; 10] = [
    "Thủy", "Thủy", "Thổ", "Mộc", "Kim", "Thổ", "Kim", "Kim", "Thổ", "Hỏa",
];

const UNKNOWN: &str = "Không xác định";

fn index(digit: char) -> Option<usize> {
    digit.to_digit(10).map(|d| d as usize)
}

pub fn last_digit_meaning(digit: char) -> &'static str {
    index(digit).map_or(UNKNOWN, |i| LAST_DIGIT[i])
}

pub fn third_from_end_meaning(digit: char) -> &'static str {
    index(digit).map_or(UNKNOWN, |i| THIRD_FROM_END[i])
}

pub fn fifth_from_end_meaning(digit: char) -> &'static str {
    index(digit).map_or(UNKNOWN, |i| FIFTH_FROM_END[i])
}

pub fn element_of(root: u8) -> &'static str {
    ELEMENTS.get(root as usize).copied().unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements() {
        assert_eq!(element_of(1), "Thủy");
        assert_eq!(element_of(3), "Mộc");
        assert_eq!(element_of(9), "Hỏa");
        assert_eq!(element_of(0), "Thủy");
        assert_eq!(element_of(12), UNKNOWN);
    }

    #[test]
    fn test_non_digit_is_unknown() {
        assert_eq!(last_digit_meaning('x'), UNKNOWN);
        assert!(last_digit_meaning('8').contains("Phát"));
    }
}
