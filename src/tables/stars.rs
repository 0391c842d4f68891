//! The eight stars of Bát Cục Linh Số.
//!
//! Each star owns eight canonical two-digit members (a pair and its
//! reverse, four times) weighted 4, 3, 2, 1 from strongest to weakest.
//! Phục Vị is the exception: its doubled digits carry individual weights.

use crate::domain::model::{Polarity, Star, StarKey};

pub const TABLE_VERSION: &str = "bat-tinh/2024.1";

/// Immutable catalogue shared by every analysis.
#[derive(Debug)]
pub struct StarTable {
    pub version: &'static str,
    pub stars: &'static [Star],
}

impl StarTable {
    pub fn get(&self, key: StarKey) -> &'static Star {
        // STARS is ordered like StarKey::ALL
        &STARS[key as usize]
    }

    /// Finds the star whose member list holds `pair`, with that member's weight.
    pub fn lookup(&self, pair: &str) -> Option<(&'static Star, u8)> {
        if pair.len() != 2 {
            return None;
        }
        STARS
            .iter()
            .find_map(|star| star.energy_for(pair).map(|energy| (star, energy)))
    }
}

static STAR_TABLE: StarTable = StarTable {
    version: TABLE_VERSION,
    stars: &STARS,
};

pub fn star_table() -> &'static StarTable {
    &STAR_TABLE
}

// ---------------------------------------------------------------------------
// Tứ cát tinh
// ---------------------------------------------------------------------------

const SINH_KHI: Star = Star {
    key: StarKey::SinhKhi,
    display_name: "Sinh Khí",
    description: "Vui vẻ, quý nhân, dẫn đạo lực",
    polarity: Polarity::Auspicious,
    member_energies: &[
        ("14", 4), ("41", 4),
        ("67", 3), ("76", 3),
        ("39", 2), ("93", 2),
        ("28", 1), ("82", 1),
    ],
    zero_variant: "Sinh Khí có số 0: quý nhân hoá tiểu nhân, chiêu nạp người xấu về bên mình",
    position: Some("Nên ở giữa"),
    traits: &[
        "Lạc quan, tuỳ duyên, không so đo cưỡng cầu",
        "Nhiều nhân duyên và bạn bè tốt, giỏi hoà giải và kết nối",
        "Quý nhân mang tiền tài đến, có những khoản tiền bất ngờ",
        "Hơi lười thay đổi, an phận, thiếu chủ kiến",
    ],
};

const THIEN_Y: Star = Star {
    key: StarKey::ThienY,
    display_name: "Thiên Y",
    description: "Tiền tài, tình cảm, hồi báo",
    polarity: Polarity::Auspicious,
    member_energies: &[
        ("13", 4), ("31", 4),
        ("68", 3), ("86", 3),
        ("49", 2), ("94", 2),
        ("27", 1), ("72", 1),
    ],
    zero_variant: "Thiên Y có số 0: đang có tiền thành mất tiền, lớn mất lớn, ít mất ít",
    position: Some("Nên ở hậu phương"),
    traits: &[
        "Thông minh, thiện lương, hào phóng, thích giúp đỡ người khác",
        "Tiền tài đổ về từ tứ phương tám hướng",
        "Tình cảm chân chính, dễ gặp đối tượng lý tưởng",
        "Quá thiện lương nên dễ bị lừa và lợi dụng",
    ],
};

const DIEN_NIEN: Star = Star {
    key: StarKey::DienNien,
    display_name: "Diên Niên",
    description: "Năng lực chuyên nghiệp, công việc",
    polarity: Polarity::Auspicious,
    member_energies: &[
        ("19", 4), ("91", 4),
        ("78", 3), ("87", 3),
        ("34", 2), ("43", 2),
        ("26", 1), ("62", 1),
    ],
    zero_variant: "Diên Niên có số 0: làm việc nỗ lực mãi không thành, công việc cứ bị cản trở",
    position: Some("Nên ở hậu phương"),
    traits: &[
        "Có trách nhiệm, trọng chữ tín, đã nói là làm",
        "Năng lực chuyên nghiệp, hợp làm lãnh đạo và kỹ thuật",
        "Giữ tiền tốt, tính toán cẩn thận",
        "Cái tôi mạnh, cố chấp, dễ lao lực",
    ],
};

// ---------------------------------------------------------------------------
// Phục Vị: theo cát thì cát, theo hung thì hung
// ---------------------------------------------------------------------------

const PHUC_VI: Star = Star {
    key: StarKey::PhucVi,
    display_name: "Phục Vị",
    description: "Chịu đựng, khó thay đổi",
    polarity: Polarity::Mixed,
    member_energies: &[
        ("11", 4), ("22", 4),
        ("88", 3), ("99", 3),
        ("66", 2), ("77", 2),
        ("33", 1), ("44", 1),
    ],
    zero_variant: "Phục Vị có số 0: trì trệ, chờ đợi, không thay đổi, dễ bỏ lỡ cơ hội",
    position: Some("Không nên có"),
    traits: &[
        "Giỏi chịu đựng, nghị lực hơn người, tiềm ẩn năng lực lớn",
        "Thiếu cảm giác an toàn, khó đưa ra lựa chọn",
        "Sợ mạo hiểm, hay chờ đợi quá lâu mà mất cơ hội",
        "Người nhà là quý nhân tốt nhất",
    ],
};

// ---------------------------------------------------------------------------
// Tứ hung tinh
// ---------------------------------------------------------------------------

const HOA_HAI: Star = Star {
    key: StarKey::HoaHai,
    display_name: "Họa Hại",
    description: "Khẩu tài, chi tiêu lớn, lấy miệng là nghiệp",
    polarity: Polarity::Inauspicious,
    member_energies: &[
        ("17", 4), ("71", 4),
        ("89", 3), ("98", 3),
        ("46", 2), ("64", 2),
        ("23", 1), ("32", 1),
    ],
    zero_variant: "Họa Hại có số 0: ẩn bệnh, không bộc phát, nếu bộc phát sẽ rất nhanh",
    position: None,
    traits: &[
        "Miệng lưỡi lưu loát, dùng tài ăn nói để kiếm tiền",
        "Nóng nảy, hay cãi vã thị phi",
        "Mở miệng là có tiền nhưng khó giữ tiền",
        "Không có quý nhân, nhiều thị phi",
    ],
};

const LUC_SAT: Star = Star {
    key: StarKey::LucSat,
    display_name: "Lục Sát",
    description: "Giao tế, phục vụ, cửa hàng, nữ nhân",
    polarity: Polarity::Inauspicious,
    member_energies: &[
        ("16", 4), ("61", 4),
        ("47", 3), ("74", 3),
        ("38", 2), ("83", 2),
        ("92", 1), ("29", 1),
    ],
    zero_variant: "Lục Sát có số 0: u buồn tình cảm, ly thân/ly hôn, mất tiền cho nữ nhân",
    position: None,
    traits: &[
        "Nhân duyên tốt, nhất là với người khác phái",
        "Nhạy cảm đa nghi, hay do dự, dễ u buồn",
        "Dựa vào mối quan hệ để kiếm tiền nhưng không giữ được tiền",
        "Hợp với ngoại giao, phục vụ, làm đẹp, nghệ thuật",
    ],
};

const NGU_QUY: Star = Star {
    key: StarKey::NguQuy,
    display_name: "Ngũ Quỷ",
    description: "Trí óc, biến động, không ổn định, tư duy",
    polarity: Polarity::Inauspicious,
    member_energies: &[
        ("18", 4), ("81", 4),
        ("79", 3), ("97", 3),
        ("36", 2), ("63", 2),
        ("24", 1), ("42", 1),
    ],
    zero_variant: "Ngũ Quỷ có số 0: hay tiêu cực, áp lực, thăng trầm biến động, dễ mất tiền",
    position: None,
    traits: &[
        "Thông minh, phản ứng nhanh, nhiều tài năng trời phú",
        "Sự nghiệp thường xuyên biến động, không chịu an phận",
        "Đa nghi, không tin ai nên thiếu quý nhân",
        "Bệnh tật dễ bộc phát, khi phát ra thì nặng",
    ],
};

const TUYET_MENH: Star = Star {
    key: StarKey::TuyetMenh,
    display_name: "Tuyệt Mệnh",
    description: "Dốc sức, đầu tư, hành động, phá tài",
    polarity: Polarity::Inauspicious,
    member_energies: &[
        ("12", 4), ("21", 4),
        ("69", 3), ("96", 3),
        ("84", 2), ("48", 2),
        ("73", 1), ("37", 1),
    ],
    zero_variant: "Tuyệt Mệnh có số 0: đầu tư thất bại, bệnh dễ phát nặng, dễ có tai nạn xe cộ",
    position: None,
    traits: &[
        "Dám mạo hiểm, có chí phấn đấu, trọng tình nghĩa",
        "Thích đầu tư nhưng không giữ được tiền, dễ phá tài",
        "Rất dễ tin người, bảo thủ",
        "Không có quý nhân tương trợ, dễ dính kiện cáo",
    ],
};

static STARS: [Star; 8] = [
    SINH_KHI, THIEN_Y, DIEN_NIEN, PHUC_VI, HOA_HAI, LUC_SAT, NGU_QUY, TUYET_MENH,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_ordered_like_star_keys() {
        for key in StarKey::ALL {
            assert_eq!(star_table().get(key).key, key);
        }
    }

    #[test]
    fn test_every_pair_of_distinct_significant_digits_has_one_star() {
        let significant = ['1', '2', '3', '4', '6', '7', '8', '9'];
        let mut seen = HashSet::new();
        for a in significant {
            for b in significant {
                let pair: String = [a, b].iter().collect();
                let (star, energy) = star_table()
                    .lookup(&pair)
                    .unwrap_or_else(|| panic!("{} has no star", pair));
                assert!((1..=4).contains(&energy));
                assert!(seen.insert(pair), "{} belongs to {:?} twice", a, star.key);
            }
        }
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn test_reverse_pairs_share_star_and_energy() {
        for star in star_table().stars {
            for member in star.members() {
                let reversed: String = member.chars().rev().collect();
                assert_eq!(star.energy_for(&reversed), star.energy_for(member));
            }
        }
    }

    #[test]
    fn test_lookup_phuc_vi_11() {
        let (star, energy) = star_table().lookup("11").unwrap();
        assert_eq!(star.key, StarKey::PhucVi);
        assert_eq!(star.display_name, "Phục Vị");
        assert_eq!(energy, 4);
    }

    #[test]
    fn test_lookup_rejects_special_digits_and_odd_lengths() {
        assert!(star_table().lookup("10").is_none());
        assert!(star_table().lookup("55").is_none());
        assert!(star_table().lookup("1").is_none());
        assert!(star_table().lookup("141").is_none());
    }
}
