//! Star pairings, specific three-digit combinations and the wealth,
//! career and marriage code tables.

use crate::domain::model::StarKey;
use crate::domain::model::StarKey::*;
use crate::domain::report::{CodeCategory, PairWarning};

/// Reading of two stars met in this order.
#[derive(Debug)]
pub struct PairCombination {
    pub first: StarKey,
    pub second: StarKey,
    pub description: &'static str,
}

/// A combination recognised by its literal three digits rather than by
/// the stars it segments into.
#[derive(Debug)]
pub struct SpecificCombination {
    pub key: &'static str,
    pub numbers: &'static [&'static str],
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Debug)]
pub struct ThreeDigitCode {
    pub category: CodeCategory,
    pub code: &'static str,
    pub values: &'static [&'static str],
    pub description: &'static str,
    pub detail: &'static str,
}

pub fn combination_key(first: StarKey, second: StarKey) -> String {
    format!("{}_{}", first.as_str(), second.as_str())
}

pub fn pair_description(first: StarKey, second: StarKey) -> Option<&'static str> {
    STAR_PAIRS
        .iter()
        .find(|c| c.first == first && c.second == second)
        .map(|c| c.description)
}

/// First specific combination listing `digits`, in table order.
pub fn specific_combination(digits: &str) -> Option<&'static SpecificCombination> {
    SPECIFIC_COMBINATIONS
        .iter()
        .find(|c| c.numbers.contains(&digits))
}

pub fn hidden_affection_endings() -> &'static [&'static str] {
    HIDDEN_AFFECTION.numbers
}

pub fn three_digit_codes() -> &'static [ThreeDigitCode] {
    &THREE_DIGIT_CODES
}

/// Warning for two adjacent stars. Named pairings match in either order;
/// any other two inauspicious stars get the generic warning.
pub fn pair_warning(first: StarKey, second: StarKey, both_inauspicious: bool) -> Option<PairWarning> {
    let named = DANGEROUS_PAIRS.iter().find(|(a, b, _)| {
        (*a == first && *b == second) || (*a == second && *b == first)
    });
    match named {
        Some((_, _, warning)) => Some(warning.clone()),
        None if both_inauspicious => Some(PairWarning {
            kind: "HUNG TÍNH CAO",
            description: "Hai sao hung kết hợp: năng lượng tiêu cực mạnh, cần cẩn trọng trong quyết định và hành động.",
        }),
        None => None,
    }
}

const DANGEROUS_PAIRS: [(StarKey, StarKey, PairWarning); 3] = [
    (
        LucSat,
        NguQuy,
        PairWarning {
            kind: "ĐÀO HOA NÁT",
            description: "Lục Sát + Ngũ Quỷ: dễ có duyên với người khác phái, tình cảm không ổn định, đào hoa nát.",
        },
    ),
    (
        NguQuy,
        TuyetMenh,
        PairWarning {
            kind: "NGUY HIỂM SỨC KHỎE",
            description: "Tuyệt Mệnh + Ngũ Quỷ: dễ dẫn phát sức khỏe kém, có nguy cơ mắc bệnh nặng.",
        },
    ),
    (
        HoaHai,
        TuyetMenh,
        PairWarning {
            kind: "PHÁ TÀI",
            description: "Họa Hại + Tuyệt Mệnh: tiêu hao tài sản nghiêm trọng, dễ mất tiền lớn, đầu tư thất bại.",
        },
    ),
];

const fn pair(first: StarKey, second: StarKey, description: &'static str) -> PairCombination {
    PairCombination { first, second, description }
}

static STAR_PAIRS: [PairCombination; 64] = [
    // ... + Sinh Khí
    pair(SinhKhi, SinhKhi, "Tập hợp tăng cường năng lượng quý nhân: lạc quan, cởi mở, dễ kết bạn, gặp khó có người giúp."),
    pair(ThienY, SinhKhi, "Quý nhân trợ giúp, tài lộc hanh thông, được người khác quý mến và giúp đỡ."),
    pair(DienNien, SinhKhi, "Sự nghiệp vững chắc, có quý nhân dẫn dắt, công việc thuận lợi và phát triển."),
    pair(PhucVi, SinhKhi, "Yêu đời, lạc quan, không vội vã; dễ lười biếng, ít tham vọng, thích sống an nhàn."),
    pair(HoaHai, SinhKhi, "Gặp quý nhân nhưng dễ mất tiền, thu nhập cao nhưng chi tiêu lớn."),
    pair(LucSat, SinhKhi, "Được giúp đỡ trong lĩnh vực dịch vụ, quan hệ xã hội tốt nhưng cẩn thận người không tốt."),
    pair(NguQuy, SinhKhi, "Có quý nhân nhưng tư duy không ổn định, dễ thay đổi, nên cẩn trọng với quyết định."),
    pair(TuyetMenh, SinhKhi, "Gặp quý nhân trong lúc khó khăn, được giúp đỡ nhưng phải nỗ lực nhiều."),
    // ... + Thiên Y
    pair(SinhKhi, ThienY, "Quý nhân trợ giúp, tài lộc hanh thông, được người khác quý mến và giúp đỡ."),
    pair(ThienY, ThienY, "Tụ tập tăng cường năng lượng tài phú, hiện tượng hôn nhân."),
    pair(DienNien, ThienY, "Tiền tài dồi dào, công việc ổn định, xây dựng được nguồn thu nhập bền vững."),
    pair(PhucVi, ThienY, "Thông qua kiên nhẫn kiên trì mà tạo ra tài phú."),
    pair(HoaHai, ThienY, "Thông qua ăn nói mà kiếm tiền, có tài hùng biện."),
    pair(LucSat, ThienY, "Kiếm tiền tốt trong lĩnh vực dịch vụ, tình cảm tốt nhưng phải cẩn thận với mối quan hệ."),
    pair(NguQuy, ThienY, "Dùng sự thay đổi và ý tưởng mới để kiếm tiền; tài chính không ổn định, dễ đầu tư mạo hiểm."),
    pair(TuyetMenh, ThienY, "Thông qua đầu tư mạo hiểm mà kiếm tiền; tiền dễ đến nhưng cũng dễ mất."),
    // ... + Diên Niên
    pair(SinhKhi, DienNien, "Sự nghiệp vững chắc, có quý nhân dẫn dắt, công việc thuận lợi và phát triển."),
    pair(ThienY, DienNien, "Tiền tài dồi dào, công việc ổn định, xây dựng được nguồn thu nhập bền vững."),
    pair(DienNien, DienNien, "Nhiều công việc hoặc nguồn thu nhập; bướng bỉnh, không thích nghe lời khuyên nhưng giỏi quản lý tiền bạc."),
    pair(PhucVi, DienNien, "Thận trọng nhưng luôn cố gắng hoàn hảo trong công việc."),
    pair(HoaHai, DienNien, "Có khả năng chuyên môn tốt nhưng dễ tiêu tiền, nói nhiều, nên tập trung vào chất lượng."),
    pair(LucSat, DienNien, "Thích hợp làm việc trong ngành dịch vụ, quan hệ khách hàng tốt, nhưng dễ bị lợi dụng."),
    pair(NguQuy, DienNien, "Chuyên môn tốt nhưng tư duy không ổn định, dễ thay đổi công việc hoặc phương hướng."),
    pair(TuyetMenh, DienNien, "Có năng lực chuyên môn nhưng phải nỗ lực nhiều, dốc sức làm việc."),
    // ... + Phục Vị
    pair(SinhKhi, PhucVi, "Trí tuệ cảm xúc cao, lạc quan, cao thượng; thụ động, thận trọng và làm việc tỉ mỉ."),
    pair(ThienY, PhucVi, "Nguồn tài lộc liên tục và sự tiếp nối của sự giàu có."),
    pair(DienNien, PhucVi, "Mạnh mẽ trong công việc, thực hành tốt, kinh nghiệm dày dặn, dẫn dắt ý kiến trong chuyên môn."),
    pair(PhucVi, PhucVi, "Chờ đợi, ẩn mình, do dự và bỏ lỡ cơ hội; bù lại kiên nhẫn, chịu được cô đơn và làm tốt việc lặp lại."),
    pair(HoaHai, PhucVi, "Dè dặt lúc đầu trong giao tiếp, khi quen thì mạnh miệng, dễ gây hấn."),
    pair(LucSat, PhucVi, "Thiếu quyết đoán, sợ khó khăn, làm theo cảm xúc, hay trì hoãn, có thể tăng đào hoa."),
    pair(NguQuy, PhucVi, "Nhiều ý tưởng nhưng khó thực hiện, thường hối tiếc, thích chờ đợi cơ hội."),
    pair(TuyetMenh, PhucVi, "Mạo hiểm nhưng bị động hơn, dễ mất tiền, suy nghĩ kỹ và biết thỏa hiệp."),
    // ... + Họa Hại
    pair(SinhKhi, HoaHai, "Gặp quý nhân nhưng dễ mất tiền, thu nhập cao nhưng chi tiêu lớn."),
    pair(ThienY, HoaHai, "Tài lộc tốt nhưng dễ hao tiền, mọi người thích giao du nhưng tốn kém."),
    pair(DienNien, HoaHai, "Có khả năng chuyên môn tốt nhưng dễ tiêu tiền, nói nhiều, nên tập trung vào chất lượng."),
    pair(PhucVi, HoaHai, "Nói cứng rắn, tự cho là đúng."),
    pair(HoaHai, HoaHai, "Nói thẳng, chiêu cãi vã, cứng rắn, mạnh miệng, tính khí nóng nảy, không kiên nhẫn."),
    pair(LucSat, HoaHai, "Hao tiền trong các mối quan hệ xã hội, chi tiêu nhiều cho giao tiếp, quan hệ."),
    pair(NguQuy, HoaHai, "Tư duy không ổn định và hay nói nhiều, dễ phát ngôn bừa bãi gây rắc rối."),
    pair(TuyetMenh, HoaHai, "Chi tiêu lớn và liều lĩnh, dễ mạo hiểm trong tài chính dẫn đến mất mát."),
    // ... + Lục Sát
    pair(SinhKhi, LucSat, "Được giúp đỡ trong lĩnh vực dịch vụ, quan hệ xã hội tốt nhưng cẩn thận người không tốt."),
    pair(ThienY, LucSat, "Kiếm tiền tốt trong lĩnh vực dịch vụ, tình cảm tốt nhưng phải cẩn thận với mối quan hệ."),
    pair(DienNien, LucSat, "Thích hợp làm việc trong ngành dịch vụ, quan hệ khách hàng tốt, nhưng dễ bị lợi dụng."),
    pair(PhucVi, LucSat, "Sợ mọi thứ và không dám đối mặt với khó khăn."),
    pair(HoaHai, LucSat, "Hao tiền trong các mối quan hệ xã hội, chi tiêu nhiều cho giao tiếp, quan hệ."),
    pair(LucSat, LucSat, "Tăng cảm giác sa sút, khuynh hướng tự kỷ, cảm xúc không ổn định, Đào Hoa kiếp."),
    pair(NguQuy, LucSat, "Đào hoa nát, dễ có mối quan hệ không rõ ràng, tình cảm phức tạp."),
    pair(TuyetMenh, LucSat, "Mối quan hệ xã hội tốn kém, phải nỗ lực nhiều trong giao tiếp nhưng ít kết quả."),
    // ... + Ngũ Quỷ
    pair(SinhKhi, NguQuy, "Có quý nhân nhưng tư duy không ổn định, dễ thay đổi, nên cẩn trọng với quyết định."),
    pair(ThienY, NguQuy, "Có tài chính nhưng không ổn định, tư duy hay thay đổi, dễ đầu tư mạo hiểm."),
    pair(DienNien, NguQuy, "Chuyên môn tốt nhưng tư duy không ổn định, dễ thay đổi công việc hoặc phương hướng."),
    pair(PhucVi, NguQuy, "Chi tiết, thận trọng, học nhanh, đa nghi, thích cờ bạc."),
    pair(HoaHai, NguQuy, "Tư duy không ổn định và hay nói nhiều, dễ phát ngôn bừa bãi gây rắc rối."),
    pair(LucSat, NguQuy, "Đào hoa nát, dễ có mối quan hệ không rõ ràng, tình cảm phức tạp."),
    pair(NguQuy, NguQuy, "Rất thông minh, tài giỏi, phản ứng nhanh nhưng không ổn định, ý nghĩ hay thay đổi, gặp nhiều trắc trở."),
    pair(TuyetMenh, NguQuy, "Tư duy bất ổn và liều lĩnh, dễ đưa ra quyết định sai lầm, gây hậu quả nghiêm trọng."),
    // ... + Tuyệt Mệnh
    pair(SinhKhi, TuyetMenh, "Gặp quý nhân trong lúc khó khăn, được giúp đỡ nhưng phải nỗ lực nhiều."),
    pair(ThienY, TuyetMenh, "Tiền bạc dễ đến nhưng cũng dễ mất, đầu tư nhiều nhưng phải cẩn trọng."),
    pair(DienNien, TuyetMenh, "Có năng lực chuyên môn nhưng phải nỗ lực nhiều, dốc sức làm việc."),
    pair(PhucVi, TuyetMenh, "Súc thế xung động, không xung thì thôi, xông lên thì mạnh. Trong công việc rất liều."),
    pair(HoaHai, TuyetMenh, "Chi tiêu lớn và liều lĩnh, dễ mạo hiểm trong tài chính dẫn đến mất mát."),
    pair(LucSat, TuyetMenh, "Mối quan hệ xã hội tốn kém, phải nỗ lực nhiều trong giao tiếp nhưng ít kết quả."),
    pair(NguQuy, TuyetMenh, "Tư duy bất ổn và liều lĩnh, dễ đưa ra quyết định sai lầm, gây hậu quả nghiêm trọng."),
    pair(TuyetMenh, TuyetMenh, "Sơ ý chủ quan, kích động, dễ đi đến cực đoan, dễ phá tài, không dễ quản lý tài sản."),
];

const HIDDEN_AFFECTION: SpecificCombination = SpecificCombination {
    key: "SPECIAL_ENDING",
    numbers: &["608", "806", "103", "301"],
    description: "Tình cảm ngầm: xuất hiện tình cảm ngầm, tình ngoài giá thú, tình tay ba.",
    details: &["Có nguy cơ tình cảm phức tạp, quan hệ ngoài luồng, dễ gây đổ vỡ gia đình."],
};

// Order matters: a triplet listed twice resolves to the first entry.
static SPECIFIC_COMBINATIONS: [SpecificCombination; 12] = [
    SpecificCombination {
        key: "NGU_QUY_THIEN_Y",
        numbers: &["813", "186", "794", "972", "631", "368", "249", "427"],
        description: "Ngũ Quỷ biến hóa đa đoan, ý tưởng nhiều, thức đêm, tim không tốt. Thiên Y là tài phú và hôn nhân.",
        details: &[
            "Chưa lập gia đình dễ kết hôn rất nhanh, đột ngột.",
            "Ngũ Quỷ vận tài, nhanh chóng phát tài, tiền gì cũng dám kiếm.",
            "Dễ sinh bệnh nhà giàu như bệnh tim, tắc mạch máu.",
        ],
    },
    SpecificCombination {
        key: "NGU_QUY_DIEN_NIEN",
        numbers: &["819", "187", "791", "978", "634", "362", "243", "426"],
        description: "Ngũ Quỷ biến hóa đa đoan, thức đêm. Diên Niên là trách nhiệm, lực lãnh đạo, quyền uy, vất vả.",
        details: &[
            "Giỏi phát hiện điều người khác không dự báo được, biến ý nghĩ thành sự thật.",
            "Vất vả hơn nhiều so với một Ngũ Quỷ hoặc Diên Niên, quanh năm thức đêm làm việc.",
            "Cần chú ý bệnh tim, làm việc quá sức.",
        ],
    },
    SpecificCombination {
        key: "NGU_QUY_NGU_QUY",
        numbers: &[
            "181", "818", "797", "979", "363", "636", "242", "424", "798", "361", "247", "792",
            "367", "793", "814", "418", "879", "836", "863", "824", "916", "619", "637", "942",
        ],
        description: "Ngũ Quỷ chồng Ngũ Quỷ: biến hóa đa đoan, ý tưởng nhiều, thức đêm, bệnh tim.",
        details: &[
            "Rất khôn khéo, thích tính toán, nhưng vì quá thông minh lại hay lỡ cơ hội.",
            "Thường đầu tư thất bại, hạng mục bỏ dở nửa chừng.",
            "Hôn nhân hay thay đổi, đa nghi, sống về đêm, dễ dẫn đến ly hôn.",
        ],
    },
    SpecificCombination {
        key: "HOA_HAI_NGU_QUY",
        numbers: &["718", "179", "981", "897", "463", "642", "236"],
        description: "Họa Hại là nói chuyện, mạnh miệng, thích sĩ diện. Ngũ Quỷ là đa nghi, nhạy cảm, biến hóa đa đoan.",
        details: &[
            "Nói đặc biệt nhiều, luôn tìm được lý do để phản bác, chất vấn.",
            "Dù thắng lời bên ngoài, bên trong vẫn là thua.",
        ],
    },
    SpecificCombination {
        key: "TUYET_MENH_NGU_QUY",
        numbers: &["124", "218", "697", "963", "842", "481", "379", "736"],
        description: "Tuyệt Mệnh là cực đoan, xung động, đầu tư. Ngũ Quỷ là đa nghi, nhạy cảm, biến hóa đa đoan.",
        details: &[
            "Tài vận: nỗ lực liều lĩnh, thích đầu tư, dễ xuất tiền phá tài.",
            "Tình cảm: dũng cảm truy cầu, kinh hỉ và kinh hãi cùng tồn tại.",
            "Sức khỏe: chú ý gan mật, thận, dễ đột phát bệnh tim.",
        ],
    },
    SpecificCombination {
        key: "TUYET_MENH_DIEN_NIEN",
        numbers: &["219", "691", "487", "734", "378", "962", "843"],
        description: "Tuyệt Mệnh là cực đoan, xung động, đầu tư. Diên Niên là lãnh đạo, quyền uy, nỗ lực vất vả.",
        details: &[
            "Rất phấn đấu, nếu làm thuê dễ được đề bạt và thăng tiến.",
            "Kinh doanh mở rộng quy mô, sự nghiệp lên bổng xuống trầm.",
            "Nữ đã có chồng thì vừa khổ vừa mệt, trả giá nhiều hồi báo ít.",
        ],
    },
    SpecificCombination {
        key: "TUYET_MENH_SINH_KHI",
        numbers: &["214", "967", "482", "376", "739", "693", "128", "841"],
        description: "Tuyệt Mệnh là cực đoan, xung động, đầu tư. Sinh Khí là vui vẻ, sảng khoái, thỏa mãn.",
        details: &[
            "Đầu tư rất vui vẻ, hưởng thụ quá trình.",
            "Vui vẻ cho bạn bè vay tiền, giúp được bạn thì hài lòng.",
            "Hay tụ tập ăn uống, dạ dày thường có vấn đề.",
        ],
    },
    SpecificCombination {
        key: "HOA_HAI_LUC_SAT",
        numbers: &["716", "174", "983", "892", "461", "647", "238", "329"],
        description: "Họa Hại là nói chuyện, phàn nàn, cãi lộn, sĩ diện. Lục Sát là phiền muộn không vui.",
        details: &[
            "Hay hối hận vì lời nói của chính mình.",
            "Coi trọng mặt mũi, vì sĩ diện mà phá tài.",
            "Nói năng chua ngoa nhưng tấm lòng mềm yếu.",
        ],
    },
    SpecificCombination {
        key: "SINH_KHI_LUC_SAT",
        numbers: &["829", "674", "938"],
        description: "Sinh Khí là bằng hữu, quý nhân, vui vẻ. Lục Sát là người khác phái, phiền muộn, hối hận.",
        details: &[
            "Từ vui vẻ đến không vui, bằng hữu trở mặt thành thù.",
            "Bị bằng hữu lừa gạt, vì bạn mà phiền não.",
        ],
    },
    SpecificCombination {
        key: "HOA_HAI_PHUC_VI",
        numbers: &["988", "899", "895", "985", "177", "711", "175", "466", "644"],
        description: "Họa Hại là nói chuyện, phàn nàn, cãi lộn, sĩ diện. Phục Vị là trùng lặp, trì trệ.",
        details: &[
            "Khẩu tài tốt, trong gia đình hay vì việc nhỏ mà cãi nhau.",
            "Mặc kệ đúng sai, nhất định phải chiếm thượng phong.",
        ],
    },
    SpecificCombination {
        key: "LUC_SAT_PHUC_VI",
        numbers: &["611", "744", "388", "299", "166", "477", "833", "922"],
        description: "Lục Sát là phiền muộn không vui. Phục Vị là trùng lặp, trì trệ.",
        details: &[
            "Do dự, Đào Hoa không dứt.",
            "Tổ hợp sợ khó mạnh nhất, sự nghiệp khó đột phá.",
        ],
    },
    HIDDEN_AFFECTION,
];

static THREE_DIGIT_CODES: [ThreeDigitCode; 14] = [
    ThreeDigitCode {
        category: CodeCategory::Wealth,
        code: "QUY_NHAN_TRO_GIUP",
        values: &["931", "413"],
        description: "Quý nhân trợ giúp",
        detail: "Nhờ quý nhân mà có cơ hội kiếm tiền, phát tài; có hiện tượng kết hôn, tình cảm hạnh phúc.",
    },
    ThreeDigitCode {
        category: CodeCategory::Wealth,
        code: "CHUYEN_NGHIEP",
        values: &["913", "431"],
        description: "Chuyên nghiệp công việc",
        detail: "Năng lực bình thường lại đem lại nhiều tiền; tự lập nghiệp, kiếm tiền tốt nhưng vất vả.",
    },
    ThreeDigitCode {
        category: CodeCategory::Wealth,
        code: "NGANH_DICH_VU",
        values: &["613", "749"],
        description: "Ngành dịch vụ",
        detail: "Kiếm tiền qua ngành dịch vụ, công việc tỉ mỉ, quy mô có thể lớn.",
    },
    ThreeDigitCode {
        category: CodeCategory::Wealth,
        code: "LAY_MIENG_NGHIEP",
        values: &["231", "713"],
        description: "Lấy miệng là nghiệp",
        detail: "Dùng tài ăn nói hùng biện, khéo léo để kiếm số tiền lớn.",
    },
    ThreeDigitCode {
        category: CodeCategory::Wealth,
        code: "TAI_HOA_TRI_TUE",
        values: &["813", "368"],
        description: "Tài hoa trí tuệ",
        detail: "Kiếm tiền nhờ ý tưởng và tài năng hơn người, phát tài nhanh nhưng cần giữ đạo đức.",
    },
    ThreeDigitCode {
        category: CodeCategory::Wealth,
        code: "NO_LUC_PHAN_DAU",
        values: &["213", "968"],
        description: "Nỗ lực phấn đấu",
        detail: "Nỗ lực lớn để kiếm tiền lớn; đầu tư lớn thì thắng lớn, càng làm càng có tiền.",
    },
    ThreeDigitCode {
        category: CodeCategory::Career,
        code: "QUY_NHAN_CONG_VIEC",
        values: &["419", "678"],
        description: "Quý nhân mang đến công việc",
        detail: "Được quý nhân nâng đỡ, dễ làm lãnh đạo hoặc thầy giáo, thăng tiến tốt.",
    },
    ThreeDigitCode {
        category: CodeCategory::Career,
        code: "KIEM_TIEN_TOT",
        values: &["319", "134"],
        description: "Kiếm tiền công việc tốt",
        detail: "Nhiều may mắn và cơ hội tiền bạc trong công việc, thu nhập lâu bền.",
    },
    ThreeDigitCode {
        category: CodeCategory::Career,
        code: "DICH_VU",
        values: &["619", "743"],
        description: "Công việc ngành dịch vụ",
        detail: "Hợp công tác hành chính, phục vụ, xử lý tốt quan hệ xã hội.",
    },
    ThreeDigitCode {
        category: CodeCategory::Career,
        code: "MIENG_LA_NGHIEP",
        values: &["719", "987"],
        description: "Công việc lấy miệng là nghiệp",
        detail: "Công việc chủ yếu dựa vào ăn nói: giáo viên, MC, diễn giả.",
    },
    ThreeDigitCode {
        category: CodeCategory::Career,
        code: "TAI_HOA_TRI_OC",
        values: &["819", "978"],
        description: "Công việc tài hoa trí óc",
        detail: "Công việc cần trí óc linh hoạt, hay làm khuya, dựa vào năng lực bản thân để lên chức.",
    },
    ThreeDigitCode {
        category: CodeCategory::Career,
        code: "CHAY_BEN_NGOAI",
        values: &["219", "691"],
        description: "Công việc bên ngoài chạy phấn đấu",
        detail: "Rất phấn đấu, cần lá gan lớn, liên quan đến đầu tư và quản lý tài sản.",
    },
    ThreeDigitCode {
        category: CodeCategory::Marriage,
        code: "CHINH_DAO_HOA",
        values: &["413", "768", "131", "686"],
        description: "Chính Đào Hoa (chính hôn nhân)",
        detail: "Nhiều bạn bè thân tín, hôn nhân vui vẻ tốt đẹp, tình cảm ngọt ngào.",
    },
    ThreeDigitCode {
        category: CodeCategory::Marriage,
        code: "THIEN_DAO_HOA",
        values: &["618", "816", "108", "318"],
        description: "Thiên Đào Hoa (bất lợi hôn nhân)",
        detail: "Hôn nhân không thuận, tình duyên trắc trở, có thể có tình cảm ngầm.",
    },
];
