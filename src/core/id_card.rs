use crate::domain::report::IdCardInfo;
use crate::tables::provinces::province_name;
use chrono::{Datelike, NaiveDate};

/// Decodes the fields embedded in a 12-digit citizen ID. Older 9-digit
/// numbers carry no fixed structure and yield `None`.
pub fn decode(normalized: &str) -> Option<IdCardInfo> {
    if normalized.len() != 12 || !normalized.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let province_code = &normalized[..3];
    let marker = normalized[3..4].parse::<u8>().ok()?;
    let gender = if marker % 2 == 0 { "Nam" } else { "Nữ" };
    let century: Option<u16> = match marker {
        0 | 1 => Some(19),
        2 | 3 => Some(20),
        4 | 5 => Some(21),
        _ => None,
    };
    let birth_year = century.and_then(|c| {
        normalized[4..6]
            .parse::<i32>()
            .ok()
            .map(|yy| i32::from(c) * 100 + yy)
    });

    let province = province_name(province_code);
    if province.is_none() {
        tracing::warn!(province_code, "unknown province code in national ID");
    }

    Some(IdCardInfo {
        province_code: province_code.to_string(),
        province,
        gender,
        century,
        birth_year,
        serial: normalized[6..].to_string(),
    })
}

impl IdCardInfo {
    /// Age in whole calendar years on `date`, when the birth year is known
    /// and not in the future.
    pub fn age_on(&self, date: NaiveDate) -> Option<i32> {
        let born = self.birth_year?;
        let age = date.year() - born;
        (age >= 0).then_some(age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hcm_female_2000s() {
        let info = decode("079301012345").unwrap();
        assert_eq!(info.province, Some("Thành phố Hồ Chí Minh"));
        assert_eq!(info.gender, "Nữ");
        assert_eq!(info.century, Some(20));
        assert_eq!(info.birth_year, Some(2001));
        assert_eq!(info.serial, "012345");
    }

    #[test]
    fn test_decode_hanoi_male_1900s() {
        let info = decode("001085000123").unwrap();
        assert_eq!(info.province, Some("Hà Nội"));
        assert_eq!(info.gender, "Nam");
        assert_eq!(info.birth_year, Some(1985));
        let on = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(info.age_on(on), Some(39));
    }

    #[test]
    fn test_unknown_century_and_province() {
        let info = decode("003785000123").unwrap();
        assert_eq!(info.province, None);
        assert_eq!(info.gender, "Nữ");
        assert_eq!(info.century, None);
        assert_eq!(info.birth_year, None);
        assert_eq!(info.age_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), None);
    }

    #[test]
    fn test_nine_digit_ids_are_not_decoded() {
        assert!(decode("123456789").is_none());
    }
}
