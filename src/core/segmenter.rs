//! Splits a normalized number into chained star groups.
//!
//! Scanning left to right from the first significant digit (anything but
//! `0` and `5`):
//!
//! * a significant digit followed by another significant digit makes a
//!   two-digit group, and the scan moves one step, so the second digit
//!   also opens the next group;
//! * a significant digit followed by `0`/`5` digits absorbs that whole run
//!   plus the next significant digit, which in turn opens the next group;
//! * a trailing `0`/`5` run with no closing digit is appended to the last
//!   group, or forms its own group when there is none.
//!
//! Leading `0`/`5` digits open no group and are kept in
//! [`Segmentation::leading`]. Every digit of the input is either in the
//! leading run or among some group's [`SegmentGroup::fresh_digits`].

use crate::domain::model::{is_special_digit, SegmentGroup, Segmentation};

/// `normalized` is expected to hold ASCII digits only, as produced by
/// [`crate::core::normalizer::normalize`]. Offsets count characters, so any
/// other text is split without panicking.
pub fn segment(normalized: &str) -> Segmentation {
    let chars: Vec<char> = normalized.chars().collect();
    let n = chars.len();
    let span = |from: usize, to: usize| -> String { chars[from..to].iter().collect() };

    let mut i = chars.iter().take_while(|c| is_special_digit(**c)).count();
    let leading = span(0, i);

    let mut groups: Vec<SegmentGroup> = Vec::new();
    while i < n {
        let chained = !groups.is_empty();

        if i + 1 == n {
            // A single significant digit with nothing before it.
            if !chained {
                groups.push(SegmentGroup::new(i, &span(i, n), false));
            }
            break;
        }

        if !is_special_digit(chars[i + 1]) {
            groups.push(SegmentGroup::new(i, &span(i, i + 2), chained));
            i += 1;
            continue;
        }

        let closing = (i + 1..n).find(|&j| !is_special_digit(chars[j]));
        match closing {
            Some(j) => {
                groups.push(SegmentGroup::new(i, &span(i, j + 1), chained));
                i = j;
            }
            None => {
                let tail = span(i + 1, n);
                match groups.last_mut() {
                    Some(last) => last.absorb_tail(&tail),
                    None => groups.push(SegmentGroup::new(i, &span(i, n), false)),
                }
                break;
            }
        }
    }

    tracing::debug!(
        normalized,
        groups = groups.len(),
        leading = %leading,
        "segmented number"
    );

    Segmentation {
        normalized: normalized.to_string(),
        leading,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(seg: &Segmentation) -> Vec<&str> {
        seg.groups.iter().map(|g| g.digits.as_str()).collect()
    }

    #[test]
    fn test_leading_zero_opens_no_group() {
        let seg = segment("0912345678");
        assert_eq!(seg.leading, "0");
        assert_eq!(digits(&seg), vec!["91", "12", "23", "34", "456", "67", "78"]);
        assert!(!seg.groups[0].overlaps_previous);
        assert!(seg.groups[1..].iter().all(|g| g.overlaps_previous));
        assert_eq!(seg.reconstruct(), "0912345678");
    }

    #[test]
    fn test_single_extended_group() {
        let seg = segment("105");
        assert_eq!(digits(&seg), vec!["105"]);
        let group = &seg.groups[0];
        assert_eq!((group.zero_count, group.five_count), (1, 1));
        assert_eq!(group.clean_key(), "1");
        assert_eq!(seg.reconstruct(), "105");
    }

    #[test]
    fn test_trailing_run_attaches_to_prior_group() {
        let seg = segment("09123400");
        assert_eq!(digits(&seg), vec!["91", "12", "23", "3400"]);
        assert_eq!(seg.groups[3].zero_count, 2);
        assert_eq!(seg.reconstruct(), "09123400");
    }

    #[test]
    fn test_closing_digit_opens_next_group() {
        let seg = segment("1508");
        assert_eq!(digits(&seg), vec!["1508"]);
        let seg = segment("150827");
        assert_eq!(digits(&seg), vec!["1508", "82", "27"]);
        assert_eq!(seg.groups[0].five_count, 1);
        assert_eq!(seg.groups[0].zero_count, 1);
        assert_eq!(seg.reconstruct(), "150827");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(segment("").groups.is_empty());

        let zeros = segment("0500");
        assert!(zeros.groups.is_empty());
        assert_eq!(zeros.leading, "0500");
        assert_eq!(zeros.reconstruct(), "0500");

        let lone = segment("007");
        assert_eq!(digits(&lone), vec!["7"]);
        assert_eq!(lone.reconstruct(), "007");
    }

    #[test]
    fn test_group_starts_track_positions() {
        let seg = segment("0912345678");
        for group in &seg.groups {
            assert_eq!(&seg.normalized[group.start..group.end()], group.digits);
        }
    }

    #[test]
    fn test_non_ascii_input_does_not_panic() {
        let seg = segment("1é2");
        assert_eq!(digits(&seg), vec!["1é", "é2"]);
        assert_eq!(seg.groups[1].fresh_digits(), "2");
        assert_eq!(seg.reconstruct(), "1é2");
    }
}
