//! Pagination window: the bounded sequence of page labels (numbers and
//! ellipsis markers) shown by pagination controls.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Number(i64),
    Ellipsis,
}

impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLabel::Number(n) => serializer.serialize_i64(*n),
            PageLabel::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Deterministic window for a given (current page, total pages):
/// every page when there are at most 7; otherwise the first three, an
/// ellipsis and the last two near the start; the first two, an ellipsis and
/// the last three near the end; and first two, ellipsis, the current page
/// with its neighbours, ellipsis, last two in the middle.
pub fn generate_pagination(current_page: i64, total_pages: i64) -> Vec<PageLabel> {
    use PageLabel::{Ellipsis, Number};

    if total_pages <= 7 {
        return (1..=total_pages).map(Number).collect();
    }

    if current_page <= 3 {
        return vec![
            Number(1),
            Number(2),
            Number(3),
            Ellipsis,
            Number(total_pages - 1),
            Number(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        return vec![
            Number(1),
            Number(2),
            Ellipsis,
            Number(total_pages - 2),
            Number(total_pages - 1),
            Number(total_pages),
        ];
    }

    vec![
        Number(1),
        Number(2),
        Ellipsis,
        Number(current_page - 1),
        Number(current_page),
        Number(current_page + 1),
        Ellipsis,
        Number(total_pages - 1),
        Number(total_pages),
    ]
}

#[cfg(test)]
mod tests {
    use super::PageLabel::{Ellipsis, Number};
    use super::*;

    #[test]
    fn zero_pages_yield_an_empty_window() {
        assert!(generate_pagination(1, 0).is_empty());
    }

    #[test]
    fn up_to_seven_pages_are_all_shown() {
        assert_eq!(generate_pagination(1, 1), vec![Number(1)]);
        assert_eq!(
            generate_pagination(4, 7),
            (1..=7).map(Number).collect::<Vec<_>>()
        );
    }

    #[test]
    fn near_the_start_shows_first_three_and_last_two() {
        for current in 1..=3 {
            assert_eq!(
                generate_pagination(current, 10),
                vec![Number(1), Number(2), Number(3), Ellipsis, Number(9), Number(10)]
            );
        }
    }

    #[test]
    fn near_the_end_shows_first_two_and_last_three() {
        for current in 8..=10 {
            assert_eq!(
                generate_pagination(current, 10),
                vec![Number(1), Number(2), Ellipsis, Number(8), Number(9), Number(10)]
            );
        }
    }

    #[test]
    fn the_middle_brackets_the_current_page() {
        assert_eq!(
            generate_pagination(10, 20),
            vec![
                Number(1),
                Number(2),
                Ellipsis,
                Number(9),
                Number(10),
                Number(11),
                Ellipsis,
                Number(19),
                Number(20)
            ]
        );
    }

    #[test]
    fn first_middle_page_is_four() {
        assert_eq!(
            generate_pagination(4, 10),
            vec![
                Number(1),
                Number(2),
                Ellipsis,
                Number(3),
                Number(4),
                Number(5),
                Ellipsis,
                Number(9),
                Number(10)
            ]
        );
    }

    #[test]
    fn labels_serialize_as_numbers_and_ellipsis_strings() {
        let window = generate_pagination(1, 10);
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, r#"[1,2,3,"...",9,10]"#);
    }
}
