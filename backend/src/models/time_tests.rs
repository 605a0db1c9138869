#[cfg(test)]
mod tests {
    use crate::models::time::{minutes_between, to_minutes_of_day};
    use proptest::prelude::*;

    fn clock(hour: u32, minute: u32) -> String {
        format!("{}:{:02}", hour, minute)
    }

    proptest! {
        #[test]
        fn test_well_formed_clock_in_day_range(hour in 0u32..24, minute in 0u32..60) {
            let minutes = to_minutes_of_day(&clock(hour, minute));
            prop_assert!((0..1440).contains(&minutes));
            prop_assert_eq!(minutes, (hour * 60 + minute) as i64);
        }

        #[test]
        fn test_minutes_between_is_symmetric(
            h1 in 0u32..24, m1 in 0u32..60,
            h2 in 0u32..24, m2 in 0u32..60,
        ) {
            let a = clock(h1, m1);
            let b = clock(h2, m2);
            prop_assert_eq!(minutes_between(&a, &b), minutes_between(&b, &a));
        }

        #[test]
        fn test_minutes_between_self_is_zero(hour in 0u32..24, minute in 0u32..60) {
            let a = clock(hour, minute);
            prop_assert_eq!(minutes_between(&a, &a), 0);
        }
    }

    #[test]
    fn test_minutes_between_same_hour() {
        assert_eq!(minutes_between("9:15", "9:45"), 30);
    }

    #[test]
    fn test_minutes_between_ignores_whitespace() {
        assert_eq!(minutes_between(" 6:00 ", "7:30"), 90);
    }
}
