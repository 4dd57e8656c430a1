//! Property tests for file name period extraction.

use proptest::prelude::*;

use legajo::domain::policies::{extract_period, leading_token, MONTH_ABBREVIATIONS};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Extraction never panics and always yields a valid month.
    #[test]
    fn property_extracted_month_in_range(s in "(?s).{0,96}") {
        if let Some(period) = extract_period(&s) {
            prop_assert!((1..=12).contains(&period.month()));
            prop_assert!((2000..=2099).contains(&period.year()));
        }
        let _ = leading_token(&s);
    }

    /// PROPERTY: `TOKEN MMM YY` parses back to the month index and 20YY.
    #[test]
    fn property_month_and_year_parse(
        token in "[A-Z]{2,10}",
        month_idx in 0usize..12,
        yy in 0u32..100,
        lowercase in any::<bool>(),
    ) {
        let abbr = MONTH_ABBREVIATIONS[month_idx];
        let abbr = if lowercase { abbr.to_lowercase() } else { abbr.to_string() };
        let stem = format!("{} {} {:02}", token, abbr, yy);

        let period = extract_period(&stem).expect("well-formed stem must parse");
        prop_assert_eq!(period.month(), month_idx as u32 + 1);
        prop_assert_eq!(period.year(), 2000 + yy as i32);
        prop_assert_eq!(leading_token(&stem), token);
    }
}
