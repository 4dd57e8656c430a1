//! Property tests for client folder classification.

use proptest::prelude::*;

use legajo::domain::policies::classify;
use legajo::domain::value_objects::Category;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Classification never panics on arbitrary input.
    #[test]
    fn property_classify_never_panics(s in "(?s).{0,128}") {
        let _ = classify(&s);
    }

    /// PROPERTY: An embedded 11-digit run wins over every other rule.
    #[test]
    fn property_cuit_has_priority(
        prefix in "[A-Za-z ]{0,12}",
        cuit in "[0-9]{11}",
        suffix in "[A-Za-z ]{0,12}",
    ) {
        let name = format!("{} {} PYME {}", prefix, cuit, suffix);
        prop_assert_eq!(classify(&name), Category::Empresa);
    }

    /// PROPERTY: "PYME" in any letter case classifies as Pyme when no CUIT is present.
    #[test]
    fn property_pyme_case_insensitive(
        name in "[A-Za-z ]{0,16}",
        pyme in "[pP][yY][mM][eE]",
    ) {
        let folder = format!("{} {}", name, pyme);
        prop_assert_eq!(classify(&folder), Category::Pyme);
    }

    /// PROPERTY: Folder names made only of letters and spaces never classify
    /// as Persona or Empresa.
    #[test]
    fn property_letters_only_are_never_taxpayer_ids(name in "[A-Za-z ]{0,32}") {
        let category = classify(&name);
        prop_assert!(category == Category::Pyme || category == Category::Unknown);
    }
}
