//! Destination countries offered by the freight form, in display order.

/// Display name and provider country code.
pub type Country = (&'static str, &'static str);

const COUNTRIES: &[Country] = &[
    ("United States", "US"),
    ("Canada", "CA"),
    ("Mexico", "MX"),
    ("Brazil", "BR"),
    ("Argentina", "AR"),
    ("Chile", "CL"),
    ("Colombia", "CO"),
    ("Peru", "PE"),
    ("Uruguay", "UY"),
    ("Ecuador", "EC"),
    ("Costa Rica", "CR"),
    ("Panama", "PA"),
    ("Dominican Republic", "DO"),
    ("Puerto Rico", "PR"),
    ("Jamaica", "JM"),
    ("United Kingdom", "GB"),
    ("Ireland", "IE"),
    ("Germany", "DE"),
    ("France", "FR"),
    ("Italy", "IT"),
    ("Spain", "ES"),
    ("Portugal", "PT"),
    ("Netherlands", "NL"),
    ("Belgium", "BE"),
    ("Luxembourg", "LU"),
    ("Switzerland", "CH"),
    ("Austria", "AT"),
    ("Denmark", "DK"),
    ("Sweden", "SE"),
    ("Norway", "NO"),
    ("Finland", "FI"),
    ("Iceland", "IS"),
    ("Poland", "PL"),
    ("Czech Republic", "CZ"),
    ("Slovakia", "SK"),
    ("Hungary", "HU"),
    ("Romania", "RO"),
    ("Bulgaria", "BG"),
    ("Greece", "GR"),
    ("Croatia", "HR"),
    ("Slovenia", "SI"),
    ("Serbia", "RS"),
    ("Estonia", "EE"),
    ("Latvia", "LV"),
    ("Lithuania", "LT"),
    ("Ukraine", "UA"),
    ("Belarus", "BY"),
    ("Moldova", "MD"),
    ("Russia", "RU"),
    ("Turkey", "TR"),
    ("Cyprus", "CY"),
    ("Malta", "MT"),
    ("Israel", "IL"),
    ("Saudi Arabia", "SA"),
    ("United Arab Emirates", "AE"),
    ("Qatar", "QA"),
    ("Kuwait", "KW"),
    ("Bahrain", "BH"),
    ("Oman", "OM"),
    ("Jordan", "JO"),
    ("Egypt", "EG"),
    ("Morocco", "MA"),
    ("Algeria", "DZ"),
    ("Tunisia", "TN"),
    ("Nigeria", "NG"),
    ("Kenya", "KE"),
    ("Ghana", "GH"),
    ("South Africa", "ZA"),
    ("Japan", "JP"),
    ("South Korea", "KR"),
    ("Hong Kong", "HK"),
    ("Macau", "MO"),
    ("Taiwan", "TW"),
    ("Mongolia", "MN"),
    ("Singapore", "SG"),
    ("Malaysia", "MY"),
    ("Thailand", "TH"),
    ("Vietnam", "VN"),
    ("Philippines", "PH"),
    ("Indonesia", "ID"),
    ("Cambodia", "KH"),
    ("Myanmar", "MM"),
    ("India", "IN"),
    ("Pakistan", "PK"),
    ("Bangladesh", "BD"),
    ("Sri Lanka", "LK"),
    ("Nepal", "NP"),
    ("Kazakhstan", "KZ"),
    ("Uzbekistan", "UZ"),
    ("Australia", "AU"),
    ("New Zealand", "NZ"),
];

/// Every selectable destination, in display order.
pub fn list_countries() -> &'static [Country] {
    COUNTRIES
}

/// Exact, case-sensitive lookup by display name.
pub fn country_code(display_name: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, code)| *code)
}

pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_starts_with_the_main_lanes() {
        let first: Vec<_> = list_countries().iter().take(2).copied().collect();
        assert_eq!(first, vec![("United States", "US"), ("Canada", "CA")]);
        assert!(list_countries().len() >= 90);
    }

    #[test]
    fn names_and_codes_are_unique() {
        let names: HashSet<_> = list_countries().iter().map(|(name, _)| name).collect();
        let codes: HashSet<_> = list_countries().iter().map(|(_, code)| code).collect();
        assert_eq!(names.len(), list_countries().len());
        assert_eq!(codes.len(), list_countries().len());
        assert!(list_countries()
            .iter()
            .all(|(_, code)| code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(country_code("Germany"), Some("DE"));
        assert_eq!(country_code("germany"), None);
        assert_eq!(country_code(" Germany"), None);
        assert_eq!(country_name("FR"), Some("France"));
    }

    #[test]
    fn every_listed_name_resolves() {
        for (name, code) in list_countries() {
            assert_eq!(country_code(name), Some(*code));
        }
    }
}
