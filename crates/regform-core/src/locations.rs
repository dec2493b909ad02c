//! Country to city lookup.
//!
//! The city dropdown is derived from the selected country. Countries and
//! their cities are plain data in [`LOCATIONS`]; order is display order.

/// Countries offered by the form and the cities valid for each.
pub const LOCATIONS: &[(&str, &[&str])] = &[
    ("India", &["Delhi", "Mumbai"]),
    ("USA", &["New York", "Chicago"]),
];

/// Countries in display order.
pub fn countries() -> impl Iterator<Item = &'static str> {
    LOCATIONS.iter().map(|(country, _)| *country)
}

/// City options for `country`; empty for an unknown or unselected country.
pub fn cities_for(country: &str) -> &'static [&'static str] {
    LOCATIONS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

/// Whether `city` is one of the options offered for `country`.
pub fn is_city_in(country: &str, city: &str) -> bool {
    cities_for(country).contains(&city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_countries() {
        assert_eq!(countries().collect::<Vec<_>>(), vec!["India", "USA"]);
        assert_eq!(cities_for("India"), &["Delhi", "Mumbai"]);
        assert_eq!(cities_for("USA"), &["New York", "Chicago"]);
    }

    #[test]
    fn test_unknown_country_has_no_cities() {
        assert!(cities_for("").is_empty());
        assert!(cities_for("Canada").is_empty());
        // Lookup is exact
        assert!(cities_for("india").is_empty());
    }

    #[test]
    fn test_city_membership() {
        assert!(is_city_in("USA", "Chicago"));
        assert!(!is_city_in("India", "Chicago"));
    }
}
