//! Sub-team alias resolution.
//!
//! Sub-team rows are keyed by short slugs ("powertrain"), while member rows
//! carry the long display-name form ("Electronics & Powertrain"). The two
//! namespaces are reconciled here through a hand-maintained lookup table.
//!
//! The mapping is many-to-one, not bijective: several slugs share a member
//! pool (`autonomous` and `rnd` both resolve to "Electronics & Powertrain",
//! `dynamics` to "Chassis & Suspension"). That collapsing is observed
//! behavior of the deployed dataset and is kept as-is.

/// Lookup table from sub-team slug to the display name used on member rows.
pub const SUBTEAM_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("chassis", "Chassis & Suspension"),
    ("powertrain", "Electronics & Powertrain"),
    ("dynamics", "Chassis & Suspension"),
    ("autonomous", "Electronics & Powertrain"),
    ("management", "Business & Marketing"),
    ("rnd", "Electronics & Powertrain"),
];

/// Resolve a sub-team slug to the display name used on member rows.
///
/// Returns `None` for slugs outside the table.
#[must_use]
pub fn display_name(id: &str) -> Option<&'static str> {
    SUBTEAM_DISPLAY_NAMES
        .iter()
        .find(|(slug, _)| *slug == id)
        .map(|(_, name)| *name)
}

/// Resolve a sub-team slug, falling back to the slug itself when unmapped.
///
/// Unknown ids pass through unchanged, so a member query for them simply
/// returns an empty list rather than failing.
#[must_use]
pub fn display_name_or_self(id: &str) -> &str {
    display_name(id).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slugs_resolve() {
        assert_eq!(display_name("chassis"), Some("Chassis & Suspension"));
        assert_eq!(display_name("management"), Some("Business & Marketing"));
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert_eq!(display_name("aerodynamics"), None);
    }

    #[test]
    fn test_unknown_slug_passes_through() {
        assert_eq!(display_name_or_self("Leadership"), "Leadership");
    }

    #[test]
    fn test_mapping_is_many_to_one() {
        // Three slugs deliberately share the Electronics & Powertrain pool.
        let shared: Vec<&str> = SUBTEAM_DISPLAY_NAMES
            .iter()
            .filter(|(_, name)| *name == "Electronics & Powertrain")
            .map(|(slug, _)| *slug)
            .collect();
        assert_eq!(shared, vec!["powertrain", "autonomous", "rnd"]);

        assert_eq!(display_name("dynamics"), display_name("chassis"));
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<&str> = SUBTEAM_DISPLAY_NAMES.iter().map(|(s, _)| *s).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SUBTEAM_DISPLAY_NAMES.len());
    }
}
