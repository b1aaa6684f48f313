//! Variant filtering
//!
//! Decides whether an entry is hidden by the user's preferences. Kept as a
//! free function over an explicit `FilterSettings` value so every view
//! rebuild sees exactly the settings it was given.

use crate::types::{Emoji, FilterSettings};

/// Returns false when `settings` hide `emoji`
pub fn is_allowed(emoji: &Emoji, settings: &FilterSettings) -> bool {
    if settings.skin_tones_disabled && emoji.is_skin_tone_variant() {
        return false;
    }
    if settings.genders_disabled && emoji.is_gender_variant() {
        return false;
    }
    match settings.max_version {
        Some(max) => emoji.min_version() <= max,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Emoji {
        Emoji::new("👍", &["thumbs up"], 1).unwrap()
    }

    fn toned() -> Emoji {
        Emoji::new("👍🏽", &["thumbs up: medium skin tone"], 2)
            .unwrap()
            .skin_tone_of("👍")
    }

    fn gendered() -> Emoji {
        Emoji::new("🤷‍♀️", &["woman shrugging"], 4)
            .unwrap()
            .gender_of("🤷")
    }

    #[test]
    fn test_default_settings_allow_everything() {
        let settings = FilterSettings::default();
        assert!(is_allowed(&base(), &settings));
        assert!(is_allowed(&toned(), &settings));
        assert!(is_allowed(&gendered(), &settings));
    }

    #[test]
    fn test_skin_tones_disabled_hides_only_tone_variants() {
        let settings = FilterSettings {
            skin_tones_disabled: true,
            ..Default::default()
        };
        assert!(is_allowed(&base(), &settings));
        assert!(!is_allowed(&toned(), &settings));
        assert!(is_allowed(&gendered(), &settings));
    }

    #[test]
    fn test_genders_disabled_hides_only_gender_variants() {
        let settings = FilterSettings {
            genders_disabled: true,
            ..Default::default()
        };
        assert!(is_allowed(&toned(), &settings));
        assert!(!is_allowed(&gendered(), &settings));
    }

    #[test]
    fn test_version_cutoff_is_inclusive() {
        let settings = FilterSettings {
            max_version: Some(2),
            ..Default::default()
        };
        assert!(is_allowed(&base(), &settings));
        assert!(is_allowed(&toned(), &settings));
        assert!(!is_allowed(&gendered(), &settings));
    }

    #[test]
    fn test_negative_cutoff_from_config_means_no_cutoff() {
        let settings = FilterSettings::new(false, false, Some(-5));
        assert!(is_allowed(&gendered(), &settings));
    }
}
