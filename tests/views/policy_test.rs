#[cfg(test)]
mod tests {
    use mortality_views::{ViewId, resolve_available_views};

    #[test]
    fn test_everything_enabled_for_plain_cause_with_state_data() {
        let availability = resolve_available_views("Heart disease", true);

        assert!(availability.disabled_views().is_empty());
        for view in ViewId::ALL {
            assert!(availability.is_enabled(view));
        }
    }

    #[test]
    fn test_state_views_disable_without_state_data() {
        let availability = resolve_available_views("Diabetes", false);

        assert_eq!(
            availability.disabled_views(),
            &[ViewId::UsStateBar, ViewId::UsBubble]
        );
        assert!(availability.is_enabled(ViewId::Bar));
        assert!(availability.is_enabled(ViewId::Trend));
        assert!(availability.is_enabled(ViewId::MhCompare));
    }

    #[test]
    fn test_reserved_cause_disables_comparison() {
        let availability = resolve_available_views("Mental health/suicide", true);
        assert_eq!(availability.disabled_views(), &[ViewId::MhCompare]);
    }

    #[test]
    fn test_reserved_cause_without_state_data_disables_three_views() {
        let availability = resolve_available_views("Mental health/suicide", false);
        assert_eq!(
            availability.disabled_views(),
            &[ViewId::UsStateBar, ViewId::UsBubble, ViewId::MhCompare]
        );
        // The national views always survive
        assert!(availability.is_enabled(ViewId::Bar));
        assert!(availability.is_enabled(ViewId::Trend));
    }

    #[test]
    fn test_effective_view_falls_back_to_bar() {
        let availability = resolve_available_views("Diabetes", false);

        assert_eq!(availability.effective_view(ViewId::UsStateBar), ViewId::Bar);
        assert_eq!(availability.effective_view(ViewId::UsBubble), ViewId::Bar);
        // Enabled views pass through untouched
        assert_eq!(availability.effective_view(ViewId::Trend), ViewId::Trend);
        assert_eq!(availability.effective_view(ViewId::MhCompare), ViewId::MhCompare);
    }

    #[test]
    fn test_view_names_parse_and_print() {
        assert_eq!(ViewId::from_name("usBubble"), Some(ViewId::UsBubble));
        assert_eq!(ViewId::from_name("no-such-view"), None);
        assert_eq!(ViewId::MhCompare.as_str(), "mhCompare");
    }
}
