#[cfg(test)]
mod tests {
    use crate::utils::state_records;
    use mortality_views::StateCollection;
    use mortality_views::insight::{
        bubble_insight, bubble_size, missing_cause_insights, state_bar_insight,
    };

    #[test]
    fn test_bubble_size_floor_and_scale() {
        // Everything at or below 64 deaths sits on the 4.0 floor
        assert_eq!(bubble_size(0.0), 4.0);
        assert_eq!(bubble_size(16.0), 4.0);
        assert_eq!(bubble_size(64.0), 4.0);
        // Above the floor the size follows sqrt(deaths) / 2
        assert_eq!(bubble_size(400.0), 10.0);
        assert_eq!(bubble_size(10_000.0), 50.0);
    }

    #[test]
    fn test_state_bar_ranks_top_three() {
        let collection = StateCollection::from_records(state_records());
        let rows = collection.rows_for("Heart disease", 2015);

        let sentences = state_bar_insight(&rows, 2015);
        assert_eq!(
            sentences,
            vec![
                "Top 3 states in 2015: California (55,003), Florida (45,441), New York (44,076).",
                "This view shows the full distribution across states (not just the top few).",
                "Use the bubble map to spot geographic clustering patterns.",
            ]
        );
    }

    #[test]
    fn test_state_bar_with_no_rows_gives_guidance() {
        let sentences = state_bar_insight(&[], 2003);
        assert_eq!(
            sentences,
            vec![
                "Try a different year (2000/2005/2010/2015).",
                "Or switch to a different cause.",
            ]
        );
    }

    #[test]
    fn test_bubble_sentences_describe_sizing() {
        let collection = StateCollection::from_records(state_records());
        let rows = collection.rows_for("Heart disease", 2015);

        let sentences = bubble_insight(&rows, 2015);
        assert_eq!(
            sentences,
            vec![
                "Top US states in 2015: California (55,003), Florida (45,441), New York (44,076).",
                "Bubble size indicates magnitude of deaths (larger = more deaths).",
                "This supports geographic pattern identification for leading causes and mental health context.",
            ]
        );
    }

    #[test]
    fn test_bubble_ranking_renders_even_without_rows() {
        let sentences = bubble_insight(&[], 2010);
        assert_eq!(sentences[0], "Top US states in 2010: .");
        assert_eq!(sentences.len(), 3);
    }

    #[test]
    fn test_missing_cause_guidance() {
        let sentences = missing_cause_insights();
        assert_eq!(
            sentences,
            vec![
                "Check that your US state JSON includes this cause.",
                "Make sure the key is 'Cause Name' (or 'Cause').",
                "Try another cause.",
            ]
        );
    }
}
