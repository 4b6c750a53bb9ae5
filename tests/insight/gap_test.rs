#[cfg(test)]
mod tests {
    use mortality_views::insight::gap_insight;

    #[test]
    fn test_gap_sentences_for_heart_disease_2015() {
        let sentences = gap_insight(633_842.0, 111_436.0, 2015, "Heart disease");

        assert_eq!(
            sentences,
            vec![
                "In 2015, the U.S. recorded 633,842 deaths from Heart disease; Mexico recorded 111,436.",
                "The U.S. total is higher than Mexico by 522,406 deaths.",
                "That’s about 5.69× Mexico’s count.",
                "Use the trend view to see whether this gap grows or shrinks over time.",
            ]
        );
    }

    #[test]
    fn test_gap_reports_lower_direction() {
        let sentences = gap_insight(50.0, 100.0, 2010, "Diabetes");

        assert_eq!(sentences[1], "The U.S. total is lower than Mexico by 50 deaths.");
        assert_eq!(sentences[2], "That’s about 0.50× Mexico’s count.");
    }

    #[test]
    fn test_gap_with_equal_counts() {
        let sentences = gap_insight(50.0, 50.0, 2010, "Stroke");

        assert_eq!(sentences[1], "The U.S. total is the same as Mexico by 0 deaths.");
        assert_eq!(sentences[2], "That’s about 1.00× Mexico’s count.");
    }

    #[test]
    fn test_gap_omits_ratio_when_mexico_has_no_deaths() {
        let sentences = gap_insight(100.0, 0.0, 2015, "Stroke");

        assert_eq!(sentences.len(), 3);
        assert_eq!(
            sentences[0],
            "In 2015, the U.S. recorded 100 deaths from Stroke; Mexico recorded 0."
        );
        assert_eq!(sentences[1], "The U.S. total is higher than Mexico by 100 deaths.");
        assert_eq!(
            sentences[2],
            "Use the trend view to see whether this gap grows or shrinks over time."
        );
    }

    #[test]
    fn test_gap_omits_ratio_when_us_has_no_deaths() {
        let sentences = gap_insight(0.0, 100.0, 2015, "Stroke");

        // ratio() is Some(0.0) here; a zero multiplier must not render
        assert_eq!(sentences.len(), 3);
        assert_eq!(
            sentences[0],
            "In 2015, the U.S. recorded 0 deaths from Stroke; Mexico recorded 100."
        );
        assert_eq!(sentences[1], "The U.S. total is lower than Mexico by 100 deaths.");
        assert_eq!(
            sentences[2],
            "Use the trend view to see whether this gap grows or shrinks over time."
        );
        assert!(sentences.iter().all(|s| !s.contains('×')));
    }

    #[test]
    fn test_gap_with_both_counts_zero() {
        let sentences = gap_insight(0.0, 0.0, 2015, "Stroke");

        // No ratio sentence, but the comparison still renders
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1], "The U.S. total is the same as Mexico by 0 deaths.");
    }

    #[test]
    fn test_gap_is_deterministic() {
        let first = gap_insight(633_842.0, 111_436.0, 2015, "Heart disease");
        let second = gap_insight(633_842.0, 111_436.0, 2015, "Heart disease");
        assert_eq!(first, second);
    }
}
