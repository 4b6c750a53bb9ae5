#[cfg(test)]
mod tests {
    use crate::utils::{SNAPSHOT_YEARS, dataset};
    use mortality_views::insight::{RelationshipOutcome, relationship_insight};

    #[test]
    fn test_reserved_cause_is_rejected() {
        let outcome = relationship_insight(&dataset(), "Mental health/suicide", &SNAPSHOT_YEARS);

        match outcome {
            RelationshipOutcome::Rejected { note, insights } => {
                assert_eq!(
                    note,
                    "Pick a cause other than 'Mental health/suicide' for this relationship view."
                );
                assert_eq!(
                    insights,
                    vec![
                        "This plot compares a selected cause against Mental health/suicide deaths.",
                        "Choose Heart disease, Cancer, Stroke, etc.",
                    ]
                );
            }
            RelationshipOutcome::Compared { .. } => panic!("reserved cause must be rejected"),
        }
    }

    #[test]
    fn test_rejection_ignores_dataset_contents() {
        // Even an empty dataset rejects the reserved cause the same way
        let empty = mortality_views::MortalityDataset::default();
        let outcome = relationship_insight(&empty, "Mental health/suicide", &SNAPSHOT_YEARS);
        assert!(matches!(outcome, RelationshipOutcome::Rejected { .. }));
    }

    #[test]
    fn test_compared_points_cover_both_entities_and_all_years() {
        let outcome = relationship_insight(&dataset(), "Heart disease", &SNAPSHOT_YEARS);

        let RelationshipOutcome::Compared { points, insights } = outcome else {
            panic!("non-reserved cause must compare");
        };

        // US snapshots first, then Mexico, each in snapshot-year order
        assert_eq!(points.len(), 8);
        assert!(points[..4].iter().all(|p| p.entity == "United States"));
        assert!(points[4..].iter().all(|p| p.entity == "Mexico"));
        let years: Vec<i32> = points[..4].iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2000, 2005, 2010, 2015]);

        // Paired lookups for 2015
        let us_2015 = &points[3];
        assert_eq!(us_2015.disease_deaths, 633_842.0);
        assert_eq!(us_2015.mental_deaths, 44_193.0);

        assert_eq!(insights.len(), 3);
        assert_eq!(
            insights[0],
            "Each point is a 5-year snapshot (year labels on points)."
        );
    }

    #[test]
    fn test_missing_years_produce_zero_filled_points() {
        let outcome = relationship_insight(&dataset(), "Cancer", &SNAPSHOT_YEARS);

        let RelationshipOutcome::Compared { points, .. } = outcome else {
            panic!("non-reserved cause must compare");
        };

        // Cancer only has 2015 rows; earlier snapshots still appear as zeros
        let us_2000 = &points[0];
        assert_eq!(us_2000.year, 2000);
        assert_eq!(us_2000.disease_deaths, 0.0);
        assert_eq!(us_2000.mental_deaths, 29_350.0);

        let mx_2015 = &points[7];
        assert_eq!(mx_2015.disease_deaths, 84_142.0);
        assert_eq!(mx_2015.mental_deaths, 5_199.0);
    }
}
