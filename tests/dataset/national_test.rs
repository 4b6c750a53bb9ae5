#[cfg(test)]
mod tests {
    use crate::utils::national_records;
    use mortality_views::{NationalCollection, NationalRecord};

    #[test]
    fn test_find_matches_exactly() {
        let collection = NationalCollection::from_records(national_records());

        let record = collection
            .find("United States", "Heart disease", 2015)
            .unwrap();
        assert_eq!(record.deaths, 633_842.0);

        // Near misses on each key return nothing
        assert!(collection.find("United States", "Heart disease", 2014).is_none());
        assert!(collection.find("United States", "heart disease", 2015).is_none());
        assert!(collection.find("Canada", "Heart disease", 2015).is_none());
    }

    #[test]
    fn test_deaths_for_reads_zero_when_absent() {
        let collection = NationalCollection::from_records(national_records());

        assert_eq!(collection.deaths_for("Mexico", "Heart disease", 2010), 105_144.0);
        assert_eq!(collection.deaths_for("Mexico", "Heart disease", 1999), 0.0);
    }

    #[test]
    fn test_filter_by_cause_keeps_input_order() {
        let collection = NationalCollection::from_records(national_records());

        let rows = collection.filter_by_cause("Heart disease");
        assert_eq!(rows.len(), 8);
        // US rows precede Mexico rows in the fixture and must stay that way
        assert_eq!(rows[0].entity, "United States");
        assert_eq!(rows[0].year, 2000);
        assert_eq!(rows[4].entity, "Mexico");
    }

    #[test]
    fn test_series_sorts_by_year_ascending() {
        // Heart rows shuffled out of year order
        let records = vec![
            NationalRecord::new("United States", 2015, "Heart disease", 633_842.0),
            NationalRecord::new("United States", 2000, "Heart disease", 710_760.0),
            NationalRecord::new("United States", 2010, "Heart disease", 597_689.0),
            NationalRecord::new("United States", 2005, "Heart disease", 652_091.0),
        ];
        let collection = NationalCollection::from_records(records);

        let series = collection.series_for_entity("United States", "Heart disease");
        let years: Vec<i32> = series.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2005, 2010, 2015]);
    }

    #[test]
    fn test_series_sort_is_stable_for_duplicate_years() {
        let records = vec![
            NationalRecord::new("United States", 2015, "Heart disease", 1.0),
            NationalRecord::new("United States", 2010, "Heart disease", 2.0),
            NationalRecord::new("United States", 2015, "Heart disease", 3.0),
        ];
        let collection = NationalCollection::from_records(records);

        let series = collection.series_for_entity("United States", "Heart disease");
        let deaths: Vec<f64> = series.iter().map(|r| r.deaths).collect();
        // The two 2015 rows keep their input order after the sort
        assert_eq!(deaths, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_causes_are_unique_and_sorted() {
        let collection = NationalCollection::from_records(national_records());

        assert_eq!(
            collection.causes(),
            vec!["Cancer", "Diabetes", "Heart disease", "Mental health/suicide"]
        );
    }

    #[test]
    fn test_default_cause_prefers_configured_label() {
        let collection = NationalCollection::from_records(national_records());

        assert_eq!(
            collection.default_cause("Heart disease"),
            Some("Heart disease".to_string())
        );
        // Absent preference falls back to the first sorted cause
        assert_eq!(
            collection.default_cause("Alzheimer"),
            Some("Cancer".to_string())
        );
    }

    #[test]
    fn test_default_cause_on_empty_collection() {
        let collection = NationalCollection::default();
        assert_eq!(collection.default_cause("Heart disease"), None);
    }
}
