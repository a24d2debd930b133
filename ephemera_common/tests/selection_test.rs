//! Integration tests for quote selection and stardate formatting.
//!
//! These tests verify the end-to-end properties of the library: selection
//! only ever returns members of the configured list, draws are close to
//! uniform over a large sample, and stardates keep their fixed-width shape.

use std::collections::HashMap;

use chrono::NaiveDate;
use ephemera_common::{Edition, QuoteList, random_quote, stardate_for, to_stardate};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn every_draw_is_a_member_of_its_edition() {
    for edition in [Edition::Classic, Edition::Revised] {
        let list = edition.quote_list();
        let expected: Vec<String> = (0..list.len()).filter_map(|i| list.get(i)).collect();

        let mut rng = StdRng::seed_from_u64(1701);
        for _ in 0..5_000 {
            let quote = list.random_quote(&mut rng);
            assert!(
                expected.contains(&quote),
                "draw {:?} not in {} list",
                quote,
                edition
            );
        }
    }
}

#[test]
fn draws_are_close_to_uniform() {
    let list = Edition::Revised.quote_list();
    let draws = 100_000usize;
    let expected_per_quote = draws as f64 / list.len() as f64;

    let mut rng = StdRng::seed_from_u64(74656);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        *counts.entry(list.random_quote(&mut rng)).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), list.len(), "every quote should be drawn");
    for (quote, count) in counts {
        let deviation = (count as f64 - expected_per_quote).abs() / expected_per_quote;
        assert!(
            deviation < 0.1,
            "{:?} drawn {} times, expected about {:.0}",
            quote,
            count,
            expected_per_quote
        );
    }
}

#[test]
fn custom_lists_honor_the_edition_transform() {
    let quotes = vec!["Jolan tru".to_string(), "Voka a Bentel".to_string()];
    let list = QuoteList::new(quotes, Edition::Revised.uppercases()).unwrap();

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let quote = list.random_quote(&mut rng);
        assert!(quote == "JOLAN TRU" || quote == "VOKA A BENTEL");
    }
}

#[test]
fn ambient_surface_returns_uppercased_revised_quotes() {
    let expected: Vec<String> = Edition::Revised
        .quotes()
        .iter()
        .map(|q| q.to_uppercase())
        .collect();
    for _ in 0..100 {
        assert!(expected.contains(&random_quote()));
    }
}

#[test]
fn stardates_keep_the_fixed_width_shape_across_the_calendar() {
    let start = NaiveDate::from_ymd_opt(1999, 12, 28).unwrap();
    for offset in 0..400 {
        let date = start + chrono::Days::new(offset);
        let stardate = stardate_for(date);
        let bytes = stardate.as_bytes();
        assert_eq!(bytes.len(), 7, "bad width for {}: {}", date, stardate);
        assert_eq!(bytes[4], b'.');
        assert!(
            bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || b.is_ascii_digit())
        );
    }
}

#[test]
fn current_stardate_is_well_formed() {
    let stardate = to_stardate();
    assert_eq!(stardate.len(), 7);
    assert_eq!(&stardate[4..5], ".");
}
