//! Property-based integration tests for the lead filter engine.
//!
//! These tests verify that universal properties of `view()` hold across
//! randomly generated lead lists and filter criteria.

use proptest::prelude::*;
use seller_console_core::leads::{
    available_sources, view, FilterCriteria, Lead, LeadStatus, ScoreRange, SortOrder,
    SourceFilter, StatusFilter,
};

// =============================================================================
// Generators
// =============================================================================

fn arb_status() -> impl Strategy<Value = LeadStatus> {
    prop_oneof![
        Just(LeadStatus::New),
        Just(LeadStatus::Contacted),
        Just(LeadStatus::Qualified),
        Just(LeadStatus::Unqualified),
    ]
}

fn arb_source() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("website".to_string()),
        Just("referral".to_string()),
        Just("linkedin".to_string()),
        Just("cold-call".to_string()),
    ]
}

/// Generates a list of leads with unique ids.
fn arb_leads() -> impl Strategy<Value = Vec<Lead>> {
    prop::collection::vec(
        (
            "[A-Za-z]{3,10}",
            "[A-Za-z]{3,10}",
            "[a-z]{2,8}",
            arb_source(),
            0u8..=100,
            arb_status(),
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, company, mailbox, source, score, status))| Lead {
                id: i.to_string(),
                email: format!("{}@{}.com", mailbox, company.to_lowercase()),
                name,
                company,
                source,
                score,
                status,
            })
            .collect()
    })
}

fn arb_filters() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![Just(String::new()), "[a-zA-Z]{1,3}"],
        prop::option::of(arb_status()),
        prop::option::of(arb_source()),
        0u8..=100,
        0u8..=100,
        prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)],
    )
        .prop_map(|(search_term, status, source, a, b, sort_order)| FilterCriteria {
            search_term,
            status_filter: status.map_or(StatusFilter::All, StatusFilter::Only),
            source_filter: source.map_or(SourceFilter::All, SourceFilter::Only),
            score_range: ScoreRange {
                min: a.min(b),
                max: a.max(b),
            },
            sort_order,
        })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn view_is_idempotent(leads in arb_leads(), filters in arb_filters()) {
        let once = view(&leads, &filters);
        let twice = view(&once, &filters);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn view_returns_exactly_the_matching_leads(leads in arb_leads(), filters in arb_filters()) {
        let result = view(&leads, &filters);
        let expected = leads.iter().filter(|l| filters.matches(l)).count();
        prop_assert_eq!(result.len(), expected);
        prop_assert!(result.iter().all(|l| filters.matches(l)));
    }

    #[test]
    fn view_is_sorted_and_stable(leads in arb_leads(), filters in arb_filters()) {
        let result = view(&leads, &filters);
        for pair in result.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            match filters.sort_order {
                SortOrder::Asc => prop_assert!(a.score <= b.score),
                SortOrder::Desc => prop_assert!(a.score >= b.score),
            }
            // ids are input positions; equal scores keep input order
            if a.score == b.score {
                let ia: usize = a.id.parse().unwrap();
                let ib: usize = b.id.parse().unwrap();
                prop_assert!(ia < ib);
            }
        }
    }

    #[test]
    fn score_range_bounds_are_inclusive(leads in arb_leads(), min in 1u8..=99, width in 0u8..=50) {
        let max = min.saturating_add(width).min(99);
        let filters = FilterCriteria {
            score_range: ScoreRange::new(min, max).unwrap(),
            ..Default::default()
        };
        let result = view(&leads, &filters);
        for lead in &leads {
            let included = result.iter().any(|l| l.id == lead.id);
            prop_assert_eq!(included, min <= lead.score && lead.score <= max);
        }
    }

    #[test]
    fn search_matches_email_only_leads(leads in arb_leads()) {
        for lead in &leads {
            let needle = lead.email.split('@').next().unwrap_or_default().to_uppercase();
            let filters = FilterCriteria { search_term: needle, ..Default::default() };
            let result = view(&leads, &filters);
            prop_assert!(result.iter().any(|l| l.id == lead.id));
        }
    }

    #[test]
    fn available_sources_are_sorted_and_unique(leads in arb_leads()) {
        let sources = available_sources(&leads);
        prop_assert!(sources.windows(2).all(|w| w[0] < w[1]));
        for lead in &leads {
            prop_assert!(sources.contains(&lead.source));
        }
    }

    #[test]
    fn default_filters_keep_every_lead(leads in arb_leads()) {
        prop_assert_eq!(view(&leads, &FilterCriteria::default()).len(), leads.len());
    }
}
