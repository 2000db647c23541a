use barrace_rs::core::{ProductRecord, rank_top_n};
use proptest::prelude::*;

fn arb_records() -> impl Strategy<Value = Vec<ProductRecord>> {
    prop::collection::vec((0u32..1_000_000, 0.0f64..1_000_000.0), 0..60).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(code, value_kusd)| ProductRecord {
                code,
                name: None,
                value_kusd,
                quantity_tons: None,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn ranking_length_order_and_membership(records in arb_records(), top_n in 1usize..40) {
        let ranked = rank_top_n(&records, top_n);

        prop_assert_eq!(ranked.len(), top_n.min(records.len()));
        prop_assert!(
            ranked
                .windows(2)
                .all(|pair| pair[0].value_kusd >= pair[1].value_kusd)
        );
        for entry in &ranked {
            prop_assert!(records.contains(entry));
        }
    }

    #[test]
    fn ranking_is_stable_for_equal_values(
        codes in prop::collection::vec(0u32..1_000_000, 2..30),
        value in 0.0f64..1_000.0
    ) {
        // Every record shares one value: ranking must preserve input order.
        let records: Vec<ProductRecord> = codes
            .iter()
            .map(|&code| ProductRecord {
                code,
                name: None,
                value_kusd: value,
                quantity_tons: None,
            })
            .collect();

        let ranked = rank_top_n(&records, records.len());
        let ranked_codes: Vec<u32> = ranked.iter().map(|record| record.code).collect();
        prop_assert_eq!(ranked_codes, codes);
    }

    #[test]
    fn ranked_values_dominate_the_leftovers(records in arb_records(), top_n in 1usize..20) {
        let ranked = rank_top_n(&records, top_n);
        let Some(cutoff) = ranked.last().map(|record| record.value_kusd) else {
            return Ok(());
        };

        let mut leftovers = records.clone();
        for kept in &ranked {
            if let Some(position) = leftovers.iter().position(|record| record == kept) {
                leftovers.remove(position);
            }
        }
        prop_assert!(leftovers.iter().all(|record| record.value_kusd <= cutoff));
    }
}
