use barrace_rs::core::{
    DEFAULT_TOP_N, ProductRecord, max_value_kusd, rank_top_n, resolve_top_n,
};

fn record(code: u32, value_kusd: f64) -> ProductRecord {
    ProductRecord {
        code,
        name: None,
        value_kusd,
        quantity_tons: None,
    }
}

#[test]
fn ranking_sorts_descending_and_truncates() {
    let records = vec![
        record(10101, 5.0),
        record(10102, 12.5),
        record(10103, 7.25),
    ];

    let ranked = rank_top_n(&records, 2);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].code, 10102);
    assert_eq!(ranked[1].code, 10103);
}

#[test]
fn ranking_returns_everything_when_n_exceeds_input() {
    let records = vec![record(1, 1.0), record(2, 2.0)];
    let ranked = rank_top_n(&records, 50);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].code, 2);
}

#[test]
fn ranking_of_empty_input_is_empty() {
    assert!(rank_top_n(&[], 30).is_empty());
}

#[test]
fn equal_values_keep_their_input_order() {
    let records = vec![
        record(30, 4.0),
        record(10, 9.0),
        record(20, 4.0),
        record(40, 4.0),
    ];

    let ranked = rank_top_n(&records, 4);
    let codes: Vec<u32> = ranked.iter().map(|r| r.code).collect();
    assert_eq!(codes, vec![10, 30, 20, 40]);
}

#[test]
fn top_n_input_falls_back_to_default() {
    assert_eq!(resolve_top_n(None), DEFAULT_TOP_N);
    assert_eq!(resolve_top_n(Some("")), DEFAULT_TOP_N);
    assert_eq!(resolve_top_n(Some("abc")), DEFAULT_TOP_N);
}

#[test]
fn top_n_input_is_clamped_to_the_minimum() {
    assert_eq!(resolve_top_n(Some("0")), 1);
    assert_eq!(resolve_top_n(Some("-7")), 1);
    assert_eq!(resolve_top_n(Some("15")), 15);
    assert_eq!(resolve_top_n(Some(" 12 ")), 12);
}

#[test]
fn max_value_of_empty_set_is_zero() {
    assert_eq!(max_value_kusd(&[]), 0.0);
    assert_eq!(max_value_kusd(&[record(1, 3.5)]), 3.5);
}
