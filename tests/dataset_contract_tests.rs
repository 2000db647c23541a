use barrace_rs::RaceError;
use barrace_rs::core::TradeTimeSeries;

#[test]
fn the_reference_document_parses() {
    let document = r#"{
      "meta": {"units": {"v": "thousand USD", "q": "metric tons"}},
      "years": [2020, 2021],
      "data": [
        {"year": 2020, "products": [
          {"k": 10101, "hs6": "010101", "name": "Horses: live", "v": 5.0, "q": 12.0},
          {"k": 10102, "v": 12.5, "q": null}
        ]},
        {"year": 2021, "products": [{"k": 10101, "v": 7.25}]}
      ]
    }"#;

    let series = TradeTimeSeries::from_json_str(document).expect("series");
    assert_eq!(series.years(), &[2020, 2021]);
    assert_eq!(series.len(), 2);
    assert!(series.meta().and_then(|meta| meta.get("units")).is_some());

    let records = series.records_for_year(2020);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].code, 10101);
    assert_eq!(records[0].name.as_deref(), Some("Horses: live"));
    assert_eq!(records[0].quantity_tons, Some(12.0));
    assert_eq!(records[1].quantity_tons, None);
}

#[test]
fn a_listed_year_without_data_maps_to_an_empty_record_list() {
    let document = r#"{
      "years": [2019, 2020],
      "data": [{"year": 2020, "products": [{"k": 1, "v": 1.0}]}]
    }"#;

    let series = TradeTimeSeries::from_json_str(document).expect("series");
    assert!(series.records_for_year(2019).is_empty());
    assert_eq!(series.records_for_year(2020).len(), 1);
}

#[test]
fn non_ascending_years_are_rejected() {
    let document = r#"{"years": [2021, 2020], "data": []}"#;
    let err = TradeTimeSeries::from_json_str(document).unwrap_err();
    assert!(matches!(err, RaceError::MalformedDataset(_)));
}

#[test]
fn duplicate_data_years_are_rejected() {
    let document = r#"{
      "years": [2020],
      "data": [
        {"year": 2020, "products": []},
        {"year": 2020, "products": []}
      ]
    }"#;
    let err = TradeTimeSeries::from_json_str(document).unwrap_err();
    assert!(err.to_string().contains("duplicate data entry"));
}

#[test]
fn data_for_an_unlisted_year_is_rejected() {
    let document = r#"{
      "years": [2020],
      "data": [{"year": 1999, "products": []}]
    }"#;
    let err = TradeTimeSeries::from_json_str(document).unwrap_err();
    assert!(err.to_string().contains("absent from the years list"));
}

#[test]
fn negative_values_are_rejected() {
    let document = r#"{
      "years": [2020],
      "data": [{"year": 2020, "products": [{"k": 1, "v": -3.0}]}]
    }"#;
    assert!(TradeTimeSeries::from_json_str(document).is_err());
}

#[test]
fn an_empty_years_list_is_rejected() {
    let document = r#"{"years": [], "data": []}"#;
    let err = TradeTimeSeries::from_json_str(document).unwrap_err();
    assert!(err.to_string().contains("no years"));
}

#[test]
fn malformed_json_reports_a_parse_diagnostic() {
    let err = TradeTimeSeries::from_json_str("{not json").unwrap_err();
    assert!(err.to_string().starts_with("malformed dataset"));
}

#[test]
fn ranking_the_reference_document_selects_the_highest_value() {
    use barrace_rs::core::{format_value_kusd, rank_top_n};

    let document = r#"{
      "years": [2020, 2021],
      "data": [
        {"year": 2020, "products": [{"k": 10101, "v": 5.0}, {"k": 10102, "v": 12.5}]},
        {"year": 2021, "products": [{"k": 10101, "v": 7.25}]}
      ]
    }"#;

    let series = TradeTimeSeries::from_json_str(document).expect("series");
    let top = rank_top_n(series.records_for_year(2020), 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].code, 10102);
    assert_eq!(top[0].value_kusd, 12.5);
    assert_eq!(format_value_kusd(top[0].value_kusd), "12.50k");
}

#[test]
fn blank_names_load_as_missing() {
    let document = r#"{
      "years": [2020],
      "data": [{"year": 2020, "products": [{"k": 1, "name": "  ", "v": 1.0}]}]
    }"#;
    let series = TradeTimeSeries::from_json_str(document).expect("series");
    assert_eq!(series.records_for_year(2020)[0].name, None);
}
