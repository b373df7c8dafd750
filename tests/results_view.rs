// tests/results_view.rs
mod common;

use phish_lens::adapter::{parse_table_html, parse_url_response};
use phish_lens::data::{AnalysisResult, BatchAnalysis, Confidence, FeatureRecord, Prediction, UrlAnalysis};
use phish_lens::results::{Preview, Summary, ELLIPSIS, PREDICTION_HEADER, UNKNOWN_LABEL};

fn url_result(prediction_value: f64) -> UrlAnalysis {
    UrlAnalysis {
        url: "https://example.com".into(),
        prediction_value,
        prediction_label: None,
        confidence: Confidence::Label("High".into()),
        features: (0..12).map(|i| (format!("f{i}"), i.to_string())).collect(),
    }
}

#[test]
fn url_labels_follow_prediction_value() {
    assert_eq!(url_result(1.0).prediction().label(), "Legitimate");
    assert_eq!(url_result(0.0).prediction().label(), "Phishing");
    assert_eq!(url_result(-1.0).prediction().label(), "Phishing");
}

#[test]
fn fractional_url_values_are_never_legitimate() {
    for v in [0.5, 0.999, 1.4] {
        assert_eq!(url_result(v).prediction(), Prediction::Phishing, "value {v}");
    }

    let body = common::url_json("https://half.test", 1).replace("\"prediction_value\": 1", "\"prediction_value\": 0.5");
    let AnalysisResult::Single(u) = parse_url_response(&body).unwrap() else { panic!("expected single") };
    assert_eq!(u.prediction_value, 0.5);
    assert_eq!(u.prediction(), Prediction::Phishing);
    assert_eq!(Summary::of_single(&u), Summary { total: 1, phishing: 1, legitimate: 0 });
}

#[test]
fn single_summary_counts_one() {
    let s = Summary::of(&AnalysisResult::Single(url_result(-1.0)));
    assert_eq!(s, Summary { total: 1, phishing: 1, legitimate: 0 });
    assert_eq!(s.phishing_pct(), 100.0);
}

#[test]
fn batch_counts_and_percentages() {
    let res = parse_table_html(&common::pandas_table(&["-1", "1", "1", "-1.0", "1"])).unwrap();
    let s = Summary::of(&res);
    assert_eq!(s.total, 5);
    assert_eq!(s.phishing, 2);
    assert_eq!(s.legitimate, 3);
    assert_eq!(s.phishing + s.legitimate, s.total);
    assert!((s.phishing_pct() - 40.0).abs() < 1e-9);
    assert!((s.legitimate_pct() - 60.0).abs() < 1e-9);
}

#[test]
fn unrecognized_sentinels_stay_out_of_both_counts() {
    let rows: Vec<FeatureRecord> = ["-1", "1", "0", "", "maybe"]
        .iter()
        .map(|p| [("x", "1"), ("predicted_column", *p)].into_iter().collect())
        .collect();
    let b = BatchAnalysis { headers: vec!["x".into(), "predicted_column".into()], rows };
    let s = Summary::of_batch(&b);
    assert_eq!(s.total, 5);
    assert!(s.phishing + s.legitimate <= s.total);
    assert_eq!(s.unrecognized(), 3);
}

#[test]
fn empty_batch_has_zero_percentages() {
    let s = Summary::of_batch(&BatchAnalysis::default());
    assert_eq!(s.total, 0);
    assert_eq!(s.phishing_pct(), 0.0);
    assert_eq!(s.legitimate_pct(), 0.0);
}

#[test]
fn batch_preview_caps_columns_but_keeps_prediction() {
    let res = parse_table_html(&common::pandas_table(&["-1", "1"])).unwrap();
    let p = Preview::of(&res);

    assert_eq!(
        p.headers,
        vec![
            "having_IP_Address", "URL_Length", "Shortining_Service", "having_At_Symbol",
            "double_slash_redirecting", ELLIPSIS, PREDICTION_HEADER,
        ]
    );
    assert_eq!(p.hidden_columns, 25);
    assert_eq!(p.rows.len(), 2);
    assert_eq!(p.rows[0].cells.last().map(String::as_str), Some("Phishing"));
    assert_eq!(p.rows[0].prediction, Some(Prediction::Phishing));
    assert_eq!(p.rows[1].cells.last().map(String::as_str), Some("Legitimate"));

    // Truncation is display-only.
    let AnalysisResult::Batch(b) = &res else { unreachable!() };
    assert_eq!(b.rows[0].len(), 31);
}

#[test]
fn narrow_batch_preview_has_no_ellipsis() {
    let b = BatchAnalysis {
        headers: vec!["a".into(), "predicted_column".into()],
        rows: vec![[("a", "7"), ("predicted_column", "2")].into_iter().collect()],
    };
    let p = Preview::of_batch(&b);
    assert_eq!(p.headers, vec!["a", PREDICTION_HEADER]);
    assert_eq!(p.rows[0].cells, vec!["7", UNKNOWN_LABEL]);
    assert_eq!(p.rows[0].prediction, None);
    assert_eq!(p.hidden_columns, 0);
}

#[test]
fn single_preview_shows_ten_features_then_verdict() {
    let res = parse_url_response(&common::url_json("https://example.com", 0)).unwrap();
    let p = Preview::of(&res);
    assert_eq!(p.headers, vec!["Feature", "Value"]);
    assert_eq!(p.rows.len(), 11);
    assert_eq!(p.rows[0].cells, vec!["having_IP_Address", "-1"]);
    assert_eq!(p.more_features, 20);
    let last = p.rows.last().unwrap();
    assert_eq!(last.cells, vec!["Final Prediction", "Phishing"]);
    assert_eq!(last.prediction, Some(Prediction::Phishing));
}

#[test]
fn single_preview_with_few_features_shows_all() {
    let mut u = url_result(1.0);
    u.features = [("a", "1"), ("b", "2")].into_iter().collect();
    let p = Preview::of_single(&u);
    assert_eq!(p.rows.len(), 3);
    assert_eq!(p.more_features, 0);
}
