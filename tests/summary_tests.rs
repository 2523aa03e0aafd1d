use fixture_calc::{compute, compute_summary, parse_numbers, Summary};
use pretty_assertions::assert_eq;

#[test]
fn test_fixture_list_summary() {
    let values =
        parse_numbers("1,2,3,4,5,6,7,8,9,10,21,22,23,24,25,26,27,28,29,30").unwrap();
    assert_eq!(values.len(), 20);
    assert_eq!(
        compute_summary(&values),
        Summary {
            total: 310,
            even: 10,
            odd: 10,
            top_bucket: 0
        }
    );
}

#[test]
fn test_fixture_compute_value() {
    assert_eq!(compute(0), 0);
    assert_eq!(compute(1), 0);
    assert_eq!(compute(10), 70);
}

#[test]
fn test_empty_list_summary() {
    let values = parse_numbers("  ,  ").unwrap();
    assert_eq!(compute_summary(&values), Summary::default());
}

#[test]
fn test_summary_debug_rendering() {
    let summary = compute_summary(&[30, 31, 2]);
    assert_eq!(
        format!("{:?}", summary),
        "Summary { total: 63, even: 2, odd: 1, top_bucket: 30 }"
    );
}

#[test]
fn test_summary_total_wraps_on_overflow() {
    let summary = compute_summary(&[i64::MAX, 1]);
    assert_eq!(summary.total, i64::MIN);
    assert_eq!(summary.count(), 2);
}
