use sqlbench_bench::report::render;
use sqlbench_bench::stats::Summary;

#[test]
fn test_empty_summary_renders_count_only() {
    let lines = render(&Summary::from_samples(&[]));
    assert_eq!(lines, vec!["Num Executions: 0".to_string()]);
}

#[test]
fn test_full_summary_renders_fixed_line_order() {
    let lines = render(&Summary::from_samples(&[10.0, 20.0, 30.0, 40.0, 50.0]));

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Num Executions: 5");
    assert_eq!(lines[1], "Avg: 30, std-dev: 15.811388300841896");
    assert_eq!(lines[2], "p50: 30");
    assert_eq!(lines[3], "p90: 46");
    assert_eq!(lines[4], "p95: 48");
    assert_eq!(lines[5], "p99: 49.6");
}

#[test]
fn test_single_sample_report() {
    let lines = render(&Summary::from_samples(&[2.5]));

    assert_eq!(lines[0], "Num Executions: 1");
    assert_eq!(lines[1], "Avg: 2.5, std-dev: 0");
    assert_eq!(lines[2], "p50: 2.5");
}
