use integration_tests::harness::{fixture, temp_log};
use logscope_core::analyze_file;
use logscope_core::config::{OutputFormat, ReportSettings};
use logscope_core::parse::SkipReason;
use logscope_core::render::{RenderOptions, render, render_text};
use logscope_core::source::SourceError;
use pretty_assertions::assert_eq;

fn settings() -> ReportSettings {
    ReportSettings::default()
}

#[test]
fn combined_fixture_counts() {
    // Act
    let result = analyze_file(&fixture("combined.log"), &settings()).unwrap();

    // Assert
    let report = &result.summary;
    assert_eq!(result.lines, 9);
    assert_eq!(result.parsed(), 6);
    assert_eq!(result.skipped(), 3);
    assert_eq!(result.skipped.get(SkipReason::Empty), 1);
    assert_eq!(result.skipped.get(SkipReason::MissingField), 1);
    assert_eq!(result.skipped.get(SkipReason::InvalidStatus), 1);

    assert_eq!(
        report.ips.top(20),
        vec![("192.168.1.1", 3), ("10.0.0.1", 2), ("203.0.113.7", 1)]
    );
    assert_eq!(report.user_agents.get("UA1"), 3);
    assert_eq!(report.user_agents.get("UA2"), 2);
    assert_eq!(report.client_errors(), 2);
    assert_eq!(report.server_errors(), 2);
    assert_eq!(report.watched.get("admin-ajax.php"), 2);
    assert_eq!(report.paths.top(1), vec![("/", 2)]);
}

#[test]
fn combined_fixture_text_report() {
    // Arrange
    let result = analyze_file(&fixture("combined.log"), &settings()).unwrap();

    // Act
    let text = render_text(&result, RenderOptions::from(&settings()));

    // Assert
    assert!(text.starts_with("=== Summary ===\nTotal Requests: 6\n4xx Errors: 2\n5xx Errors: 2\n"));
    assert!(text.contains("Watched admin-ajax.php: 2\n"));
    assert!(text.contains("--- Top 20 Source IPs ---\n3     192.168.1.1\n2     10.0.0.1\n1     203.0.113.7\n\n"));
    assert!(text.contains("Identity: human=0 bot=1 unknown=5\n"));
    assert!(text.contains("9 lines read, 6 parsed, 3 lines skipped (malformed)\n"));
}

#[test]
fn twenty_five_ips_are_cut_to_the_top_twenty() {
    // Arrange: 10.9.0.k appears k times
    let mut contents = String::new();
    for k in 1..=25 {
        for _ in 0..k {
            contents.push_str(&format!(
                "10.9.0.{k} - - [09/Dec/2025:11:00:00 -0600] \"GET / HTTP/1.1\" 200 1 \"-\" \"ua\"\n"
            ));
        }
    }
    let (_dir, path) = temp_log(contents.as_bytes());

    // Act
    let result = analyze_file(&path, &settings()).unwrap();
    let top = result.summary.ips.top(20);

    // Assert
    assert_eq!(top.len(), 20);
    assert_eq!(top.first(), Some(&("10.9.0.25", 25)));
    assert_eq!(top.last(), Some(&("10.9.0.6", 6)));
    assert!(top.windows(2).all(|w| w[0].1 > w[1].1));
}

#[test]
fn empty_file_reports_zeroes() {
    // Arrange
    let (_dir, path) = temp_log(b"");

    // Act
    let result = analyze_file(&path, &settings()).unwrap();
    let text = render_text(&result, RenderOptions::from(&settings()));

    // Assert
    assert_eq!(result.lines, 0);
    assert_eq!(result.skipped(), 0);
    assert!(text.contains("Total Requests: 0\n4xx Errors: 0\n5xx Errors: 0\n"));
    assert!(text.contains("Watched admin-ajax.php: 0\n"));
}

#[test]
fn nonexistent_path_is_a_source_error() {
    // Act
    let err = analyze_file(&fixture("does-not-exist.log"), &settings()).unwrap_err();

    // Assert
    assert!(matches!(err, SourceError::NotFound { .. }));
}

#[test]
fn analysis_is_repeatable() {
    // Act
    let first = analyze_file(&fixture("combined.log"), &settings()).unwrap();
    let second = analyze_file(&fixture("combined.log"), &settings()).unwrap();

    // Assert
    assert_eq!(first, second);
    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
        let options = RenderOptions::from(&settings());
        assert_eq!(
            render(&first, format, options).unwrap(),
            render(&second, format, options).unwrap()
        );
    }
}

#[test]
fn json_report_matches_text_counts() {
    // Arrange
    let result = analyze_file(&fixture("combined.log"), &settings()).unwrap();

    // Act
    let out = render(&result, OutputFormat::Json, RenderOptions::from(&settings())).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    // Assert
    let section = &json["sections"][0];
    assert_eq!(section["title"], "Summary");
    assert_eq!(section["top_ips"][0]["value"], "192.168.1.1");
    assert_eq!(section["top_ips"][0]["count"], 3);
    assert_eq!(section["identity"]["bot"], 1);
    assert_eq!(json["skipped_by_reason"]["invalid_status"], 1);
}
