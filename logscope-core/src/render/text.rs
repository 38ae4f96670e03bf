use crate::aggregate::{AggregateReport, Aggregation, SUMMARY_TITLE, Tally};
use crate::identity::Classifier;
use crate::parse::StatusClass;
use crate::render::RenderOptions;

const RULE_WIDTH: usize = 30;

const STATUS_CLASSES: [StatusClass; 6] = [
    StatusClass::Informational,
    StatusClass::Success,
    StatusClass::Redirection,
    StatusClass::ClientError,
    StatusClass::ServerError,
    StatusClass::Other,
];

/// Ranked plain-text report for a single set of counters.
pub fn render_report(report: &AggregateReport, top_n: usize) -> String {
    let mut out = String::new();
    push_section(&mut out, SUMMARY_TITLE, report, top_n, None);
    out
}

/// Every section of the aggregation followed by the line accounting footer.
pub fn render_text(aggregation: &Aggregation, options: RenderOptions) -> String {
    let classifier = options.identify.then(Classifier::new);
    let mut out = String::new();

    for section in aggregation.sections() {
        push_section(
            &mut out,
            &section.title,
            section.report,
            options.top_n,
            classifier.as_ref(),
        );
    }

    out.push_str(&format!(
        "{} lines read, {} parsed, {} lines skipped (malformed)\n",
        aggregation.lines,
        aggregation.parsed(),
        aggregation.skipped()
    ));
    for (reason, count) in aggregation.skipped.iter() {
        out.push_str(&format!("  {:<20} {}\n", reason.as_str(), count));
    }

    out
}

fn push_section(
    out: &mut String,
    title: &str,
    report: &AggregateReport,
    top_n: usize,
    classifier: Option<&Classifier>,
) {
    out.push_str(&format!("=== {title} ===\n"));
    out.push_str(&format!("Total Requests: {}\n", report.requests));
    out.push_str(&format!("4xx Errors: {}\n", report.client_errors()));
    out.push_str(&format!("5xx Errors: {}\n", report.server_errors()));
    for (pattern, count) in report.watched.iter() {
        out.push_str(&format!("Watched {pattern}: {count}\n"));
    }

    let classes: Vec<_> = STATUS_CLASSES
        .iter()
        .map(|class| format!("{}={}", class.as_str(), report.status.get(*class)))
        .collect();
    out.push_str(&format!("Status: {}\n\n", classes.join(" ")));

    push_ranked(out, &format!("Top {top_n} Source IPs"), &report.ips, top_n);
    push_ranked(out, &format!("Top {top_n} User Agents"), &report.user_agents, top_n);
    push_ranked(out, &format!("Top {top_n} URIs"), &report.paths, top_n);

    if let Some(classifier) = classifier {
        let identity = classifier.summarize(&report.user_agents);
        out.push_str(&format!(
            "Identity: human={} bot={} unknown={}\n",
            identity.human, identity.bot, identity.unknown
        ));
        if !identity.devices.is_empty() {
            let devices: Vec<_> = identity
                .devices
                .iter()
                .map(|(device, count)| format!("{}={}", device.as_str(), count))
                .collect();
            out.push_str(&format!("Devices: {}\n", devices.join(" ")));
        }
        out.push('\n');
    }

    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");
}

fn push_ranked(out: &mut String, heading: &str, tally: &Tally, top_n: usize) {
    out.push_str(&format!("--- {heading} ---\n"));

    let ranked = tally.top(top_n);
    if ranked.is_empty() {
        out.push_str("<none>\n");
    }
    for (value, count) in ranked {
        out.push_str(&format!("{count:<5} {value}\n"));
    }
    out.push('\n');
}
