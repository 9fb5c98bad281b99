//! Rendering of scenario comparisons
//!
//! Plain-text and LaTeX tables over baseline/proposed result pairs.

use crate::scenario::ScenarioComparison;
use crate::ScenarioResult;

const BASELINE_LABEL: &str = "EEVDF(CFS)";
const PROPOSED_LABEL: &str = "GRAPH-BURST";
const RULE_WIDTH: usize = 85;

/// Column-aligned table, one baseline and one proposed row per scenario.
pub fn render_text(comparisons: &[ScenarioComparison]) -> String {
    let mut out = String::new();
    let rule = "-".repeat(RULE_WIDTH);

    out.push_str(&format!(
        "{:<25} | {:<12} | {:<12} | {:<12} | Jain's Index\n",
        "Scenario", "Mode", "99p Latency", "Throughput"
    ));
    out.push_str(&format!("{rule}\n"));

    for comparison in comparisons {
        out.push_str(&text_row(&comparison.scenario, BASELINE_LABEL, &comparison.baseline));
        out.push_str(&text_row("", PROPOSED_LABEL, &comparison.proposed));
        out.push_str(&format!("{rule}\n"));
    }
    out
}

fn text_row(scenario: &str, label: &str, result: &ScenarioResult) -> String {
    format!(
        "{:<25} | {:<12} | {:<10.2}ms | {:<10.0}u | {:.4}\n",
        scenario, label, result.p99, result.throughput, result.jain
    )
}

/// `table` environment with the proposed rows set in bold.
pub fn render_latex(comparisons: &[ScenarioComparison]) -> String {
    let mut out = String::new();

    out.push_str("\\begin{table}[h]\n");
    out.push_str("\\centering\n");
    out.push_str("\\caption{Comparison of Graph-Burst EEVDF vs. Baseline EEVDF/CFS}\n");
    out.push_str("\\begin{tabular}{|l|c|c|c|r|}\n");
    out.push_str("\\hline\n");
    out.push_str("Scenario & Mode & 99p Latency & Throughput & Jain's Index \\\\\n");
    out.push_str("\\hline\n");

    for comparison in comparisons {
        let scenario = escape_latex(&comparison.scenario);
        let baseline = &comparison.baseline;
        let proposed = &comparison.proposed;
        out.push_str(&format!(
            "{scenario} & EEVDF & {:.2}ms & {:.0} & {:.4} \\\\\n",
            baseline.p99, baseline.throughput, baseline.jain
        ));
        out.push_str(&format!(
            "{scenario} & \\textbf{{Proposed}} & \\textbf{{{:.2}ms}} & {:.0} & {:.4} \\\\\n",
            proposed.p99, proposed.throughput, proposed.jain
        ));
        out.push_str("\\hline\n");
    }

    out.push_str("\\end{tabular}\n");
    out.push_str("\\end{table}\n");
    out
}

fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '\\' => escaped.push_str("\\textbackslash{}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
