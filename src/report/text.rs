use crate::engine::weights::ModelSummary;
use crate::report::{percent, progress_bar, RenderOptions};
use crate::types::report::ScoreReport;

pub fn to_text(report: &ScoreReport, options: &RenderOptions) -> String {
    let probability_good = report.result.probability_good;
    let mut output = String::new();
    output.push_str(&format!("Credit score: {}\n", report.result.credit_score));
    output.push_str(&format!(
        "{} ({} Approval Chance)\n",
        report.tier,
        percent(probability_good)
    ));
    output.push_str(&format!(
        "{} {}\n",
        progress_bar(probability_good, options.progress_width),
        percent(probability_good)
    ));

    if options.explain {
        output.push_str("\nContributions to log-odds:\n");
        for contribution in &report.contributions {
            let name = match contribution.category {
                Some(category) => format!("{} ({})", contribution.term, category),
                None => contribution.term.to_string(),
            };
            output.push_str(&format!("  {name:<40} {:+.4}\n", contribution.weight));
        }
        output.push_str(&format!("  {:<40} {:+.4}\n", "total", report.result.log_odds));
    }

    for note in &report.unrecognized {
        output.push_str(&format!(
            "note: {} value {:?} not recognized; scored as neutral\n",
            note.field, note.value
        ));
    }

    output
}

pub fn weights_to_text(summary: &ModelSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("intercept: {:+.4}\n", summary.intercept));
    output.push_str(&format!(
        "annual_income: {:+.8} per unit\n",
        summary.income_coefficient
    ));
    output.push_str(&format!(
        "years_employed: {:+.6} per year\n",
        summary.employment_coefficient
    ));
    for table in &summary.tables {
        output.push_str(&format!("\n{}:\n", table.field));
        for entry in &table.entries {
            output.push_str(&format!("  {:<32} {:+.4}\n", entry.label, entry.weight));
        }
    }
    output
}
