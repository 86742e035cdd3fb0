use crate::engine::weights::ModelSummary;
use crate::report::{percent, progress_bar, RenderOptions};
use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport, options: &RenderOptions) -> String {
    let result = &report.result;
    let mut output = String::new();
    output.push_str("# Credit Risk Report\n\n");
    output.push_str(&format!("Credit score: {}\n\n", result.credit_score));
    output.push_str(&format!(
        "**{}** ({} Approval Chance)\n\n",
        report.tier,
        percent(result.probability_good)
    ));
    output.push_str(&format!(
        "`{}`\n\n",
        progress_bar(result.probability_good, options.progress_width)
    ));

    output.push_str("## Model Output\n\n");
    output.push_str(&format!(
        "- log_odds: {:.4}\n- probability_bad: {:.4}\n- probability_good: {:.4}\n\n",
        result.log_odds, result.probability_bad, result.probability_good
    ));

    if options.explain {
        output.push_str("## Contributions\n\n");
        output.push_str("| term | category | weight |\n|---|---|---|\n");
        for contribution in &report.contributions {
            output.push_str(&format!(
                "| {} | {} | {:+.4} |\n",
                contribution.term,
                contribution.category.unwrap_or("-"),
                contribution.weight
            ));
        }
        output.push('\n');
    }

    output.push_str("## Unrecognized Inputs\n\n");
    if report.unrecognized.is_empty() {
        output.push_str("- none\n");
    } else {
        for note in &report.unrecognized {
            output.push_str(&format!("- {}: `{}`\n", note.field, note.value));
        }
    }

    output
}

pub fn weights_to_markdown(summary: &ModelSummary) -> String {
    let mut output = String::new();
    output.push_str("# Risk Model Weights\n\n");
    output.push_str(&format!(
        "- intercept: {}\n- annual_income: {} per unit\n- years_employed: {} per year\n\n",
        summary.intercept, summary.income_coefficient, summary.employment_coefficient
    ));
    for table in &summary.tables {
        output.push_str(&format!("## {}\n\n| label | weight |\n|---|---|\n", table.field));
        for entry in &table.entries {
            output.push_str(&format!("| {} | {:+.4} |\n", entry.label, entry.weight));
        }
        output.push('\n');
    }
    output
}
