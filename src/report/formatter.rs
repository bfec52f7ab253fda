use super::outcome::ImportOutcome;

/// Formats import outcomes into human-readable summaries
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format an outcome as a short multi-line report.
    pub fn format(outcome: &ImportOutcome) -> String {
        match outcome {
            ImportOutcome::Imported(summary) => {
                let mut result = format!("Import succeeded: {}\n", summary.message);
                for flow in &summary.flows {
                    result.push_str(&format!(
                        "  -> {} ({})\n",
                        flow.name,
                        Self::plural(flow.step_count, "step")
                    ));
                }
                result.push_str(&format!(
                    "Created {} and {} at {}",
                    Self::plural(summary.flow_boxes_created, "flow box"),
                    Self::plural(summary.steps_created, "step"),
                    summary.imported_at.format("%Y-%m-%d %H:%M:%S UTC")
                ));
                result
            }
            ImportOutcome::Failed(failure) => {
                let mut result = format!("Import failed: {}", failure.message);
                if failure.flow_boxes_created > 0 || failure.steps_created > 0 {
                    result.push_str(&format!(
                        "\n  -> {} and {} were written before the failure",
                        Self::plural(failure.flow_boxes_created, "flow box"),
                        Self::plural(failure.steps_created, "step")
                    ));
                }
                result
            }
        }
    }

    fn plural(count: usize, noun: &str) -> String {
        match (count, noun) {
            (1, _) => format!("1 {}", noun),
            (_, "flow box") => format!("{} flow boxes", count),
            _ => format!("{} {}s", count, noun),
        }
    }
}
