use super::MemoryStore;
use itertools::Itertools;

/// Renders a stored guide back into the `##`/`###` Markdown convention.
///
/// The output re-imports to the same flow boxes and steps, provided no step
/// content line itself starts with a heading marker.
pub fn export_markdown(store: &MemoryStore, guide_id: &str) -> String {
    store
        .flow_boxes(guide_id)
        .into_iter()
        .map(|flow_box| {
            let mut section = format!("## {}\n", flow_box.title);
            if !flow_box.description.is_empty() {
                section.push_str(&format!("*{}*\n", flow_box.description));
            }
            for step in store.steps(flow_box.id) {
                section.push_str(&format!("\n### {}\n", step.title));
                if !step.content.is_empty() {
                    section.push_str(&step.content);
                    section.push('\n');
                }
            }
            section
        })
        .join("\n")
}
