use super::csv::REQUIRED_COLUMNS;

/// A starter Markdown document: one flow box with a description and one step.
pub fn markdown_template() -> String {
    [
        "## Getting Started",
        "*Everything a new teammate needs on day one*",
        "",
        "### Create your account",
        "Open the invite email and choose a password.",
        "",
    ]
    .join("\n")
}

/// A starter CSV document: the required header and one example row.
pub fn csv_template() -> String {
    format!(
        "{}\n{}\n",
        REQUIRED_COLUMNS.join(","),
        r#"Getting Started,"Everything a new teammate needs, on day one",Create your account,Open the invite email and choose a password."#
    )
}
