// crates/compose_report/src/lib.rs

use classify_fix::classify_fix;

const DESCRIPTION_HEADER: &str = "Compilation errors detected:\n";
const STEPS_HEADER: &str = "Suggested steps to fix:\n";
const ENTRY_TITLE: &str = "[ ] Fix compilation errors\n";

/// Builds the description section: the fixed header followed by one
/// `- <line>` bullet per error line, in input order.
pub fn build_description(errors: &[String]) -> String {
    let mut description = String::from(DESCRIPTION_HEADER);
    for error in errors {
        description.push_str(&format!("- {}\n", error));
    }
    description
}

/// Builds the steps section: the fixed header followed by exactly one
/// suggested step per error line, classified independently and emitted in
/// the same order as the description bullets.
pub fn build_steps(errors: &[String]) -> String {
    let mut steps = String::from(STEPS_HEADER);
    for error in errors {
        steps.push_str(&format!("- {}\n", classify_fix(error).step_text()));
    }
    steps
}

/// Composes the full tracking-file entry for one run: a leading blank line,
/// the checkbox title, the description section, a blank line, the `Steps:`
/// header with the steps section, and a trailing blank line.
pub fn compose_entry(errors: &[String]) -> String {
    format!(
        "\n{}Description:\n{}\nSteps:\n{}\n",
        ENTRY_TITLE,
        build_description(errors),
        build_steps(errors)
    )
}
