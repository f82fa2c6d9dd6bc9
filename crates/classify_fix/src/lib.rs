// crates/classify_fix/src/lib.rs

/// The suggested-fix bucket for a single error line.
///
/// Classification is first-match-wins in the order the variants are listed
/// here: an undefined reference into SFML beats the missing-file rule, which
/// beats the generic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestedFix {
    /// An undefined reference that mentions SFML: the library is not linked
    /// or not installed.
    InstallSfml,
    /// The compiler could not find a source or header file.
    CheckSourceFiles,
    /// Anything else: read the message and fix the code.
    ReviewCode,
}

impl SuggestedFix {
    /// The fixed suggestion line written to the steps section.
    pub fn step_text(&self) -> &'static str {
        match self {
            SuggestedFix::InstallSfml => {
                "Install SFML libraries: sudo apt-get install libsfml-dev"
            }
            SuggestedFix::CheckSourceFiles => "Check if all source files are present.",
            SuggestedFix::ReviewCode => {
                "Review the error message and correct the code accordingly."
            }
        }
    }
}

/// Classifies one error line into a suggested fix.
///
/// The "undefined reference" check is case-sensitive while the "sfml" check
/// is not, matching how linker output spells the reference but library names
/// vary in case. Each line is judged on its own; the first applicable rule
/// wins.
pub fn classify_fix(line: &str) -> SuggestedFix {
    if line.contains("undefined reference") && line.to_lowercase().contains("sfml") {
        SuggestedFix::InstallSfml
    } else if line.contains("no such file") {
        SuggestedFix::CheckSourceFiles
    } else {
        SuggestedFix::ReviewCode
    }
}
