// crates/analyze_errors/src/lib.rs

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use append_todo::append_entry;
use compose_report::compose_entry;
use extract_error_lines::{extract_error_lines, read_error_log};

/// Default location of the compiler log, relative to the working directory.
pub const DEFAULT_INPUT: &str = "compilererror.txt";
/// Default location of the tracking file, one directory above the working
/// directory.
pub const DEFAULT_OUTPUT: &str = "../TODO_tetris_fixes.txt";

/// Configuration for one analysis run.
pub struct AnalyzerConfig {
    /// Path to the compiler log to read.
    pub input: PathBuf,
    /// Path to the tracking file to append to.
    pub output: PathBuf,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            verbose: false,
        }
    }
}

/// The terminal branch an analysis run ended on. All four are handled and
/// exit cleanly; only unexpected I/O failures surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The input log does not exist.
    InputMissing,
    /// The input log is empty or whitespace only.
    InputEmpty,
    /// The log has content but no line matched the error filter.
    NoMatches,
    /// An entry was appended to the tracking file.
    Appended,
}

/// Runs the read → filter → classify → compose → append pipeline once,
/// printing a status line for whichever branch it ends on.
///
/// A missing input file is the only read failure handled; everything else
/// (permission denied, invalid UTF-8) propagates as an error.
pub fn run(config: &AnalyzerConfig) -> Result<AnalysisOutcome> {
    let content = match read_error_log(&config.input) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            println!("{} not found.", config.input.display());
            return Ok(AnalysisOutcome::InputMissing);
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Error reading {}", config.input.display()));
        }
    };

    if content.trim().is_empty() {
        println!("No errors found in {}.", config.input.display());
        return Ok(AnalysisOutcome::InputEmpty);
    }

    let errors = extract_error_lines(&content);
    if errors.is_empty() {
        println!("No specific errors identified.");
        return Ok(AnalysisOutcome::NoMatches);
    }

    if config.verbose {
        log::debug!("[VERBOSE] {} error line(s) matched:", errors.len());
        for error in &errors {
            log::debug!("  - {}", error);
        }
    }

    let entry = compose_entry(&errors);
    append_entry(&config.output, &entry)?;

    println!("Error analysis added to {}", config.output.display());
    Ok(AnalysisOutcome::Appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> AnalyzerConfig {
        AnalyzerConfig {
            input: dir.join("compilererror.txt"),
            output: dir.join("TODO_tetris_fixes.txt"),
            verbose: false,
        }
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let outcome = run(&config).expect("missing input is a handled branch");
        assert_eq!(outcome, AnalysisOutcome::InputMissing);
        assert!(!config.output.exists());
    }

    #[test]
    fn test_whitespace_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "  \n\n\t\n").unwrap();

        let outcome = run(&config).expect("blank input is a handled branch");
        assert_eq!(outcome, AnalysisOutcome::InputEmpty);
        assert!(!config.output.exists());
    }

    #[test]
    fn test_no_matching_lines_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "compiling...\nbuild succeeded\n").unwrap();

        let outcome = run(&config).expect("no-match input is a handled branch");
        assert_eq!(outcome, AnalysisOutcome::NoMatches);
        assert!(!config.output.exists());
    }

    #[test]
    fn test_matched_errors_append_entry() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(
            &config.input,
            "some/path.cpp:10: error: missing semicolon\n\
             undefined reference to `sf::Window::Window()' (SFML related)\n",
        )
        .unwrap();

        let outcome = run(&config).expect("run should succeed");
        assert_eq!(outcome, AnalysisOutcome::Appended);

        let written = fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            written,
            "\n[ ] Fix compilation errors\n\
             Description:\n\
             Compilation errors detected:\n\
             - some/path.cpp:10: error: missing semicolon\n\
             - undefined reference to `sf::Window::Window()' (SFML related)\n\
             \nSteps:\n\
             Suggested steps to fix:\n\
             - Review the error message and correct the code accordingly.\n\
             - Install SFML libraries: sudo apt-get install libsfml-dev\n\n"
        );
    }

    #[test]
    fn test_second_run_appends_second_block() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(&config.input, "main.cpp:1: error: oops\n").unwrap();

        run(&config).unwrap();
        let first = fs::read_to_string(&config.output).unwrap();
        run(&config).unwrap();
        let second = fs::read_to_string(&config.output).unwrap();

        assert!(second.starts_with(&first));
        assert_eq!(second.len(), first.len() * 2);
        assert_eq!(
            second.matches("[ ] Fix compilation errors").count(),
            2
        );
    }
}
