//! Output formatting for the README contract verifier CLI
//!
//! Text output is the line-per-violation report CI logs rely on; JSON and
//! YAML carry the same facts for machine consumers. None of the formats
//! include timings, so an unchanged tree renders byte-identical output.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

use readme_contract_core::{ContractError, Discovery, RunResult, Verifier, Violation};

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// One line per violation followed by the verdict
    #[default]
    Text,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Diagnostic log format
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Colour policy for the verdict line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Configure `colored` for the rest of the process
pub fn apply_color_choice(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {
            if !io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }
}

/// Serialized verification report
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub passed: bool,
    pub total_count: usize,
    pub expected_count: usize,
    pub violations: Vec<ViolationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_mismatch: Option<String>,
    pub summary: String,
}

/// Individual violation output structure
#[derive(Debug, Clone, Serialize)]
pub struct ViolationOutput {
    pub rule: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub message: String,
}

impl ViolationOutput {
    pub fn from_violation(violation: &Violation) -> Self {
        Self {
            rule: violation.rule.to_string(),
            path: violation.path.clone(),
            heading: violation.heading.clone(),
            message: violation.to_string(),
        }
    }
}

impl RunOutput {
    pub fn from_result(result: &RunResult) -> Self {
        Self {
            passed: result.passed(),
            total_count: result.total_count,
            expected_count: result.expected_count,
            violations: result
                .violations
                .iter()
                .map(ViolationOutput::from_violation)
                .collect(),
            count_mismatch: result.count_mismatch.map(|m| m.to_string()),
            summary: result.summary_line(),
        }
    }
}

/// Discovered files listing
#[derive(Debug, Clone, Serialize)]
pub struct ListingOutput {
    pub count: usize,
    pub levels: usize,
    pub readmes: Vec<ListedReadme>,
}

/// One discovered README
#[derive(Debug, Clone, Serialize)]
pub struct ListedReadme {
    pub level: String,
    pub path: String,
}

/// One rule of the active contract
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutput {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub description: String,
}

/// The active contract
#[derive(Debug, Clone, Serialize)]
pub struct ContractOutput {
    pub projects_dir: String,
    pub expected_count: String,
    pub rules: Vec<RuleOutput>,
}

fn emit_json<T: Serialize>(value: &T) -> Result<(), ContractError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ContractError::Serialization(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn emit_yaml<T: Serialize>(value: &T) -> Result<(), ContractError> {
    let yaml = serde_yaml::to_string(value)
        .map_err(|e| ContractError::Serialization(e.to_string()))?;
    print!("{}", yaml);
    Ok(())
}

/// Render a verification result
pub fn render_run(result: &RunResult, format: OutputFormat) -> Result<(), ContractError> {
    match format {
        OutputFormat::Json => emit_json(&RunOutput::from_result(result)),
        OutputFormat::Yaml => emit_yaml(&RunOutput::from_result(result)),
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            let lines = result.report_lines();
            let (body, verdict) = lines.split_at(lines.len().saturating_sub(1));
            for line in body {
                writeln!(stdout, "{}", line)?;
            }
            for line in verdict {
                let styled = if result.passed() {
                    line.green().bold()
                } else {
                    line.red().bold()
                };
                writeln!(stdout, "{}", styled)?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Render the list of discovered READMEs
pub fn render_listing(found: &Discovery, format: OutputFormat) -> Result<(), ContractError> {
    let listing = ListingOutput {
        count: found.readmes.len(),
        levels: found.level_count,
        readmes: found
            .readmes
            .iter()
            .map(|r| ListedReadme {
                level: r.level.clone(),
                path: r.relative_path.clone(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => emit_json(&listing),
        OutputFormat::Yaml => emit_yaml(&listing),
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            for readme in &listing.readmes {
                writeln!(stdout, "{}  level={}", readme.path, readme.level)?;
            }
            writeln!(stdout, "count={} levels={}", listing.count, listing.levels)?;
            Ok(())
        }
    }
}

/// Render the contract a verifier enforces
pub fn render_contract(verifier: &Verifier, format: OutputFormat) -> Result<(), ContractError> {
    let config = verifier.config();
    let contract = ContractOutput {
        projects_dir: config.projects_dir.clone(),
        expected_count: config.expected_count.to_string(),
        rules: verifier
            .rules()
            .iter()
            .map(|rule| RuleOutput {
                id: rule.id().to_string(),
                name: rule.name().to_string(),
                kind: rule.kind().to_string(),
                description: rule.description(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Json => emit_json(&contract),
        OutputFormat::Yaml => emit_yaml(&contract),
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", "Project README contract".cyan().bold())?;
            writeln!(stdout, "{}", "=".repeat(60))?;
            writeln!(stdout, "  Projects dir:   {}/level-*/NN-*/README.md", contract.projects_dir)?;
            writeln!(stdout, "  Expected count: {}", contract.expected_count)?;
            writeln!(stdout)?;
            for rule in &contract.rules {
                writeln!(stdout, "{} [{}] {}", "-".blue(), rule.id.dimmed(), rule.name)?;
                writeln!(stdout, "    {}", rule.description)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readme_contract_core::{RuleKind, Violation};

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_run_output_from_failing_result() {
        let result = RunResult::new(
            164,
            165,
            vec![Violation::missing_heading("Next", "projects/level-1/01-a/README.md")],
        );
        let output = RunOutput::from_result(&result);
        assert!(!output.passed);
        assert_eq!(output.violations.len(), 1);
        assert_eq!(output.violations[0].rule, "required-heading");
        assert_eq!(
            output.violations[0].message,
            "missing heading '## Next': projects/level-1/01-a/README.md"
        );
        assert_eq!(
            output.count_mismatch.as_deref(),
            Some("unexpected project README count: expected 165, found 164")
        );
        assert_eq!(output.summary, "project README contract check failed");
    }

    #[test]
    fn test_run_output_json_shape() {
        let result = RunResult::new(
            1,
            1,
            vec![Violation::new(RuleKind::HomeLink, "projects/level-1/01-a/README.md")],
        );
        let json = serde_json::to_value(RunOutput::from_result(&result)).unwrap();
        assert_eq!(json["violations"][0]["rule"], "home-link");
        assert!(json["violations"][0].get("heading").is_none());
        assert!(json.get("count_mismatch").is_none());
    }
}
