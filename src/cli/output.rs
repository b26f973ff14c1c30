use crate::generator::render::{doc_sentence, Target};
use crate::{Diagnostic, GenerateResult};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One processed input (a file path or `<stdin>`) and what it produced.
pub struct SourceResult {
    pub source: String,
    pub result: GenerateResult,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonDeclaration {
    source: String,
    label: String,
    comment: String,
    identifier: String,
    #[serde(rename = "type")]
    semantic_type: String,
    rendered: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSkipped {
    source: String,
    line_number: usize,
    line: String,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    target: String,
    sources_processed: usize,
    total_declarations: usize,
    total_skipped: usize,
    declarations: Vec<JsonDeclaration>,
    skipped: Vec<JsonSkipped>,
}

/// Render everything generated for all sources in the requested format
pub fn format_results(results: &[SourceResult], target: Target, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(results)),
        OutputFormat::Json => format_json(results, target),
    }
}

fn format_text(results: &[SourceResult]) -> String {
    results
        .iter()
        .map(|r| r.result.rendered.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_json(results: &[SourceResult], target: Target) -> Result<String> {
    let declarations: Vec<JsonDeclaration> = results
        .iter()
        .flat_map(|r| {
            r.result.declarations.iter().map(move |d| JsonDeclaration {
                source: r.source.clone(),
                label: d.label.clone(),
                comment: doc_sentence(&d.label),
                identifier: d.identifier.clone(),
                semantic_type: target.type_name(d.semantic_type).to_string(),
                rendered: target.render(d),
            })
        })
        .collect();

    let skipped: Vec<JsonSkipped> = results
        .iter()
        .flat_map(|r| {
            r.result.diagnostics.iter().map(move |d| JsonSkipped {
                source: r.source.clone(),
                line_number: d.line_number,
                line: d.line.clone(),
                message: d.message.clone(),
            })
        })
        .collect();

    let output = JsonOutput {
        target: target.to_string(),
        sources_processed: results.len(),
        total_declarations: declarations.len(),
        total_skipped: skipped.len(),
        declarations,
        skipped,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

/// Report skipped lines on stderr, keeping stdout for generated code
pub fn print_diagnostics(source: &str, diagnostics: &[Diagnostic], colored_output: bool) {
    for diag in diagnostics {
        let location = format!("{}:{}", source, diag.line_number);
        if colored_output {
            eprintln!(
                "{} {} {} : {}",
                location.blue().bold(),
                "Error with".red().bold(),
                diag.line.yellow(),
                diag.message
            );
        } else {
            eprintln!("{} Error with {} : {}", location, diag.line, diag.message);
        }
    }
}

pub fn print_summary(total_declarations: usize, total_skipped: usize, colored: bool) {
    let decl_word = if total_declarations == 1 { "declaration" } else { "declarations" };
    let line_word = if total_skipped == 1 { "line" } else { "lines" };

    eprintln!();
    if total_skipped == 0 {
        if colored {
            eprintln!(
                "{} {} {} generated",
                "✓".green().bold(),
                total_declarations.to_string().green().bold(),
                decl_word
            );
        } else {
            eprintln!("✓ {} {} generated", total_declarations, decl_word);
        }
    } else if colored {
        eprintln!(
            "{} {} {} generated, {} {} skipped",
            "✗".red().bold(),
            total_declarations.to_string().green().bold(),
            decl_word,
            total_skipped.to_string().red().bold(),
            line_word
        );
    } else {
        eprintln!(
            "✗ {} {} generated, {} {} skipped",
            total_declarations, decl_word, total_skipped, line_word
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generator;

    fn source(name: &str, input: &str) -> SourceResult {
        SourceResult {
            source: name.to_string(),
            result: Generator::default().process(input),
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_skips_empty_sources() {
        let results = vec![
            source("a.txt", "[F] custName"),
            source("b.txt", "garbage"),
            source("c.txt", "[F] prodNum"),
        ];
        let text = format_results(&results, Target::CSharp, OutputFormat::Text).unwrap();
        assert_eq!(text.matches("/// <summary>").count(), 2);
        assert!(text.contains("{ get; set; }\n\n/// <summary>"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_json_output() {
        let results = vec![source("in.txt", "[F] cust-num (Integer)\nbad line")];
        let json = format_results(&results, Target::CSharp, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_declarations"], 1);
        assert_eq!(value["total_skipped"], 1);
        assert_eq!(value["declarations"][0]["identifier"], "CustomerNumber");
        assert_eq!(value["declarations"][0]["comment"], "Customer number.");
        assert_eq!(value["declarations"][0]["type"], "int");
        assert_eq!(value["skipped"][0]["line_number"], 2);
        assert_eq!(value["skipped"][0]["line"], "bad line");
    }
}
