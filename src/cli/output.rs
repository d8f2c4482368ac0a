//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{MiniparseArgs, OutputFormat};
use crate::entity::Entity;
use crate::error::Result;
use crate::result::IntentResult;
use crate::speech::SpeechPatterns;
use crate::token::Token;

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeOutput {
    pub tokens: Vec<Token>,
}

/// Result structure for entity extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractOutput {
    pub text: String,
    pub entities: Vec<Entity>,
}

/// Result structure for speech preprocessing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechOutput {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<SpeechPatterns>,
}

/// Types with a human-readable rendering.
pub trait HumanReadable {
    fn render_human(&self) -> String;
}

impl HumanReadable for TokenizeOutput {
    fn render_human(&self) -> String {
        render_tokens(&self.tokens)
    }
}

impl HumanReadable for ExtractOutput {
    fn render_human(&self) -> String {
        render_entities(&self.entities)
    }
}

impl HumanReadable for IntentResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Text: {}", self.text());
        let _ = writeln!(out);
        let _ = writeln!(out, "Tokens ({}):", self.tokens.len());
        out.push_str(&render_tokens(&self.tokens));
        let _ = writeln!(out);
        let _ = writeln!(out, "Entities ({}):", self.entities.len());
        out.push_str(&render_entities(&self.entities));
        out
    }
}

impl HumanReadable for SpeechOutput {
    fn render_human(&self) -> String {
        let Some(patterns) = &self.patterns else {
            return format!("{}\n", self.text);
        };

        let mut out = String::new();
        let _ = writeln!(out, "Filler words: {}", patterns.filler_words.join(", "));
        let _ = writeln!(out, "Repetitions:  {}", patterns.repetitions.join(", "));
        let _ = writeln!(out, "Stutters:     {}", patterns.stutters.join(", "));
        out
    }
}

fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{:>5}..{:<5} {:<10} {:?}",
            token.start, token.end, token.token_type, token.value
        );
    }
    out
}

fn render_entities(entities: &[Entity]) -> String {
    if entities.is_empty() {
        return "(none)\n".to_string();
    }

    let mut out = String::new();
    for entity in entities {
        let _ = writeln!(
            out,
            "{:>5}..{:<5} {:<8} {}",
            entity.start, entity.end, entity.entity_type, entity.value
        );
    }
    out
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &MiniparseArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &MiniparseArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MiniparseArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
