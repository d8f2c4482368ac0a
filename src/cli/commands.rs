//! Command implementations for the miniparse CLI.

use std::io::{self, Read};

use tracing::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::MiniparseConfig;
use crate::error::Result;
use crate::extract::EntityExtractor;
use crate::pipeline::Pipeline;
use crate::result::IntentResult;
use crate::speech::{analyze_speech_patterns, preprocess_speech_input};
use crate::tokenizer::tokenize;

/// Execute a CLI command.
pub async fn execute_command(args: MiniparseArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Tokenize(tokenize_args) => run_tokenize(tokenize_args, &config, &args),
        Command::Extract(input_args) => run_extract(input_args, &config, &args),
        Command::Process(process_args) => run_process(process_args, &config, &args).await,
        Command::Speech(speech_args) => run_speech(speech_args, &config, &args),
    }
}

/// Load the configuration file, or fall back to defaults.
fn load_config(args: &MiniparseArgs) -> Result<MiniparseConfig> {
    match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            MiniparseConfig::from_file(path)
        }
        None => Ok(MiniparseConfig::default()),
    }
}

/// The command's text argument, or all of stdin when it was omitted.
fn read_input(input: &InputArgs) -> Result<String> {
    read_input_from(input, io::stdin().lock())
}

/// The command's text argument, or all of `reader` without trailing line
/// breaks. Empty input is valid and yields an empty string.
fn read_input_from<R: Read>(input: &InputArgs, mut reader: R) -> Result<String> {
    match &input.text {
        Some(text) => Ok(text.clone()),
        None => {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
        }
    }
}

/// Tokenize text.
fn run_tokenize(
    tokenize_args: &TokenizeArgs,
    config: &MiniparseConfig,
    args: &MiniparseArgs,
) -> Result<()> {
    let text = read_input(&tokenize_args.input)?;

    let mut tokenizer_config = config.tokenizer;
    if tokenize_args.no_lowercase {
        tokenizer_config.lowercase = false;
    }
    if tokenize_args.merge_symbols {
        tokenizer_config.merge_symbols = true;
    }

    let mut tokens = tokenize(&text, &tokenizer_config);
    if tokenize_args.skip_whitespace {
        tokens.retain(|t| !t.is_whitespace());
    }
    debug!(tokens = tokens.len(), "tokenized input");

    output_result("Tokens:", &TokenizeOutput { tokens }, args)
}

/// Extract entities from text.
fn run_extract(input_args: &InputArgs, config: &MiniparseConfig, args: &MiniparseArgs) -> Result<()> {
    let text = read_input(input_args)?;

    let extractor = EntityExtractor::new(config.extraction);
    let entities = extractor.scan(&text);

    output_result("Entities:", &ExtractOutput { text, entities }, args)
}

/// Run the configured pipeline.
async fn run_process(
    process_args: &ProcessArgs,
    config: &MiniparseConfig,
    args: &MiniparseArgs,
) -> Result<()> {
    let mut text = read_input(&process_args.input)?;
    if process_args.speech {
        text = preprocess_speech_input(&text, &config.speech);
        debug!(%text, "speech preprocessing applied");
    }

    let pipeline = Pipeline::from_config(config);
    let result: IntentResult = pipeline.process(&text).await?;

    output_result("Pipeline result:", &result, args)
}

/// Remove or report speech disfluencies.
fn run_speech(speech_args: &SpeechArgs, config: &MiniparseConfig, args: &MiniparseArgs) -> Result<()> {
    let text = read_input(&speech_args.input)?;

    let output = if speech_args.analyze {
        SpeechOutput {
            patterns: Some(analyze_speech_patterns(&text)),
            text,
        }
    } else {
        SpeechOutput {
            text: preprocess_speech_input(&text, &config.speech),
            patterns: None,
        }
    };

    output_result("Speech:", &output, args)
}
