//! Command driver
//!
//! Reads a macro string, turns it into a Response and prints the result.

use std::io::Read;

use anyhow::{Context, Result};

use crate::config::{Config, InputSource, OutputFormat};
use crate::parser::Parser;
use crate::response::Response;

/// Run the command with a fully resolved configuration
pub fn run(config: &Config) -> Result<()> {
    let input = read_input(&config.input)?;
    let output = render(config, &input)?;
    println!("{output}");
    Ok(())
}

/// Produce the command output for `input`
pub fn render(config: &Config, input: &str) -> Result<String> {
    let parsed = Parser::with_defaults(config.macro_defaults.clone()).parse(input);
    let nodes = if config.strict {
        parsed.into_strict()?
    } else {
        for diagnostic in &parsed.diagnostics {
            log::info!("{} (offset {})", diagnostic.message, diagnostic.offset);
        }
        parsed.nodes
    };

    let response = Response::from_nodes(nodes).context("building response")?;

    if config.check {
        response.validate()?;
        return Ok(format!("ok: {} verb(s)", response.verbs().len()));
    }

    match config.format {
        OutputFormat::Xml => Ok(response.encode()?),
        OutputFormat::Json => {
            response.validate()?;
            Ok(serde_json::to_string_pretty(&response)?)
        }
    }
}

fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Inline(text) => Ok(text.clone()),
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading macro file {}", path.display())),
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading macro string from stdin")?;
            Ok(text.trim_end_matches('\n').to_string())
        }
    }
}
