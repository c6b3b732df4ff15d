use clap::Parser;
use kate::cli::{generate_completions, Args, Commands};
use kate::config::AppConfig;
use kate::diagnostic::render_diagnostics;
use kate::format::write_document;
use kate::interpreter::{self, Buffer};
use kate::source::{read_source, split_lines};
use owo_colors::OwoColorize;
use std::path::Path;

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = &args.command {
        generate_completions(*shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    let (Some(input), Some(output)) = (args.file.as_deref(), args.output.as_deref()) else {
        error_message(&config, "Both --file and --output are required");
        std::process::exit(1);
    };

    verbose_log(&config, "Starting kate");

    let buffer = match parse_input(input, &config) {
        Some(buffer) => buffer,
        None => std::process::exit(1),
    };

    verbose_log(&config, &format!("Writing JSON document to {}", output.display()));
    if let Err(e) = write_document(&buffer, output, config.compact) {
        error_message(
            &config,
            &format!("Error writing output file {}: {}", output.display(), e),
        );
        std::process::exit(1);
    }
    verbose_log(&config, "Successfully wrote output file");
}

/// Reads and parses the input, reporting any failure on stderr.
fn parse_input(path: &Path, config: &AppConfig) -> Option<Buffer> {
    verbose_log(config, &format!("Reading {}", path.display()));
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            let file_name = path.display().to_string();
            let rendered = render_diagnostics("", &file_name, &[e.to_diagnostic()], config.color_enabled);
            eprint!("{}", rendered);
            return None;
        }
    };
    verbose_log(
        config,
        &format!("Read {} line(s), {} bytes", split_lines(&source).len(), source.len()),
    );

    match interpreter::parse_source_with_diagnostics(&source) {
        Ok(buffer) => {
            verbose_log(config, &format!("Parsed {} variable(s)", buffer.len()));
            Some(buffer)
        }
        Err(diagnostics) => {
            let file_name = path.display().to_string();
            let rendered = render_diagnostics(&source, &file_name, &diagnostics, config.color_enabled);
            eprint!("{}", rendered);
            None
        }
    }
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[kate:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
