use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use roman_cli::commands::{batch_ops, config_ops, convert_ops, verify_ops};
use roman_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "romantool", about = "Roman numeral conversion tool")]
struct Cli {
    /// Directory for structured trace logs (requires --features trace)
    #[arg(long, global = true)]
    log_dir: Option<String>,
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an integer (1-3999) to a Roman numeral
    ToRoman {
        /// Integer to convert
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Convert a Roman numeral to an integer
    ToInt {
        /// Roman numeral (case-insensitive)
        numeral: String,
    },
    /// Convert raw form input, like the web form does
    Convert {
        /// intToRoman or romanToInt (default: settings form.default_mode)
        #[arg(long)]
        mode: Option<String>,
        /// Raw input text
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Convert JSONL requests from a file and write JSONL results
    Batch {
        /// Input file, one {"mode", "input"} object per line
        input_file: String,
        /// Output JSONL file
        output_file: String,
    },
    /// Round-trip every value and check non-canonical rejection
    Verify {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print value/numeral rows
    Table {
        #[arg(long, default_value = "1")]
        from: u16,
        #[arg(long, default_value = "3999")]
        to: u16,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Held until main returns so buffered trace records are flushed.
    let _trace_guard = cli.log_dir.as_deref().and_then(|dir| init_tracing(Path::new(dir)));

    if let Some(file) = &cli.settings {
        if let Err(e) = config_ops::load_settings(file) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    match cli.command {
        Command::ToRoman { n } => convert_ops::to_roman_cmd(n),
        Command::ToInt { numeral } => convert_ops::to_int_cmd(&numeral),
        Command::Convert { mode, input } => convert_ops::convert_cmd(mode.as_deref(), &input),
        Command::Batch {
            input_file,
            output_file,
        } => batch_ops::batch_cmd(&input_file, &output_file),
        Command::Verify { json } => verify_ops::verify_cmd(json),
        Command::Table { from, to } => convert_ops::table_cmd(from, to),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
