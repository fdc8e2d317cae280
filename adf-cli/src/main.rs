// Command-line interface for md2adf
//
// Reads Markdown (a file, or stdin) and writes the Atlassian Document Format tree that Jira and
// Confluence accept for issue descriptions, comments and page bodies.
//
// The conversion itself lives in adf-babel; this binary only deals with the shell: arguments,
// configuration files, logging, reading input and writing output.
//
// Usage:
//  md2adf [input] [--to <format>] [--output <file>] [--compact] [--config <path>] [--verbose]
//  md2adf --list-formats
//
// The output format is picked in this order: --to, the extension of --output, then the
// configured `output.format` (json unless changed).
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  md2adf notes.md --to treeviz --extra-show-marks false

use adf_babel::{FormatRegistry, ParserOptions};
use adf_config::{AdfConfig, Loader, PROJECT_CONFIG_FILE};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("md2adf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to Atlassian Document Format (ADF)")
        .long_about(
            "md2adf converts CommonMark/GFM Markdown into the ADF JSON used by Jira and\n\
            Confluence for issue descriptions, comments and page bodies.\n\n\
            Input is read from the given file, or from stdin when the path is omitted or '-'.\n\
            Output goes to stdout unless -o is given.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            md2adf notes.md                         # Pretty ADF JSON on stdout\n  \
            md2adf notes.md --compact -o body.json  # Single-line JSON into a file\n  \
            cat notes.md | md2adf --to treeviz      # Inspect the converted tree\n  \
            md2adf notes.md --to treeviz --extra-show-marks false",
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to convert ('-' or omitted reads stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .value_name("FORMAT")
                .help("Output format (see --list-formats)")
                .long_help(
                    "Output format to write.\n\n\
                    When omitted, the format is detected from the --output extension,\n\
                    falling back to `output.format` from the configuration (json).",
                )
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Write JSON on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2adf.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(matches.get_flag("verbose"), &config.logging.level);

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    handle_convert_command(&matches, &extra_params, &config);
}

/// Logs go to stderr so stdout stays clean for the converted document.
fn init_logging(verbose: bool, configured_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_convert_command(
    matches: &ArgMatches,
    extra_params: &HashMap<String, String>,
    config: &AdfConfig,
) {
    let registry = FormatRegistry::default();
    let input = matches.get_one::<String>("input").map(|s| s.as_str());
    let output = matches.get_one::<String>("output").map(|s| s.as_str());

    let to = resolve_format(
        &registry,
        matches.get_one::<String>("to").map(|s| s.as_str()),
        output,
        config,
    );
    if let Err(e) = registry.get(&to) {
        eprintln!("Error: {e}");
        eprintln!("Use --list-formats to see the available formats");
        std::process::exit(1);
    }

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", input_label(input));
        std::process::exit(1);
    });

    let options = ParserOptions::from(&config.parser);
    let doc = adf_babel::convert_with_options(&source, &options);
    tracing::info!(
        input = input_label(input),
        format = %to,
        blocks = doc.content.len(),
        "converted markdown"
    );

    let format_options =
        build_format_options(&to, config, matches.get_flag("compact"), extra_params);
    let mut text = registry
        .serialize_with_options(&doc, &to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            tracing::debug!(path, "wrote output file");
        }
        None => print!("{text}"),
    }
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            println!(
                "  {:<10} {} (.{})",
                format_name,
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> AdfConfig {
    let loader = Loader::new();
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader.with_optional_file(PROJECT_CONFIG_FILE)
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// `--to`, then the output file extension, then the configured default.
fn resolve_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    output: Option<&str>,
    config: &AdfConfig,
) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.output.format.clone())
}

fn build_format_options(
    format: &str,
    config: &AdfConfig,
    compact: bool,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if format == "json" {
        let pretty = config.output.pretty && !compact;
        params.insert("pretty".to_string(), pretty.to_string());
    }

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn read_input(input: Option<&str>) -> io::Result<String> {
    match input {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => fs::read_to_string(path),
    }
}

fn input_label(input: Option<&str>) -> &str {
    match input {
        None | Some("-") => "stdin",
        Some(path) => path,
    }
}
