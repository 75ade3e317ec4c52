use clap::{Parser, Subcommand};
use std::path::PathBuf;
use web_to_header::{config, convert, output};

#[derive(Parser)]
#[command(name = "web-to-header")]
#[command(about = "Convert static web assets into PROGMEM C headers")]
#[command(long_about = "\
Convert static web assets into PROGMEM C headers

Every .html, .css and .js file in the source directory becomes a header in
the output directory, named after the file with dots replaced by underscores:

  static/index.html  ->  src/index_html.h
  static/style.css   ->  src/style_css.h

HTML is minified before embedding; CSS and JS are embedded verbatim. Source
files are never modified.

Run with no arguments to convert static/ into src/.
Run 'web-to-header gen-config' to generate a documented web-to-header.toml.")]
#[command(version)]
struct Cli {
    /// Asset directory (overrides `source_dir` from the config file)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Header directory (overrides `output_dir` from the config file)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Config file; defaults are used when it does not exist
    #[arg(long, default_value = config::CONFIG_FILENAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every eligible asset into a header (default)
    Convert,
    /// List the assets and headers a conversion would touch, without writing
    Check,
    /// Print a stock web-to-header.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Convert) {
        Command::Convert => {
            let settings = resolve_config(&cli)?;
            let output_dir = settings.output_dir.clone();
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_convert_event(&event, &output_dir) {
                        println!("{}", line);
                    }
                }
            });
            let result = convert::convert(&settings, Some(tx));
            // The sender is dropped once convert returns, ending the printer loop
            printer.join().ok();
            let summary = result?;
            println!("==> {}", summary);
        }
        Command::Check => {
            let settings = resolve_config(&cli)?;
            println!("==> Checking {}", settings.source_dir.display());
            let planned = convert::plan(&settings)?;
            output::print_plan_output(&planned);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file, then apply the directory flags on top.
fn resolve_config(cli: &Cli) -> Result<config::ConverterConfig, config::ConfigError> {
    let mut settings = config::load_config(&cli.config)?;
    if let Some(source) = &cli.source {
        settings.source_dir = source.clone();
    }
    if let Some(output) = &cli.output {
        settings.output_dir = output.clone();
    }
    Ok(settings)
}
