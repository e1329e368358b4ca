use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use metamodel_annotations::{Result, render, report, schema};

#[derive(Parser)]
#[command(name = "metamodel-annotations")]
#[command(about = "Resolve naming and serialization annotations of a model", long_about = None)]
struct Cli {
    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every directive of every concept in a model file.
    Resolve {
        #[arg(long)]
        model: String,

        /// Output file; stdout when omitted.
        #[arg(short = 'o', long)]
        out: Option<String>,

        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Fail when a directive parameter is present but has the wrong type.
        #[arg(long)]
        strict: bool,
    },
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.cmd {
        Commands::Resolve {
            model,
            out,
            format,
            strict,
        } => {
            // 1) Load + validate the model.
            let model = schema::load_model_file(&model)?;

            // 2) Resolve directives.
            let data = report::build_report_data(&model);
            if strict && data.has_problems() {
                bail!(
                    "{} directive type mismatch(es) found in strict mode",
                    data.totals.problems
                );
            }

            // 3) Render.
            let rendered = match format {
                Format::Json => render::render_json_report(&data)?,
                Format::Text => render::render_text_report(&data)?,
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("Wrote {}", path);
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}
