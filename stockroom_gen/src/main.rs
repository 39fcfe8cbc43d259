use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use stockroom_gen::GenerateRequest;
use tracing_subscriber::EnvFilter;

/// Generate the change-set type of a tagged record.
#[derive(Parser, Debug)]
#[command(name = "stockroom-gen", version)]
struct Cli {
    /// Source type as `<module-path>.<TypeName>`, e.g. `src/domain.Product`
    source_type: String,

    /// Package requesting the generation
    #[arg(long, env = "STOCKROOM_GEN_PACKAGE", hide = true)]
    package: String,

    /// Source file requesting the generation; the output is written next to it
    #[arg(long, env = "STOCKROOM_GEN_FILE", hide = true)]
    file: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let request = GenerateRequest {
        source_type: cli.source_type,
        package: cli.package,
        invoking_file: cli.file,
    };

    match stockroom_gen::run(&request) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
