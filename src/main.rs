use clap::Parser;
use magam::AppError;

#[derive(Parser)]
#[command(name = "magam")]
#[command(version)]
#[command(
    about = "Generate the daily Korean market-close short report page",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let result: Result<_, AppError> = magam::generate();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
