use clap::Parser;

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(version)]
#[command(
    about = "Apply white-label identity values to a browser template checkout",
    long_about = None
)]
struct Cli {}

fn main() {
    // No configuration flags; identity values come from the environment.
    Cli::parse();

    if let Err(e) = rebrand::apply() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
