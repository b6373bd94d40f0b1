use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = mailfeed::cli::Cli::parse();

    if let Err(err) = mailfeed::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
