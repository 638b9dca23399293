use bisearch::{Args, init_logging, run_app};
use clap::Parser;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(error) = run_app(args).await {
        eprintln!("❌ Error: {}", error);
        std::process::exit(1);
    }
}
