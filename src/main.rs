#[tokio::main]
async fn main() {
    // Run the CLI
    let code = docpage::cli::run().await;
    std::process::exit(code);
}
