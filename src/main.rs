#[tokio::main]
async fn main() {
    if let Err(error) = tokengen_lib::run().await {
        eprintln!("Failed to run tokengen: {}", error);
        std::process::exit(1);
    }
}
