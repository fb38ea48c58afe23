#[tokio::main]
async fn main() {
    if let Err(err) = co_api::run().await {
        eprintln!("co-api failed to start: {err}");
        std::process::exit(1);
    }
}
