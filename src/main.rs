#[tokio::main]
async fn main() -> std::io::Result<()> {
    payment_server::run_with_config().await
}
