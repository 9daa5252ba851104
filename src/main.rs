use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    unscramble::cli::run_cli().await
}
