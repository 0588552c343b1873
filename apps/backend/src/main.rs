#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cbt_converter_backend::run().await
}
