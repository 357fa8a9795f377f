#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcards_lib::run().await
}
