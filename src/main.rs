/*
 * Responsibility
 * - tokio runtime entry point
 * - calls app::run() (no logic lives here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    webapp_backend::app::run().await
}
