// Binary entry point for promptdeck_mcp
// This is a thin wrapper that delegates to the library implementation

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = promptdeck_mcp::shell::run().await {
        eprintln!("promptdeck_mcp fatal error: {:#}", e);
        return Err(e);
    }
    Ok(())
}
