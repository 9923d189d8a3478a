//! Generate one page from the command line.
//!
//! Usage:
//! ```bash
//! export GEMINI_API_KEY="your-key"
//! cargo run --example gemini_basic_chat -- "a red button that says Hello"
//! ```

use std::sync::Arc;

use pagesmith::generator::PageGenerator;
use pagesmith_gemini::ChatGemini;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let specification = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "a red button that says Hello".to_string());

    let model = ChatGemini::new().with_temperature(0.2);
    let generator = PageGenerator::new(Arc::new(model));

    let html = generator.generate(&specification).await?;
    println!("{html}");
    Ok(())
}
