//! Demo CLI: resolve a preview for a URL given on the command line.
//!
//! Stands in for the presentation layer: it only prints what the library
//! returns. Logging is controlled through `RUST_LOG`.

use std::process::ExitCode;

use medialens::PreviewService;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: medialens <url>");
        return ExitCode::FAILURE;
    };

    let service = PreviewService::new();
    match service.preview(&url).await {
        Ok(preview) => {
            println!("Platform: {}", preview.platform.display_name());
            println!("Title:    {}", preview.title);
            println!("Author:   {}", preview.author);
            for line in &preview.metadata_summary {
                println!("  {}", line);
            }
            if let Some(script) = preview.companion_script {
                println!("Requires: {}", script.script_url());
            }
            if let Some(reason) = &preview.metadata_error {
                println!("Metadata unavailable: {}", reason);
            }
            println!("{}", preview.embed_html);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
