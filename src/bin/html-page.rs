use html_objects::{HtmlError, Markup, PageConfig};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let check_only = args.iter().any(|a| a == "--check");
    let files: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    if files.is_empty() {
        eprintln!("Usage: html-page [--check] <page.yaml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  html-page home.yaml > home.html");
        eprintln!("  html-page --check pages/*.yaml");
        process::exit(1);
    }

    let mut exit_code = 0;
    for file_path in files {
        match render_file(file_path) {
            Ok(html) if check_only => {
                tracing::debug!(bytes = html.len(), "rendered {}", file_path);
                println!("✓ {} is valid", file_path);
            }
            Ok(html) => println!("{}", html),
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn render_file(path: &str) -> Result<String, HtmlError> {
    let config = PageConfig::from_file(path)?;
    let page = config.to_page()?;
    Ok(page.as_markup())
}

fn print_error(error: &HtmlError) {
    match error {
        HtmlError::MissingTitle => {
            eprintln!("  Missing required field 'title'");
        }
        HtmlError::InvalidDocType { value } => {
            eprintln!("  Invalid doctype '{}':", value);
            eprintln!("    Expected one of: transitional401, strict401, html5");
        }
        HtmlError::ConfigError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        HtmlError::Io(msg) => {
            eprintln!("  Failed to read file:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
