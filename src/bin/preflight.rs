use std::time::Duration;

use library_catalog::infra::config;
use library_catalog::CatalogClient;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--url <base-url>]\n\
         \n\
         Checks that a catalog API is reachable and can list books.\n\
         Reads CATALOG_API_URL (default http://localhost:1337) when --url is not given.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let url = match args.iter().position(|a| a == "--url") {
        Some(i) => match args.get(i + 1) {
            Some(u) => u.clone(),
            None => usage_and_exit(),
        },
        None => config::api_url(),
    };

    println!("> Preflight:");
    println!("  CATALOG_API_URL={}", url);

    let client = CatalogClient::new(&url, Duration::from_secs(5))?;

    match client.ping().await {
        Ok(message) => println!("  Liveness: {}", message),
        Err(e) if e.is_unreachable() => {
            eprintln!("  {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("  Server is not responding correctly: {}", e);
            std::process::exit(1);
        }
    }

    let books = client
        .list_books()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;
    println!("  Catalog holds {} book(s).", books.len());

    println!("> Preflight OK.");
    Ok(())
}
