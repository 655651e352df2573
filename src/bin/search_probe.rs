// Command-line probe for the product search API
//
// Runs one debounced search through the same controller the search page
// uses and prints what came back:
//
//   search_probe <query> [page] [per_page]

use anyhow::{bail, Context, Result};
use product_catalog::web_app::api::HttpProductApi;
use product_catalog::web_app::search::session::SearchSession;
use product_catalog::web_app::search::{
    MemoryUrl, QueryParams, SearchController, SearchQueryState, UrlStore,
};
use product_catalog::CatalogConfig;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

fn parse_args(config: &CatalogConfig) -> Result<SearchQueryState> {
    let mut args = std::env::args().skip(1);
    let Some(text) = args.next() else {
        bail!("usage: search_probe <query> [page] [per_page]");
    };
    let page = match args.next() {
        Some(value) => value.parse().with_context(|| format!("invalid page: {value}"))?,
        None => 1,
    };
    let page_size = match args.next() {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid per_page: {value}"))?,
        None => config.default_per_page,
    };

    Ok(SearchQueryState { text, page, page_size })
}

async fn async_main() -> Result<()> {
    let config = CatalogConfig::from_env()?;
    let query = parse_args(&config)?;

    if !query.is_search_mode(config.min_query_len) {
        bail!(
            "query must be at least {} characters long",
            config.min_query_len
        );
    }

    println!("Searching {} for {:?}...", config.api_base_url, query.text);

    let mut params = QueryParams::default();
    query.write_params(&mut params, Some(&query.text));
    let controller = SearchController::new(MemoryUrl::new(params.encode()), config.trigger());
    let session = SearchSession::new(HttpProductApi::from_config(&config), controller);

    // No further input: the session flushes the search scheduled on mount
    let (changes, receiver) = mpsc::channel(1);
    drop(changes);
    let controller = session.run(receiver).await;

    let results = controller.results();
    if results.is_empty() {
        println!("No products found");
    } else {
        for product in &results.items {
            let price = product
                .price
                .map(|price| format!("${:.2}", price))
                .unwrap_or_else(|| "-".to_string());
            println!("  #{:<6} {:<40} {}", product.id, product.display_title(), price);
        }
    }

    println!(
        "\nPage {} of {} ({} per page)",
        controller.state().page,
        results.total_pages,
        controller.state().page_size
    );
    println!("URL query: ?{}", controller.url().query());

    Ok(())
}
