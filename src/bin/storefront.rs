//! Standalone `storefront` CLI binary.
//!
//! A catalog browser talking to the storefront HTTP API:
//!
//! ```text
//! storefront-cli list
//! storefront-cli list --title chair --price-to 200
//! storefront-cli overview
//! storefront-cli show 1f0e7f34-6f4c-4b5a-9d0e-2b8c1a6d9e7b
//! storefront-cli comment <product-id> --name Ann --email ann@example.com --body "Nice chair"
//! ```

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    version,
    about = "Browse the product catalog from the command line",
    long_about = "Storefront CLI — list, search and inspect catalog products\n\n\
        Points at a running storefront server and renders product listings,\n\
        catalog totals and product pages, and submits product comments."
)]
struct Cli {
    /// Base URL of the storefront API
    #[arg(
        long = "api-url",
        env = "STOREFRONT_API_URL",
        default_value = "http://127.0.0.1:8000",
        global = true
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered
    List {
        /// Match a substring of the product title
        #[arg(long)]
        title: Option<String>,
        /// Match a substring of the product description
        #[arg(long)]
        description: Option<String>,
        /// Lower price bound
        #[arg(long)]
        price_from: Option<f64>,
        /// Upper price bound
        #[arg(long)]
        price_to: Option<f64>,
    },
    /// Show catalog totals
    Overview,
    /// Show one product page
    Show {
        /// Product id
        id: Uuid,
    },
    /// Leave a comment on a product
    Comment {
        /// Product id
        id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        body: String,
    },
}

// Wire shapes of the API responses; the envelope mirrors what every
// endpoint returns.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    message: String,
    #[allow(dead_code)]
    code: u32,
    id: Option<Uuid>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Image {
    url: String,
    main: bool,
}

#[derive(Debug, Deserialize)]
struct Comment {
    name: String,
    email: String,
    body: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Product {
    id: Uuid,
    title: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    #[serde(default)]
    comments: Option<Vec<Comment>>,
    #[serde(default)]
    images: Option<Vec<Image>>,
    #[serde(default)]
    thumbnail: Option<Image>,
    #[serde(default)]
    similar_products: Option<Vec<Product>>,
}

#[derive(Debug, Deserialize)]
struct Overview {
    count: i64,
    sum: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List {
            title,
            description,
            price_from,
            price_to,
        } => {
            let has_filter = title.is_some()
                || description.is_some()
                || price_from.is_some()
                || price_to.is_some();

            let request = if has_filter {
                let mut query: Vec<(&str, String)> = Vec::new();
                if let Some(title) = title {
                    query.push(("title", title));
                }
                if let Some(description) = description {
                    query.push(("description", description));
                }
                if let Some(price_from) = price_from {
                    query.push(("priceFrom", price_from.to_string()));
                }
                if let Some(price_to) = price_to {
                    query.push(("priceTo", price_to.to_string()));
                }
                client
                    .get(format!("{}/product/search", cli.api_url))
                    .query(&query)
            } else {
                client.get(format!("{}/product", cli.api_url))
            };

            let products: Vec<Product> = fetch(request).await?.list.unwrap_or_default();

            println!("{} product(s)", products.len());
            for product in products {
                let comments = product
                    .comments
                    .as_ref()
                    .map(|comments| comments.len())
                    .unwrap_or(0);
                println!(
                    "{}  {}  {}  ({} comment(s))",
                    product.id,
                    product.title.as_deref().unwrap_or("Untitled"),
                    render_price(product.price),
                    comments
                );
            }
        }
        Commands::Overview => {
            let overview: Overview = fetch(client.get(format!("{}/product/overview", cli.api_url)))
                .await?
                .item
                .ok_or_else(|| anyhow!("empty overview response"))?;

            println!("Products: {}", overview.count);
            println!("Total value: {}", render_price(overview.sum));
        }
        Commands::Show { id } => {
            let product: Product = fetch(client.get(format!("{}/product/{}", cli.api_url, id)))
                .await?
                .item
                .ok_or_else(|| anyhow!("empty product response"))?;

            println!("{}", product.title.as_deref().unwrap_or("Untitled"));
            println!(
                "{}",
                product.description.as_deref().unwrap_or("No description")
            );
            println!("Price: {}", render_price(product.price));
            if let Some(thumbnail) = &product.thumbnail {
                println!("Thumbnail: {}", thumbnail.url);
            }
            if let Some(images) = &product.images {
                println!("Images:");
                for image in images {
                    let marker = if image.main { " (main)" } else { "" };
                    println!("  {}{}", image.url, marker);
                }
            }
            if let Some(similar) = &product.similar_products {
                println!("Similar products:");
                for product in similar {
                    println!(
                        "  {}  {}  {}",
                        product.id,
                        product.title.as_deref().unwrap_or("Untitled"),
                        render_price(product.price)
                    );
                }
            }
            if let Some(comments) = &product.comments {
                println!("Comments:");
                for comment in comments {
                    println!("  {} <{}>: {}", comment.name, comment.email, comment.body);
                }
            }
        }
        Commands::Comment {
            id,
            name,
            email,
            body,
        } => {
            let payload = serde_json::json!({
                "name": name,
                "email": email,
                "body": body,
                "productId": id,
            });

            let envelope: Envelope<serde_json::Value> =
                fetch(client.post(format!("{}/comment", cli.api_url)).json(&payload)).await?;

            match envelope.id {
                Some(comment_id) => println!("Comment {} saved", comment_id),
                None => println!("{}", envelope.message),
            }
        }
    }

    Ok(())
}

async fn fetch<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> anyhow::Result<Envelope<T>> {
    let response = request.send().await.context("request failed")?;
    let status = response.status();
    let envelope: Envelope<T> = response
        .json()
        .await
        .context("malformed response payload")?;

    if !status.is_success() {
        return Err(anyhow!("{} ({})", envelope.message, status));
    }

    Ok(envelope)
}

fn render_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("{:.2}", price),
        None => "No price".to_string(),
    }
}
