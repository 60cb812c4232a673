use std::sync::Arc;

use market_digest::{
    Category, DigestClientBuilder, DigestConfig, DigestError, Watchlist, build_digest,
    render_digest,
};

fn plain_text(digest: &market_digest::Digest) -> Result<String, DigestError> {
    let mut out = String::new();
    out.push_str(&format!("Market digest {}\n\n", digest.generated_at.format("%B %d, %Y")));
    out.push_str(&format!(
        "Breadth: {} up / {} down / {} flat\n\nTop movers:\n",
        digest.breadth.up, digest.breadth.down, digest.breadth.unchanged
    ));
    for m in &digest.movers {
        out.push_str(&format!("  {:<10} {:>10.2} {:>+7.2}%\n", m.symbol, m.price, m.change_percent));
    }
    for cat in Category::ALL {
        let articles = digest.heroes.get(cat);
        if articles.is_empty() {
            continue;
        }
        out.push_str(&format!("\n[{cat}]\n"));
        for a in articles {
            out.push_str(&format!("  {} ({})\n", a.title, a.published_at));
        }
    }
    Ok(out)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let watchlist_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/companies.json".to_string());
    let raw = std::fs::read_to_string(&watchlist_path)?;
    let watchlist = Watchlist::from_json_str(&raw)?;

    let client = DigestClientBuilder::from_env().build()?;
    let digest = build_digest(Arc::new(client), &watchlist, &DigestConfig::default()).await?;

    digest.write_snapshot("out/digest.json")?;
    if let Some(lead) = digest.lead_headline() {
        println!("Lead: {}", lead.title);
    }
    println!("{}", render_digest(&plain_text, &digest)?);
    Ok(())
}
