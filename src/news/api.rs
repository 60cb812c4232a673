use crate::{
    core::{AssetSpec, DigestClient, DigestError, net},
    news::{
        model::{Article, normalize_timestamp},
        wire::EverythingEnvelope,
    },
};

/// Articles requested per symbol; the caller keeps at most `limit` of them.
const PAGE_SIZE: &str = "5";

pub(super) async fn fetch_newsapi(
    client: &DigestClient,
    spec: &AssetSpec,
    limit: usize,
) -> Result<Vec<Article>, DigestError> {
    let key = client
        .newsapi_key()
        .ok_or(DigestError::MissingApiKey("NEWSAPI_KEY"))?;

    let mut url = client.base_newsapi().join("everything")?;
    url.query_pairs_mut()
        .append_pair("q", &format!("\"{}\"", spec.name))
        .append_pair("language", "en")
        .append_pair("sortBy", "publishedAt")
        .append_pair("pageSize", PAGE_SIZE)
        .append_pair("apiKey", key);

    let envelope: EverythingEnvelope = net::get_json(client, url).await?;
    parse_everything(spec, envelope, limit)
}

pub(super) fn parse_everything(
    spec: &AssetSpec,
    envelope: EverythingEnvelope,
    limit: usize,
) -> Result<Vec<Article>, DigestError> {
    if envelope.status.as_deref() != Some("ok") {
        return Err(DigestError::Data(format!(
            "newsapi status {:?}: {}",
            envelope.status,
            envelope.message.unwrap_or_default()
        )));
    }

    let articles: Vec<Article> = envelope
        .articles
        .into_iter()
        .filter_map(|raw| {
            let title = raw.title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())?;
            Some(Article {
                title,
                description: raw.description.unwrap_or_default(),
                url: raw.url.unwrap_or_default(),
                source: raw.source.and_then(|s| s.name).unwrap_or_default(),
                published_at: raw
                    .published_at
                    .as_deref()
                    .map(normalize_timestamp)
                    .unwrap_or_default(),
                symbol: Some(spec.symbol.clone()),
            })
        })
        .take(limit)
        .collect();

    if articles.is_empty() {
        return Err(DigestError::Data(format!(
            "newsapi: no usable articles for {}",
            spec.symbol
        )));
    }
    Ok(articles)
}
