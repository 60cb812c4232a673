use crate::{
    core::{AssetSpec, DigestClient, DigestError, net},
    quote::{
        model::{Quote, QuoteExtension, QuoteSource, RawPrices, TraditionalMetrics},
        wire::GlobalQuoteEnvelope,
    },
};

pub(super) async fn fetch(client: &DigestClient, spec: &AssetSpec) -> Result<Quote, DigestError> {
    let key = client
        .alpha_vantage_key()
        .ok_or(DigestError::MissingApiKey("ALPHA_VANTAGE_API_KEY"))?;

    let mut url = client.base_alpha_vantage().clone();
    url.query_pairs_mut()
        .append_pair("function", "GLOBAL_QUOTE")
        .append_pair("symbol", &spec.symbol)
        .append_pair("apikey", key);

    let envelope: GlobalQuoteEnvelope = net::get_json(client, url).await?;
    parse_global_quote(spec, envelope)
}

pub(super) fn parse_global_quote(
    spec: &AssetSpec,
    envelope: GlobalQuoteEnvelope,
) -> Result<Quote, DigestError> {
    if let Some(msg) = envelope
        .note
        .or(envelope.information)
        .or(envelope.error_message)
    {
        return Err(DigestError::Data(format!("alphavantage: {msg}")));
    }

    let gq = envelope
        .global_quote
        .ok_or_else(|| DigestError::Data("alphavantage: missing `Global Quote`".into()))?;

    let price = gq
        .price
        .filter(|p| *p > 0.0)
        .ok_or_else(|| DigestError::Data(format!("alphavantage: no price for {}", spec.symbol)))?;

    let raw = RawPrices {
        price,
        open: gq.open.filter(|o| *o > 0.0),
        high: gq.high,
        low: gq.low,
        volume: gq.volume,
        change: gq.change,
        change_percent: gq.change_percent,
    };

    Ok(Quote::from_raw(
        spec,
        raw,
        QuoteSource::AlphaVantage,
        QuoteExtension::Traditional(TraditionalMetrics::default()),
    ))
}
