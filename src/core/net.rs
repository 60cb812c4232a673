use crate::core::{DigestClient, DigestError};
use url::Url;

/// GET `url` and return the body text, mapping any non-2xx status to [`DigestError::Status`].
pub(crate) async fn get_text(client: &DigestClient, url: Url) -> Result<String, DigestError> {
    let resp = client
        .send_with_retry(
            client
                .http()
                .get(url)
                .header("accept", "application/json"),
        )
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(DigestError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(resp.text().await?)
}

/// GET `url` and decode the body as JSON of type `T`.
pub(crate) async fn get_json<T>(client: &DigestClient, url: Url) -> Result<T, DigestError>
where
    T: serde::de::DeserializeOwned,
{
    let body = get_text(client, url).await?;
    serde_json::from_str(&body).map_err(|e| DigestError::Data(format!("json parse: {e}")))
}
