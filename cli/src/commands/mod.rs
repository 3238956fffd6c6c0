//! CLI Commands

pub mod tickets;
pub mod leaderboard;
pub mod config;

use serde::de::DeserializeOwned;

/// API client
pub struct ApiClient {
    pub base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(resp).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(resp).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, String> {
        let status = resp.status();
        let json: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;

        if status.is_success() {
            serde_json::from_value(json).map_err(|e| e.to_string())
        } else {
            Err(error_message(status.as_u16(), &json))
        }
    }
}

/// Human readable message for an error body
fn error_message(status: u16, body: &serde_json::Value) -> String {
    let detail = body
        .get("error")
        .or_else(|| body.get("message"))
        .and_then(|v| v.as_str())
        .unwrap_or("no details");
    format!("HTTP {}: {}", status, detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message() {
        let body = json!({ "success": false, "error": "Ticket ID abc not found in queue" });
        assert_eq!(error_message(404, &body), "HTTP 404: Ticket ID abc not found in queue");
        assert_eq!(error_message(500, &json!({})), "HTTP 500: no details");
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/api/queue"), "http://localhost:5000/api/queue");
    }
}
