use serde::Deserialize;

/// Error body returned with non-2xx responses.
///
/// ```json
/// {"class":"Client::NotFound","message":"This service does not exist","errorCode":"...","httpCode":"404 Not Found"}
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvhErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub http_code: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}
