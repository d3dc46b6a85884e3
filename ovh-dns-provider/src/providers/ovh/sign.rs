//! OVH request signature

use sha1::{Digest, Sha1};

use super::OvhProvider;

/// Compute `X-Ovh-Signature`.
///
/// `"$1$" + hex(sha1(AS+CK+METHOD+URL+BODY+TS))`, fields joined with `+`.
/// `url` is the full request URL including the query string.
pub(crate) fn signature(
    application_secret: &str,
    consumer_key: &str,
    method: &str,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let to_sign = format!("{application_secret}+{consumer_key}+{method}+{url}+{body}+{timestamp}");
    format!("$1${}", hex::encode(Sha1::digest(to_sign.as_bytes())))
}

impl OvhProvider {
    pub(crate) fn sign(
        &self,
        consumer_key: &str,
        method: &str,
        url: &str,
        body: &str,
        timestamp: i64,
    ) -> String {
        signature(
            &self.application_secret,
            consumer_key,
            method,
            url,
            body,
            timestamp,
        )
    }
}
