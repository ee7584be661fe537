//! Renders a request as an equivalent `curl` invocation for diagnostics.

use super::dispatch::ApiRequest;

const REDACTED: &str = "***";

/// Builds a shell-pasteable `curl` command for `request` sent to `url`.
///
/// With `redact` set, the bearer token is replaced by `***`.
pub fn curl_command(request: &ApiRequest, url: &str, headers: &[(&str, String)], redact: bool) -> String {
    let mut parts = vec![format!("curl -X {}", request.method), shell_quote(url)];

    for (name, value) in headers {
        let value = if redact && name.eq_ignore_ascii_case("authorization") {
            redact_authorization(value)
        } else {
            value.clone()
        };
        parts.push(format!("-H {}", shell_quote(&format!("{name}: {value}"))));
    }

    if let Some(body) = &request.body {
        parts.push(format!("-d {}", shell_quote(&body.to_string())));
    }

    parts.join(" ")
}

fn redact_authorization(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{scheme} {REDACTED}"),
        None => REDACTED.to_string(),
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers() -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", "Bearer secret-token".to_string()),
            ("Content-Type", "application/json".to_string()),
        ]
    }

    #[test]
    fn test_redacted_command() {
        let request = ApiRequest::post("/brands/search", json!({"marketplace": "US"}));
        let cmd = curl_command(&request, "https://api.smartscout.com/v1/brands/search", &headers(), true);

        assert_eq!(
            cmd,
            "curl -X POST 'https://api.smartscout.com/v1/brands/search' \
             -H 'Authorization: Bearer ***' -H 'Content-Type: application/json' \
             -d '{\"marketplace\":\"US\"}'"
        );
        assert!(!cmd.contains("secret-token"));
    }

    #[test]
    fn test_unredacted_command_shows_token() {
        let request = ApiRequest::get("/status");
        let cmd = curl_command(&request, "http://localhost/status", &headers(), false);
        assert!(cmd.contains("Bearer secret-token"));
        assert!(!cmd.contains("-d "));
    }

    #[test]
    fn test_single_quotes_escaped() {
        let request = ApiRequest::post("/x", json!({"brandName": "Kid's Toys"}));
        let cmd = curl_command(&request, "http://localhost/x", &[], true);
        assert!(cmd.ends_with(r#"-d '{"brandName":"Kid'\''s Toys"}'"#));
    }
}
