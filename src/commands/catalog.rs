//! Catalog commands: list endpoints and show their field alias tables.

use crate::client::Endpoint;
use crate::config::OutputFormat;
use crate::format::{Formatter, Record};
use crate::models::schema::FieldAlias;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct EndpointInfo {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    request: &'static str,
    response: &'static str,
}

impl From<Endpoint> for EndpointInfo {
    fn from(endpoint: Endpoint) -> Self {
        Self {
            name: endpoint.name(),
            method: "POST",
            path: endpoint.path(),
            request: endpoint.request_schema(),
            response: endpoint.response_schema(),
        }
    }
}

impl Record for EndpointInfo {
    const NOUN: &'static str = "endpoints";
    const COLUMNS: &'static [&'static str] = &["Name", "Method", "Path", "Request", "Response"];

    fn row(&self) -> Vec<String> {
        [self.name, self.method, self.path, self.request, self.response]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct FieldInfo {
    schema: &'static str,
    #[serde(flatten)]
    alias: FieldAlias,
}

impl Record for FieldInfo {
    const NOUN: &'static str = "fields";
    const COLUMNS: &'static [&'static str] = &["Schema", "Field", "Wire name", "Required"];

    fn row(&self) -> Vec<String> {
        vec![
            self.schema.to_string(),
            self.alias.name.to_string(),
            self.alias.wire.to_string(),
            if self.alias.required { "yes" } else { "" }.to_string(),
        ]
    }
}

/// Lists every endpoint with its path and schema names.
pub fn list_endpoints(format: OutputFormat) -> String {
    let endpoints: Vec<EndpointInfo> = Endpoint::ALL.iter().copied().map(EndpointInfo::from).collect();
    Formatter::new(format).format_records(&endpoints)
}

/// Shows the request and response alias tables for one endpoint.
pub fn describe_schema(endpoint: Endpoint, format: OutputFormat) -> String {
    let request = endpoint.request_fields().iter().map(|alias| FieldInfo {
        schema: endpoint.request_schema(),
        alias: *alias,
    });
    let response = endpoint.response_fields().iter().map(|alias| FieldInfo {
        schema: endpoint.response_schema(),
        alias: *alias,
    });

    let fields: Vec<FieldInfo> = request.chain(response).collect();
    Formatter::new(format).format_records(&fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_endpoints_table() {
        let output = list_endpoints(OutputFormat::Table);
        for endpoint in Endpoint::ALL {
            assert!(output.contains(endpoint.name()));
            assert!(output.contains(endpoint.path()));
        }
        assert!(output.ends_with("Total: 14 endpoints"));
    }

    #[test]
    fn test_list_endpoints_json() {
        let output = list_endpoints(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 14);
        assert_eq!(value[0]["name"], "search-brands");
        assert_eq!(value[0]["path"], "/brands/search");
        assert_eq!(value[0]["response"], "Brand");
    }

    #[test]
    fn test_describe_schema_csv() {
        let output = describe_schema(Endpoint::GetSearchTermHistory, OutputFormat::Csv);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Schema,Field,Wire name,Required");
        assert_eq!(lines[1], "GetSearchTermHistoryRequest,marketplace,marketplace,yes");
        assert_eq!(lines[2], "GetSearchTermHistoryRequest,date_range,dateRange,yes");
        assert_eq!(lines[3], "GetSearchTermHistoryRequest,search_term,searchTerm,yes");
        assert!(lines.contains(&"SearchTerm,related_search_terms,relatedSearchTerms,"));
    }

    #[test]
    fn test_describe_schema_json_flattens_alias() {
        let output = describe_schema(Endpoint::SearchBrands, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let review_count = value
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["name"] == "review_count")
            .unwrap();
        assert_eq!(review_count["wire"], "reviewCount");
        assert_eq!(review_count["required"], false);
        assert_eq!(review_count["schema"], "SearchBrandsRequest");
    }
}
