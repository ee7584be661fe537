//! Call command: sends one request to an endpoint and prints the results.

use crate::client::{Dispatch, Endpoint, SmartScoutClient};
use crate::config::Config;
use crate::format::{Formatter, Record};
use crate::models::paging::PagedResponse;
use crate::models::requests::*;
use crate::models::responses::*;
use crate::models::schema::{decode, PagedRequest, WireSchema};
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads a request body from a file, or from stdin when `source` is `-`.
/// With no source the request is an empty object.
pub fn read_request(source: Option<&Path>) -> Result<Value> {
    let text = match source {
        None => return Ok(Value::Object(Map::new())),
        Some(path) if path == Path::new("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("Failed to read request from stdin")?;
            text
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display()))?,
    };

    serde_json::from_str(&text).context("Request is not valid JSON")
}

/// Executes a call against one endpoint.
pub struct CallCommand {
    config: Config,
}

impl CallCommand {
    /// Creates a new call command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the call and returns formatted output.
    pub async fn execute(&self, endpoint: Endpoint, request: Value, all_pages: bool) -> Result<String> {
        let client =
            SmartScoutClient::from_config(&self.config).context("Failed to create SmartScout client")?;

        self.execute_with_client(&client, endpoint, request, all_pages).await
    }

    /// Executes the call with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl Dispatch,
        endpoint: Endpoint,
        request: Value,
        all_pages: bool,
    ) -> Result<String> {
        use Endpoint::*;

        match endpoint {
            SearchBrands => self.run::<SearchBrandsRequest, Brand>(client, endpoint, request, all_pages).await,
            SearchProducts => {
                self.run::<SearchProductsRequest, Product>(client, endpoint, request, all_pages).await
            }
            SearchSearchTerms => {
                self.run::<SearchSearchTermsRequest, SearchTerm>(client, endpoint, request, all_pages).await
            }
            SearchSellers => self.run::<SearchSellersRequest, Seller>(client, endpoint, request, all_pages).await,
            GetOrganicRanks => {
                self.run::<GetOrganicRanksRequest, Product>(client, endpoint, request, all_pages).await
            }
            GetProductHistoryScope => {
                self.run::<GetProductHistoryScopeRequest, ProductSalesHistory>(client, endpoint, request, all_pages)
                    .await
            }
            GetRelevantProducts => {
                self.run::<GetRelevantProductsRequest, Product>(client, endpoint, request, all_pages).await
            }
            GetSubcategoryBrands => {
                self.run::<GetSubcategoryBrandsRequest, Brand>(client, endpoint, request, all_pages).await
            }
            GetBrandSalesHistory => {
                self.run::<GetBrandSalesHistoryRequest, BrandSalesHistory>(client, endpoint, request, all_pages)
                    .await
            }
            GetBrandSalesHistoryBySubcategories => {
                self.run::<GetBrandSalesHistoryBySubcategoriesRequest, BrandSalesHistory>(
                    client, endpoint, request, all_pages,
                )
                .await
            }
            GetBrandScope => self.run::<GetBrandScopeRequest, Brand>(client, endpoint, request, all_pages).await,
            GetBrandScopeTopProducts => {
                self.run::<GetBrandScopeTopProductsRequest, Product>(client, endpoint, request, all_pages).await
            }
            GetRelevantSearchTerms => {
                self.run::<GetRelevantSearchTermsRequest, SearchTerm>(client, endpoint, request, all_pages).await
            }
            GetSearchTermHistory => {
                self.run::<GetSearchTermHistoryRequest, SearchTerm>(client, endpoint, request, all_pages).await
            }
        }
    }

    async fn run<R, T>(
        &self,
        client: &impl Dispatch,
        endpoint: Endpoint,
        request: Value,
        all_pages: bool,
    ) -> Result<String>
    where
        R: PagedRequest + DeserializeOwned + Sync,
        T: Record + DeserializeOwned + WireSchema + Send,
    {
        let mut request: R = decode(self.with_marketplace(request)?)?;

        info!("Calling {} ({})", endpoint, endpoint.path());
        let mut page: PagedResponse<T> = client.execute_paged(endpoint.path(), &request).await?;
        let mut fetched = 1;

        while all_pages && fetched < self.config.max_pages {
            let Some(next) = page.paging.next_page_id().map(str::to_owned) else {
                break;
            };

            debug!("Fetching page {} ({})", fetched + 1, next);
            request.set_page_id(next);
            let more = client.execute_paged(endpoint.path(), &request).await?;
            page.merge(more);
            fetched += 1;
        }

        if all_pages && page.has_more() {
            warn!("Stopped after {} pages; more records are available", fetched);
        }

        info!("Received {} of {} records", page.len(), page.data_count);

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_page(&page))
    }

    /// Fills in the configured marketplace when the request names none.
    fn with_marketplace(&self, request: Value) -> Result<Value> {
        let Value::Object(mut fields) = request else {
            bail!("Request must be a JSON object");
        };

        fields
            .entry("marketplace")
            .or_insert_with(|| Value::String(self.config.marketplace.as_str().to_string()));

        Ok(Value::Object(fields))
    }
}
