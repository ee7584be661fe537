//! Endpoint catalog and the typed API surface built on [`Dispatch`].

use super::dispatch::Dispatch;
use crate::error::{Error, Result};
use crate::models::paging::PagedResponse;
use crate::models::requests::*;
use crate::models::responses::*;
use crate::models::schema::{FieldAlias, WireSchema};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// Declares the endpoint table once and derives both the [`Endpoint`] enum
/// and the typed [`SmartScoutApi`] methods from it.
macro_rules! endpoints {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $method:ident($request:ty) -> $response:ty, $path:literal, $slug:literal;
        )+
    ) => {
        /// Every endpoint the client knows. All are POST and paginated.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Endpoint {
            $( $variant, )+
        }

        impl Endpoint {
            pub const ALL: &'static [Endpoint] = &[$(Endpoint::$variant),+];

            /// Path below the API base URL.
            pub fn path(&self) -> &'static str {
                match self {
                    $( Endpoint::$variant => $path, )+
                }
            }

            /// Kebab-case name used on the command line.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Endpoint::$variant => $slug, )+
                }
            }

            /// Client method name.
            pub fn method_name(&self) -> &'static str {
                match self {
                    $( Endpoint::$variant => stringify!($method), )+
                }
            }

            pub fn request_schema(&self) -> &'static str {
                match self {
                    $( Endpoint::$variant => <$request as WireSchema>::NAME, )+
                }
            }

            pub fn request_fields(&self) -> &'static [FieldAlias] {
                match self {
                    $( Endpoint::$variant => <$request as WireSchema>::FIELDS, )+
                }
            }

            pub fn response_schema(&self) -> &'static str {
                match self {
                    $( Endpoint::$variant => <$response as WireSchema>::NAME, )+
                }
            }

            pub fn response_fields(&self) -> &'static [FieldAlias] {
                match self {
                    $( Endpoint::$variant => <$response as WireSchema>::FIELDS, )+
                }
            }
        }

        /// Typed calls, one per endpoint. Implemented for every [`Dispatch`].
        #[async_trait]
        pub trait SmartScoutApi: Dispatch {
            $(
                $(#[$meta])*
                async fn $method(&self, request: &$request) -> Result<PagedResponse<$response>> {
                    tracing::info!("Calling {} ({})", $slug, $path);
                    self.execute_paged($path, request).await
                }
            )+
        }
    };
}

endpoints! {
    /// Brand search.
    SearchBrands => search_brands(SearchBrandsRequest) -> Brand,
        "/brands/search", "search-brands";
    /// Product search.
    SearchProducts => search_products(SearchProductsRequest) -> Product,
        "/products/search", "search-products";
    /// Search-term search.
    SearchSearchTerms => search_search_terms(SearchSearchTermsRequest) -> SearchTerm,
        "/search-terms/search", "search-search-terms";
    /// Seller search.
    SearchSellers => search_sellers(SearchSellersRequest) -> Seller,
        "/sellers/search", "search-sellers";
    /// Organic search positions for products.
    GetOrganicRanks => get_organic_ranks(GetOrganicRanksRequest) -> Product,
        "/products/organic-ranks", "organic-ranks";
    /// Product sales history within a date range.
    GetProductHistoryScope => get_product_history_scope(GetProductHistoryScopeRequest) -> ProductSalesHistory,
        "/products/history/scope", "product-history-scope";
    /// Products related to a parent ASIN.
    GetRelevantProducts => get_relevant_products(GetRelevantProductsRequest) -> Product,
        "/products/relevant", "relevant-products";
    /// Brands selling in a subcategory.
    GetSubcategoryBrands => get_subcategory_brands(GetSubcategoryBrandsRequest) -> Brand,
        "/subcategories/brands", "subcategory-brands";
    /// Brand sales over time.
    GetBrandSalesHistory => get_brand_sales_history(GetBrandSalesHistoryRequest) -> BrandSalesHistory,
        "/brands/history/sales", "brand-sales-history";
    /// Brand sales over time, split by subcategory.
    GetBrandSalesHistoryBySubcategories =>
        get_brand_sales_history_by_subcategories(GetBrandSalesHistoryBySubcategoriesRequest) -> BrandSalesHistory,
        "/brands/history/sales-by-subcategories", "brand-sales-history-by-subcategories";
    /// Brand aggregates within a date range.
    GetBrandScope => get_brand_scope(GetBrandScopeRequest) -> Brand,
        "/brands/scope", "brand-scope";
    /// A brand's top products within a date range.
    GetBrandScopeTopProducts => get_brand_scope_top_products(GetBrandScopeTopProductsRequest) -> Product,
        "/brands/scope/top-products", "brand-scope-top-products";
    /// Search terms related to a parent ASIN.
    GetRelevantSearchTerms => get_relevant_search_terms(GetRelevantSearchTermsRequest) -> SearchTerm,
        "/search-terms/relevant", "relevant-search-terms";
    /// Search volume history for one term.
    GetSearchTermHistory => get_search_term_history(GetSearchTermHistoryRequest) -> SearchTerm,
        "/search-terms/history", "search-term-history";
}

impl<D: Dispatch> SmartScoutApi for D {}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    /// Accepts the command-line name or the client method name.
    fn from_str(s: &str) -> Result<Self> {
        Endpoint::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s || e.method_name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Endpoint::ALL.iter().map(|e| e.name()).collect();
                Error::schema("Endpoint", format!("`{s}` is not one of: {}", names.join(", ")))
            })
    }
}
