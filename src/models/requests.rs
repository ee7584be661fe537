//! Request schemas, one per endpoint.
//!
//! Search requests share `marketplace`, `sort` and `page`; history requests
//! also require a `date_range`. Everything else is endpoint specific.

use super::enums::{Intent, TopProductSortBy};
use super::filters::{DecimalRange, IntRange, ListFilter, TextFilter};
use super::schema::request_schema;
use chrono::{DateTime, Utc};

request_schema! {
    /// Brand search filters.
    pub struct SearchBrandsRequest: search {
        required {}
        optional {
            brand_names: ListFilter => "brandNames",
            brand_name: TextFilter => "brandName",
            amazon_isr: DecimalRange => "amazonIsr",
            avg_sellers: DecimalRange => "avgSellers",
            avg_price: DecimalRange => "avgPrice",
            avg_volume: DecimalRange => "avgVolume",
            review_rating: DecimalRange => "reviewRating",
            review_count: IntRange => "reviewCount",
            total_reviews: IntRange => "totalReviews",
            total_products: IntRange => "totalProducts",
            avg_fba_sellers: DecimalRange => "avgFbaSellers",
            brand_score: DecimalRange => "brandScore",
            monthly_revenue: DecimalRange => "monthlyRevenue",
            note: TextFilter => "note",
            category: TextFilter => "category",
            category_name: TextFilter => "categoryName",
            subcategory_name: TextFilter => "subcategoryName",
            has_storefront: bool => "hasStorefront",
            search_terms: IntRange => "searchTerms",
            sponsored_products: IntRange => "sponsoredProducts",
            sponsored_brand_win_rate: DecimalRange => "sponsoredBrandWinRate",
            sponsored_video_win_rate: DecimalRange => "sponsoredVideoWinRate",
            top_spot_win_rate: DecimalRange => "topSpotWinRate",
            top_group_win_rate: DecimalRange => "topGroupWinRate",
            month_growth: DecimalRange => "monthGrowth",
            month_growth_12: DecimalRange => "monthGrowth12",
            trailing_12_months: DecimalRange => "trailing12Months",
        }
    }
}

request_schema! {
    /// Product search filters.
    pub struct SearchProductsRequest: search {
        required {}
        optional {
            subcategory_id: i64 => "subcategoryId",
            brand_name: TextFilter => "brandName",
            category_name: TextFilter => "categoryName",
            subcategory_name: TextFilter => "subcategoryName",
            rank: IntRange => "rank",
            monthly_revenue_estimate: DecimalRange => "monthlyRevenueEstimate",
            amazon_isr: DecimalRange => "amazonIsr",
            number_of_sellers: IntRange => "numberOfSellers",
            number_fba_sellers: IntRange => "numberFbaSellers",
            review_count: IntRange => "reviewCount",
            review_rating: DecimalRange => "reviewRating",
            buy_box_price: DecimalRange => "buyBoxPrice",
            product_page_score: DecimalRange => "productPageScore",
            out_of_stock_now: bool => "outOfStockNow",
            is_variation: bool => "isVariation",
            asins: ListFilter => "asins",
            asin: TextFilter => "asin",
            parent_asin: TextFilter => "parentAsin",
            title: TextFilter => "title",
            note: TextFilter => "note",
            buy_box_equity: DecimalRange => "buyBoxEquity",
            number_of_items: IntRange => "numberOfItems",
            total_ratings: IntRange => "totalRatings",
        }
    }
}

request_schema! {
    /// Search-term search filters.
    pub struct SearchSearchTermsRequest: search {
        required {}
        optional {
            search_term_value: TextFilter => "searchTermValue",
            estimate_searches: IntRange => "estimateSearches",
            brands: IntRange => "brands",
            products: IntRange => "products",
            estimated_cpc: DecimalRange => "estimatedCpc",
            super_charge: bool => "superCharge",
        }
    }
}

request_schema! {
    /// Seller search filters.
    pub struct SearchSellersRequest: search {
        required {}
        optional {
            category_name: TextFilter => "categoryName",
            subcategory_name: TextFilter => "subcategoryName",
            amazon_seller_id: TextFilter => "amazonSellerId",
            amazon_seller_ids: ListFilter => "amazonSellerIds",
            seller_names: ListFilter => "sellerNames",
            business_names: ListFilter => "businessNames",
            include_products: bool => "includeProducts",
            estimate_sales: DecimalRange => "estimateSales",
            seller_name: TextFilter => "sellerName",
            percent_fba: DecimalRange => "percentFba",
            number_winning_brands: IntRange => "numberWinningBrands",
            number_asins: IntRange => "numberAsins",
            number_top_asins: IntRange => "numberTopAsins",
            num_brands_1000: IntRange => "numBrands1000",
            mom_growth: DecimalRange => "moMGrowth",
            three_month_growth: DecimalRange => "threeMonthGrowth",
            six_month_growth: DecimalRange => "sixMonthGrowth",
            year_growth: DecimalRange => "yearGrowth",
            mom_growth_count: IntRange => "moMGrowthCount",
            six_month_growth_count: IntRange => "sixMonthGrowthCount",
            street: TextFilter => "street",
            city: TextFilter => "city",
            state: TextFilter => "state",
            country: TextFilter => "country",
            zip_code: TextFilter => "zipCode",
            business_name: TextFilter => "businessName",
            number_reviews_lifetime: IntRange => "numberReviewsLifetime",
            number_reviews_30_days: IntRange => "numberReviews30Days",
            is_suspended: bool => "isSuspended",
            last_suspended_date: DateTime<Utc> => "lastSuspendedDate",
        }
    }
}

request_schema! {
    /// Organic search rank lookup.
    pub struct GetOrganicRanksRequest: search {
        required {
            exclude_variants: bool => "excludeVariants",
            include_rank_history: bool => "includeRankHistory",
        }
        optional {
            asin: String => "asin",
            intent: Intent => "intent",
            search_term: TextFilter => "searchTerm",
            avg_rank: DecimalRange => "avgRank",
            latest_rank: IntRange => "latestRank",
            rank_score: IntRange => "rankScore",
            smart_score: IntRange => "smartScore",
            estimate_searches: IntRange => "estimateSearches",
        }
    }
}

request_schema! {
    /// Product sales history over a date range.
    pub struct GetProductHistoryScopeRequest: history {
        required {}
        optional {}
    }
}

request_schema! {
    /// Products relevant to a parent ASIN.
    pub struct GetRelevantProductsRequest: search {
        required {
            parent_asin: String => "parentAsin",
        }
        optional {
            relevancy_score: DecimalRange => "relevancyScore",
            common_search_terms: IntRange => "commonSearchTerms",
        }
    }
}

request_schema! {
    /// Brands within a subcategory.
    pub struct GetSubcategoryBrandsRequest: search {
        required {}
        optional {
            brand_name: String => "brandName",
        }
    }
}

request_schema! {
    pub struct GetBrandSalesHistoryRequest: history {
        required {}
        optional {
            subcategory_id: i64 => "subcategoryId",
        }
    }
}

request_schema! {
    pub struct GetBrandSalesHistoryBySubcategoriesRequest: history {
        required {
            brand_name: String => "brandName",
        }
        optional {
            subcategory_id: i64 => "subcategoryId",
        }
    }
}

request_schema! {
    pub struct GetBrandScopeRequest: history {
        required {
            brand_name: String => "brandName",
        }
        optional {
            subcategory_id: i64 => "subcategoryId",
        }
    }
}

request_schema! {
    /// A brand's best products over a date range.
    pub struct GetBrandScopeTopProductsRequest: history {
        required {
            brand_name: String => "brandName",
            top_by: TopProductSortBy => "topBy",
            /// Number of products to return.
            top: i64 => "top",
        }
        optional {
            subcategory_id: i64 => "subcategoryId",
        }
    }
}

request_schema! {
    /// Search terms relevant to a parent ASIN.
    pub struct GetRelevantSearchTermsRequest: search {
        required {
            parent_asin: String => "parentAsin",
        }
        optional {
            search_term: TextFilter => "searchTerm",
            intent: Intent => "intent",
            relevancy: DecimalRange => "relevancy",
            estimated_searches: IntRange => "estimatedSearches",
        }
    }
}

request_schema! {
    pub struct GetSearchTermHistoryRequest: history {
        required {
            search_term: String => "searchTerm",
        }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::enums::{Marketplace, SortOrder, TextFilterType};
    use crate::models::filters::{DateRange, PageOptions, SortOptions};
    use crate::models::schema::{decode, encode, FieldAlias, PagedRequest, WireSchema};
    use chrono::TimeZone;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use std::fmt::Debug;

    fn window() -> DateRange {
        DateRange::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap(),
        )
    }

    fn pairs<T: WireSchema>() -> Vec<(&'static str, &'static str)> {
        T::FIELDS.iter().map(|f| (f.name, f.wire)).collect()
    }

    /// Serialized keys must be exactly the wire names of the fields that
    /// were set, and decoding must give back the same value.
    fn assert_roundtrip<T>(request: &T, expected_keys: &[&str])
    where
        T: Serialize + DeserializeOwned + WireSchema + PartialEq + Debug,
    {
        let wire = encode(request).unwrap();
        let object = wire.as_object().expect("requests serialize to objects");

        let keys: HashSet<&str> = object.keys().map(String::as_str).collect();
        let expected: HashSet<&str> = expected_keys.iter().copied().collect();
        assert_eq!(keys, expected, "{} wire keys", T::NAME);

        for key in &keys {
            assert!(T::field_name(key).is_some(), "{key} missing from {} alias table", T::NAME);
        }

        let decoded: T = decode(wire).unwrap();
        assert_eq!(&decoded, request);
    }

    #[test]
    fn test_brand_search_serializes_only_set_filters() {
        let request = SearchBrandsRequest::new(Marketplace::Us)
            .brand_name(TextFilter::contains("Example Brand"))
            .review_count(IntRange::at_least(100));

        assert_eq!(
            encode(&request).unwrap(),
            json!({
                "marketplace": "US",
                "brandName": {"type": "contains", "filter": "Example Brand"},
                "reviewCount": {"min": 100}
            })
        );
    }

    #[test]
    fn test_product_search_review_count() {
        let request = SearchProductsRequest::new(Marketplace::Us)
            .brand_name(TextFilter::contains("Example Brand"))
            .review_count(IntRange::at_least(100));

        assert_eq!(
            encode(&request).unwrap(),
            json!({
                "marketplace": "US",
                "brandName": {"type": "contains", "filter": "Example Brand"},
                "reviewCount": {"min": 100}
            })
        );
    }

    #[test]
    fn test_unset_fields_are_never_null() {
        let request = SearchSellersRequest::new(Marketplace::De);
        let wire = encode(&request).unwrap();
        assert_eq!(wire, json!({"marketplace": "DE"}));
        assert!(!wire.to_string().contains("null"));
    }

    #[test]
    fn test_search_brands_alias_table() {
        assert_eq!(
            pairs::<SearchBrandsRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("sort", "sort"),
                ("page", "page"),
                ("brand_names", "brandNames"),
                ("brand_name", "brandName"),
                ("amazon_isr", "amazonIsr"),
                ("avg_sellers", "avgSellers"),
                ("avg_price", "avgPrice"),
                ("avg_volume", "avgVolume"),
                ("review_rating", "reviewRating"),
                ("review_count", "reviewCount"),
                ("total_reviews", "totalReviews"),
                ("total_products", "totalProducts"),
                ("avg_fba_sellers", "avgFbaSellers"),
                ("brand_score", "brandScore"),
                ("monthly_revenue", "monthlyRevenue"),
                ("note", "note"),
                ("category", "category"),
                ("category_name", "categoryName"),
                ("subcategory_name", "subcategoryName"),
                ("has_storefront", "hasStorefront"),
                ("search_terms", "searchTerms"),
                ("sponsored_products", "sponsoredProducts"),
                ("sponsored_brand_win_rate", "sponsoredBrandWinRate"),
                ("sponsored_video_win_rate", "sponsoredVideoWinRate"),
                ("top_spot_win_rate", "topSpotWinRate"),
                ("top_group_win_rate", "topGroupWinRate"),
                ("month_growth", "monthGrowth"),
                ("month_growth_12", "monthGrowth12"),
                ("trailing_12_months", "trailing12Months"),
            ]
        );
    }

    #[test]
    fn test_search_products_alias_table() {
        assert_eq!(
            pairs::<SearchProductsRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("sort", "sort"),
                ("page", "page"),
                ("subcategory_id", "subcategoryId"),
                ("brand_name", "brandName"),
                ("category_name", "categoryName"),
                ("subcategory_name", "subcategoryName"),
                ("rank", "rank"),
                ("monthly_revenue_estimate", "monthlyRevenueEstimate"),
                ("amazon_isr", "amazonIsr"),
                ("number_of_sellers", "numberOfSellers"),
                ("number_fba_sellers", "numberFbaSellers"),
                ("review_count", "reviewCount"),
                ("review_rating", "reviewRating"),
                ("buy_box_price", "buyBoxPrice"),
                ("product_page_score", "productPageScore"),
                ("out_of_stock_now", "outOfStockNow"),
                ("is_variation", "isVariation"),
                ("asins", "asins"),
                ("asin", "asin"),
                ("parent_asin", "parentAsin"),
                ("title", "title"),
                ("note", "note"),
                ("buy_box_equity", "buyBoxEquity"),
                ("number_of_items", "numberOfItems"),
                ("total_ratings", "totalRatings"),
            ]
        );
    }

    #[test]
    fn test_search_search_terms_alias_table() {
        assert_eq!(
            pairs::<SearchSearchTermsRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("sort", "sort"),
                ("page", "page"),
                ("search_term_value", "searchTermValue"),
                ("estimate_searches", "estimateSearches"),
                ("brands", "brands"),
                ("products", "products"),
                ("estimated_cpc", "estimatedCpc"),
                ("super_charge", "superCharge"),
            ]
        );
    }

    #[test]
    fn test_search_sellers_alias_table() {
        assert_eq!(
            pairs::<SearchSellersRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("sort", "sort"),
                ("page", "page"),
                ("category_name", "categoryName"),
                ("subcategory_name", "subcategoryName"),
                ("amazon_seller_id", "amazonSellerId"),
                ("amazon_seller_ids", "amazonSellerIds"),
                ("seller_names", "sellerNames"),
                ("business_names", "businessNames"),
                ("include_products", "includeProducts"),
                ("estimate_sales", "estimateSales"),
                ("seller_name", "sellerName"),
                ("percent_fba", "percentFba"),
                ("number_winning_brands", "numberWinningBrands"),
                ("number_asins", "numberAsins"),
                ("number_top_asins", "numberTopAsins"),
                ("num_brands_1000", "numBrands1000"),
                ("mom_growth", "moMGrowth"),
                ("three_month_growth", "threeMonthGrowth"),
                ("six_month_growth", "sixMonthGrowth"),
                ("year_growth", "yearGrowth"),
                ("mom_growth_count", "moMGrowthCount"),
                ("six_month_growth_count", "sixMonthGrowthCount"),
                ("street", "street"),
                ("city", "city"),
                ("state", "state"),
                ("country", "country"),
                ("zip_code", "zipCode"),
                ("business_name", "businessName"),
                ("number_reviews_lifetime", "numberReviewsLifetime"),
                ("number_reviews_30_days", "numberReviews30Days"),
                ("is_suspended", "isSuspended"),
                ("last_suspended_date", "lastSuspendedDate"),
            ]
        );
    }

    #[test]
    fn test_lookup_alias_tables() {
        assert_eq!(
            pairs::<GetOrganicRanksRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("exclude_variants", "excludeVariants"),
                ("include_rank_history", "includeRankHistory"),
                ("sort", "sort"),
                ("page", "page"),
                ("asin", "asin"),
                ("intent", "intent"),
                ("search_term", "searchTerm"),
                ("avg_rank", "avgRank"),
                ("latest_rank", "latestRank"),
                ("rank_score", "rankScore"),
                ("smart_score", "smartScore"),
                ("estimate_searches", "estimateSearches"),
            ]
        );
        assert_eq!(
            pairs::<GetRelevantProductsRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("parent_asin", "parentAsin"),
                ("sort", "sort"),
                ("page", "page"),
                ("relevancy_score", "relevancyScore"),
                ("common_search_terms", "commonSearchTerms"),
            ]
        );
        assert_eq!(
            pairs::<GetSubcategoryBrandsRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("sort", "sort"),
                ("page", "page"),
                ("brand_name", "brandName"),
            ]
        );
        assert_eq!(
            pairs::<GetRelevantSearchTermsRequest>(),
            vec![
                ("marketplace", "marketplace"),
                ("parent_asin", "parentAsin"),
                ("sort", "sort"),
                ("page", "page"),
                ("search_term", "searchTerm"),
                ("intent", "intent"),
                ("relevancy", "relevancy"),
                ("estimated_searches", "estimatedSearches"),
            ]
        );
    }

    #[test]
    fn test_history_alias_tables() {
        let base = [("marketplace", "marketplace"), ("date_range", "dateRange")];

        assert_eq!(
            pairs::<GetProductHistoryScopeRequest>(),
            [&base[..], &[("sort", "sort"), ("page", "page")]].concat()
        );
        assert_eq!(
            pairs::<GetBrandSalesHistoryRequest>(),
            [&base[..], &[("sort", "sort"), ("page", "page"), ("subcategory_id", "subcategoryId")]]
                .concat()
        );
        assert_eq!(
            pairs::<GetBrandSalesHistoryBySubcategoriesRequest>(),
            [
                &base[..],
                &[
                    ("brand_name", "brandName"),
                    ("sort", "sort"),
                    ("page", "page"),
                    ("subcategory_id", "subcategoryId"),
                ]
            ]
            .concat()
        );
        assert_eq!(
            pairs::<GetBrandScopeRequest>(),
            pairs::<GetBrandSalesHistoryBySubcategoriesRequest>()
        );
        assert_eq!(
            pairs::<GetBrandScopeTopProductsRequest>(),
            [
                &base[..],
                &[
                    ("brand_name", "brandName"),
                    ("top_by", "topBy"),
                    ("top", "top"),
                    ("sort", "sort"),
                    ("page", "page"),
                    ("subcategory_id", "subcategoryId"),
                ]
            ]
            .concat()
        );
        assert_eq!(
            pairs::<GetSearchTermHistoryRequest>(),
            [&base[..], &[("search_term", "searchTerm"), ("sort", "sort"), ("page", "page")]]
                .concat()
        );
    }

    #[test]
    fn test_alias_tables_have_unique_names() {
        fn check<T: WireSchema>() {
            let names: HashSet<_> = T::FIELDS.iter().map(|f| f.name).collect();
            let wires: HashSet<_> = T::FIELDS.iter().map(|f| f.wire).collect();
            assert_eq!(names.len(), T::FIELDS.len(), "{} internal names", T::NAME);
            assert_eq!(wires.len(), T::FIELDS.len(), "{} wire names", T::NAME);
        }

        check::<SearchBrandsRequest>();
        check::<SearchProductsRequest>();
        check::<SearchSearchTermsRequest>();
        check::<SearchSellersRequest>();
        check::<GetOrganicRanksRequest>();
        check::<GetProductHistoryScopeRequest>();
        check::<GetRelevantProductsRequest>();
        check::<GetSubcategoryBrandsRequest>();
        check::<GetBrandSalesHistoryRequest>();
        check::<GetBrandSalesHistoryBySubcategoriesRequest>();
        check::<GetBrandScopeRequest>();
        check::<GetBrandScopeTopProductsRequest>();
        check::<GetRelevantSearchTermsRequest>();
        check::<GetSearchTermHistoryRequest>();
    }

    #[test]
    fn test_required_fields_flagged() {
        assert_eq!(
            GetBrandScopeTopProductsRequest::required_wire_names(),
            vec!["marketplace", "dateRange", "brandName", "topBy", "top"]
        );
        assert_eq!(SearchBrandsRequest::required_wire_names(), vec!["marketplace"]);
        assert!(GetOrganicRanksRequest::FIELDS.contains(&FieldAlias::required(
            "include_rank_history",
            "includeRankHistory"
        )));
    }

    #[test]
    fn test_roundtrip_search_requests() {
        let brands = SearchBrandsRequest::new(Marketplace::Uk)
            .brand_names(ListFilter::new(["Acme", "Globex"]))
            .avg_price(DecimalRange::between(10.0, 50.0))
            .has_storefront(true)
            .month_growth_12(DecimalRange::at_least(0.1))
            .sort(SortOptions::descending("monthlyRevenue"))
            .page(PageOptions::size(25));
        assert_roundtrip(
            &brands,
            &["marketplace", "brandNames", "avgPrice", "hasStorefront", "monthGrowth12", "sort", "page"],
        );

        let products = SearchProductsRequest::new(Marketplace::Us)
            .subcategory_id(3743561)
            .rank(IntRange::at_most(5000))
            .asins(ListFilter::new(["B000000001"]))
            .title(TextFilter::with_mode(TextFilterType::StartsWith, "Wireless"))
            .is_variation(false);
        assert_roundtrip(&products, &["marketplace", "subcategoryId", "rank", "asins", "title", "isVariation"]);

        let terms = SearchSearchTermsRequest::new(Marketplace::Ca)
            .search_term_value("yoga mat")
            .estimated_cpc(DecimalRange::at_most(1.25))
            .super_charge(true);
        assert_roundtrip(&terms, &["marketplace", "searchTermValue", "estimatedCpc", "superCharge"]);

        let sellers = SearchSellersRequest::new(Marketplace::De)
            .mom_growth(DecimalRange::at_least(0.05))
            .number_reviews_30_days(IntRange::between(10, 100))
            .is_suspended(false)
            .last_suspended_date(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        assert_roundtrip(
            &sellers,
            &["marketplace", "moMGrowth", "numberReviews30Days", "isSuspended", "lastSuspendedDate"],
        );
    }

    #[test]
    fn test_roundtrip_lookup_requests() {
        let ranks = GetOrganicRanksRequest::new(Marketplace::Us, true, false)
            .asin("B0TEST0001")
            .intent(crate::models::enums::Intent::Transactional)
            .avg_rank(DecimalRange::at_most(10.0));
        assert_roundtrip(
            &ranks,
            &["marketplace", "excludeVariants", "includeRankHistory", "asin", "intent", "avgRank"],
        );

        let relevant = GetRelevantProductsRequest::new(Marketplace::Us, "B0PARENT01".to_string())
            .relevancy_score(DecimalRange::at_least(0.8));
        assert_roundtrip(&relevant, &["marketplace", "parentAsin", "relevancyScore"]);

        let subcategory = GetSubcategoryBrandsRequest::new(Marketplace::Fr).brand_name("Acme");
        assert_roundtrip(&subcategory, &["marketplace", "brandName"]);

        let terms = GetRelevantSearchTermsRequest::new(Marketplace::Us, "B0PARENT01".to_string())
            .search_term(TextFilter::contains("mat"))
            .estimated_searches(IntRange::at_least(1000));
        assert_roundtrip(&terms, &["marketplace", "parentAsin", "searchTerm", "estimatedSearches"]);
    }

    #[test]
    fn test_roundtrip_history_requests() {
        let scope = GetProductHistoryScopeRequest::new(Marketplace::Us, window());
        assert_roundtrip(&scope, &["marketplace", "dateRange"]);

        let sales = GetBrandSalesHistoryRequest::new(Marketplace::Us, window()).subcategory_id(7);
        assert_roundtrip(&sales, &["marketplace", "dateRange", "subcategoryId"]);

        let by_sub =
            GetBrandSalesHistoryBySubcategoriesRequest::new(Marketplace::Us, window(), "Acme".to_string());
        assert_roundtrip(&by_sub, &["marketplace", "dateRange", "brandName"]);

        let scope = GetBrandScopeRequest::new(Marketplace::It, DateRange::default(), "Acme".to_string())
            .sort(SortOptions { by: None, order: Some(SortOrder::Ascending) });
        assert_roundtrip(&scope, &["marketplace", "dateRange", "brandName", "sort"]);

        let top = GetBrandScopeTopProductsRequest::new(
            Marketplace::Us,
            window(),
            "Acme".to_string(),
            TopProductSortBy::Revenue,
            10,
        );
        assert_roundtrip(&top, &["marketplace", "dateRange", "brandName", "topBy", "top"]);

        let history = GetSearchTermHistoryRequest::new(Marketplace::Us, window(), "yoga mat".to_string());
        assert_roundtrip(&history, &["marketplace", "dateRange", "searchTerm"]);
    }

    #[test]
    fn test_history_request_wire_shape() {
        let request = GetSearchTermHistoryRequest::new(Marketplace::Us, window(), "yoga mat".to_string());
        assert_eq!(
            encode(&request).unwrap(),
            json!({
                "marketplace": "US",
                "dateRange": {"startDate": "2024-01-01T00:00:00Z", "endDate": "2024-06-30T00:00:00Z"},
                "searchTerm": "yoga mat"
            })
        );
    }

    #[test]
    fn test_decode_rejects_invalid_marketplace() {
        let err = decode::<SearchProductsRequest>(json!({"marketplace": "Invalid"})).unwrap_err();
        match err {
            Error::SchemaValidation { schema, message } => {
                assert_eq!(schema, "SearchProductsRequest");
                assert!(message.contains("Invalid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_missing_required_fields() {
        let err = decode::<GetRelevantProductsRequest>(json!({"marketplace": "US"})).unwrap_err();
        assert!(err.to_string().contains("parentAsin"));

        let err = decode::<GetSearchTermHistoryRequest>(json!({
            "marketplace": "US",
            "searchTerm": "x"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("dateRange"));
    }

    #[test]
    fn test_decode_rejects_invalid_nested_enum() {
        let err = decode::<SearchBrandsRequest>(json!({
            "marketplace": "US",
            "brandName": {"type": "regex", "filter": "^A"}
        }))
        .unwrap_err();
        assert!(matches!(err, Error::SchemaValidation { .. }));
        assert!(err.to_string().contains("brandName.type: unknown variant `regex`"), "{err}");

        let err = decode::<GetBrandScopeTopProductsRequest>(json!({
            "marketplace": "US",
            "dateRange": {},
            "brandName": "Acme",
            "topBy": "Rating",
            "top": 5
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Rating"));
        assert!(err.to_string().contains("topBy:"), "{err}");
    }

    #[test]
    fn test_non_finite_range_bound_is_rejected() {
        let request = SearchBrandsRequest::new(Marketplace::Us).avg_price(DecimalRange::at_least(f64::NAN));
        let err = encode(&request).unwrap_err();
        assert!(matches!(err, Error::SchemaValidation { .. }));
        assert!(err.to_string().contains("avgPrice.min: number must be finite"), "{err}");

        let request = SearchProductsRequest::new(Marketplace::Us)
            .review_rating(DecimalRange::between(1.0, f64::INFINITY));
        let err = encode(&request).unwrap_err();
        assert!(err.to_string().contains("reviewRating.max"), "{err}");

        let request = SearchProductsRequest::new(Marketplace::Us).review_rating(DecimalRange::between(1.0, 4.5));
        assert_eq!(encode(&request).unwrap()["reviewRating"], json!({"min": 1.0, "max": 4.5}));
    }

    #[test]
    fn test_decode_error_names_enum_field() {
        let err = decode::<GetOrganicRanksRequest>(json!({
            "marketplace": "US",
            "excludeVariants": false,
            "includeRankHistory": true,
            "intent": "Commercial"
        }))
        .unwrap_err();

        match err {
            Error::SchemaValidation { schema, message } => {
                assert_eq!(schema, "GetOrganicRanksRequest");
                assert!(message.starts_with("intent: unknown variant `Commercial`"), "{message}");
                assert!(message.contains("Informational"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_set_page_id_keeps_size() {
        let mut request = SearchBrandsRequest::new(Marketplace::Us).page(PageOptions::size(50));
        request.set_page_id("next-123");
        assert_eq!(request.page, Some(PageOptions { id: Some("next-123".into()), size: Some(50) }));

        let mut request = SearchBrandsRequest::new(Marketplace::Us);
        request.set_page_id("abc");
        let wire: Value = encode(&request).unwrap();
        assert_eq!(wire["page"], json!({"id": "abc"}));
    }
}
