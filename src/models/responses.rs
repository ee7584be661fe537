//! Response entities. Each endpoint returns a [`PagedResponse`] of one of
//! these.
//!
//! [`PagedResponse`]: super::paging::PagedResponse

use super::enums::{BuyBoxOwner, FulfillmentChannel, ProductCondition, SellerType};
use super::schema::wire_schema;
use super::values::{CategoryInfo, Dimension, ImageUrl, Money, ReviewSummary, Weight};
use chrono::{DateTime, Utc};

wire_schema! {
    /// Brand-level aggregates.
    pub struct Brand {
        required {
            brand_name: String => "brandName",
            has_storefront: bool => "hasStorefront",
            has_single_seller: bool => "hasSingleSeller",
        }
        optional {
            amazon_isr: f64 => "amazonIsr",
            avg_fba_sellers: f64 => "avgFbaSellers",
            avg_sellers: f64 => "avgSellers",
            avg_price: f64 => "avgPrice",
            avg_volume: f64 => "avgVolume",
            review_rating: f64 => "reviewRating",
            total_products: i64 => "totalProducts",
            total_reviews: i64 => "totalReviews",
            monthly_revenue: f64 => "monthlyRevenue",
            monthly_units_sold: i64 => "monthlyUnitsSold",
            brand_score: f64 => "brandScore",
            dominant_seller_profile_id: i64 => "dominantSellerProfileId",
            dominant_seller_brand_coverage: f64 => "dominantSellerBrandCoverage",
            category_name: String => "categoryName",
            subcategory_name: String => "subcategoryName",
            month_growth: f64 => "monthGrowth",
            month_growth_12: f64 => "monthGrowth12",
            trailing_12_months: f64 => "trailing12Months",
        }
    }
}

wire_schema! {
    /// A single catalog listing.
    pub struct Product {
        required {
            asin: String => "asin",
            title: String => "title",
            category: CategoryInfo => "category",
            subcategory: CategoryInfo => "subcategory",
            price: Money => "price",
            currency: String => "currency",
            condition: ProductCondition => "condition",
            availability: String => "availability",
            fulfillment_channel: FulfillmentChannel => "fulfillmentChannel",
            is_prime: bool => "isPrime",
            is_amazon_fulfilled: bool => "isAmazonFulfilled",
            is_fba: bool => "isFBA",
            reviews: ReviewSummary => "reviews",
            images: ImageUrl => "images",
            is_variation: bool => "isVariation",
        }
        optional {
            brand: String => "brand",
            list_price: Money => "listPrice",
            sales_rank: i64 => "salesRank",
            rating: f64 => "rating",
            total_ratings: i64 => "totalRatings",
            dimensions: Dimension => "dimensions",
            weight: Weight => "weight",
            features: Vec<String> => "features",
            description: String => "description",
            parent_asin: String => "parentAsin",
            variation_attributes: Vec<String> => "variationAttributes",
            estimated_monthly_sales: i64 => "estimatedMonthlySales",
            estimated_monthly_revenue: Money => "estimatedMonthlyRevenue",
            buy_box_price: Money => "buyBoxPrice",
            buy_box_owner: BuyBoxOwner => "buyBoxOwner",
            number_of_sellers: i64 => "numberOfSellers",
            number_of_fba_sellers: i64 => "numberOfFBASellers",
        }
    }
}

wire_schema! {
    pub struct Seller {
        required {
            seller_id: String => "sellerId",
            seller_name: String => "sellerName",
            seller_type: SellerType => "sellerType",
            is_fba: bool => "isFBA",
        }
        optional {
            feedback_count: i64 => "feedbackCount",
            positive_feedback_percent: f64 => "positiveFeedbackPercent",
            seller_rating: f64 => "sellerRating",
            ships_from: Vec<String> => "shipsFrom",
            ships_from_country: String => "shipsFromCountry",
            delivery_time: String => "deliveryTime",
            business_name: String => "businessName",
            business_address: String => "businessAddress",
            year_established: i64 => "yearEstablished",
            total_revenue: Money => "totalRevenue",
            average_rating: f64 => "averageRating",
            total_ratings: i64 => "totalRatings",
            products_offered: i64 => "productsOffered",
        }
    }
}

wire_schema! {
    /// Keyword demand and competition figures.
    pub struct SearchTerm {
        required {
            search_term: String => "searchTerm",
            search_volume: i64 => "searchVolume",
        }
        optional {
            trend: String => "trend",
            cpc: f64 => "cpc",
            competition: String => "competition",
            num_results: i64 => "numResults",
            organic_product_count: i64 => "organicProductCount",
            sponsored_product_count: i64 => "sponsoredProductCount",
            brands: Vec<String> => "brands",
            categories: Vec<String> => "categories",
            related_search_terms: Vec<String> => "relatedSearchTerms",
        }
    }
}

wire_schema! {
    /// One data point of a brand's sales over time.
    pub struct BrandSalesHistory {
        required {
            #[serde(with = "super::timestamp")]
            date: DateTime<Utc> => "date",
            brand: String => "brand",
            sales: f64 => "sales",
            units_sold: i64 => "unitsSold",
            average_price: f64 => "averagePrice",
        }
        optional {}
    }
}

wire_schema! {
    /// One data point of a product's sales over time.
    pub struct ProductSalesHistory {
        required {
            #[serde(with = "super::timestamp")]
            date: DateTime<Utc> => "date",
            asin: String => "asin",
            sales: f64 => "sales",
            units_sold: i64 => "unitsSold",
            price: f64 => "price",
        }
        optional {
            sales_rank: i64 => "salesRank",
        }
    }
}

wire_schema! {
    /// Seller account health metrics at a point in time.
    pub struct SellerPerformance {
        required {
            #[serde(with = "super::timestamp")]
            date: DateTime<Utc> => "date",
            seller_id: String => "sellerId",
            order_defect_rate: f64 => "orderDefectRate",
            pre_fulfillment_cancel_rate: f64 => "preFulfillmentCancelRate",
            late_shipment_rate: f64 => "lateShipmentRate",
            valid_tracking_rate: f64 => "validTrackingRate",
            customer_service_dissatisfaction_rate: f64 => "customerServiceDissatisfactionRate",
        }
        optional {}
    }
}

wire_schema! {
    pub struct CategoryTrend {
        required {
            category: CategoryInfo => "category",
            total_revenue: Money => "totalRevenue",
            total_units_sold: i64 => "totalUnitsSold",
            average_price: f64 => "averagePrice",
            top_brands: Vec<String> => "topBrands",
            growth_rate: f64 => "growthRate",
        }
        optional {}
    }
}

wire_schema! {
    /// How a competing listing compares to a reference product. Differences
    /// are competitor minus reference.
    pub struct CompetitorAnalysis {
        required {
            competitor_asin: String => "competitorAsin",
            competitor_brand: String => "competitorBrand",
            price_difference: f64 => "priceDifference",
            rating_difference: f64 => "ratingDifference",
            review_count_difference: i64 => "reviewCountDifference",
        }
        optional {
            sales_rank_difference: i64 => "salesRankDifference",
            estimated_sales_difference: f64 => "estimatedSalesDifference",
        }
    }
}
