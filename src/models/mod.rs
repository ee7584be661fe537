//! Typed request and response schemas for the SmartScout API.

pub mod schema;

pub mod enums;
pub mod filters;
pub mod paging;
pub mod requests;
pub mod responses;
pub mod timestamp;
pub mod values;

pub use enums::{
    BuyBoxOwner, FulfillmentChannel, Intent, Marketplace, ProductCondition, SellerType, SortOrder,
    TextFilterType, TopProductSortBy,
};
pub use filters::{DateRange, DecimalRange, IntRange, ListFilter, PageOptions, Range, SortOptions, TextFilter};
pub use paging::{decode_page, PagedResponse, Paging};
pub use requests::*;
pub use responses::*;
pub use schema::{decode, encode, FieldAlias, PagedRequest, WireSchema};
pub use values::{CategoryInfo, Dimension, ImageUrl, Money, ReviewSummary, Weight};
