//! Port contracts for the marketplace API.

mod api;

pub use api::MarketplaceApi;

#[cfg(test)]
pub use api::MockMarketplaceApi;
