mod api;
mod client;
mod endpoints;
mod token;

pub use api::{PRODUCT_USER_AGENT, PrismaApi};
pub use client::ProviderClient;
pub use token::ServiceToken;

pub(crate) use endpoints::ProviderEndpoints;

/// Max characters of an upstream error body echoed into debug logs.
pub const UPSTREAM_BODY_PREVIEW_CHARS: usize = 300;
