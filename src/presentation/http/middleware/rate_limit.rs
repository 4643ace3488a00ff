// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type ApiRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REQUESTS_PER_SECOND: u64 = 10;
const BURST_SIZE: u32 = 20;

/// Per-client-IP limiter shared by every router built in this process.
/// Returns `None` if the quota cannot be expressed.
pub fn rate_limit_layer() -> Option<ApiRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<ApiRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .map(GovernorLayer::new)
        })
        .clone()
}
