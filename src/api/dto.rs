//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! Both directions derive serde so the CLI can decode what the server encodes.

use serde::{Deserialize, Serialize};

// ============================================
// CATALOG DTOs
// ============================================

/// Product list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    /// Products in display order
    pub products: Vec<String>,
}

/// Recommendations for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub product: String,
    pub recommendations: Vec<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Number of products in the catalog
    pub products: usize,
    /// Open recommendation channels
    pub connections: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
