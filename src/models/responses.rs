//! Response DTOs for the recipes API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for a successful create (POST /recipes)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Identifier of the newly created recipe
    pub id: String,
}

impl CreatedResponse {
    /// Creates a new CreatedResponse
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Generic message body for update/delete/auth operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome description
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of explicit invalidations
    pub invalidations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl CacheStatsResponse {
    /// Creates a new CacheStatsResponse from raw counters
    pub fn new(hits: u64, misses: u64, invalidations: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            invalidations,
            total_entries,
            hit_rate,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_serialize() {
        let resp = CreatedResponse::new("abc123");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("abc123"));
    }

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("Recipe has been updated");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("updated"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_cache_stats_hit_rate() {
        let resp = CacheStatsResponse::new(80, 20, 5, 100);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_cache_stats_zero_requests() {
        let resp = CacheStatsResponse::new(0, 0, 0, 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Recipe not found");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Recipe not found"));
    }
}
