// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::StrengthLabel;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    /// Password length (default: 16)
    pub length: Option<usize>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include digits (default: true)
    pub include_digits: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Exclude ambiguous glyphs 0 O 1 l I from the fill pool (default: false)
    pub exclude_ambiguous: Option<bool>,
    /// Forbid two equal adjacent characters (default: true)
    pub exclude_consecutive_repeats: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Heuristic entropy estimate in bits
    pub entropy_bits: Option<f64>,
    /// Strength label derived from the entropy estimate
    pub strength: Option<StrengthLabel>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// Password to analyze
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Heuristic entropy estimate in bits
    pub entropy_bits: Option<f64>,
    /// Strength label derived from the entropy estimate
    pub strength: Option<StrengthLabel>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Whether the service is healthy
    pub success: bool,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
}
