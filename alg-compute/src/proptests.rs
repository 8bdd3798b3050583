//! Property-based tests for normalization, differentiation and serialization.
