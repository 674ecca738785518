//! Tests for transfer services
//!
//! The pipeline stages are exercised against mockall mocks of the catalog
//! traits; HTTP clients are covered by the wiremock tests under `tests/`.
