//! Employment contract calls.

#[cfg(test)]
#[path = "contracts_test.rs"]
mod contracts_test;

use serde_json::Value;

use super::paging;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;

pub const MY_CONTRACTS_ENDPOINT: &str = "/api/contracts/user/my-contracts";

fn contract_endpoint(contract_id: &str) -> String {
    format!("/api/contracts/{contract_id}")
}

/// Contracts held by the signed-in user.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn my_contracts(api: &ApiClient, page_number: u32, page_size: u32) -> Result<Value, ApiError> {
    api.get_json(MY_CONTRACTS_ENDPOINT, &paging("pageNumber", "pageSize", page_number, page_size)).await
}

/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn contract_by_id(api: &ApiClient, contract_id: &str) -> Result<Value, ApiError> {
    api.get_json(&contract_endpoint(contract_id), &[]).await
}
