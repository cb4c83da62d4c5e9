//! Payslip listing calls.

#[cfg(test)]
#[path = "payslips_test.rs"]
mod payslips_test;

use serde_json::Value;

use super::paging;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;

pub const DEFAULT_PAYSLIP_PAGE_SIZE: u32 = 5;
pub const MY_PAYSLIPS_ENDPOINT: &str = "/api/payslips/my";

fn contract_payslips_endpoint(contract_id: &str) -> String {
    format!("/api/payslips/contract/{contract_id}/my")
}

/// All of the signed-in user's payslips (feeds the profile chart).
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn my_payslips(api: &ApiClient, page: u32, page_size: u32) -> Result<Value, ApiError> {
    api.get_json(MY_PAYSLIPS_ENDPOINT, &paging("page", "pageSize", page, page_size)).await
}

/// The signed-in user's payslips for one contract.
///
/// # Errors
///
/// Propagates any `ApiError` from the request.
pub async fn contract_payslips(api: &ApiClient, contract_id: &str, page: u32, page_size: u32) -> Result<Value, ApiError> {
    api.get_json(&contract_payslips_endpoint(contract_id), &paging("page", "pageSize", page, page_size))
        .await
}
