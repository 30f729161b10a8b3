//! Page-number pagination for list queries.
//!
//! List actions accept optional `page`/`per_page` fields; validation applies
//! defaults and bounds so handlers never see a negative offset or an
//! unbounded limit.

use serde::Deserialize;

use super::error::{ApiError, ApiResult};

/// Default page size when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: i32 = 20;
/// Upper bound on page size.
pub const MAX_PER_PAGE: i32 = 100;

/// Raw pagination input as it arrives in an action body.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageArgs {
    pub page: Option<i32>,
    pub per_page: Option<i32>,
}

impl PageArgs {
    /// Validate pagination arguments.
    ///
    /// Returns validated args with defaults applied: page >= 1,
    /// 1 <= per_page <= MAX_PER_PAGE.
    pub fn validate(self) -> ApiResult<ValidatedPageArgs> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(ApiError::Validation(
                "page must be a positive number.".to_string(),
            ));
        }

        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page < 1 {
            return Err(ApiError::Validation(
                "per_page must be a positive number.".to_string(),
            ));
        }

        Ok(ValidatedPageArgs {
            page,
            per_page: per_page.min(MAX_PER_PAGE),
        })
    }
}

/// Validated and normalized pagination arguments.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedPageArgs {
    pub page: i32,
    pub per_page: i32,
}

impl ValidatedPageArgs {
    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        ((self.page - 1) as i64) * (self.per_page as i64)
    }
}
