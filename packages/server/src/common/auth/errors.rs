use thiserror::Error;

/// Authorization errors for the CampusConnect platform
///
/// The policy is pure, so there are no token or database variants here;
/// session resolution happens before the policy runs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Admin access required")]
    AdminRequired,
}
