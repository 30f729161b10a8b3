// Common types used across multiple domains and layers
//
// Role and status enums are shared between the policy layer, the status
// machines, and the models, so they live here rather than in any one domain.
// Each maps to a Postgres enum type created in the initial migration.

use serde::{Deserialize, Serialize};

/// Account role. Fixed at registration; admins are seeded via `create_admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Student,
    Mentor,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Mentor => write!(f, "mentor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "mentor" => Ok(Role::Mentor),
            "admin" => Ok(Role::Admin),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

/// Whether an account may act. Inactive accounts keep their rows (and their
/// content) but cannot authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "account_status", rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "active"),
            AccountStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for AccountStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AccountStatus::Active),
            "inactive" => Ok(AccountStatus::Inactive),
            _ => Err(anyhow::anyhow!("Invalid account status: {}", s)),
        }
    }
}

/// Identity review state for an account. Set by admins only; mentors need
/// `Approved` before they can be targeted by mentorship requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "verification_status", rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationStatus::Pending => write!(f, "pending"),
            VerificationStatus::Approved => write!(f, "approved"),
            VerificationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "approved" => Ok(VerificationStatus::Approved),
            "rejected" => Ok(VerificationStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid verification status: {}", s)),
        }
    }
}

/// Moderation state of a blog post. Only `Published` posts are publicly
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "blog_status", rename_all = "lowercase")]
pub enum BlogStatus {
    Pending,
    Published,
    Rejected,
}

impl BlogStatus {
    /// True for the states an admin decision has already been recorded for.
    pub fn is_moderated(&self) -> bool {
        matches!(self, BlogStatus::Published | BlogStatus::Rejected)
    }
}

impl std::fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlogStatus::Pending => write!(f, "pending"),
            BlogStatus::Published => write!(f, "published"),
            BlogStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for BlogStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BlogStatus::Pending),
            "published" => Ok(BlogStatus::Published),
            "rejected" => Ok(BlogStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid blog status: {}", s)),
        }
    }
}

/// Lifecycle of a mentorship request. `Rejected` and `Completed` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "mentorship_status", rename_all = "lowercase")]
pub enum MentorshipStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl MentorshipStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MentorshipStatus::Rejected | MentorshipStatus::Completed)
    }
}

impl std::fmt::Display for MentorshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MentorshipStatus::Pending => write!(f, "pending"),
            MentorshipStatus::Approved => write!(f, "approved"),
            MentorshipStatus::Rejected => write!(f, "rejected"),
            MentorshipStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for MentorshipStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MentorshipStatus::Pending),
            "approved" => Ok(MentorshipStatus::Approved),
            "rejected" => Ok(MentorshipStatus::Rejected),
            "completed" => Ok(MentorshipStatus::Completed),
            _ => Err(anyhow::anyhow!("Invalid mentorship status: {}", s)),
        }
    }
}
