//! Closed set of access-control roles.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role carried by a session. Access checks are exact-match only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Hr,
}

impl Role {
    /// Wire name used inside the credential blob.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Hr => "hr",
        }
    }

    /// Human-readable label for navbars and profile screens.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Hr => "HR",
        }
    }

    /// Default page a user of this role lands on.
    #[must_use]
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Employee => "/employee/dashboard",
            Self::Hr => "/hr/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
