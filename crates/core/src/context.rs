// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use haken_audit::Actor;
use haken_domain::{DomainError, Role};

/// Identity and role of the operator making a decision.
///
/// Passed explicitly into role-gated transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    pub user_id: String,
    pub role: Role,
}

impl ActorContext {
    #[must_use]
    pub const fn new(user_id: String, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Returns the audit actor for this context.
    #[must_use]
    pub fn to_actor(&self) -> Actor {
        Actor::new(self.user_id.clone(), self.role.as_str().to_string())
    }

    /// Checks that the role may approve or reject joining notices.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InsufficientRole` for staff and viewers.
    pub const fn ensure_can_decide(&self, action: &'static str) -> Result<(), DomainError> {
        if self.role.can_approve() {
            Ok(())
        } else {
            Err(DomainError::InsufficientRole {
                action,
                role: self.role,
            })
        }
    }
}
