// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! Credentials are not verified here: the caller names an actor id and a
//! role, and this layer checks that the pair is well formed and that the
//! role permits the requested action.

use haken::ActorContext;
use haken_audit::Actor;
use haken_domain::Role;

use crate::error::AuthError;

/// An authenticated actor with an associated role.
///
/// This represents an office operator who has been identified and whose
/// role decides which operations they may perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }

    /// Converts this authenticated actor into the context passed to
    /// role-gated transitions.
    #[must_use]
    pub fn to_context(&self) -> ActorContext {
        ActorContext::new(self.id.clone(), self.role)
    }
}

/// Identifies actors from the id and role carried on a request.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Authenticates an actor from a request's `actor_id` and `actor_role`.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is blank or the role is unknown.
    pub fn authenticate(actor_id: &str, actor_role: &str) -> Result<AuthenticatedActor, AuthError> {
        let actor_id: &str = actor_id.trim();
        if actor_id.is_empty() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("actor_id must not be empty"),
            });
        }

        let role: Role = actor_role
            .parse()
            .map_err(|_| AuthError::AuthenticationFailed {
                reason: format!("Unknown role '{actor_role}'"),
            })?;

        Ok(AuthenticatedActor::new(actor_id.to_string(), role))
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the actor may perform write operations.
    ///
    /// Every role except viewer may write.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is a viewer.
    pub fn authorize_write(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        if actor.role.can_edit() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("staff or higher"),
            })
        }
    }

    /// Checks that the actor may approve or reject joining notices.
    ///
    /// # Errors
    ///
    /// Returns an error unless the actor is a manager, admin or super admin.
    pub fn authorize_decision(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        if actor.role.can_approve() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("manager, admin or super_admin"),
            })
        }
    }
}
