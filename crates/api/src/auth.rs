// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! FleetFlow ships with a built-in operator list (the dashboard's four
//! accounts); credentials are bcrypt-hashed at service construction and
//! verified at login. Sessions are held in memory and expire after eight
//! hours of wall-clock time.

use crate::error::{ApiError, AuthError};
use fleetflow_audit::Actor;
use rand::Rng;
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

/// How long a session token stays valid.
const SESSION_TTL: Duration = Duration::hours(8);

/// Length of a generated session token.
const SESSION_TOKEN_LEN: usize = 32;

/// The shared password of the built-in demo operators.
const BUILTIN_PASSWORD: &str = "fleet123";

/// Operator roles for authorization.
///
/// Roles determine what actions an authenticated operator may perform.
/// Roles apply only to operators, never to drivers: drivers are domain
/// entities, not system users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Fleet manager: full structural and corrective authority over the
    /// fleet, including vehicle/driver registration and deletion.
    Manager,
    /// Dispatcher: authorized to create and drive the trip lifecycle.
    Dispatcher,
    /// Safety officer: authorized to report incidents.
    SafetyOfficer,
    /// Financial analyst: authorized to record fuel and expense entries.
    Analyst,
}

impl Role {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Dispatcher => "dispatcher",
            Self::SafetyOfficer => "safety_officer",
            Self::Analyst => "analyst",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor with an associated role.
///
/// This represents an operator who has been authenticated and has
/// permission to perform certain actions based on their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor (the operator email).
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording audit events to attribute actions to
    /// the authenticated operator.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }
}

/// A registered operator account.
#[derive(Debug, Clone)]
pub struct Operator {
    /// Login email.
    pub email: String,
    /// Display name shown in the dashboard.
    pub display_name: String,
    /// The operator's role.
    pub role: Role,
    /// Bcrypt hash of the operator's password.
    password_hash: String,
}

/// An issued session.
#[derive(Debug, Clone)]
struct Session {
    token: String,
    operator_email: String,
    expires_at: OffsetDateTime,
}

/// Generates a random alphanumeric session token.
fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    (0..SESSION_TOKEN_LEN)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect()
}

/// Validates operator credentials and issues session tokens.
#[derive(Debug)]
pub struct AuthenticationService {
    operators: Vec<Operator>,
    sessions: Vec<Session>,
}

impl AuthenticationService {
    /// Creates a service seeded with the built-in operator accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if password hashing fails.
    pub fn with_builtin_operators() -> Result<Self, ApiError> {
        let accounts: [(&str, &str, Role); 4] = [
            ("manager@fleetflow.com", "Arjun Mehta", Role::Manager),
            ("dispatch@fleetflow.com", "Priya Sharma", Role::Dispatcher),
            ("safety@fleetflow.com", "Vikram Singh", Role::SafetyOfficer),
            ("finance@fleetflow.com", "Neha Gupta", Role::Analyst),
        ];

        let mut operators: Vec<Operator> = Vec::with_capacity(accounts.len());
        for (email, display_name, role) in accounts {
            let password_hash: String = bcrypt::hash(BUILTIN_PASSWORD, bcrypt::DEFAULT_COST)
                .map_err(|e| ApiError::Internal {
                    message: format!("Failed to hash operator password: {e}"),
                })?;
            operators.push(Operator {
                email: email.to_string(),
                display_name: display_name.to_string(),
                role,
                password_hash,
            });
        }

        Ok(Self {
            operators,
            sessions: Vec::new(),
        })
    }

    /// Looks up an operator by email, case-insensitively.
    #[must_use]
    pub fn operator(&self, email: &str) -> Option<&Operator> {
        self.operators
            .iter()
            .find(|o| o.email.eq_ignore_ascii_case(email))
    }

    /// Authenticates an operator and issues a session token.
    ///
    /// # Arguments
    ///
    /// * `email` - The operator's login email
    /// * `password` - The operator's password
    /// * `now` - The current time, used to stamp the session expiry
    ///
    /// # Returns
    ///
    /// The session token and the authenticated operator.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the email is unknown or
    /// the password does not match. The reason is deliberately identical in
    /// both cases.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        now: OffsetDateTime,
    ) -> Result<(String, Operator), AuthError> {
        let failed = || AuthError::AuthenticationFailed {
            reason: String::from("Invalid email or password"),
        };

        let operator: Operator = self.operator(email).cloned().ok_or_else(failed)?;
        let verified: bool = bcrypt::verify(password, &operator.password_hash).map_err(|e| {
            warn!(error = %e, "Password verification failed");
            failed()
        })?;
        if !verified {
            return Err(failed());
        }

        let token: String = generate_token();
        self.sessions.push(Session {
            token: token.clone(),
            operator_email: operator.email.clone(),
            expires_at: now + SESSION_TTL,
        });
        info!(operator = %operator.email, "Operator logged in");

        Ok((token, operator))
    }

    /// Validates a session token and returns the operator context.
    ///
    /// # Arguments
    ///
    /// * `token` - The session token from the Authorization header
    /// * `now` - The current time, checked against the session expiry
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the token is unknown or
    /// the session has expired.
    pub fn validate_session(
        &self,
        token: &str,
        now: OffsetDateTime,
    ) -> Result<(AuthenticatedActor, Operator), AuthError> {
        let session: &Session = self
            .sessions
            .iter()
            .find(|s| s.token == token)
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        if now >= session.expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session has expired"),
            });
        }

        let operator: Operator = self
            .operator(&session.operator_email)
            .cloned()
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Session operator no longer exists"),
            })?;

        Ok((
            AuthenticatedActor::new(operator.email.clone(), operator.role),
            operator,
        ))
    }

    /// Drops expired sessions.
    pub fn prune_sessions(&mut self, now: OffsetDateTime) {
        self.sessions.retain(|s| s.expires_at > now);
    }
}

/// Role gates for each command group.
pub struct AuthorizationService;

impl AuthorizationService {
    fn check(
        actor: &AuthenticatedActor,
        allowed: &[Role],
        action: &str,
        required: &str,
    ) -> Result<(), AuthError> {
        if allowed.contains(&actor.role) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: required.to_string(),
            })
        }
    }

    /// Structural fleet changes (vehicles, drivers, maintenance) require
    /// the Manager role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor is not a Manager.
    pub fn authorize_fleet_admin(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        Self::check(actor, &[Role::Manager], action, "manager")
    }

    /// Trip lifecycle commands require Manager or Dispatcher.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor holds neither role.
    pub fn authorize_trip_lifecycle(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        Self::check(
            actor,
            &[Role::Manager, Role::Dispatcher],
            action,
            "manager or dispatcher",
        )
    }

    /// Incident reporting additionally admits the Safety Officer.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor holds none of the
    /// admitted roles.
    pub fn authorize_incident_report(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::check(
            actor,
            &[Role::Manager, Role::Dispatcher, Role::SafetyOfficer],
            "report_incident",
            "manager, dispatcher, or safety officer",
        )
    }

    /// Fuel and expense entries require Manager or Analyst.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the actor holds neither role.
    pub fn authorize_finance_entry(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        Self::check(
            actor,
            &[Role::Manager, Role::Analyst],
            action,
            "manager or analyst",
        )
    }
}
