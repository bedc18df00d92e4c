// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Audit types for the FleetFlow rules engine.
//!
//! Every successful state transition produces exactly one audit event.
//! Audit events are immutable once created and double as the dashboard
//! activity feed: their summaries are what operators see in "recent
//! activity".

use fleetflow_domain::Severity;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change.
/// This could be an operator, a system process, or an automated trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "manager", "dispatcher", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
///
/// A cause describes why a state change was initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
///
/// An action describes what state change occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`DispatchTrip`", "`ReportIncident`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of fleet state at a point in time.
///
/// Snapshots capture entity counts, enough to see at a glance what a
/// transition touched without replaying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful state change must produce exactly one audit event.
/// Audit events capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The state before and after the transition
/// - How the dashboard should color the feed entry (severity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Persistence-assigned event id, `None` until stored.
    pub event_id: Option<i64>,
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// Feed severity for the activity display.
    pub severity: Severity,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    /// * `severity` - Feed severity for the activity display
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        severity: Severity,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            before,
            after,
            severity,
        }
    }

    /// Returns a copy of this event carrying its persistence-assigned id.
    #[must_use]
    pub fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Renders the activity-feed line for this event.
    ///
    /// The action details are preferred; the action name is the fallback
    /// for events recorded without a detail line.
    #[must_use]
    pub fn summary(&self) -> String {
        self.action
            .details
            .clone()
            .unwrap_or_else(|| self.action.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("op-manager"), String::from("manager"));

        assert_eq!(actor.id, "op-manager");
        assert_eq!(actor.actor_type, "manager");
    }

    #[test]
    fn test_cause_creation_requires_all_fields() {
        let cause: Cause = Cause::new(String::from("req-456"), String::from("Operator request"));

        assert_eq!(cause.id, "req-456");
        assert_eq!(cause.description, "Operator request");
    }

    #[test]
    fn test_action_creation_requires_name() {
        let action: Action = Action::new(String::from("DispatchTrip"), None);

        assert_eq!(action.name, "DispatchTrip");
        assert_eq!(action.details, None);
    }

    #[test]
    fn test_event_summary_prefers_details() {
        let event: AuditEvent = AuditEvent::new(
            Actor::new(String::from("op-manager"), String::from("manager")),
            Cause::new(String::from("req-1"), String::from("Operator request")),
            Action::new(
                String::from("DispatchTrip"),
                Some(String::from("Trip t1 dispatched")),
            ),
            StateSnapshot::new(String::from("trips=1")),
            StateSnapshot::new(String::from("trips=1")),
            Severity::Info,
        );

        assert_eq!(event.summary(), "Trip t1 dispatched");
        assert_eq!(event.event_id, None);
        assert_eq!(event.clone().with_event_id(7).event_id, Some(7));
    }

    #[test]
    fn test_event_summary_falls_back_to_action_name() {
        let event: AuditEvent = AuditEvent::new(
            Actor::new(String::from("system"), String::from("system")),
            Cause::new(String::from("req-2"), String::from("Seed load")),
            Action::new(String::from("AddVehicle"), None),
            StateSnapshot::new(String::from("vehicles=0")),
            StateSnapshot::new(String::from("vehicles=1")),
            Severity::Info,
        );

        assert_eq!(event.summary(), "AddVehicle");
    }
}
