//! The session manager.
//!
//! Coordinates the allocation policy, the slot registry, the priority
//! queue, and the timers behind a single site lock. Every
//! check-then-mutate sequence (reserve, confirm, expire, exit, settle,
//! redistribute) runs with the lock held, so state observed by a check
//! cannot change before the matching mutation lands.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use parkhub_core::AppResult;
use parkhub_core::config::AppConfig;
use parkhub_core::config::session::SessionConfig;
use parkhub_core::error::AppError;
use parkhub_core::events::{DomainEvent, EventPayload, QueueEvent, SessionEvent};
use parkhub_core::traits::{ParkingNotifier, Repository};
use parkhub_core::types::id::{QueueEntryId, SessionId, SlotId, VehicleId};

use parkhub_entity::pass::GateAction;
use parkhub_entity::queue::{QueueEntry, SlotPreference};
use parkhub_entity::session::{EntryMethod, Session, SessionStatus};
use parkhub_entity::slot::{Slot, SlotFilter};
use parkhub_entity::user::User;

use parkhub_store::{SessionStore, SlotStore, UserStore};

use crate::allocation;
use crate::gatepass::GatePassService;
use crate::queue::PriorityQueue;
use crate::registry::SlotRegistry;
use crate::stats::{self, SiteStatistics};
use crate::tariff::{self, Tariff};

use super::outcome::{
    ConfirmAck, EntryOutcome, EntryTicket, ExitAck, QueuedTicket, VehicleStatus,
};
use super::timers::TimerRegistry;

/// Coordinates the full session lifecycle for one parking site.
pub struct SessionManager {
    site: Mutex<PriorityQueue>,
    registry: SlotRegistry,
    slots: Arc<SlotStore>,
    sessions: Arc<SessionStore>,
    users: Arc<UserStore>,
    notifier: Arc<dyn ParkingNotifier>,
    timers: TimerRegistry,
    passes: GatePassService,
    tariff: Tariff,
    config: SessionConfig,
}

impl SessionManager {
    /// Build a manager over the given stores.
    pub fn new(
        config: &AppConfig,
        slots: Arc<SlotStore>,
        sessions: Arc<SessionStore>,
        users: Arc<UserStore>,
        notifier: Arc<dyn ParkingNotifier>,
    ) -> Arc<Self> {
        Arc::new(Self {
            site: Mutex::new(PriorityQueue::new(config.queue.clone())),
            registry: SlotRegistry::new(Arc::clone(&slots)),
            slots,
            sessions,
            users,
            notifier,
            timers: TimerRegistry::new(),
            passes: GatePassService::new(config.passes.clone()),
            tariff: Tariff::new(config.tariff.clone()),
            config: config.session.clone(),
        })
    }

    /// The gate pass service, for issuance endpoints.
    pub fn passes(&self) -> &GatePassService {
        &self.passes
    }

    /// Request entry for a vehicle.
    ///
    /// With an encoded entry pass the request counts as a gate scan;
    /// without one it is a manual entry. Either a slot is reserved and a
    /// confirmation hold starts, or the vehicle joins the queue. A vehicle
    /// that is already waiting gets its current placement back.
    pub async fn request_entry(
        self: &Arc<Self>,
        vehicle_id: &VehicleId,
        pass: Option<&str>,
    ) -> AppResult<EntryOutcome> {
        let now = Utc::now();
        let (entry_method, gate_id) = match pass {
            Some(raw) => {
                let (verdict, decoded) =
                    self.passes.validate_encoded(raw, GateAction::Entry, now);
                if !verdict.valid {
                    return Err(AppError::validation(verdict.reason));
                }
                (EntryMethod::Qr, decoded.map(|p| p.gate_id))
            }
            None => (EntryMethod::Manual, None),
        };

        let user = self.resolve_user(vehicle_id)?;

        let mut queue = self.site.lock().await;

        if let Some(session) = self.sessions.find_active_by_vehicle(vehicle_id) {
            return Err(AppError::conflict(format!(
                "Vehicle {vehicle_id} already has an active session ({})",
                session.status
            )));
        }
        if queue.position_of(vehicle_id).is_some() {
            // Repeated request from a waiting vehicle: report the current
            // placement instead of queueing twice.
            let entry = queue
                .entries()
                .iter()
                .find(|e| &e.vehicle_id == vehicle_id)
                .cloned()
                .ok_or_else(|| AppError::internal("Queue position without entry"))?;
            return Ok(EntryOutcome::Queued(QueuedTicket {
                position: entry.position,
                estimated_wait_minutes: entry.estimated_wait_minutes,
            }));
        }

        let candidates = self.registry.available_for(user.vehicle_class);
        match allocation::select_slot(&user, &candidates) {
            Some(slot) => {
                let slot_id = slot.id.clone();
                let ticket = self
                    .reserve_locked(&user, &slot_id, entry_method, gate_id, now)
                    .await?;
                drop(queue);
                Ok(EntryOutcome::Assigned(ticket))
            }
            None => {
                let estimated_wait = queue.estimate_wait();
                let entry = QueueEntry {
                    id: QueueEntryId::new(),
                    vehicle_id: vehicle_id.clone(),
                    user_id: user.id,
                    class: user.vehicle_class,
                    priority: user.priority,
                    queued_at: now,
                    estimated_wait_minutes: estimated_wait,
                    position: 0,
                    notified: false,
                    slot_preference: if user.accessibility_needs {
                        SlotPreference::Accessible
                    } else {
                        SlotPreference::Any
                    },
                };
                let position = queue.insert(entry);
                drop(queue);

                info!(vehicle = %vehicle_id, position, "Vehicle queued, no slot available");
                self.emit(EventPayload::Queue(QueueEvent::Enqueued {
                    vehicle_id: vehicle_id.clone(),
                    position,
                    estimated_wait_minutes: estimated_wait,
                }))
                .await;
                Ok(EntryOutcome::Queued(QueuedTicket {
                    position,
                    estimated_wait_minutes: estimated_wait,
                }))
            }
        }
    }

    /// Confirm that the vehicle parked in its reserved slot.
    ///
    /// Requires the one-time code issued at reservation. Arriving after
    /// the hold elapsed fails with Timeout and reclaims the slot if the
    /// expiry task has not already done so.
    pub async fn confirm_entry(
        self: &Arc<Self>,
        vehicle_id: &VehicleId,
        slot_id: &SlotId,
        code: &str,
    ) -> AppResult<ConfirmAck> {
        let now = Utc::now();
        let mut queue = self.site.lock().await;

        let mut session = self
            .sessions
            .find_active_by_vehicle(vehicle_id)
            .ok_or_else(|| {
                AppError::not_found(format!("No pending entry for vehicle {vehicle_id}"))
            })?;
        if session.status != SessionStatus::PendingEntry {
            return Err(AppError::conflict(format!(
                "Session {} is {}, not awaiting entry confirmation",
                session.id, session.status
            )));
        }
        if &session.slot_id != slot_id {
            return Err(AppError::validation(format!(
                "Slot {slot_id} does not match the reserved slot {}",
                session.slot_id
            )));
        }
        if session.code != code {
            return Err(AppError::validation("Invalid verification code"));
        }

        let hold = Duration::seconds(self.config.hold_window_seconds as i64);
        if now > session.requested_at + hold {
            // Lost the race against the wall clock but not yet against the
            // expiry task. Reclaim here; the task's later fire is a no-op.
            self.timers.cancel(&session.id);
            self.reclaim_locked(&mut queue, session).await?;
            return Err(AppError::timeout(
                "Reservation expired before confirmation. Please request entry again.",
            ));
        }

        self.timers.cancel(&session.id);
        self.registry.occupy(slot_id, vehicle_id, now).await?;

        session.status = SessionStatus::Entered;
        session.entered_at = Some(now);
        session.estimated_departure =
            now + Duration::hours(self.config.estimated_stay_hours as i64);
        let session = self.sessions.update(&session).await?;
        drop(queue);

        if let Some(mut user) = self.users.find_by_vehicle(vehicle_id) {
            user.last_parked = Some(now);
            if let Err(err) = self.users.update(&user).await {
                warn!(user = %user.id, error = %err, "Failed to record last-parked time");
            }
        }

        info!(session = %session.id, slot = %slot_id, "Entry confirmed");
        self.emit(EventPayload::Session(SessionEvent::Entered {
            session_id: session.id,
            vehicle_id: vehicle_id.clone(),
            slot_id: slot_id.clone(),
        }))
        .await;

        Ok(ConfirmAck {
            session_id: session.id,
            slot_id: session.slot_id.clone(),
            entered_at: now,
            estimated_departure: session.estimated_departure,
        })
    }

    /// Expire an unconfirmed reservation. Fired by the hold timer; a
    /// stale fire (the session moved on) is a no-op.
    pub async fn expire_hold(self: &Arc<Self>, session_id: SessionId) -> AppResult<()> {
        let mut queue = self.site.lock().await;
        self.timers.discard(&session_id);

        let session = match self.sessions.find_by_id(&session_id).await? {
            Some(session) => session,
            None => {
                warn!(session = %session_id, "Hold expiry fired for unknown session");
                return Ok(());
            }
        };
        if session.status != SessionStatus::PendingEntry {
            return Ok(());
        }
        self.reclaim_locked(&mut queue, session).await
    }

    /// Request exit for a parked vehicle.
    ///
    /// Computes duration and charge immediately; the slot is released
    /// only after the settlement delay, modelling gate clearance.
    pub async fn request_exit(
        self: &Arc<Self>,
        vehicle_id: &VehicleId,
        pass: Option<&str>,
        code: &str,
    ) -> AppResult<ExitAck> {
        let now = Utc::now();
        if let Some(raw) = pass {
            let (verdict, _) = self.passes.validate_encoded(raw, GateAction::Exit, now);
            if !verdict.valid {
                return Err(AppError::validation(verdict.reason));
            }
        }

        let queue = self.site.lock().await;

        let mut session = self
            .sessions
            .find_active_by_vehicle(vehicle_id)
            .ok_or_else(|| {
                AppError::not_found(format!("No active session for vehicle {vehicle_id}"))
            })?;
        match session.status {
            SessionStatus::Entered => {}
            SessionStatus::PendingEntry => {
                return Err(AppError::conflict(
                    "Entry has not been confirmed; nothing to exit",
                ));
            }
            _ => {
                return Err(AppError::conflict(format!(
                    "Session {} is already {}",
                    session.id, session.status
                )));
            }
        }
        if session.code != code {
            return Err(AppError::validation("Invalid verification code"));
        }

        let occupied = session
            .occupancy_seconds(now)
            .ok_or_else(|| AppError::internal("Entered session without entry time"))?;
        if occupied < self.config.min_dwell_seconds {
            return Err(AppError::validation(format!(
                "Vehicle must stay parked at least {} seconds before exiting",
                self.config.min_dwell_seconds
            )));
        }

        let minutes = occupied / 60;
        let charge = self.tariff.charge_for_minutes(minutes);
        session.status = SessionStatus::PendingExit;
        session.exited_at = Some(now);
        session.duration_seconds = Some(occupied);
        session.charge = Some(charge);
        let session = self.sessions.update(&session).await?;
        drop(queue);

        self.schedule_settlement(session.id);
        info!(
            session = %session.id,
            duration_minutes = minutes,
            charge,
            "Exit requested, settlement scheduled"
        );

        Ok(ExitAck {
            session_id: session.id,
            entered_at: session
                .entered_at
                .ok_or_else(|| AppError::internal("Entered session without entry time"))?,
            exited_at: now,
            duration_minutes: minutes,
            duration_formatted: tariff::format_duration(minutes),
            charge,
            currency: self.tariff.currency().to_string(),
            settlement_seconds: self.config.settlement_delay_seconds,
        })
    }

    /// Settle a pending exit: free the slot, close the session, update
    /// the owner's statistics, and offer the slot to the queue. Fired by
    /// the settlement timer; a stale fire is a no-op.
    pub async fn settle(self: &Arc<Self>, session_id: SessionId) -> AppResult<()> {
        let mut queue = self.site.lock().await;
        self.timers.discard(&session_id);

        let session = match self.sessions.find_by_id(&session_id).await? {
            Some(session) => session,
            None => {
                warn!(session = %session_id, "Settlement fired for unknown session");
                return Ok(());
            }
        };
        if session.status != SessionStatus::PendingExit {
            return Ok(());
        }
        self.settle_locked(&mut queue, session).await?;
        Ok(())
    }

    /// Administratively complete a session without waiting for its timer.
    ///
    /// A pending exit settles immediately; a pending entry is timed out
    /// and its slot reclaimed. Other states conflict.
    pub async fn force_complete(self: &Arc<Self>, session_id: SessionId) -> AppResult<Session> {
        let mut queue = self.site.lock().await;

        let session = self
            .sessions
            .find_by_id(&session_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Session {session_id} not found")))?;
        match session.status {
            SessionStatus::PendingExit => {
                self.timers.cancel(&session_id);
                self.settle_locked(&mut queue, session).await
            }
            SessionStatus::PendingEntry => {
                self.timers.cancel(&session_id);
                self.reclaim_locked(&mut queue, session).await?;
                self.sessions
                    .find_by_id(&session_id)
                    .await?
                    .ok_or_else(|| AppError::internal("Session vanished during reclamation"))
            }
            status => Err(AppError::conflict(format!(
                "Session {session_id} is {status} and cannot be force-completed"
            ))),
        }
    }

    /// Current standing of a vehicle: active session and queue placement.
    pub async fn vehicle_status(&self, vehicle_id: &VehicleId) -> VehicleStatus {
        let queue = self.site.lock().await;
        let queue_entry = queue
            .entries()
            .iter()
            .find(|e| &e.vehicle_id == vehicle_id)
            .cloned();
        VehicleStatus {
            vehicle_id: vehicle_id.clone(),
            session: self.sessions.find_active_by_vehicle(vehicle_id),
            queue_entry,
        }
    }

    /// Load a session by id.
    pub async fn session(&self, session_id: &SessionId) -> AppResult<Session> {
        self.sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Session {session_id} not found")))
    }

    /// List slots matching a filter.
    pub fn list_slots(&self, filter: &SlotFilter) -> Vec<Slot> {
        self.registry.find_filtered(filter)
    }

    /// Snapshot of the waiting queue in order.
    pub async fn queue_snapshot(&self) -> Vec<QueueEntry> {
        self.site.lock().await.entries().to_vec()
    }

    /// Current site statistics.
    pub async fn statistics(&self) -> AppResult<SiteStatistics> {
        let queue_length = self.site.lock().await.len();
        stats::compute(&self.slots, &self.sessions, queue_length).await
    }

    // -- Internals (site lock held) --

    fn resolve_user(&self, vehicle_id: &VehicleId) -> AppResult<User> {
        let user = self.users.find_by_vehicle(vehicle_id).ok_or_else(|| {
            AppError::not_found(format!("Vehicle {vehicle_id} is not registered"))
        })?;
        if !user.active {
            return Err(AppError::validation(format!(
                "Account for vehicle {vehicle_id} is inactive"
            )));
        }
        Ok(user)
    }

    /// Reserve `slot_id` for `user` and create the pending session.
    async fn reserve_locked(
        self: &Arc<Self>,
        user: &User,
        slot_id: &SlotId,
        entry_method: EntryMethod,
        gate_id: Option<String>,
        now: chrono::DateTime<Utc>,
    ) -> AppResult<EntryTicket> {
        let hold_until = now + Duration::seconds(self.config.hold_window_seconds as i64);
        let slot = self
            .registry
            .reserve(slot_id, &user.vehicle_id, hold_until)
            .await?;

        let session = Session {
            id: SessionId::new(),
            vehicle_id: user.vehicle_id.clone(),
            slot_id: slot_id.clone(),
            code: self.passes.verification_code(),
            status: SessionStatus::PendingEntry,
            entry_method,
            gate_id,
            requested_at: now,
            entered_at: None,
            exited_at: None,
            estimated_departure: now
                + Duration::hours(self.config.estimated_stay_hours as i64),
            duration_seconds: None,
            charge: None,
            violations: Vec::new(),
        };
        let session = self.sessions.create(&session).await?;
        self.schedule_hold_expiry(session.id);

        info!(
            session = %session.id,
            vehicle = %user.vehicle_id,
            slot = %slot_id,
            "Slot reserved pending confirmation"
        );
        self.emit(EventPayload::Session(SessionEvent::Reserved {
            session_id: session.id,
            vehicle_id: user.vehicle_id.clone(),
            slot_id: slot_id.clone(),
        }))
        .await;

        Ok(EntryTicket {
            session_id: session.id,
            slot_id: slot_id.clone(),
            location: slot.location,
            code: session.code,
            confirm_within_seconds: self.config.hold_window_seconds,
            estimated_departure: session.estimated_departure,
        })
    }

    /// Time out a pending entry: free the slot, mark the session, offer
    /// the slot to the queue.
    async fn reclaim_locked(
        self: &Arc<Self>,
        queue: &mut PriorityQueue,
        mut session: Session,
    ) -> AppResult<()> {
        self.registry.release(&session.slot_id).await?;
        session.status = SessionStatus::Timeout;
        let session = self.sessions.update(&session).await?;

        warn!(
            session = %session.id,
            vehicle = %session.vehicle_id,
            slot = %session.slot_id,
            "Reservation hold expired, slot reclaimed"
        );
        self.emit(EventPayload::Session(SessionEvent::TimedOut {
            session_id: session.id,
            vehicle_id: session.vehicle_id.clone(),
            slot_id: session.slot_id.clone(),
        }))
        .await;

        self.redistribute_locked(queue, &session.slot_id).await
    }

    /// Settle a pending exit: finalize the slot, close the session,
    /// update owner statistics, offer the slot to the queue.
    async fn settle_locked(
        self: &Arc<Self>,
        queue: &mut PriorityQueue,
        mut session: Session,
    ) -> AppResult<Session> {
        let now = Utc::now();
        self.registry.finalize(&session.slot_id, now).await?;
        session.status = SessionStatus::Exited;
        let session = self.sessions.update(&session).await?;

        let minutes = session.billable_minutes().unwrap_or(0);
        let charge = session.charge.unwrap_or(0);
        if let Some(mut user) = self.users.find_by_vehicle(&session.vehicle_id) {
            user.total_parking_minutes += minutes;
            if let Err(err) = self.users.update(&user).await {
                warn!(user = %user.id, error = %err, "Failed to update parking statistics");
            }
        }

        info!(
            session = %session.id,
            duration_minutes = minutes,
            charge,
            "Session settled, slot released"
        );
        self.emit(EventPayload::Session(SessionEvent::Completed {
            session_id: session.id,
            vehicle_id: session.vehicle_id.clone(),
            duration_minutes: minutes,
            charge,
        }))
        .await;

        self.redistribute_locked(queue, &session.slot_id).await?;
        Ok(session)
    }

    /// Offer a freed slot to the highest-priority compatible waiter.
    ///
    /// Incompatible entries keep their place. On a reservation race the
    /// entry is reinstated at its original spot.
    async fn redistribute_locked(
        self: &Arc<Self>,
        queue: &mut PriorityQueue,
        slot_id: &SlotId,
    ) -> AppResult<()> {
        let slot = self.registry.get(slot_id).await?;
        if !slot.is_available() {
            return Ok(());
        }
        let Some(entry) = queue.take_first_compatible(slot.class) else {
            return Ok(());
        };

        let user = match self.users.find_by_id(&entry.user_id).await? {
            Some(user) if user.active => user,
            _ => {
                // Owner disappeared or went inactive while waiting. Drop
                // the entry and offer the slot to the next waiter.
                warn!(vehicle = %entry.vehicle_id, "Dropping queue entry without active owner");
                return Box::pin(self.redistribute_locked(queue, slot_id)).await;
            }
        };

        let now = Utc::now();
        match self
            .reserve_locked(&user, slot_id, EntryMethod::Queue, None, now)
            .await
        {
            Ok(_) => {
                info!(vehicle = %entry.vehicle_id, slot = %slot_id, "Freed slot offered to waiting vehicle");
                self.emit(EventPayload::Queue(QueueEvent::OfferAttempted {
                    vehicle_id: entry.vehicle_id.clone(),
                    offered_slot: Some(slot_id.clone()),
                }))
                .await;
                Ok(())
            }
            Err(err) => {
                // The slot raced away between the availability check and
                // the reserve. Put the entry back where it was.
                warn!(
                    vehicle = %entry.vehicle_id,
                    slot = %slot_id,
                    error = %err,
                    "Offer failed, reinstating queue entry"
                );
                let vehicle_id = entry.vehicle_id.clone();
                queue.insert(entry);
                self.emit(EventPayload::Queue(QueueEvent::OfferAttempted {
                    vehicle_id,
                    offered_slot: None,
                }))
                .await;
                Ok(())
            }
        }
    }

    fn schedule_hold_expiry(self: &Arc<Self>, session_id: SessionId) {
        let manager = Arc::clone(self);
        self.timers.schedule(
            session_id,
            StdDuration::from_secs(self.config.hold_window_seconds),
            async move {
                if let Err(err) = manager.expire_hold(session_id).await {
                    error!(session = %session_id, error = %err, "Hold expiry failed");
                }
            },
        );
    }

    fn schedule_settlement(self: &Arc<Self>, session_id: SessionId) {
        let manager = Arc::clone(self);
        self.timers.schedule(
            session_id,
            StdDuration::from_secs(self.config.settlement_delay_seconds),
            async move {
                if let Err(err) = manager.settle(session_id).await {
                    error!(session = %session_id, error = %err, "Settlement failed");
                }
            },
        );
    }

    async fn emit(&self, payload: EventPayload) {
        if let Err(err) = self.notifier.publish(DomainEvent::new(payload)).await {
            warn!(error = %err, "Failed to publish domain event");
        }
    }
}
