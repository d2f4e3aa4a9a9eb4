#![no_std]

//! # Admission contract
//!
//! The authoritative rule engine for clinical intake and prescriptions:
//!
//! - **Capability registry**: a genesis admin capability (one holder,
//!   explicit transfer only) mints clinician capabilities ("DoctorCap") that
//!   gate prescription issuance.
//! - **Record store**: one self-registered medical record per patient.
//! - **Intake queue**: a single shared lobby in insertion order; priority
//!   1..=5 is advisory triage information, never a sort key.
//! - **Prescription ledger**: issuance atomically consumes one lobby entry
//!   and creates a prescription owned by that entry's patient; redemption
//!   flips `is_used` exactly once. Prescriptions are never deleted.
//!
//! Every entry point checks all preconditions before touching storage, so a
//! failed call leaves every entity in its pre-call state.

pub mod capability;
pub mod events;
pub mod prescription;
pub mod queue;
pub mod records;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

use common::{pausable, validation};

pub use capability::{CapabilityKind, DoctorCap};
pub use prescription::Prescription;
pub use queue::WaitingPatient;
pub use records::MedicalRecord;

// ── Storage key constants ─────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Error codes ───────────────────────────────────────────────────────────────

/// Contract errors, grouped by code range: lifecycle (1–9), authorization
/// (10–19), missing prerequisites (20–29), input (30–39), state (40–49),
/// pause (50–59).
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 10,
    NotOwner = 11,
    Unregistered = 20,
    NotFound = 21,
    ValidationFailed = 30,
    AlreadyExists = 31,
    StaleIndex = 40,
    AlreadyUsed = 41,
    Paused = 50,
}

fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    pausable::require_not_paused(env).map_err(|_| ContractError::Paused)
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = capability::admin(env).ok_or(ContractError::NotInitialized)?;
    if admin != *caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

#[contract]
pub struct AdmissionContract;

#[contractimpl]
impl AdmissionContract {
    /// Initialize the contract, granting the genesis admin capability.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        capability::set_admin(&env, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Current holder of the admin capability.
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        capability::admin(&env).ok_or(ContractError::NotInitialized)
    }

    /// Move the admin capability to a new holder. Only the current holder
    /// may do this; there is exactly one holder at any time.
    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        require_not_paused(&env)?;
        require_admin(&env, &caller)?;

        capability::set_admin(&env, &new_admin);
        events::publish_admin_transferred(&env, caller, new_admin);

        Ok(())
    }

    // ── Capability registry ──────────────────────────────────────────────

    /// Mint a clinician capability for `recipient`, stamped with an
    /// immutable display name. Requires the admin capability, which is
    /// retained — minting never consumes it. Returns the new cap id.
    pub fn mint_doctor_cap(
        env: Env,
        caller: Address,
        recipient: Address,
        display_name: String,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        require_not_paused(&env)?;
        require_admin(&env, &caller)?;

        validation::validate_text(&display_name, validation::MAX_NAME_LEN)
            .map_err(|_| ContractError::ValidationFailed)?;

        let cap = capability::mint_doctor_cap(&env, &recipient, display_name.clone());
        events::publish_doctor_cap_minted(&env, cap.id, recipient, display_name);

        Ok(cap.id)
    }

    pub fn get_doctor_cap(env: Env, cap_id: u64) -> Result<DoctorCap, ContractError> {
        capability::doctor_cap(&env, cap_id).ok_or(ContractError::NotFound)
    }

    /// Ids of all clinician capabilities held by `holder`.
    pub fn doctor_caps(env: Env, holder: Address) -> Vec<u64> {
        capability::caps_of(&env, &holder)
    }

    /// Read-only capability membership check.
    pub fn has_capability(env: Env, identity: Address, kind: CapabilityKind) -> bool {
        capability::holds(&env, &identity, &kind)
    }

    // ── Record store ─────────────────────────────────────────────────────

    /// Self-register a medical record. One record per identity; a second
    /// registration fails with `AlreadyExists`.
    pub fn register_patient(
        env: Env,
        patient: Address,
        record_data: String,
    ) -> Result<(), ContractError> {
        patient.require_auth();
        require_not_paused(&env)?;

        validation::validate_text(&record_data, validation::MAX_TEXT_LEN)
            .map_err(|_| ContractError::ValidationFailed)?;

        if records::exists(&env, &patient) {
            return Err(ContractError::AlreadyExists);
        }

        let record = MedicalRecord {
            patient: patient.clone(),
            record_data,
            created_at: env.ledger().timestamp(),
        };
        records::store(&env, &record);

        events::publish_patient_registered(&env, patient);

        Ok(())
    }

    pub fn get_medical_record(env: Env, patient: Address) -> Result<MedicalRecord, ContractError> {
        records::load(&env, &patient).ok_or(ContractError::NotFound)
    }

    // ── Intake queue ─────────────────────────────────────────────────────

    /// Join the intake lobby. Requires a medical record. Returns the
    /// position the entry was appended at; entries stay in arrival order
    /// regardless of priority.
    pub fn register_for_examination(
        env: Env,
        patient: Address,
        symptoms: String,
        department: String,
        priority: u32,
    ) -> Result<u32, ContractError> {
        patient.require_auth();
        require_not_paused(&env)?;

        if !records::exists(&env, &patient) {
            return Err(ContractError::Unregistered);
        }
        if !(queue::MIN_PRIORITY..=queue::MAX_PRIORITY).contains(&priority) {
            return Err(ContractError::ValidationFailed);
        }
        validation::validate_text(&symptoms, validation::MAX_TEXT_LEN)
            .map_err(|_| ContractError::ValidationFailed)?;
        validation::validate_text(&department, validation::MAX_NAME_LEN)
            .map_err(|_| ContractError::ValidationFailed)?;

        let entry = WaitingPatient {
            patient: patient.clone(),
            symptoms,
            department: department.clone(),
            priority,
        };
        let position = queue::push(&env, entry);

        events::publish_patient_enqueued(&env, patient, department, priority, position);

        Ok(position)
    }

    /// The waiting room, in arrival order. Read-only and repeatable.
    pub fn lobby(env: Env) -> Vec<WaitingPatient> {
        queue::entries(&env)
    }

    /// Monotonic counter bumped by every lobby mutation. Clients can poll
    /// this to learn that an index they read may no longer be live.
    pub fn lobby_version(env: Env) -> u64 {
        queue::version(&env)
    }

    /// Remove a lobby entry without issuing a prescription. Admin only.
    pub fn cancel_intake(
        env: Env,
        caller: Address,
        index: u32,
    ) -> Result<WaitingPatient, ContractError> {
        caller.require_auth();
        require_not_paused(&env)?;
        require_admin(&env, &caller)?;

        let entry = queue::remove_at(&env, index).ok_or(ContractError::StaleIndex)?;
        events::publish_intake_cancelled(&env, entry.patient.clone(), caller);

        Ok(entry)
    }

    // ── Prescription ledger ──────────────────────────────────────────────

    /// Issue a prescription by consuming the lobby entry at `queue_index`.
    ///
    /// The removal and the creation happen in one atomic step: all
    /// preconditions are checked before either effect, so no call can
    /// orphan a prescription or drop a patient without issuing. If the
    /// index no longer refers to a live entry — another issuance got there
    /// first — the call fails with `StaleIndex` and the caller must re-read
    /// the lobby and retry against a fresh index.
    ///
    /// The prescription's clinician name comes from the presented
    /// capability's mint-time display name.
    #[allow(clippy::too_many_arguments)]
    pub fn create_prescription(
        env: Env,
        caller: Address,
        cap_id: u64,
        queue_index: u32,
        name: String,
        attachment_hash: String,
        diagnosis: String,
        issued_at: u64,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        require_not_paused(&env)?;

        let cap = capability::doctor_cap(&env, cap_id).ok_or(ContractError::Unauthorized)?;
        if cap.holder != caller {
            return Err(ContractError::Unauthorized);
        }

        validation::validate_text(&name, validation::MAX_NAME_LEN)
            .map_err(|_| ContractError::ValidationFailed)?;
        validation::validate_text(&diagnosis, validation::MAX_TEXT_LEN)
            .map_err(|_| ContractError::ValidationFailed)?;
        validation::validate_content_id(&attachment_hash)
            .map_err(|_| ContractError::ValidationFailed)?;

        let entry = queue::remove_at(&env, queue_index).ok_or(ContractError::StaleIndex)?;

        let rx = Prescription {
            id: prescription::next_id(&env),
            patient: entry.patient.clone(),
            name,
            attachment_hash,
            diagnosis,
            doctor_name: cap.display_name,
            issued_at,
            is_used: false,
        };
        prescription::save_new(&env, &rx);

        events::publish_prescription_issued(&env, rx.id, entry.patient, caller, cap_id);

        Ok(rx.id)
    }

    pub fn get_prescription(env: Env, rx_id: u64) -> Result<Prescription, ContractError> {
        prescription::load(&env, rx_id).ok_or(ContractError::NotFound)
    }

    /// All prescriptions owned by `patient`, in issuance order. Read-only
    /// and repeatable.
    pub fn prescriptions_for(env: Env, patient: Address) -> Vec<Prescription> {
        prescription::list_for(&env, &patient)
    }

    /// Redeem a prescription. Owner only; succeeds at most once — a replay
    /// fails with `AlreadyUsed` rather than silently succeeding.
    pub fn use_prescription(
        env: Env,
        caller: Address,
        rx_id: u64,
    ) -> Result<Prescription, ContractError> {
        caller.require_auth();
        require_not_paused(&env)?;

        let mut rx = prescription::load(&env, rx_id).ok_or(ContractError::NotFound)?;
        if rx.patient != caller {
            return Err(ContractError::NotOwner);
        }
        if rx.is_used {
            return Err(ContractError::AlreadyUsed);
        }

        rx.is_used = true;
        prescription::store(&env, &rx);

        events::publish_prescription_redeemed(&env, rx_id, caller);

        Ok(rx)
    }

    // ── Emergency stop ───────────────────────────────────────────────────

    /// Fence all state-mutating entry points. Admin only; reads stay open.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        pausable::pause(&env, &caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        pausable::unpause(&env, &caller);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        pausable::is_paused(&env)
    }

    /// Contract version.
    pub fn version() -> u32 {
        1
    }
}
