//! Structured event publishing for the admission contract. Every state
//! mutation emits exactly one event.

use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when the admin capability moves to a new holder.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEvent {
    pub previous: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Event published when a clinician capability is minted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorCapMintedEvent {
    pub cap_id: u64,
    pub recipient: Address,
    pub display_name: String,
    pub timestamp: u64,
}

/// Event published when a patient self-registers a medical record.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub timestamp: u64,
}

/// Event published when a patient joins the intake lobby.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientEnqueuedEvent {
    pub patient: Address,
    pub department: String,
    pub priority: u32,
    pub position: u32,
    pub timestamp: u64,
}

/// Event published when an admin removes a lobby entry without issuing.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntakeCancelledEvent {
    pub patient: Address,
    pub cancelled_by: Address,
    pub timestamp: u64,
}

/// Event published when a prescription is issued against a lobby entry.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionIssuedEvent {
    pub rx_id: u64,
    pub patient: Address,
    pub clinician: Address,
    pub cap_id: u64,
    pub timestamp: u64,
}

/// Event published when a patient redeems a prescription.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrescriptionRedeemedEvent {
    pub rx_id: u64,
    pub patient: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_admin_transferred(env: &Env, previous: Address, new_admin: Address) {
    let topics = (symbol_short!("ADM_TRF"), new_admin.clone());
    let data = AdminTransferredEvent {
        previous,
        new_admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_doctor_cap_minted(env: &Env, cap_id: u64, recipient: Address, display_name: String) {
    let topics = (symbol_short!("CAP_MINT"), recipient.clone());
    let data = DoctorCapMintedEvent {
        cap_id,
        recipient,
        display_name,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_registered(env: &Env, patient: Address) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_enqueued(
    env: &Env,
    patient: Address,
    department: String,
    priority: u32,
    position: u32,
) {
    let topics = (symbol_short!("LOB_ADD"), patient.clone());
    let data = PatientEnqueuedEvent {
        patient,
        department,
        priority,
        position,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_intake_cancelled(env: &Env, patient: Address, cancelled_by: Address) {
    let topics = (symbol_short!("LOB_CXL"), patient.clone());
    let data = IntakeCancelledEvent {
        patient,
        cancelled_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_prescription_issued(
    env: &Env,
    rx_id: u64,
    patient: Address,
    clinician: Address,
    cap_id: u64,
) {
    let topics = (symbol_short!("RX_NEW"), patient.clone(), clinician.clone());
    let data = PrescriptionIssuedEvent {
        rx_id,
        patient,
        clinician,
        cap_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_prescription_redeemed(env: &Env, rx_id: u64, patient: Address) {
    let topics = (symbol_short!("RX_USED"), patient.clone());
    let data = PrescriptionRedeemedEvent {
        rx_id,
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
