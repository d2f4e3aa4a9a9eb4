//! Prescription ledger: append-only records of issued care, each owned by
//! one patient identity and redeemable exactly once.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use common::sequence;

const RX: Symbol = symbol_short!("RX");
const RX_IDX: Symbol = symbol_short!("RX_IDX");
const RX_CTR: Symbol = symbol_short!("RX_CTR");

/// An issued prescription.
///
/// `attachment_hash` is an opaque content id for an externally stored file;
/// the empty string means "no attachment". `issued_at` is the caller-supplied
/// issuance time in seconds, stored verbatim. `is_used` transitions
/// false → true exactly once and never back; prescriptions are never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prescription {
    pub id: u64,
    pub patient: Address,
    pub name: String,
    pub attachment_hash: String,
    pub diagnosis: String,
    pub doctor_name: String,
    pub issued_at: u64,
    pub is_used: bool,
}

pub(crate) fn next_id(env: &Env) -> u64 {
    sequence::next(env, &RX_CTR)
}

fn rx_key(id: u64) -> (Symbol, u64) {
    (RX, id)
}

fn patient_index_key(patient: &Address) -> (Symbol, Address) {
    (RX_IDX, patient.clone())
}

/// Persists a freshly issued prescription and appends it to the owning
/// patient's history index.
pub(crate) fn save_new(env: &Env, rx: &Prescription) {
    env.storage().persistent().set(&rx_key(rx.id), rx);

    let idx_key = patient_index_key(&rx.patient);
    let mut history: Vec<u64> = env
        .storage()
        .persistent()
        .get(&idx_key)
        .unwrap_or(Vec::new(env));
    history.push_back(rx.id);
    env.storage().persistent().set(&idx_key, &history);
}

/// Overwrites an existing prescription record (redemption flip).
pub(crate) fn store(env: &Env, rx: &Prescription) {
    env.storage().persistent().set(&rx_key(rx.id), rx);
}

pub(crate) fn load(env: &Env, id: u64) -> Option<Prescription> {
    env.storage().persistent().get(&rx_key(id))
}

pub(crate) fn ids_for(env: &Env, patient: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&patient_index_key(patient))
        .unwrap_or(Vec::new(env))
}

/// All prescriptions owned by `patient`, in issuance order.
pub(crate) fn list_for(env: &Env, patient: &Address) -> Vec<Prescription> {
    let mut out = Vec::new(env);
    for id in ids_for(env, patient).iter() {
        if let Some(rx) = load(env, id) {
            out.push_back(rx);
        }
    }
    out
}
