//! Record store: one self-registered medical record per patient identity.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

const RECORD: Symbol = symbol_short!("MED_REC");

/// A patient's medical record. Created once by the patient themselves;
/// `record_data` is an opaque free-text payload.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    pub patient: Address,
    pub record_data: String,
    pub created_at: u64,
}

fn record_key(patient: &Address) -> (Symbol, Address) {
    (RECORD, patient.clone())
}

pub(crate) fn store(env: &Env, record: &MedicalRecord) {
    env.storage()
        .persistent()
        .set(&record_key(&record.patient), record);
}

pub(crate) fn load(env: &Env, patient: &Address) -> Option<MedicalRecord> {
    env.storage().persistent().get(&record_key(patient))
}

pub(crate) fn exists(env: &Env, patient: &Address) -> bool {
    env.storage().persistent().has(&record_key(patient))
}
