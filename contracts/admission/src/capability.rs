//! Capability registry: the genesis admin capability and minted clinician
//! capabilities ("DoctorCap").
//!
//! Capabilities are unforgeable handles, not flags on mutable records: each
//! DoctorCap lives in a server-side table keyed by a minted id, and holding
//! one means the table maps that id to your address. The admin capability is
//! the single stored admin address — one holder at any time, moved only by
//! explicit transfer.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use common::sequence;

const ADMIN: Symbol = symbol_short!("ADMIN");
const CAP: Symbol = symbol_short!("CAP");
const CAP_IDX: Symbol = symbol_short!("CAP_IDX");
const CAP_CTR: Symbol = symbol_short!("CAP_CTR");

/// The kinds of capability an identity can hold.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CapabilityKind {
    Admin,
    Doctor,
}

/// A minted clinician capability.
///
/// `display_name` is fixed at mint time and is the clinician name stamped
/// onto every prescription issued with this capability.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorCap {
    pub id: u64,
    pub holder: Address,
    pub display_name: String,
    pub minted_at: u64,
}

pub(crate) fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

pub(crate) fn admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

pub(crate) fn is_admin(env: &Env, who: &Address) -> bool {
    match admin(env) {
        Some(a) => a == *who,
        None => false,
    }
}

fn cap_key(id: u64) -> (Symbol, u64) {
    (CAP, id)
}

fn holder_index_key(holder: &Address) -> (Symbol, Address) {
    (CAP_IDX, holder.clone())
}

/// Mints a new DoctorCap for `recipient` and records it in the holder index.
/// The caller is responsible for the admin check; minting never consumes the
/// admin capability. The same recipient may be minted any number of caps.
pub(crate) fn mint_doctor_cap(env: &Env, recipient: &Address, display_name: String) -> DoctorCap {
    let id = sequence::next(env, &CAP_CTR);
    let cap = DoctorCap {
        id,
        holder: recipient.clone(),
        display_name,
        minted_at: env.ledger().timestamp(),
    };
    env.storage().persistent().set(&cap_key(id), &cap);

    let idx_key = holder_index_key(recipient);
    let mut held: Vec<u64> = env
        .storage()
        .persistent()
        .get(&idx_key)
        .unwrap_or(Vec::new(env));
    held.push_back(id);
    env.storage().persistent().set(&idx_key, &held);

    cap
}

pub(crate) fn doctor_cap(env: &Env, id: u64) -> Option<DoctorCap> {
    env.storage().persistent().get(&cap_key(id))
}

pub(crate) fn caps_of(env: &Env, holder: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&holder_index_key(holder))
        .unwrap_or(Vec::new(env))
}

/// Read-only membership check used as the authorization gate by every other
/// component.
pub(crate) fn holds(env: &Env, identity: &Address, kind: &CapabilityKind) -> bool {
    match kind {
        CapabilityKind::Admin => is_admin(env, identity),
        CapabilityKind::Doctor => !caps_of(env, identity).is_empty(),
    }
}
