//! Intake queue: the single shared lobby of patients awaiting care.
//!
//! The lobby is one ordered collection under one storage key. Exposure order
//! is insertion order; `priority` is advisory triage information rendered by
//! clients and never reorders entries. Every mutation goes through
//! [`commit`], which bumps a monotonic version counter clients can poll to
//! detect that a previously read index may have gone stale.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

use common::sequence;

const LOBBY: Symbol = symbol_short!("LOBBY");
const LOBBY_VER: Symbol = symbol_short!("LOB_VER");

pub const MIN_PRIORITY: u32 = 1;
pub const MAX_PRIORITY: u32 = 5;

/// A pending intake request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WaitingPatient {
    pub patient: Address,
    pub symptoms: String,
    pub department: String,
    pub priority: u32,
}

pub(crate) fn entries(env: &Env) -> Vec<WaitingPatient> {
    env.storage()
        .persistent()
        .get(&LOBBY)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn version(env: &Env) -> u64 {
    sequence::current(env, &LOBBY_VER)
}

fn commit(env: &Env, list: &Vec<WaitingPatient>) {
    env.storage().persistent().set(&LOBBY, list);
    sequence::next(env, &LOBBY_VER);
}

/// Appends an entry at the tail and returns its position.
pub(crate) fn push(env: &Env, entry: WaitingPatient) -> u32 {
    let mut list = entries(env);
    list.push_back(entry);
    commit(env, &list);
    list.len() - 1
}

/// Removes and returns the entry at `index`, or `None` if the index does not
/// refer to a live entry. Crate-internal: reachable only through
/// prescription issuance and administrative cancellation, never standalone.
pub(crate) fn remove_at(env: &Env, index: u32) -> Option<WaitingPatient> {
    let mut list = entries(env);
    let entry = list.get(index)?;
    list.remove(index)?;
    commit(env, &list);
    Some(entry)
}
