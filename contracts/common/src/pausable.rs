use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::CommonError;

const PAUSED: Symbol = symbol_short!("PAUSED");

/// Returns `true` when the contract is paused.
pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Guard — returns `CommonError::Paused` when the contract is paused.
///
/// Place this at the top of every state-mutating entry point that must
/// honour the pause. View-only functions should **not** call this.
pub fn require_not_paused(env: &Env) -> Result<(), CommonError> {
    if is_paused(env) {
        return Err(CommonError::Paused);
    }
    Ok(())
}

/// Pause the contract. Admin authorization is the caller's responsibility —
/// this module performs no auth checks of its own, keeping it reusable
/// across contracts with different admin models.
///
/// Emits a `("PAUSED", caller)` event.
pub fn pause(env: &Env, caller: &Address) {
    env.storage().instance().set(&PAUSED, &true);
    env.events()
        .publish((symbol_short!("PAUSED"), caller.clone()), true);
}

/// Lift the pause. Emits an `("UNPAUSED", caller)` event.
pub fn unpause(env: &Env, caller: &Address) {
    env.storage().instance().set(&PAUSED, &false);
    env.events()
        .publish((symbol_short!("UNPAUSED"), caller.clone()), true);
}
