//! Monotonic id counters backed by instance storage.
//!
//! Ids start at 1 and are never reused. Counters saturate at `u64::MAX`
//! rather than wrapping, so an exhausted counter can never alias an
//! existing id.

use soroban_sdk::{Env, Symbol};

/// Allocates the next id for the counter stored under `key`.
pub fn next(env: &Env, key: &Symbol) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(key)
        .unwrap_or(0u64)
        .saturating_add(1);
    env.storage().instance().set(key, &id);
    id
}

/// Returns the last id allocated for `key`, or 0 if none has been.
pub fn current(env: &Env, key: &Symbol) -> u64 {
    env.storage().instance().get(key).unwrap_or(0u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{contract, symbol_short, Env};

    #[contract]
    struct DummyContract;

    #[test]
    fn ids_are_dense_and_start_at_one() {
        let env = Env::default();
        let contract_id = env.register(DummyContract, ());
        env.as_contract(&contract_id, || {
            let key = symbol_short!("CTR");
            assert_eq!(current(&env, &key), 0);
            assert_eq!(next(&env, &key), 1);
            assert_eq!(next(&env, &key), 2);
            assert_eq!(next(&env, &key), 3);
            assert_eq!(current(&env, &key), 3);
        });
    }

    #[test]
    fn counters_are_independent() {
        let env = Env::default();
        let contract_id = env.register(DummyContract, ());
        env.as_contract(&contract_id, || {
            let a = symbol_short!("CTR_A");
            let b = symbol_short!("CTR_B");
            assert_eq!(next(&env, &a), 1);
            assert_eq!(next(&env, &a), 2);
            assert_eq!(next(&env, &b), 1);
        });
    }
}
