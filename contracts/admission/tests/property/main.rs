//! Property tests for the admission contract.
//!
//! Each case spins up a fresh `Env`, so the case count is kept modest.

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use soroban_sdk::{testutils::Address as _, Address, Env, String as SorobanString};

use admission::{AdmissionContract, AdmissionContractClient, ContractError};

const ISSUED_AT: u64 = 1_700_000_000;

#[derive(Clone, Debug, Arbitrary)]
struct IntakeInput {
    #[proptest(regex = "[a-z ]{1,40}")]
    symptoms: String,
    #[proptest(regex = "[a-z]{1,20}")]
    department: String,
    #[proptest(strategy = "1u32..=5")]
    priority: u32,
}

struct Harness<'a> {
    client: AdmissionContractClient<'a>,
    admin: Address,
    patient: Address,
}

fn harness(env: &Env) -> Harness {
    env.mock_all_auths();
    let contract_id = env.register(AdmissionContract, ());
    let client = AdmissionContractClient::new(env, &contract_id);

    let admin = Address::generate(env);
    client.initialize(&admin);

    let patient = Address::generate(env);
    client.register_patient(&patient, &SorobanString::from_str(env, "no known allergies"));

    Harness {
        client,
        admin,
        patient,
    }
}

fn enqueue(env: &Env, h: &Harness, input: &IntakeInput) -> u32 {
    h.client.register_for_examination(
        &h.patient,
        &SorobanString::from_str(env, &input.symptoms),
        &SorobanString::from_str(env, &input.department),
        &input.priority,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Priorities 1..=5 are accepted verbatim; everything else fails
    /// validation and leaves the lobby untouched.
    #[test]
    fn priority_accepted_iff_in_range(priority in 0u32..=10) {
        let env = Env::default();
        let h = harness(&env);

        let result = h.client.try_register_for_examination(
            &h.patient,
            &SorobanString::from_str(&env, "fever"),
            &SorobanString::from_str(&env, "internal medicine"),
            &priority,
        );

        if (1..=5).contains(&priority) {
            prop_assert_eq!(result, Ok(Ok(0)));
            prop_assert_eq!(h.client.lobby().get(0).unwrap().priority, priority);
        } else {
            prop_assert_eq!(result, Err(Ok(ContractError::ValidationFailed)));
            prop_assert_eq!(h.client.lobby().len(), 0);
        }
    }

    /// The lobby exposes entries in arrival order with fields stored
    /// verbatim, whatever the priorities are.
    #[test]
    fn lobby_preserves_arrival_order(
        inputs in proptest::collection::vec(any::<IntakeInput>(), 1..8),
    ) {
        let env = Env::default();
        let h = harness(&env);

        for (i, input) in inputs.iter().enumerate() {
            prop_assert_eq!(enqueue(&env, &h, input), i as u32);
        }

        let lobby = h.client.lobby();
        prop_assert_eq!(lobby.len() as usize, inputs.len());
        for (i, input) in inputs.iter().enumerate() {
            let entry = lobby.get(i as u32).unwrap();
            prop_assert_eq!(entry.priority, input.priority);
            prop_assert_eq!(entry.symptoms, SorobanString::from_str(&env, &input.symptoms));
            prop_assert_eq!(
                entry.department,
                SorobanString::from_str(&env, &input.department)
            );
        }
    }

    /// Issuance consumes exactly one entry per call; a drained lobby yields
    /// `StaleIndex`; every issued prescription redeems exactly once.
    #[test]
    fn issuance_consumes_one_and_redemption_is_single_use(
        inputs in proptest::collection::vec(any::<IntakeInput>(), 1..6),
    ) {
        let env = Env::default();
        let h = harness(&env);

        let doctor = Address::generate(&env);
        let cap_id = h.client.mint_doctor_cap(
            &h.admin,
            &doctor,
            &SorobanString::from_str(&env, "Dr. Prop"),
        );

        for input in &inputs {
            enqueue(&env, &h, input);
        }

        let mut issued = Vec::new();
        for _ in 0..inputs.len() {
            let before = h.client.lobby().len();
            let rx_id = h.client.create_prescription(
                &doctor,
                &cap_id,
                &0,
                &SorobanString::from_str(&env, "prescription"),
                &SorobanString::from_str(&env, ""),
                &SorobanString::from_str(&env, "diagnosis"),
                &ISSUED_AT,
            );
            prop_assert_eq!(h.client.lobby().len(), before - 1);
            issued.push(rx_id);
        }

        prop_assert_eq!(
            h.client.try_create_prescription(
                &doctor,
                &cap_id,
                &0,
                &SorobanString::from_str(&env, "prescription"),
                &SorobanString::from_str(&env, ""),
                &SorobanString::from_str(&env, "diagnosis"),
                &ISSUED_AT,
            ),
            Err(Ok(ContractError::StaleIndex))
        );

        for rx_id in issued {
            let rx = h.client.use_prescription(&h.patient, &rx_id);
            prop_assert!(rx.is_used);
            prop_assert_eq!(
                h.client.try_use_prescription(&h.patient, &rx_id),
                Err(Ok(ContractError::AlreadyUsed))
            );
        }
    }
}
