//! Every implementation of every family against the literal vectors.

use zkaes::Engine;
use zkat::{Error, Family, Report, Selector, run_all, run_family, run_fixed};
use zkblock::PresentImpl;
use zkghash::Multiplier;
use zkhash::{KeccakImpl, Sha512Impl};

#[test]
fn fixed_primitives() {
    let report = run_fixed();
    assert!(report.is_success(), "{report:?}");
    assert_eq!(report.total(), 17);
}

#[test]
fn every_aes_engine_and_multiplier() {
    for engine in Engine::ALL {
        let mut sel = Selector::new();
        sel.bind_aes(engine);
        assert!(run_family(&sel, Family::Aes).is_success(), "{engine:?}");

        for multiplier in Multiplier::ALL {
            sel.bind_ghash(multiplier);
            assert!(
                run_family(&sel, Family::Ghash).is_success(),
                "{engine:?} {multiplier:?}"
            );
        }
    }
}

#[test]
fn every_hash_implementation() {
    for imp in Sha512Impl::ALL {
        let mut sel = Selector::new();
        sel.bind_sha512(imp);
        assert!(run_family(&sel, Family::Sha512).is_success(), "{imp:?}");
    }
    for imp in KeccakImpl::ALL {
        let mut sel = Selector::new();
        sel.bind_keccak(imp);
        assert!(run_family(&sel, Family::Keccak).is_success(), "{imp:?}");
    }
}

#[test]
fn every_present_round_function() {
    for imp in PresentImpl::ALL {
        let mut sel = Selector::new();
        sel.bind_present(imp);
        let report = run_family(&sel, Family::Present);
        assert_eq!(
            report,
            Report {
                passed: 16,
                failed: 0
            },
            "{imp:?}"
        );
    }
}

#[test]
fn empty_selector_fails_each_family_once() {
    let report = run_all(&Selector::new());
    assert_eq!(report.failed, Family::ALL.len());
    assert_eq!(report.passed, run_fixed().passed);
}

#[test]
fn unbound_error_names_the_family() {
    let err = Selector::new().sha512().unwrap_err();
    assert!(matches!(err, Error::UnboundImplementation(Family::Sha512)));
    assert_eq!(err.to_string(), "no implementation bound for SHA-512");
}

#[test]
fn aes_errors_pass_through() {
    let err = Error::from(zkaes::Error::VerificationFailed);
    assert_eq!(err.to_string(), "authentication tag verification failed");
}
