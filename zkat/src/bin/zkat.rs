//! Run every known-answer vector through every implementation.
//!
//! Each phase starts from a fresh selector with only the families it needs bound. Log output is
//! filtered by `RUST_LOG`, defaulting to `info`.

use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use zkaes::Engine;
use zkat::{Family, Report, Selector, run_family, run_fixed};
use zkblock::PresentImpl;
use zkghash::Multiplier;
use zkhash::{KeccakImpl, Sha512Impl};

fn phase(family: Family, bind: impl FnOnce(&mut Selector)) -> Report {
    let mut sel = Selector::new();
    bind(&mut sel);
    info!(%family, ?sel, "phase");
    run_family(&sel, family)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut report = run_fixed();

    for engine in Engine::ALL {
        report += phase(Family::Aes, |sel| {
            sel.bind_aes(engine);
        });
    }
    for multiplier in Multiplier::ALL {
        report += phase(Family::Ghash, |sel| {
            sel.bind_aes(Engine::default()).bind_ghash(multiplier);
        });
    }
    // GCM through every AES engine as well
    for engine in Engine::ALL {
        report += phase(Family::Ghash, |sel| {
            sel.bind_aes(engine).bind_ghash(Multiplier::default());
        });
    }
    for imp in Sha512Impl::ALL {
        report += phase(Family::Sha512, |sel| {
            sel.bind_sha512(imp);
        });
    }
    for imp in KeccakImpl::ALL {
        report += phase(Family::Keccak, |sel| {
            sel.bind_keccak(imp);
        });
    }
    for imp in PresentImpl::ALL {
        report += phase(Family::Present, |sel| {
            sel.bind_present(imp);
        });
    }

    if report.is_success() {
        info!(passed = report.passed, "all known answers match");
        ExitCode::SUCCESS
    } else {
        error!(
            passed = report.passed,
            failed = report.failed,
            "known-answer failures"
        );
        ExitCode::FAILURE
    }
}
