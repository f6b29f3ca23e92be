//! Running the vector tables against a [`Selector`].

use crate::{
    Family, Result, Selector,
    vectors::{self, CipherVector, DigestVector, GcmVector},
};
use core::ops::{Add, AddAssign};
use tracing::{info, warn};
use zkaes::{Aes, AesGcm, AesKey, Engine, gcm::TAG_SIZE, zkghash::Multiplier};
use zkblock::{Present, Sm4};
use zkhash::{
    KeccakImpl,
    sha3::{Sha3, Shake},
    sha256::{sha224, sha256},
    sha512::{Sha384, Sha512},
    sm3::sm3,
};

/// Pass and fail counts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Report {
    /// Checks that produced the expected bytes.
    pub passed: usize,
    /// Checks that did not, plus families that could not run.
    pub failed: usize,
}

impl Report {
    /// No check failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Number of checks performed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    fn check(&mut self, suite: &str, index: usize, got: &[u8], expected: &[u8]) {
        if got == expected {
            self.passed += 1;
        } else {
            self.failed += 1;
            warn!(suite, index, ?got, ?expected, "output mismatch");
        }
    }

    fn fail(&mut self, suite: &str, index: usize, err: &dyn core::fmt::Display) {
        self.failed += 1;
        warn!(suite, index, %err, "check did not complete");
    }
}

impl AddAssign for Report {
    fn add_assign(&mut self, rhs: Self) {
        self.passed += rhs.passed;
        self.failed += rhs.failed;
    }
}

impl Add for Report {
    type Output = Report;

    fn add(mut self, rhs: Self) -> Report {
        self += rhs;
        self
    }
}

/// Run every vector of `family` with the implementation bound in `sel`.
///
/// A family that cannot run, because a slot it needs is unbound, counts as one failure.
#[must_use]
pub fn run_family(sel: &Selector, family: Family) -> Report {
    let result = match family {
        Family::Aes => run_aes(sel),
        Family::Ghash => run_gcm(sel),
        Family::Sha512 => run_sha512(sel),
        Family::Keccak => run_keccak(sel),
        Family::Present => run_present(sel),
    };

    let report = result.unwrap_or_else(|err| {
        warn!(%family, %err, "family not run");
        Report {
            passed: 0,
            failed: 1,
        }
    });
    info!(
        %family,
        passed = report.passed,
        failed = report.failed,
        "family finished"
    );
    report
}

/// Run the primitives that have a single implementation: SHA-224/256, SM3 and SM4.
#[must_use]
pub fn run_fixed() -> Report {
    let mut report = Report::default();
    digest_table(&mut report, "SHA-224", vectors::SHA224, sha224);
    digest_table(&mut report, "SHA-256", vectors::SHA256, sha256);
    digest_table(&mut report, "SM3", vectors::SM3, sm3);
    cipher_table(&mut report, "SM4", vectors::SM4, |v| {
        let cipher = Sm4::new(&v.key);
        (cipher.encrypt_block(&v.pt), cipher.decrypt_block(&v.ct))
    });
    info!(
        passed = report.passed,
        failed = report.failed,
        "fixed primitives finished"
    );
    report
}

/// Run the fixed primitives and then every family against `sel`.
#[must_use]
pub fn run_all(sel: &Selector) -> Report {
    Family::ALL
        .into_iter()
        .fold(run_fixed(), |report, family| report + run_family(sel, family))
}

fn cipher_table<const K: usize, const B: usize>(
    report: &mut Report,
    suite: &str,
    vectors: &[CipherVector<K, B>],
    crypt: impl Fn(&CipherVector<K, B>) -> ([u8; B], [u8; B]),
) {
    for (i, v) in vectors.iter().enumerate() {
        let (ct, pt) = crypt(v);
        report.check(suite, i, &ct, &v.ct);
        report.check(suite, i, &pt, &v.pt);
    }
}

fn digest_table<D: AsRef<[u8]>>(
    report: &mut Report,
    suite: &str,
    vectors: &[DigestVector],
    hash: impl Fn(&[u8]) -> D,
) {
    for (i, v) in vectors.iter().enumerate() {
        report.check(suite, i, hash(v.msg).as_ref(), v.digest);
    }
}

fn aes_table<const K: usize>(
    report: &mut Report,
    suite: &str,
    vectors: &[CipherVector<K, 16>],
    engine: Engine,
) where
    [u8; K]: AesKey,
{
    cipher_table(report, suite, vectors, |v| {
        let aes = Aes::with_engine(&v.key, engine);
        (aes.encrypt_block(&v.pt), aes.decrypt_block(&v.ct))
    });
}

fn run_aes(sel: &Selector) -> Result<Report> {
    let engine = sel.aes()?;
    let mut report = Report::default();
    aes_table(&mut report, "AES-128", vectors::AES128, engine);
    aes_table(&mut report, "AES-192", vectors::AES192, engine);
    aes_table(&mut report, "AES-256", vectors::AES256, engine);
    Ok(report)
}

fn gcm_table<const K: usize>(
    report: &mut Report,
    suite: &str,
    vectors: &[GcmVector<K>],
    engine: Engine,
    multiplier: Multiplier,
) -> Result<()>
where
    [u8; K]: AesKey,
{
    for (i, v) in vectors.iter().enumerate() {
        let gcm = AesGcm::from_key(&v.key, engine, multiplier);

        let mut sealed = vec![0u8; v.pt.len() + TAG_SIZE];
        gcm.encrypt(&v.nonce, v.pt, &mut sealed)?;
        report.check(suite, i, &sealed, v.sealed);

        let mut opened = vec![0u8; v.pt.len()];
        match gcm.decrypt(&v.nonce, v.sealed, &mut opened) {
            Ok(_) => report.check(suite, i, &opened, v.pt),
            Err(err) => report.fail(suite, i, &err),
        }
    }
    Ok(())
}

fn run_gcm(sel: &Selector) -> Result<Report> {
    let multiplier = sel.ghash()?;
    let engine = sel.aes()?;
    let mut report = Report::default();
    gcm_table(&mut report, "GCM-AES-128", vectors::GCM128, engine, multiplier)?;
    gcm_table(&mut report, "GCM-AES-192", vectors::GCM192, engine, multiplier)?;
    gcm_table(&mut report, "GCM-AES-256", vectors::GCM256, engine, multiplier)?;
    Ok(report)
}

fn run_sha512(sel: &Selector) -> Result<Report> {
    let imp = sel.sha512()?;
    let mut report = Report::default();
    digest_table(&mut report, "SHA-384", vectors::SHA384, |msg| {
        let mut h = Sha384::with_impl(imp);
        h.update(msg);
        h.finalize()
    });
    digest_table(&mut report, "SHA-512", vectors::SHA512, |msg| {
        let mut h = Sha512::with_impl(imp);
        h.update(msg);
        h.finalize()
    });
    Ok(report)
}

fn sha3_with<const OUT: usize>(imp: KeccakImpl) -> impl Fn(&[u8]) -> [u8; OUT] {
    move |msg: &[u8]| {
        let mut h = Sha3::<OUT>::with_impl(imp);
        h.update(msg);
        h.finalize()
    }
}

fn shake_with<const RATE: usize>(imp: KeccakImpl, len: usize) -> impl Fn(&[u8]) -> Vec<u8> {
    move |msg: &[u8]| {
        let mut x = Shake::<RATE>::with_impl(imp);
        x.absorb(msg);
        let mut out = vec![0u8; len];
        x.finalize_xof().squeeze(&mut out);
        out
    }
}

fn run_keccak(sel: &Selector) -> Result<Report> {
    let imp = sel.keccak()?;
    let mut report = Report::default();

    let mut state: [u64; 25] = core::array::from_fn(|i| i as u64);
    imp.permute(&mut state);
    let out: Vec<u8> = state.iter().flat_map(|lane| lane.to_le_bytes()).collect();
    report.check("Keccak-p[1600,24]", 0, &out, &vectors::KECCAK_P_OUT);

    digest_table(&mut report, "SHA3-224", vectors::SHA3_224, sha3_with::<28>(imp));
    digest_table(&mut report, "SHA3-256", vectors::SHA3_256, sha3_with::<32>(imp));
    digest_table(&mut report, "SHA3-384", vectors::SHA3_384, sha3_with::<48>(imp));
    digest_table(&mut report, "SHA3-512", vectors::SHA3_512, sha3_with::<64>(imp));

    digest_table(&mut report, "SHAKE128", vectors::SHAKE128, shake_with::<168>(imp, 16));
    digest_table(&mut report, "SHAKE256", vectors::SHAKE256, shake_with::<136>(imp, 32));
    Ok(report)
}

fn run_present(sel: &Selector) -> Result<Report> {
    let imp = sel.present()?;
    let mut report = Report::default();
    cipher_table(&mut report, "PRESENT-80", vectors::PRESENT80, |v| {
        let cipher = Present::new80(&v.key).with_impl(imp);
        (cipher.encrypt_block(&v.pt), cipher.decrypt_block(&v.ct))
    });
    cipher_table(&mut report, "PRESENT-128", vectors::PRESENT128, |v| {
        let cipher = Present::new128(&v.key).with_impl(imp);
        (cipher.encrypt_block(&v.pt), cipher.decrypt_block(&v.ct))
    });
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn native_selector_passes() {
        let report = run_all(&Selector::native());
        assert!(report.is_success(), "{report:?}");
        assert!(report.total() > 50);
    }

    #[test]
    fn unbound_family_counts_as_one_failure() {
        let report = run_family(&Selector::new(), Family::Present);
        assert_eq!(
            report,
            Report {
                passed: 0,
                failed: 1
            }
        );
    }

    #[test]
    fn gcm_needs_both_slots() {
        let mut sel = Selector::new();
        sel.bind_ghash(Multiplier::default());
        assert!(matches!(
            run_gcm(&sel),
            Err(Error::UnboundImplementation(Family::Aes))
        ));
    }

    #[test]
    fn mismatch_is_counted() {
        let mut report = Report::default();
        report.check("test", 0, b"abc", b"abd");
        report.check("test", 1, b"abc", b"abc");
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert!(!report.is_success());
    }
}
