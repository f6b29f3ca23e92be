//! GHASH field element implementation.

pub mod rv32;
pub mod rv64;

use crate::multiplier::Multiplier;
use core::{
    fmt::{self, Debug},
    ops::{Add, AddAssign, Mul, MulAssign},
};
use zkemu::{BLOCK_SIZE, Block128, Lane};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// An element in GHASH's field.
///
/// This type represents an element of the binary field GF(2^128) modulo the irreducible polynomial
/// `x^128 + x^7 + x^2 + x + 1` as described in [NIST SP 800-38D §6.3].
///
/// # Representation
///
/// GCM writes field elements with the coefficient of `x^0` in the most significant bit of the first
/// byte. Carry-less multiply instructions expect the opposite bit order, so the element is stored
/// bit-reversed within each byte (`brev8`). Read as little-endian lanes, bit `i` of the 128-bit
/// value is then the coefficient of `x^i`.
///
/// Use [`FieldElement::from_gcm_block`] and [`FieldElement::to_gcm_block`] to cross between the
/// two forms.
///
/// [NIST SP 800-38D §6.3]: https://csrc.nist.gov/pubs/sp/800/38/d/final
#[derive(Clone, Copy, Default, Eq, PartialEq)]
#[repr(C, align(16))]
pub struct FieldElement(Block128);

impl FieldElement {
    /// The multiplicative identity.
    pub const ONE: Self = Self(Block128::new([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));

    /// Convert a block in GCM bit order into the reflected representation.
    #[inline]
    #[must_use]
    pub fn from_gcm_block(block: &Block128) -> Self {
        let [d0, d1] = block.to_u64x2();
        Self(Block128::from_u64x2([d0.brev8(), d1.brev8()]))
    }

    /// Convert back into GCM bit order.
    #[inline]
    #[must_use]
    pub fn to_gcm_block(self) -> Block128 {
        let [d0, d1] = self.0.to_u64x2();
        Block128::from_u64x2([d0.brev8(), d1.brev8()])
    }

    /// Little-endian `u64` limbs, coefficient of `x^0` in bit 0 of the first limb.
    #[inline]
    #[must_use]
    pub fn to_u64x2(self) -> [u64; 2] {
        self.0.to_u64x2()
    }

    /// Inverse of [`FieldElement::to_u64x2`].
    #[inline]
    #[must_use]
    pub fn from_u64x2(limbs: [u64; 2]) -> Self {
        Self(Block128::from_u64x2(limbs))
    }

    /// Little-endian `u32` limbs, coefficient of `x^0` in bit 0 of the first limb.
    #[inline]
    #[must_use]
    pub fn to_u32x4(self) -> [u32; 4] {
        self.0.to_u32x4()
    }

    /// Inverse of [`FieldElement::to_u32x4`].
    #[inline]
    #[must_use]
    pub fn from_u32x4(limbs: [u32; 4]) -> Self {
        Self(Block128::from_u32x4(limbs))
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(")?;
        for byte in self.to_gcm_block().to_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl From<[u8; BLOCK_SIZE]> for FieldElement {
    /// Interpret `bytes` in GCM bit order.
    #[inline]
    fn from(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self::from_gcm_block(&Block128::new(bytes))
    }
}

impl From<FieldElement> for [u8; BLOCK_SIZE] {
    #[inline]
    fn from(fe: FieldElement) -> Self {
        fe.to_gcm_block().to_bytes()
    }
}

impl Add for FieldElement {
    type Output = Self;

    /// Adds two GHASH field elements.
    ///
    /// In GHASH's field, addition is the equivalent operation to XOR.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for FieldElement {
    type Output = Self;

    /// Multiply within GHASH's field using the default [`Multiplier`].
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Multiplier::default().mul(self, rhs)
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const A: [u8; 16] = hex!("66e94bd4ef8a2c3b884cfa59ca342b2e");
    const B: [u8; 16] = hex!("ff000000000000000000000000000000");

    #[test]
    fn fe_add() {
        let a = FieldElement::from(A);
        let b = FieldElement::from(B);

        let expected = FieldElement::from(hex!("99e94bd4ef8a2c3b884cfa59ca342b2e"));
        assert_eq!(a + b, expected);
        assert_eq!(b + a, expected);
    }

    #[test]
    fn fe_mul() {
        let a = FieldElement::from(A);
        let b = FieldElement::from(B);

        let expected = FieldElement::from(hex!("679d3cea2db93be5228724c2e2abea06"));
        assert_eq!(a * b, expected);
        assert_eq!(b * a, expected);
    }

    #[test]
    fn fe_one() {
        let a = FieldElement::from(A);
        assert_eq!(FieldElement::from(hex!("80000000000000000000000000000000")), FieldElement::ONE);
        assert_eq!(a * FieldElement::ONE, a);
    }

    #[test]
    fn gcm_block_round_trip() {
        let block = Block128::new(A);
        let fe = FieldElement::from_gcm_block(&block);
        assert_eq!(fe.to_u64x2()[0] & 0xff, u64::from(0x66u8.reverse_bits()));
        assert_eq!(fe.to_gcm_block(), block);
    }
}
