//! Selection of the GF(2^128) multiplication strategy.

use crate::field_element::{FieldElement, rv32, rv64};
use zkemu::{Block128, LaneWidth};

/// How the 256-bit carry-less product is formed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Multiply {
    /// Schoolbook: every limb of one operand against every limb of the other.
    Direct,
    /// Karatsuba: trade one multiplication per level for extra XORs.
    #[default]
    Karatsuba,
}

/// How the 256-bit product is folded back into the field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Reduction {
    /// Shift and XOR by the low terms `x^7 + x^2 + x + 1`.
    #[default]
    Shift,
    /// Carry-less multiply the high limbs by the constant `0x87`.
    MulConst,
}

/// A complete GHASH multiplication strategy.
///
/// All strategies compute the same function; they differ only in which emulated instructions are
/// issued. Passing one explicitly lets callers compare implementations against each other.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Multiplier {
    /// Limb width.
    pub lanes: LaneWidth,
    /// Product strategy.
    pub multiply: Multiply,
    /// Reduction strategy.
    pub reduction: Reduction,
}

impl Multiplier {
    /// Every supported combination.
    pub const ALL: [Self; 8] = [
        Self::new(LaneWidth::W32, Multiply::Direct, Reduction::Shift),
        Self::new(LaneWidth::W32, Multiply::Direct, Reduction::MulConst),
        Self::new(LaneWidth::W32, Multiply::Karatsuba, Reduction::Shift),
        Self::new(LaneWidth::W32, Multiply::Karatsuba, Reduction::MulConst),
        Self::new(LaneWidth::W64, Multiply::Direct, Reduction::Shift),
        Self::new(LaneWidth::W64, Multiply::Direct, Reduction::MulConst),
        Self::new(LaneWidth::W64, Multiply::Karatsuba, Reduction::Shift),
        Self::new(LaneWidth::W64, Multiply::Karatsuba, Reduction::MulConst),
    ];

    /// Combine the three strategy choices.
    #[must_use]
    pub const fn new(lanes: LaneWidth, multiply: Multiply, reduction: Reduction) -> Self {
        Self {
            lanes,
            multiply,
            reduction,
        }
    }

    /// Multiply two field elements.
    #[inline]
    #[must_use]
    pub fn mul(self, a: FieldElement, b: FieldElement) -> FieldElement {
        match self.lanes {
            LaneWidth::W32 => rv32::mul(a, b, self.multiply, self.reduction),
            LaneWidth::W64 => rv64::mul(a, b, self.multiply, self.reduction),
        }
    }

    /// One GHASH step: `(z + x) * h`, with `x` given in GCM bit order.
    #[inline]
    #[must_use]
    pub fn ghash_step(self, z: FieldElement, x: &Block128, h: FieldElement) -> FieldElement {
        self.mul(z + FieldElement::from_gcm_block(x), h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn all_strategies_agree() {
        let a = FieldElement::from(hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"));
        let b = FieldElement::from(hex!("0388dace60b6a392f328c2b971b2fe78"));
        let expected = Multiplier::default().mul(a, b);
        for m in Multiplier::ALL {
            assert_eq!(m.mul(a, b), expected, "{m:?}");
        }
    }
}
