//! Lane width selection.

/// Register width of an emulated hart.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LaneWidth {
    /// RV32: 32-bit registers.
    W32,
    /// RV64: 64-bit registers.
    W64,
}

cfg_if::cfg_if! {
    if #[cfg(zk_lane = "32")] {
        const NATIVE_LANES: LaneWidth = LaneWidth::W32;
    } else if #[cfg(zk_lane = "64")] {
        const NATIVE_LANES: LaneWidth = LaneWidth::W64;
    } else if #[cfg(target_pointer_width = "64")] {
        const NATIVE_LANES: LaneWidth = LaneWidth::W64;
    } else {
        const NATIVE_LANES: LaneWidth = LaneWidth::W32;
    }
}

impl Default for LaneWidth {
    /// The pointer width of the host, unless overridden with `--cfg zk_lane="32"` or `"64"`.
    fn default() -> Self {
        NATIVE_LANES
    }
}
