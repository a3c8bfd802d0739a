use std::fmt;

use serde::Serialize;

/// Leading portion of a virtual address; the key into both the page table
/// and the translation cache.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VirtualPageId(String);

/// Index of a physical frame in the frame pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PhysicalFrameId(pub u64);

impl VirtualPageId {
    #[inline(always)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VirtualPageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for VirtualPageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PhysicalFrameId {
    #[inline(always)]
    pub fn new(frame: u64) -> Self {
        Self(frame)
    }

    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }

    /// First byte of this frame for a given frame size, `None` on overflow.
    pub fn base_address(&self, frame_size: u64) -> Option<u64> {
        self.0.checked_mul(frame_size)
    }
}

impl fmt::Display for PhysicalFrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// Outcome of translating one address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub frame: PhysicalFrameId,
    pub offset: String,
    pub cache_hit: bool,
}

impl Translation {
    /// Renders the frame base as `0x` plus five upper-case hex digits,
    /// followed by the untouched offset text. Falls back to the frame index
    /// when the base does not fit in 64 bits.
    pub fn describe(&self, frame_size: u64) -> String {
        match self.frame.base_address(frame_size) {
            Some(base) => format!("0x{:05X}+{}", base, self.offset),
            None => format!("{}+{}", self.frame, self.offset),
        }
    }
}
