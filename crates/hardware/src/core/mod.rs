pub mod mmu;
pub mod policies;
pub mod types;

pub use self::mmu::AddressTranslator;
pub use self::types::{PhysicalFrameId, Translation, VirtualPageId};
