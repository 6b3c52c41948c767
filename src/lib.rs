pub mod call;
pub mod record;
pub mod types;
pub mod variant;

pub use call::{Call, GtType};
pub use record::{Header, HeaderInfo, RecordHandle};
pub use types::{InfoType, InfoValue, RefVar};
pub use variant::{VariantIdAllocator, Variants};
