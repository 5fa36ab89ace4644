pub mod error;    pub use error::*;
pub mod window;   pub use window::*;
pub mod frame;    pub use frame::*;
pub mod read;     pub use read::*;
pub mod matching; pub use matching::*;
pub mod decode;   pub use decode::*;
pub mod encode;   pub use encode::*;

/// Window geometry and match limits are fixed by the wire format; a codec
/// built with different values will not interoperate.
pub const WINDOW_SIZE: usize = 0x1000;
pub const WINDOW_MASK: usize = 0xFFF;
pub const WINDOW_START: usize = 0xFEE;

pub const MIN_MATCH: usize = 2;
pub const MAX_MATCH: usize = 17;
pub const GROUP_TOKENS: usize = 8;
