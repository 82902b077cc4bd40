//! Multi-tap kana decoding from press timing.
//!
//! One key per consonant row; the press count picks the kana. Without a
//! separator key, pauses between presses are the only hint of where one
//! character ends, so decoding yields ranked alternatives per run.

pub mod decode;
pub mod policy;
pub mod press;
pub mod render;
pub mod rows;
pub mod segment;
pub mod separator;
pub mod settings;
pub mod split;
pub mod unicode;

pub use decode::{decode, DecodedGroup, DecodedOutput, RenderedGroup};
pub use policy::DecodePolicy;
pub use press::{Press, PressRecorder};
pub use rows::{Row, RowTable};
