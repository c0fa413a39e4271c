pub mod error;
pub mod health;
pub mod root;
pub mod transcribe;
pub mod voice;

pub use error::*;
pub use health::*;
pub use root::*;
pub use transcribe::*;
pub use voice::*;
