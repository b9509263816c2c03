pub mod climate;
pub mod crop;
pub mod input;
pub mod result;
pub mod soil;
pub mod tables;

pub use climate::*;
pub use crop::*;
pub use input::*;
pub use result::*;
pub use soil::*;
pub use tables::*;
