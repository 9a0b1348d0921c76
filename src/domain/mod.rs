pub mod conditions;
pub mod constants;
pub mod hardware;
pub mod selection;

pub use conditions::*;
pub use constants::*;
pub use hardware::*;
pub use selection::*;
