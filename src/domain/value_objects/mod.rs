//! Domain Value Objects
//!
//! Small value types passed between the watch loop and its tasks.

mod cancel;
mod device;

pub use cancel::CancelToken;
pub use device::Device;
