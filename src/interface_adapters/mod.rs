// Interface adapters: wire protocol, socket pump, and device-facing glue.

pub mod input;
pub mod net;
pub mod protocol;
pub mod render;
pub mod utils;
