// Use cases layer: application workflows for the game client.

pub mod registry;
pub mod render;
pub mod session;
pub mod types;

pub use registry::RemoteRegistry;
pub use render::Renderer;
pub use session::{SessionConfig, session_task};
pub use types::{NetEvent, Outbound, RemoteJoin, SessionPhase};
