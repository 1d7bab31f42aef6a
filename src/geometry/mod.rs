pub mod projection;
pub mod simplify;
pub mod viewport;

pub use projection::Projector;
pub use viewport::{Bounds, Viewport};
