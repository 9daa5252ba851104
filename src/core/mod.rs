pub mod observable;
pub mod renderer;

pub use observable::{StateHolder, SubscriptionId};
pub use renderer::GameRenderer;
