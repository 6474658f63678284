pub mod navigation;
pub mod observers;

pub use navigation::NavigationManager;
pub use observers::SubscriptionId;
