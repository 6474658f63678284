pub mod container;

pub use container::{back_writeback, crumb_writeback, truncated, ContainerOptions, NavigationContainer, Screen};
