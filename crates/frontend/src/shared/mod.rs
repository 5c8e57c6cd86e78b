pub mod busy;
pub mod components;
pub mod config;
pub mod error;
pub mod gateway;
pub mod icons;
pub mod notifications;
pub mod submit;
#[cfg(test)]
pub mod test_support;
