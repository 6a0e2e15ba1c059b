pub mod collector;
pub mod platform;
pub mod process;
pub mod provider;
pub mod series;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod testing;
