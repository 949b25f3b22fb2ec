#[cfg(test)]
pub mod testing;
pub mod timeout;
pub mod usecase;
