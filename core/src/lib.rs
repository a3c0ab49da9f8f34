pub mod adapter;
pub mod connect;
pub mod filter;
pub mod profiles;
pub mod scanner;
pub mod session;
pub mod system;

#[cfg(test)]
mod testing;
