pub mod adapter;
pub mod bss;
pub mod mac;
pub mod profile;
pub mod request;
pub mod ssid;
