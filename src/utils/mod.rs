pub mod base62;
pub mod client_ip;
pub mod code_generator;
pub mod slug;
pub mod url_check;
