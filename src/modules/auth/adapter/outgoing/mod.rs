pub mod identity_http;
