mod client;
pub mod dto;
mod reply;
mod session;
mod transport;

pub use {
    client::ApiClient,
    reply::{ApiReply, decode_body, decode_typed},
    session::{Session, SessionStore},
    transport::{ApiRequest, HttpTransport, Method, Service, Transport},
};

#[cfg(test)]
pub(crate) use client::fake::FakeTransport;
