use std::{fmt::Debug, future::Future};

pub mod rest_api;

pub use rest_api::ApiServer;

pub trait Server: Sized {
    type ErrorKind: Debug;
    const DEFAULT_PORT: u16 = 3000;
    const DEFAULT_HOST: &'static str = "127.0.0.1";

    fn new(host: String, port: u16) -> Self;

    fn start(&mut self) -> impl Future<Output = Result<(), Self::ErrorKind>> + Send;

    fn get_address(&self) -> String;

    fn default() -> Self;

    // loads environment variables or uses default values if not set
    fn from_env() -> Self;
}
