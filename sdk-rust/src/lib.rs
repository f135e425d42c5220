mod client;
mod credentials;
mod errors;
mod gateway;
mod resource;
mod types;

pub mod portfolio_sdk_test;

pub use client::{AuthApi, AuthorizedClient, BASE_URL_ENV};
pub use credentials::{Credential, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use errors::{
    ClientError, ClientResult, GatewayError, GatewayResult, Operation, StoreError, StoreResult,
};
pub use gateway::{
    CollectionGateway, HttpCollectionGateway, HttpSingletonGateway, Presence, SingletonGateway,
};
pub use resource::{CollectionResource, SingletonResource};
pub use reqwest::StatusCode;
pub use types::*;
