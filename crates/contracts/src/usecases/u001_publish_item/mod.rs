//! Publishing a catalog item: composer session state and the backend client.

pub mod client;
pub mod composer;

pub use client::{
    application_error_message, CatalogClient, HttpResponse, HttpTransport,
    GENERIC_FAILURE_MESSAGE,
};
pub use composer::{ItemComposer, SubmissionStatus, SubmitRejected};
