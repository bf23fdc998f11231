#![warn(clippy::indexing_slicing, clippy::unwrap_used, clippy::dbg_macro, clippy::undocumented_unsafe_blocks)]
//! This crate manages the higress console's configuration objects stored in kubernetes.
//!
//! [`K8s`] is the entry: it resolves how to reach the cluster, then exposes uniform list, read,
//! create, replace and delete operations for ingresses, config maps, secrets, mcp bridges and
//! wasm plugins through the [`service`] traits. [`ControllerClient`] queries the controller's
//! debug endpoints.

pub mod error;
pub mod options;
/// Resource services and the kubernetes backend
pub mod service;

pub use error::{Error, Result};
pub use higress_model as model;
pub use options::{ControllerOptions, JwtPolicy, K8sOptions};
pub use service::{
    controller::ControllerClient,
    k8s::{
        connectivity::{build_client, Connectivity, CredentialResolver},
        K8s,
    },
    route::{IngressConverter, RouteService},
};
