//! Kubernetes object shapes that `k8s-openapi` does not ship.
pub mod crd;
