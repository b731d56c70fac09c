//! Data models and serialization helpers.
//!
//! This module contains the ASN newtype, the audited extraction results shared
//! by both extractors, the PeeringDB document shape and the custom
//! deserializers used to read it leniently.
pub mod asn;
pub mod extraction;
pub mod peeringdb;
pub mod serde_helpers;
