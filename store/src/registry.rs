/*++

Licensed under the Apache-2.0 license.

File Name:

    registry.rs

Abstract:

    File contains the registry of well-known root certificates.

--*/

use crate::{globalsign, nma_root};
use winc_rootstore_types::{Certificate, NAME_HASH_BYTE_SIZE};

/// Number of registered root certificates.
pub const ROOT_CERT_COUNT: usize = 2;

/// Registered root certificates. Registration order is fixed: GlobalSign
/// first, NMA root second.
pub static ROOT_CERTS: [&Certificate; ROOT_CERT_COUNT] =
    [&globalsign::CERTIFICATE, &nma_root::CERTIFICATE];

/// Looks up a registered root certificate by its subject name hash. This is
/// the match a trust-chain validator performs against an incoming
/// certificate's issuer name hash.
pub fn find_by_name_hash(name_hash: &[u8; NAME_HASH_BYTE_SIZE]) -> Option<&'static Certificate> {
    ROOT_CERTS
        .iter()
        .find(|cert| &cert.name_hash == name_hash)
        .copied()
}
