/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the WINC root certificate store.

--*/

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod error;
pub mod printer;

pub mod globalsign;
pub mod nma_root;
mod registry;

pub type RootstoreResult<T> = Result<T, u32>;

pub use error::RootstoreComponent;
pub use registry::{find_by_name_hash, ROOT_CERTS, ROOT_CERT_COUNT};
pub use winc_rootstore_types::{
    Certificate, PubKey, RsaPubKey, SystemTime, NAME_HASH_BYTE_SIZE, RSA2048_MODULUS_BYTE_SIZE,
    RSA_EXPONENT_F4,
};
