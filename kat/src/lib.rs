/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the root store anchor table self tests.

--*/

#![cfg_attr(not(test), no_std)]

mod anchor_kat;

pub use anchor_kat::AnchorKat;
pub use winc_rootstore::{rootstore_err_def, RootstoreComponent, RootstoreResult};
