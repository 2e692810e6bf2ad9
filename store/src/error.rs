/*++

Licensed under the Apache-2.0 license.

File Name:

    error.rs

Abstract:

    File contains API and macros used by the library for error handling

--*/

/// Root Store Component
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RootstoreComponent {
    /// Trust Anchor Registry
    Anchors = 1,

    /// Anchor Table Self Test
    AnchorKat = 2,
}

#[macro_export]
macro_rules! rootstore_err_def {
    ($comp_name:ident, $enum_name: ident { $($field_name: ident = $field_val: literal,)* }) => {

        #[derive(Debug, Copy, Clone, Eq, PartialEq)]
        pub enum $enum_name {
            $($field_name = $field_val,)*
        }

        macro_rules! raise_err { ($comp_err: ident) => {
            Err(((($crate::RootstoreComponent::$comp_name) as u32) << 24) | ($enum_name::$comp_err as u32))?
        } }

        macro_rules! err_u32 { ($comp_err: ident) => {
            ((($crate::RootstoreComponent::$comp_name) as u32) << 24) | ($enum_name::$comp_err as u32)
        } }
    };
}
