//! Sealing for traits whose implementations must stay inside this crate.
//!
//! `Element` is matched one-to-one against the variants of `DynArray`, so a
//! foreign implementation could never be stored in one.

/// Public but not publicly reachable; third parties can't name it and
/// can't implement traits that mention it.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// This trait is private to implement; this method exists to make it
        /// impossible to implement outside the crate.
        #[doc(hidden)]
        fn __private__() -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__() -> crate::private::PrivateMarker
        {
            crate::private::PrivateMarker
        }
    };
}
