//! Utility modules for xmlx.
//!
//! Contains `QName` handling.

pub mod qname;
