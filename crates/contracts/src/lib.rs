//! Types and logic shared by the catalog admin frontend.
//!
//! Everything here is platform independent and tested natively; the
//! frontend crate adds the browser transport and the Leptos views.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
