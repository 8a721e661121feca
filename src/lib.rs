// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Graphics math allowances — float comparisons against exact constants and
// single-letter coordinate names are intentional here
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

//! Orbit camera core for a browser-based 3D solar-system viewer.
//!
//! Orrery implements the interactive viewpoint of a solar-system scene: an
//! orbit camera that converts pointer drags and wheel scrolls into smooth,
//! constrained orbital motion around a fixed target, using spherical
//! coordinates, per-frame integration, and momentum-style damping.
//!
//! The crate deliberately stops at the camera. Scene construction, per-body
//! orbital animation, and the rendering pipeline are collaborators that
//! consume the [`camera::Camera`] pose this crate maintains; they are not
//! implemented here.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCamera`] - the orbit camera controller
//! - [`camera::Camera`] - the camera pose and projection parameters
//! - [`input::InputEvent`] - platform-agnostic input events
//! - [`options::Options`] - TOML-preset configuration layer
//!
//! # Per-frame contract
//!
//! Feed input events to the controller as they arrive, then call
//! [`camera::OrbitCamera::update`] exactly once per rendered frame, after
//! the frame's pending input has been processed. All work is synchronous
//! and constant-time; there is no internal threading.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
