//! Text rendering of cube states.
//!
//! The cube is drawn as an unfolded net:
//!
//! ```text
//!     www
//!     www
//!     www
//! ooo ggg rrr bbb
//! ooo ggg rrr bbb
//! ooo ggg rrr bbb
//!     yyy
//!     yyy
//!     yyy
//! ```
//!
//! U sits above F, then L F R B in a row, then D below F.

mod net;

pub use net::NetRenderer;
