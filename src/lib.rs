//! Decoder for EU Digital COVID Certificate tokens (`HC1:` QR-code text).
//!
//! [`decode`] peels the token's layers (base45, zlib, COSE_Sign1, CBOR) into
//! [`RawAttributes`]; a [`Presenter`] then turns those claims into labelled
//! text lines using replaceable [`ReferenceData`]. Signatures are not
//! verified.

pub mod datefmt;
pub mod error;
pub mod eudcc;
pub mod reference;
pub mod render;

pub use datefmt::{DateFormatter, LocalizedFormatter, Zone};
pub use error::{Error, ErrorKind, Result};
pub use eudcc::{decode, encode, RawAttributes};
pub use reference::{LookupTable, ReferenceData, VariantKind};
pub use render::{to_text, Presenter, RenderedLine};
