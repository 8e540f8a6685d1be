/// Domain layer - entities and rules of the rebuild service as seen by the console
///
/// Nothing here performs I/O. Entities mirror backend payloads; policies and
/// services derive what the views display from them.
pub mod domain;
pub mod policies;
pub mod services;
