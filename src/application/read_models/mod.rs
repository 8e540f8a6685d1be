/// Read models for presentation
///
/// Views describe their current state as a [`Screen`]; renderers never look at
/// view state directly.
pub mod screen;

pub use screen::{
    Cell, Field, Pagination, Screen, Section, TabHeader, EMPTY_DETAIL, EMPTY_HEADING,
    LOADING_TEXT,
};
