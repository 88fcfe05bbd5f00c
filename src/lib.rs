//! gridseek — word-search puzzle generation.
//!
//! The library splits into a core and a periphery. The core is the
//! [`engine`] module: a randomized constrained-placement search that fits
//! words into a letter [`grid`] along one of four [`direction`]s, with the
//! target word count set by a [`difficulty`] tier. The periphery loads the
//! [`word_list`] and assembles the finished grid into a printable
//! [`document`].

pub mod difficulty;
pub mod direction;
pub mod document;
pub mod engine;
pub mod errors;
pub mod grid;
pub mod logging;
pub mod word_list;
