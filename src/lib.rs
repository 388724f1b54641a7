//! `itemcount` is a small tool for counting occurrences of typed items.
//!
//! Given a list of raw text tokens and a declared data type -- text, integer,
//! decimal, character, boolean, or date -- it parses every token as that
//! type, groups equal values, and reports how often each distinct value
//! occurs. The same engine sits behind two front ends:
//!
//! - an interactive text menu (the default when you run the binary), which
//!   reads a line of items, counts them, and prints one line per distinct
//!   value, and
//! - a small HTTP API (run the binary with `--api`), which accepts a JSON
//!   list of items plus a data type name and responds with the frequency
//!   table in a conventional response envelope.
//!
//! The interesting logic lives in the [`counting`] module; start with
//! [`counting::count`] if you want to understand how the tool works. The
//! [`parsing`] module holds the wrapper types that give each data type a
//! `FromStr` parse and a canonical label, and [`errors`] describes the three
//! failure conditions the engine can report. The [`console`] and [`api`]
//! modules are thin adapters over the engine and contain no counting logic
//! of their own.
//!
//! Counting is all-or-nothing: a batch containing even one token that does
//! not parse as the declared type is rejected whole, with a message naming
//! the offending token. Nothing is retained between calls, so identical
//! inputs always produce identical tables.
pub mod api;
pub mod console;
pub mod counting;
pub mod errors;
pub mod parsing;
