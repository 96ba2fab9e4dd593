//! AML grammar rules, grouped the way the ACPI spec chapters group
//! them.
//!
//! Every rule is a [`Parser`](super::Parser) method with the
//! [`Rule`](super::Rule) shape, so rules pass each other to the
//! combinators as plain function pointers. Alternatives keep the
//! spec's order except where a shared prefix forces a longer form
//! first; those spots are commented at the choice.

mod data;
mod expressions;
mod misc;
mod named;
mod names;
mod namespace;
mod opcodes;
mod package;
mod statements;
mod term;

#[cfg(test)]
mod data_tests;
#[cfg(test)]
mod names_tests;
#[cfg(test)]
mod namespace_tests;
#[cfg(test)]
mod statements_tests;
