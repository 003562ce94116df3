//! # GWA Core
//!
//! Typed data model for GWA (Gsa-Wire-Array) records: the positional text records used to
//! exchange structural-model entities such as nodes, elements, members, assemblies and beam
//! loads with a structural-analysis application.
//!
//! This crate holds data only. Parsing and serialisation live in `gwa-codec`.
//!
//! # Overview
//!
//! - [`wire`] - The [`WireEnum`](wire::WireEnum) registry trait mapping enum variants to wire strings.
//! - [`enums`] - Every wire enum used by the record grammars.
//! - [`entity`] - [`EntityKind`](entity::EntityKind) and the [`IndexResolver`](entity::IndexResolver) capability.
//! - [`header`] - [`RecordHeader`](header::RecordHeader), the preamble shared by all records.
//! - [`release`] - Per-axis release codes and stiffnesses.
//! - [`topology`] - Perimeter plus nested void/point/polyline/area groups.
//! - [`record`] - The record types and the [`Record`](record::Record) sum type.

pub mod entity;
pub mod enums;
pub mod header;
pub mod record;
pub mod release;
pub mod topology;
pub mod wire;
